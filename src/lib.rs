use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    config::Settings,
    database::Database,
    repositories::{
        contato_empresa_repo::SqlxContatoEmpresaRepository, empresa_repo::SqlxEmpresaRepository,
        endereco_empresa_repo::SqlxEnderecoEmpresaRepository, endereco_repo::SqlxEnderecoRepository,
        emprego_repo::SqlxEmpregoRepository, ContatoEmpresaRepository, EmpregoRepository,
        EmpresaRepository, EnderecoEmpresaRepository, EnderecoRepository,
    },
    services::{
        ContatoEmpresaService, EmpregoService, EmpresaService, EnderecoEmpresaService,
        EnderecoService,
    },
};

pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Settings>,
    pub database: Database,
    pub empresa_service: Arc<EmpresaService>,
    pub endereco_service: Arc<EnderecoService>,
    pub endereco_empresa_service: Arc<EnderecoEmpresaService>,
    pub emprego_service: Arc<EmpregoService>,
    pub contato_empresa_service: Arc<ContatoEmpresaService>,
}

impl AppState {
    /// Create application state, connecting both database pools eagerly.
    pub async fn new(settings: Settings) -> Result<Self, error::ApiError> {
        let database = Database::connect(&settings.database).await?;
        Ok(Self::with_database(settings, database))
    }

    /// Create application state over an existing database handle.
    pub fn with_database(settings: Settings, database: Database) -> Self {
        let empresa_repository: Arc<dyn EmpresaRepository + Send + Sync> =
            Arc::new(SqlxEmpresaRepository::new(database.clone()));
        let endereco_repository: Arc<dyn EnderecoRepository + Send + Sync> =
            Arc::new(SqlxEnderecoRepository::new(database.clone()));
        let endereco_empresa_repository: Arc<dyn EnderecoEmpresaRepository + Send + Sync> =
            Arc::new(SqlxEnderecoEmpresaRepository::new(database.clone()));
        let emprego_repository: Arc<dyn EmpregoRepository + Send + Sync> =
            Arc::new(SqlxEmpregoRepository::new(database.clone()));
        let contato_empresa_repository: Arc<dyn ContatoEmpresaRepository + Send + Sync> =
            Arc::new(SqlxContatoEmpresaRepository::new(database.clone()));

        Self::with_repositories(
            settings,
            database,
            empresa_repository,
            endereco_repository,
            endereco_empresa_repository,
            emprego_repository,
            contato_empresa_repository,
        )
    }

    /// Wire services over explicit repository implementations. Integration
    /// tests substitute in-memory repositories here.
    pub fn with_repositories(
        settings: Settings,
        database: Database,
        empresa_repository: Arc<dyn EmpresaRepository + Send + Sync>,
        endereco_repository: Arc<dyn EnderecoRepository + Send + Sync>,
        endereco_empresa_repository: Arc<dyn EnderecoEmpresaRepository + Send + Sync>,
        emprego_repository: Arc<dyn EmpregoRepository + Send + Sync>,
        contato_empresa_repository: Arc<dyn ContatoEmpresaRepository + Send + Sync>,
    ) -> Self {
        let empresa_service = Arc::new(EmpresaService::new(empresa_repository.clone()));
        let endereco_service = Arc::new(EnderecoService::new(endereco_repository.clone()));
        let endereco_empresa_service = Arc::new(EnderecoEmpresaService::new(
            endereco_empresa_repository,
            empresa_repository,
            endereco_repository,
        ));
        let emprego_service = Arc::new(EmpregoService::new(emprego_repository));
        let contato_empresa_service =
            Arc::new(ContatoEmpresaService::new(contato_empresa_repository));

        Self {
            config: Arc::new(settings),
            database,
            empresa_service,
            endereco_service,
            endereco_empresa_service,
            emprego_service,
            contato_empresa_service,
        }
    }
}

/// Register every route and middleware layer on a fresh router.
pub fn build_router(state: AppState) -> Router {
    let cors_layer = middleware::create_cors_layer(state.config.app.cors_allow_origins.clone());

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Empresa endpoints
        .route("/empresa", post(handlers::empresa_handlers::create_empresa))
        .route("/empresa", get(handlers::empresa_handlers::list_empresas))
        .route("/empresa/:id", get(handlers::empresa_handlers::get_empresa))
        .route("/empresa/:id", put(handlers::empresa_handlers::update_empresa))
        .route("/empresa/:id", delete(handlers::empresa_handlers::delete_empresa))
        // Endereco endpoints
        .route("/endereco", post(handlers::endereco_handlers::create_endereco))
        .route("/endereco", get(handlers::endereco_handlers::list_enderecos))
        .route("/endereco/:id", get(handlers::endereco_handlers::get_endereco))
        .route("/endereco/:id", put(handlers::endereco_handlers::update_endereco))
        .route("/endereco/:id", delete(handlers::endereco_handlers::delete_endereco))
        // Endereco-empresa association endpoints
        .route(
            "/endereco-empresa/assign",
            post(handlers::endereco_empresa_handlers::assign),
        )
        .route(
            "/endereco-empresa/empresas-por-endereco/:id",
            get(handlers::endereco_empresa_handlers::empresas_by_endereco),
        )
        .route(
            "/endereco-empresa/enderecos-por-empresa/:id",
            get(handlers::endereco_empresa_handlers::enderecos_by_empresa),
        )
        // Emprego endpoints
        .route("/emprego", post(handlers::emprego_handlers::create_emprego))
        .route("/emprego", get(handlers::emprego_handlers::list_empregos))
        .route("/emprego/:id", get(handlers::emprego_handlers::get_emprego))
        .route("/emprego/:id", put(handlers::emprego_handlers::update_emprego))
        .route("/emprego/:id", delete(handlers::emprego_handlers::delete_emprego))
        // Contato-empresa endpoints
        .route(
            "/contato-empresa",
            post(handlers::contato_empresa_handlers::create_contato),
        )
        .route(
            "/contato-empresa",
            get(handlers::contato_empresa_handlers::list_contatos),
        )
        .route(
            "/contato-empresa/:id",
            get(handlers::contato_empresa_handlers::get_contato),
        )
        .route(
            "/contato-empresa/:id",
            put(handlers::contato_empresa_handlers::update_contato),
        )
        .route(
            "/contato-empresa/:id",
            delete(handlers::contato_empresa_handlers::delete_contato),
        )
        .with_state(state)
        // Global middleware layers
        .layer(axum::middleware::from_fn(middleware::request_logging_middleware))
        .layer(middleware::create_logging_layer())
        .layer(cors_layer)
}
