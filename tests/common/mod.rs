use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;

use cadastro_api::{
    build_router,
    config::{AppSettings, DatabaseSettings, LogSettings, Settings},
    database::Database,
    error::ApiError,
    models::{
        ContatoEmpresa, ContatoEmpresaFiltro, Emprego, EmpregoFiltro, Empresa, EmpresaFiltro,
        Endereco, EnderecoEmpresa, EnderecoFiltro,
    },
    repositories::{
        ContatoEmpresaRepository, EmpregoRepository, EmpresaRepository, EnderecoEmpresaRepository,
        EnderecoRepository,
    },
    AppState,
};

/// Shared in-memory backing store for the repository test doubles. One
/// instance per test, handed out alongside the router so assertions can look
/// at raw state.
#[derive(Default)]
pub struct TestStore {
    pub empresas: Mutex<Vec<Empresa>>,
    pub enderecos: Mutex<Vec<Endereco>>,
    /// (association id, id_empresa, id_endereco)
    pub associacoes: Mutex<Vec<(i64, i64, i64)>>,
    pub empregos: Mutex<Vec<Emprego>>,
    pub contatos: Mutex<Vec<ContatoEmpresa>>,
    next_id: AtomicI64,
}

impl TestStore {
    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

fn matches(value: &str, filter: Option<&String>) -> bool {
    match filter {
        Some(expected) if !expected.is_empty() => value == expected,
        _ => true,
    }
}

// ============================================================================
// Repository test doubles
// ============================================================================

pub struct InMemoryEmpresaRepository(pub Arc<TestStore>);

#[async_trait]
impl EmpresaRepository for InMemoryEmpresaRepository {
    async fn create(&self, mut empresa: Empresa) -> Result<Empresa, ApiError> {
        empresa.id = self.0.next_id();
        self.0.empresas.lock().unwrap().push(empresa.clone());
        Ok(empresa)
    }

    async fn find_all(&self, filtro: &EmpresaFiltro) -> Result<Vec<Empresa>, ApiError> {
        let empresas = self.0.empresas.lock().unwrap();
        Ok(empresas
            .iter()
            .filter(|empresa| empresa.apagado.is_none())
            .filter(|empresa| match filtro.search.as_deref() {
                Some(term) if !term.is_empty() => {
                    empresa.nome.contains(term) || empresa.cnpj.contains(term)
                }
                _ => true,
            })
            .filter(|empresa| matches(&empresa.nome, filtro.nome.as_ref()))
            .filter(|empresa| matches(&empresa.cnpj, filtro.cnpj.as_ref()))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Empresa>, ApiError> {
        let empresa = {
            let empresas = self.0.empresas.lock().unwrap();
            empresas
                .iter()
                .find(|empresa| empresa.id == id && empresa.apagado.is_none())
                .cloned()
        };

        match empresa {
            Some(mut empresa) => {
                let mut enderecos = self.enderecos_for(&[empresa.id]).await?;
                empresa.enderecos = enderecos.remove(&empresa.id).unwrap_or_default();
                Ok(Some(empresa))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, empresa: &Empresa) -> Result<(), ApiError> {
        let mut empresas = self.0.empresas.lock().unwrap();
        if let Some(existing) = empresas
            .iter_mut()
            .find(|existing| existing.id == empresa.id && existing.apagado.is_none())
        {
            *existing = empresa.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut empresas = self.0.empresas.lock().unwrap();
        if let Some(existing) = empresas
            .iter_mut()
            .find(|existing| existing.id == id && existing.apagado.is_none())
        {
            let now = Utc::now();
            existing.atualizado = Some(now);
            existing.apagado = Some(now);
        }
        Ok(())
    }

    async fn enderecos_for(
        &self,
        empresa_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Endereco>>, ApiError> {
        let associacoes = self.0.associacoes.lock().unwrap();
        let enderecos = self.0.enderecos.lock().unwrap();

        let mut agrupados: HashMap<i64, Vec<Endereco>> = HashMap::new();
        for (_, id_empresa, id_endereco) in associacoes.iter() {
            if !empresa_ids.contains(id_empresa) {
                continue;
            }
            if let Some(endereco) = enderecos
                .iter()
                .find(|endereco| endereco.id == *id_endereco && endereco.apagado.is_none())
            {
                agrupados.entry(*id_empresa).or_default().push(endereco.clone());
            }
        }
        Ok(agrupados)
    }
}

pub struct InMemoryEnderecoRepository(pub Arc<TestStore>);

#[async_trait]
impl EnderecoRepository for InMemoryEnderecoRepository {
    async fn create(&self, mut endereco: Endereco) -> Result<Endereco, ApiError> {
        endereco.id = self.0.next_id();
        self.0.enderecos.lock().unwrap().push(endereco.clone());
        Ok(endereco)
    }

    async fn find_all(&self, filtro: &EnderecoFiltro) -> Result<Vec<Endereco>, ApiError> {
        let enderecos = self.0.enderecos.lock().unwrap();
        Ok(enderecos
            .iter()
            .filter(|endereco| endereco.apagado.is_none())
            .filter(|endereco| match filtro.search.as_deref() {
                Some(term) if !term.is_empty() => {
                    endereco.logradouro.contains(term)
                        || endereco.bairro.contains(term)
                        || endereco.cidade.contains(term)
                        || endereco.cep.contains(term)
                        || endereco.estado.contains(term)
                }
                _ => true,
            })
            .filter(|endereco| matches(&endereco.logradouro, filtro.logradouro.as_ref()))
            .filter(|endereco| matches(&endereco.numero, filtro.numero.as_ref()))
            .filter(|endereco| matches(&endereco.bairro, filtro.bairro.as_ref()))
            .filter(|endereco| matches(&endereco.cidade, filtro.cidade.as_ref()))
            .filter(|endereco| matches(&endereco.cep, filtro.cep.as_ref()))
            .filter(|endereco| matches(&endereco.estado, filtro.estado.as_ref()))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Endereco>, ApiError> {
        let enderecos = self.0.enderecos.lock().unwrap();
        Ok(enderecos
            .iter()
            .find(|endereco| endereco.id == id && endereco.apagado.is_none())
            .cloned())
    }

    async fn update(&self, endereco: &Endereco) -> Result<(), ApiError> {
        let mut enderecos = self.0.enderecos.lock().unwrap();
        if let Some(existing) = enderecos
            .iter_mut()
            .find(|existing| existing.id == endereco.id && existing.apagado.is_none())
        {
            *existing = endereco.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut enderecos = self.0.enderecos.lock().unwrap();
        if let Some(existing) = enderecos
            .iter_mut()
            .find(|existing| existing.id == id && existing.apagado.is_none())
        {
            let now = Utc::now();
            existing.atualizado = Some(now);
            existing.apagado = Some(now);
        }
        Ok(())
    }

    async fn empresas_for(
        &self,
        endereco_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Empresa>>, ApiError> {
        let associacoes = self.0.associacoes.lock().unwrap();
        let empresas = self.0.empresas.lock().unwrap();

        let mut agrupadas: HashMap<i64, Vec<Empresa>> = HashMap::new();
        for (_, id_empresa, id_endereco) in associacoes.iter() {
            if !endereco_ids.contains(id_endereco) {
                continue;
            }
            if let Some(empresa) = empresas
                .iter()
                .find(|empresa| empresa.id == *id_empresa && empresa.apagado.is_none())
            {
                agrupadas.entry(*id_endereco).or_default().push(empresa.clone());
            }
        }
        Ok(agrupadas)
    }
}

pub struct InMemoryEnderecoEmpresaRepository(pub Arc<TestStore>);

#[async_trait]
impl EnderecoEmpresaRepository for InMemoryEnderecoEmpresaRepository {
    async fn assign(
        &self,
        empresa: &Empresa,
        endereco: &Endereco,
    ) -> Result<EnderecoEmpresa, ApiError> {
        let id = self.0.next_id();
        self.0
            .associacoes
            .lock()
            .unwrap()
            .push((id, empresa.id, endereco.id));

        Ok(EnderecoEmpresa {
            id,
            empresa: empresa.clone(),
            endereco: endereco.clone(),
            criado: Utc::now(),
            atualizado: None,
            apagado: None,
        })
    }

    async fn empresas_by_endereco(&self, id_endereco: i64) -> Result<Vec<Empresa>, ApiError> {
        let associacoes = self.0.associacoes.lock().unwrap();
        let empresas = self.0.empresas.lock().unwrap();

        Ok(associacoes
            .iter()
            .filter(|(_, _, endereco)| *endereco == id_endereco)
            .filter_map(|(_, id_empresa, _)| {
                empresas
                    .iter()
                    .find(|empresa| empresa.id == *id_empresa && empresa.apagado.is_none())
                    .cloned()
            })
            .collect())
    }

    async fn enderecos_by_empresa(&self, id_empresa: i64) -> Result<Vec<Endereco>, ApiError> {
        let associacoes = self.0.associacoes.lock().unwrap();
        let enderecos = self.0.enderecos.lock().unwrap();

        Ok(associacoes
            .iter()
            .filter(|(_, empresa, _)| *empresa == id_empresa)
            .filter_map(|(_, _, id_endereco)| {
                enderecos
                    .iter()
                    .find(|endereco| endereco.id == *id_endereco && endereco.apagado.is_none())
                    .cloned()
            })
            .collect())
    }
}

pub struct InMemoryEmpregoRepository(pub Arc<TestStore>);

#[async_trait]
impl EmpregoRepository for InMemoryEmpregoRepository {
    async fn create(&self, mut emprego: Emprego) -> Result<Emprego, ApiError> {
        emprego.id = self.0.next_id();
        self.0.empregos.lock().unwrap().push(emprego.clone());
        Ok(emprego)
    }

    async fn find_all(&self, filtro: &EmpregoFiltro) -> Result<Vec<Emprego>, ApiError> {
        let empregos = self.0.empregos.lock().unwrap();
        Ok(empregos
            .iter()
            .filter(|emprego| emprego.apagado.is_none())
            .filter(|emprego| match filtro.search.as_deref() {
                Some(term) if !term.is_empty() => {
                    emprego.ocupacao.contains(term) || emprego.tipo_contrato.contains(term)
                }
                _ => true,
            })
            .filter(|emprego| matches(&emprego.id_empresa.to_string(), filtro.empresa.as_ref()))
            .filter(|emprego| matches(&emprego.ocupacao, filtro.ocupacao.as_ref()))
            .filter(|emprego| matches(&emprego.tipo_contrato, filtro.tipo_contrato.as_ref()))
            .filter(|emprego| {
                matches(&emprego.carga_horaria.to_string(), filtro.carga_horaria.as_ref())
            })
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Emprego>, ApiError> {
        let empregos = self.0.empregos.lock().unwrap();
        Ok(empregos
            .iter()
            .find(|emprego| emprego.id == id && emprego.apagado.is_none())
            .cloned())
    }

    async fn update(&self, emprego: &Emprego) -> Result<(), ApiError> {
        let mut empregos = self.0.empregos.lock().unwrap();
        if let Some(existing) = empregos
            .iter_mut()
            .find(|existing| existing.id == emprego.id && existing.apagado.is_none())
        {
            *existing = emprego.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut empregos = self.0.empregos.lock().unwrap();
        if let Some(existing) = empregos
            .iter_mut()
            .find(|existing| existing.id == id && existing.apagado.is_none())
        {
            let now = Utc::now();
            existing.atualizado = Some(now);
            existing.apagado = Some(now);
        }
        Ok(())
    }
}

pub struct InMemoryContatoEmpresaRepository(pub Arc<TestStore>);

#[async_trait]
impl ContatoEmpresaRepository for InMemoryContatoEmpresaRepository {
    async fn create(&self, mut contato: ContatoEmpresa) -> Result<ContatoEmpresa, ApiError> {
        contato.id = self.0.next_id();
        self.0.contatos.lock().unwrap().push(contato.clone());
        Ok(contato)
    }

    async fn find_all(
        &self,
        filtro: &ContatoEmpresaFiltro,
    ) -> Result<Vec<ContatoEmpresa>, ApiError> {
        let contatos = self.0.contatos.lock().unwrap();
        Ok(contatos
            .iter()
            .filter(|contato| contato.apagado.is_none())
            .filter(|contato| match filtro.search.as_deref() {
                Some(term) if !term.is_empty() => {
                    contato.tipo.contains(term) || contato.contato.contains(term)
                }
                _ => true,
            })
            .filter(|contato| matches(&contato.id_empresa.to_string(), filtro.empresa.as_ref()))
            .filter(|contato| matches(&contato.tipo, filtro.tipo.as_ref()))
            .filter(|contato| matches(&contato.contato, filtro.contato.as_ref()))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ContatoEmpresa>, ApiError> {
        let contatos = self.0.contatos.lock().unwrap();
        Ok(contatos
            .iter()
            .find(|contato| contato.id == id && contato.apagado.is_none())
            .cloned())
    }

    async fn update(&self, contato: &ContatoEmpresa) -> Result<(), ApiError> {
        let mut contatos = self.0.contatos.lock().unwrap();
        if let Some(existing) = contatos
            .iter_mut()
            .find(|existing| existing.id == contato.id && existing.apagado.is_none())
        {
            *existing = contato.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut contatos = self.0.contatos.lock().unwrap();
        if let Some(existing) = contatos
            .iter_mut()
            .find(|existing| existing.id == id && existing.apagado.is_none())
        {
            let now = Utc::now();
            existing.atualizado = Some(now);
            existing.apagado = Some(now);
        }
        Ok(())
    }
}

// ============================================================================
// Test application assembly
// ============================================================================

fn test_settings() -> Settings {
    Settings {
        app: AppSettings {
            name: "cadastro-api".to_string(),
            port: 8000,
            environment: "test".to_string(),
            cors_allow_origins: Vec::new(),
        },
        database: DatabaseSettings {
            host: "localhost".to_string(),
            port: 3306,
            user: "cadastro".to_string(),
            pass: "cadastro".to_string(),
            schema: "cadastro".to_string(),
            charset: "utf8mb4".to_string(),
            collation: "utf8mb4_general_ci".to_string(),
        },
        log: LogSettings::default(),
    }
}

/// Build the full router over in-memory repositories. The lazy database
/// handle never sees traffic because every handler under test goes through
/// the repository doubles.
pub fn create_test_app() -> (Arc<TestStore>, Router) {
    let store = Arc::new(TestStore::default());
    let settings = test_settings();
    let database = Database::connect_lazy(&settings.database);

    let state = AppState::with_repositories(
        settings,
        database,
        Arc::new(InMemoryEmpresaRepository(store.clone())),
        Arc::new(InMemoryEnderecoRepository(store.clone())),
        Arc::new(InMemoryEnderecoEmpresaRepository(store.clone())),
        Arc::new(InMemoryEmpregoRepository(store.clone())),
        Arc::new(InMemoryContatoEmpresaRepository(store.clone())),
    );

    (store, build_router(state))
}

#[allow(dead_code)] // Not every test binary seeds companies
/// Seed a live company directly into the store, returning its id.
pub fn seed_empresa(store: &TestStore, nome: &str, cnpj: &str) -> i64 {
    let id = store.next_id();
    store.empresas.lock().unwrap().push(Empresa {
        id,
        nome: nome.to_string(),
        cnpj: cnpj.to_string(),
        enderecos: Vec::new(),
        criado: Utc::now(),
        atualizado: None,
        apagado: None,
    });
    id
}

#[allow(dead_code)] // Not every test binary seeds addresses
/// Seed a live address directly into the store, returning its id.
pub fn seed_endereco(store: &TestStore, logradouro: &str, cidade: &str) -> i64 {
    let id = store.next_id();
    store.enderecos.lock().unwrap().push(Endereco {
        id,
        logradouro: logradouro.to_string(),
        numero: "100".to_string(),
        complemento: None,
        bairro: "Centro".to_string(),
        cidade: cidade.to_string(),
        cep: "80000-000".to_string(),
        estado: "PR".to_string(),
        empresas: Vec::new(),
        criado: Utc::now(),
        atualizado: None,
        apagado: None,
    });
    id
}

/// Helper to extract a response body as bytes
pub async fn extract_body(response: axum::response::Response) -> Vec<u8> {
    use axum::body::to_bytes;
    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    body.to_vec()
}

#[allow(dead_code)] // Not every test binary sends bodies
/// Build a JSON request against the test router.
pub fn json_request(
    method: axum::http::Method,
    uri: &str,
    body: serde_json::Value,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_string()))
        .unwrap()
}
