use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::{
    database::Database,
    error::ApiError,
    models::{ContatoEmpresa, ContatoEmpresaFiltro, Empresa},
};

use super::{filter::FilterBuilder, log_select_error, ERRO_DELETE, ERRO_INSERT, ERRO_UPDATE};

#[async_trait]
pub trait ContatoEmpresaRepository: Send + Sync {
    async fn create(&self, contato: ContatoEmpresa) -> Result<ContatoEmpresa, ApiError>;
    async fn find_all(
        &self,
        filtro: &ContatoEmpresaFiltro,
    ) -> Result<Vec<ContatoEmpresa>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ContatoEmpresa>, ApiError>;
    async fn update(&self, contato: &ContatoEmpresa) -> Result<(), ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

pub struct SqlxContatoEmpresaRepository {
    db: Database,
}

impl SqlxContatoEmpresaRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

const BASE_SELECT: &str =
    "SELECT cont.id, cont.id_empresa, \
            emp.nome AS empresa_nome, emp.cnpj AS empresa_cnpj, \
            emp.criado AS empresa_criado, emp.atualizado AS empresa_atualizado, \
            emp.apagado AS empresa_apagado, \
            cont.tipo, cont.contato, cont.criado, cont.atualizado, cont.apagado \
     FROM contato_empresa cont \
     JOIN empresas emp ON emp.id = cont.id_empresa \
     WHERE cont.apagado IS NULL AND emp.apagado IS NULL";

const SEARCH_COLUMNS: &[&str] = &["emp.nome", "emp.cnpj", "cont.tipo", "cont.contato"];

#[async_trait]
impl ContatoEmpresaRepository for SqlxContatoEmpresaRepository {
    async fn create(&self, mut contato: ContatoEmpresa) -> Result<ContatoEmpresa, ApiError> {
        let result = sqlx::query(
            "INSERT INTO contato_empresa (id_empresa, tipo, contato, criado) VALUES (?, ?, ?, ?)",
        )
        .bind(contato.id_empresa)
        .bind(&contato.tipo)
        .bind(&contato.contato)
        .bind(contato.criado)
        .execute(self.db.write())
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "{}", ERRO_INSERT);
            err
        })?;

        contato.id = result.last_insert_id() as i64;

        Ok(contato)
    }

    async fn find_all(
        &self,
        filtro: &ContatoEmpresaFiltro,
    ) -> Result<Vec<ContatoEmpresa>, ApiError> {
        let mut filter = FilterBuilder::new();
        filter.search(SEARCH_COLUMNS, filtro.search.as_deref());
        filter.equals("cont.id_empresa", filtro.empresa.as_deref());
        filter.equals("cont.tipo", filtro.tipo.as_deref());
        filter.equals("cont.contato", filtro.contato.as_deref());

        let sql = format!("{BASE_SELECT}{}", filter.clause());
        let mut query = sqlx::query_as::<_, ContatoEmpresaRow>(&sql);
        for argument in filter.arguments() {
            query = query.bind(argument);
        }

        let rows = query.fetch_all(self.db.read()).await.map_err(|err| {
            log_select_error(&err);
            err
        })?;

        Ok(rows.into_iter().map(ContatoEmpresa::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ContatoEmpresa>, ApiError> {
        let sql = format!("{BASE_SELECT} AND cont.id = ?");
        let row = sqlx::query_as::<_, ContatoEmpresaRow>(&sql)
            .bind(id)
            .fetch_optional(self.db.read())
            .await
            .map_err(|err| {
                log_select_error(&err);
                err
            })?;

        Ok(row.map(ContatoEmpresa::from))
    }

    async fn update(&self, contato: &ContatoEmpresa) -> Result<(), ApiError> {
        sqlx::query(
            "UPDATE contato_empresa SET id_empresa = ?, tipo = ?, contato = ?, atualizado = ? \
             WHERE id = ? AND apagado IS NULL",
        )
        .bind(contato.id_empresa)
        .bind(&contato.tipo)
        .bind(&contato.contato)
        .bind(contato.atualizado)
        .bind(contato.id)
        .execute(self.db.write())
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "{}", ERRO_UPDATE);
            err
        })?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        sqlx::query(
            "UPDATE contato_empresa SET atualizado = CURRENT_TIMESTAMP, apagado = CURRENT_TIMESTAMP \
             WHERE id = ? AND apagado IS NULL",
        )
        .bind(id)
        .execute(self.db.write())
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "{}", ERRO_DELETE);
            err
        })?;

        Ok(())
    }
}

/// Flattened contact row with the joined company columns aliased `empresa_*`.
#[derive(Debug, FromRow)]
struct ContatoEmpresaRow {
    id: i64,
    id_empresa: i64,
    empresa_nome: String,
    empresa_cnpj: String,
    empresa_criado: DateTime<Utc>,
    empresa_atualizado: Option<DateTime<Utc>>,
    empresa_apagado: Option<DateTime<Utc>>,
    tipo: String,
    contato: String,
    criado: DateTime<Utc>,
    atualizado: Option<DateTime<Utc>>,
    apagado: Option<DateTime<Utc>>,
}

impl From<ContatoEmpresaRow> for ContatoEmpresa {
    fn from(row: ContatoEmpresaRow) -> Self {
        ContatoEmpresa {
            id: row.id,
            id_empresa: row.id_empresa,
            empresa: Some(Empresa {
                id: row.id_empresa,
                nome: row.empresa_nome,
                cnpj: row.empresa_cnpj,
                enderecos: Vec::new(),
                criado: row.empresa_criado,
                atualizado: row.empresa_atualizado,
                apagado: row.empresa_apagado,
            }),
            tipo: row.tipo,
            contato: row.contato,
            criado: row.criado,
            atualizado: row.atualizado,
            apagado: row.apagado,
        }
    }
}
