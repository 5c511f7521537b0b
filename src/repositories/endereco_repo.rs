use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::FromRow;

use crate::{
    database::Database,
    error::ApiError,
    models::{Empresa, Endereco, EnderecoFiltro},
};

use super::{filter::FilterBuilder, log_select_error, ERRO_DELETE, ERRO_INSERT, ERRO_UPDATE};

#[async_trait]
pub trait EnderecoRepository: Send + Sync {
    async fn create(&self, endereco: Endereco) -> Result<Endereco, ApiError>;
    async fn find_all(&self, filtro: &EnderecoFiltro) -> Result<Vec<Endereco>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Endereco>, ApiError>;
    async fn update(&self, endereco: &Endereco) -> Result<(), ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    /// Batch-load the live companies linked to each of the given addresses.
    async fn empresas_for(
        &self,
        endereco_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Empresa>>, ApiError>;
}

pub struct SqlxEnderecoRepository {
    db: Database,
}

impl SqlxEnderecoRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

const BASE_SELECT: &str = "SELECT id, logradouro, numero, complemento, bairro, cidade, cep, \
                           estado, criado, atualizado, apagado \
                           FROM enderecos WHERE apagado IS NULL";

const SEARCH_COLUMNS: &[&str] = &[
    "logradouro",
    "numero",
    "complemento",
    "bairro",
    "cidade",
    "cep",
    "estado",
];

#[async_trait]
impl EnderecoRepository for SqlxEnderecoRepository {
    async fn create(&self, mut endereco: Endereco) -> Result<Endereco, ApiError> {
        let result = sqlx::query(
            "INSERT INTO enderecos (logradouro, numero, complemento, bairro, cidade, cep, estado, criado) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&endereco.logradouro)
        .bind(&endereco.numero)
        .bind(&endereco.complemento)
        .bind(&endereco.bairro)
        .bind(&endereco.cidade)
        .bind(&endereco.cep)
        .bind(&endereco.estado)
        .bind(endereco.criado)
        .execute(self.db.write())
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "{}", ERRO_INSERT);
            err
        })?;

        endereco.id = result.last_insert_id() as i64;

        Ok(endereco)
    }

    async fn find_all(&self, filtro: &EnderecoFiltro) -> Result<Vec<Endereco>, ApiError> {
        let mut filter = FilterBuilder::new();
        filter.search(SEARCH_COLUMNS, filtro.search.as_deref());
        filter.equals("logradouro", filtro.logradouro.as_deref());
        filter.equals("numero", filtro.numero.as_deref());
        filter.equals("complemento", filtro.complemento.as_deref());
        filter.equals("bairro", filtro.bairro.as_deref());
        filter.equals("cidade", filtro.cidade.as_deref());
        filter.equals("cep", filtro.cep.as_deref());
        filter.equals("estado", filtro.estado.as_deref());

        let sql = format!("{BASE_SELECT}{}", filter.clause());
        let mut query = sqlx::query_as::<_, Endereco>(&sql);
        for argument in filter.arguments() {
            query = query.bind(argument);
        }

        let mut enderecos = query.fetch_all(self.db.read()).await.map_err(|err| {
            log_select_error(&err);
            err
        })?;

        let ids: Vec<i64> = enderecos.iter().map(|endereco| endereco.id).collect();
        let mut empresas = self.empresas_for(&ids).await?;
        for endereco in &mut enderecos {
            endereco.empresas = empresas.remove(&endereco.id).unwrap_or_default();
        }

        Ok(enderecos)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Endereco>, ApiError> {
        let sql = format!("{BASE_SELECT} AND id = ?");
        let endereco = sqlx::query_as::<_, Endereco>(&sql)
            .bind(id)
            .fetch_optional(self.db.read())
            .await
            .map_err(|err| {
                log_select_error(&err);
                err
            })?;

        match endereco {
            Some(mut endereco) => {
                let mut empresas = self.empresas_for(&[endereco.id]).await?;
                endereco.empresas = empresas.remove(&endereco.id).unwrap_or_default();
                Ok(Some(endereco))
            }
            None => Ok(None),
        }
    }

    async fn update(&self, endereco: &Endereco) -> Result<(), ApiError> {
        sqlx::query(
            "UPDATE enderecos SET logradouro = ?, numero = ?, complemento = ?, bairro = ?, \
             cidade = ?, cep = ?, estado = ?, atualizado = ? \
             WHERE id = ? AND apagado IS NULL",
        )
        .bind(&endereco.logradouro)
        .bind(&endereco.numero)
        .bind(&endereco.complemento)
        .bind(&endereco.bairro)
        .bind(&endereco.cidade)
        .bind(&endereco.cep)
        .bind(&endereco.estado)
        .bind(endereco.atualizado)
        .bind(endereco.id)
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
            "UPDATE enderecos SET atualizado = CURRENT_TIMESTAMP, apagado = CURRENT_TIMESTAMP \
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

    async fn empresas_for(
        &self,
        endereco_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Empresa>>, ApiError> {
        if endereco_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let placeholders = vec!["?"; endereco_ids.len()].join(", ");
        let sql = format!(
            "SELECT endemp.id_endereco, \
                    emp.id, emp.nome, emp.cnpj, emp.criado, emp.atualizado, emp.apagado \
             FROM empresas emp \
             JOIN endereco_empresa endemp ON emp.id = endemp.id_empresa \
             JOIN enderecos e ON endemp.id_endereco = e.id \
             WHERE endemp.id_endereco IN ({placeholders}) \
               AND emp.apagado IS NULL \
               AND e.apagado IS NULL \
               AND endemp.apagado IS NULL"
        );

        let mut query = sqlx::query_as::<_, EmpresaPorEnderecoRow>(&sql);
        for id in endereco_ids {
            query = query.bind(*id);
        }

        let rows = query.fetch_all(self.db.read()).await.map_err(|err| {
            log_select_error(&err);
            err
        })?;

        let mut agrupadas: HashMap<i64, Vec<Empresa>> = HashMap::new();
        for row in rows {
            agrupadas
                .entry(row.id_endereco)
                .or_default()
                .push(row.into());
        }

        Ok(agrupadas)
    }
}

/// One linked company plus the address id it belongs to.
#[derive(Debug, FromRow)]
struct EmpresaPorEnderecoRow {
    id_endereco: i64,
    id: i64,
    nome: String,
    cnpj: String,
    criado: chrono::DateTime<chrono::Utc>,
    atualizado: Option<chrono::DateTime<chrono::Utc>>,
    apagado: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<EmpresaPorEnderecoRow> for Empresa {
    fn from(row: EmpresaPorEnderecoRow) -> Self {
        Empresa {
            id: row.id,
            nome: row.nome,
            cnpj: row.cnpj,
            enderecos: Vec::new(),
            criado: row.criado,
            atualizado: row.atualizado,
            apagado: row.apagado,
        }
    }
}
