use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::{
    database::Database,
    error::ApiError,
    models::{Empresa, EmpresaFiltro, Endereco},
};

use super::{filter::FilterBuilder, log_select_error, ERRO_DELETE, ERRO_INSERT, ERRO_UPDATE};

#[async_trait]
pub trait EmpresaRepository: Send + Sync {
    async fn create(&self, empresa: Empresa) -> Result<Empresa, ApiError>;
    async fn find_all(&self, filtro: &EmpresaFiltro) -> Result<Vec<Empresa>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Empresa>, ApiError>;
    async fn update(&self, empresa: &Empresa) -> Result<(), ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;

    /// Batch-load the live addresses linked to each of the given companies.
    /// One round-trip per call, grouped by company id.
    async fn enderecos_for(
        &self,
        empresa_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Endereco>>, ApiError>;
}

pub struct SqlxEmpresaRepository {
    db: Database,
}

impl SqlxEmpresaRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

const BASE_SELECT: &str =
    "SELECT id, nome, cnpj, criado, atualizado, apagado FROM empresas WHERE apagado IS NULL";

#[async_trait]
impl EmpresaRepository for SqlxEmpresaRepository {
    async fn create(&self, mut empresa: Empresa) -> Result<Empresa, ApiError> {
        let mut tx = self.db.begin().await?;

        let result = sqlx::query("INSERT INTO empresas (nome, cnpj, criado) VALUES (?, ?, ?)")
            .bind(&empresa.nome)
            .bind(&empresa.cnpj)
            .bind(empresa.criado)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "{}", ERRO_INSERT);
                err
            })?;

        empresa.id = result.last_insert_id() as i64;
        tx.commit().await?;

        Ok(empresa)
    }

    async fn find_all(&self, filtro: &EmpresaFiltro) -> Result<Vec<Empresa>, ApiError> {
        let mut filter = FilterBuilder::new();
        filter.search(&["nome", "cnpj"], filtro.search.as_deref());
        filter.equals("nome", filtro.nome.as_deref());
        filter.equals("cnpj", filtro.cnpj.as_deref());

        let sql = format!("{BASE_SELECT}{}", filter.clause());
        let mut query = sqlx::query_as::<_, Empresa>(&sql);
        for argument in filter.arguments() {
            query = query.bind(argument);
        }

        let mut empresas = query.fetch_all(self.db.read()).await.map_err(|err| {
            log_select_error(&err);
            err
        })?;

        let ids: Vec<i64> = empresas.iter().map(|empresa| empresa.id).collect();
        let mut enderecos = self.enderecos_for(&ids).await?;
        for empresa in &mut empresas {
            empresa.enderecos = enderecos.remove(&empresa.id).unwrap_or_default();
        }

        Ok(empresas)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Empresa>, ApiError> {
        let sql = format!("{BASE_SELECT} AND id = ?");
        let empresa = sqlx::query_as::<_, Empresa>(&sql)
            .bind(id)
            .fetch_optional(self.db.read())
            .await
            .map_err(|err| {
                log_select_error(&err);
                err
            })?;

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
        let mut tx = self.db.begin().await?;

        sqlx::query(
            "UPDATE empresas SET nome = ?, cnpj = ?, atualizado = ? \
             WHERE id = ? AND apagado IS NULL",
        )
        .bind(&empresa.nome)
        .bind(&empresa.cnpj)
        .bind(empresa.atualizado)
        .bind(empresa.id)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "{}", ERRO_UPDATE);
            err
        })?;

        tx.commit().await?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let mut tx = self.db.begin().await?;

        // Guarded on apagado so a repeated delete is a no-op instead of a re-stamp.
        sqlx::query(
            "UPDATE empresas SET atualizado = CURRENT_TIMESTAMP, apagado = CURRENT_TIMESTAMP \
             WHERE id = ? AND apagado IS NULL",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "{}", ERRO_DELETE);
            err
        })?;

        tx.commit().await?;

        Ok(())
    }

    async fn enderecos_for(
        &self,
        empresa_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Endereco>>, ApiError> {
        if empresa_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let placeholders = vec!["?"; empresa_ids.len()].join(", ");
        let sql = format!(
            "SELECT endemp.id_empresa, \
                    e.id, e.logradouro, e.numero, e.complemento, e.bairro, e.cidade, \
                    e.cep, e.estado, e.criado, e.atualizado, e.apagado \
             FROM enderecos e \
             JOIN endereco_empresa endemp ON e.id = endemp.id_endereco \
             JOIN empresas emp ON endemp.id_empresa = emp.id \
             WHERE endemp.id_empresa IN ({placeholders}) \
               AND e.apagado IS NULL \
               AND emp.apagado IS NULL \
               AND endemp.apagado IS NULL"
        );

        let mut query = sqlx::query_as::<_, EnderecoPorEmpresaRow>(&sql);
        for id in empresa_ids {
            query = query.bind(*id);
        }

        let rows = query.fetch_all(self.db.read()).await.map_err(|err| {
            log_select_error(&err);
            err
        })?;

        let mut agrupados: HashMap<i64, Vec<Endereco>> = HashMap::new();
        for row in rows {
            agrupados
                .entry(row.id_empresa)
                .or_default()
                .push(row.into());
        }

        Ok(agrupados)
    }
}

/// One linked address plus the company id it belongs to.
#[derive(Debug, FromRow)]
struct EnderecoPorEmpresaRow {
    id_empresa: i64,
    id: i64,
    logradouro: String,
    numero: String,
    complemento: Option<String>,
    bairro: String,
    cidade: String,
    cep: String,
    estado: String,
    criado: DateTime<Utc>,
    atualizado: Option<DateTime<Utc>>,
    apagado: Option<DateTime<Utc>>,
}

impl From<EnderecoPorEmpresaRow> for Endereco {
    fn from(row: EnderecoPorEmpresaRow) -> Self {
        Endereco {
            id: row.id,
            logradouro: row.logradouro,
            numero: row.numero,
            complemento: row.complemento,
            bairro: row.bairro,
            cidade: row.cidade,
            cep: row.cep,
            estado: row.estado,
            empresas: Vec::new(),
            criado: row.criado,
            atualizado: row.atualizado,
            apagado: row.apagado,
        }
    }
}
