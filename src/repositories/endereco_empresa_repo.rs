use async_trait::async_trait;
use chrono::Utc;

use crate::{
    database::Database,
    error::ApiError,
    models::{Empresa, Endereco, EnderecoEmpresa},
};

use super::{log_select_error, ERRO_INSERT};

#[async_trait]
pub trait EnderecoEmpresaRepository: Send + Sync {
    /// Link a resolved company to a resolved address. Both sides are looked
    /// up by the caller before this runs.
    async fn assign(
        &self,
        empresa: &Empresa,
        endereco: &Endereco,
    ) -> Result<EnderecoEmpresa, ApiError>;

    /// Live companies linked to the given address.
    async fn empresas_by_endereco(&self, id_endereco: i64) -> Result<Vec<Empresa>, ApiError>;

    /// Live addresses linked to the given company.
    async fn enderecos_by_empresa(&self, id_empresa: i64) -> Result<Vec<Endereco>, ApiError>;
}

pub struct SqlxEnderecoEmpresaRepository {
    db: Database,
}

impl SqlxEnderecoEmpresaRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnderecoEmpresaRepository for SqlxEnderecoEmpresaRepository {
    async fn assign(
        &self,
        empresa: &Empresa,
        endereco: &Endereco,
    ) -> Result<EnderecoEmpresa, ApiError> {
        let criado = Utc::now();

        let mut tx = self.db.begin().await?;

        let result = sqlx::query(
            "INSERT INTO endereco_empresa (id_empresa, id_endereco, criado) VALUES (?, ?, ?)",
        )
        .bind(empresa.id)
        .bind(endereco.id)
        .bind(criado)
        .execute(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "{}", ERRO_INSERT);
            err
        })?;

        let id = result.last_insert_id() as i64;
        tx.commit().await?;

        Ok(EnderecoEmpresa {
            id,
            empresa: empresa.clone(),
            endereco: endereco.clone(),
            criado,
            atualizado: None,
            apagado: None,
        })
    }

    async fn empresas_by_endereco(&self, id_endereco: i64) -> Result<Vec<Empresa>, ApiError> {
        let empresas = sqlx::query_as::<_, Empresa>(
            "SELECT emp.id, emp.nome, emp.cnpj, emp.criado, emp.atualizado, emp.apagado \
             FROM empresas emp \
             JOIN endereco_empresa endemp ON endemp.id_empresa = emp.id \
             JOIN enderecos e ON endemp.id_endereco = e.id \
             WHERE endemp.id_endereco = ? \
               AND emp.apagado IS NULL \
               AND e.apagado IS NULL \
               AND endemp.apagado IS NULL",
        )
        .bind(id_endereco)
        .fetch_all(self.db.read())
        .await
        .map_err(|err| {
            log_select_error(&err);
            err
        })?;

        Ok(empresas)
    }

    async fn enderecos_by_empresa(&self, id_empresa: i64) -> Result<Vec<Endereco>, ApiError> {
        let enderecos = sqlx::query_as::<_, Endereco>(
            "SELECT e.id, e.logradouro, e.numero, e.complemento, e.bairro, e.cidade, \
                    e.cep, e.estado, e.criado, e.atualizado, e.apagado \
             FROM enderecos e \
             JOIN endereco_empresa endemp ON endemp.id_endereco = e.id \
             JOIN empresas emp ON endemp.id_empresa = emp.id \
             WHERE endemp.id_empresa = ? \
               AND e.apagado IS NULL \
               AND emp.apagado IS NULL \
               AND endemp.apagado IS NULL",
        )
        .bind(id_empresa)
        .fetch_all(self.db.read())
        .await
        .map_err(|err| {
            log_select_error(&err);
            err
        })?;

        Ok(enderecos)
    }
}
