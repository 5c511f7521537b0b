use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::Endereco;

/// A registered company. Addresses are attached through the
/// `endereco_empresa` join table and hydrated on reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Empresa {
    pub id: i64,
    pub nome: String,
    pub cnpj: String,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enderecos: Vec<Endereco>,
    pub criado: DateTime<Utc>,
    pub atualizado: Option<DateTime<Utc>>,
    pub apagado: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpresaCreate {
    pub nome: String,
    pub cnpj: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpresaUpdate {
    pub nome: Option<String>,
    pub cnpj: Option<String>,
}

/// Query-string filters for the company list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmpresaFiltro {
    pub search: Option<String>,
    pub nome: Option<String>,
    pub cnpj: Option<String>,
}
