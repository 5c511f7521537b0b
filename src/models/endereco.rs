use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::Empresa;

/// A street address. Companies are attached through the `endereco_empresa`
/// join table and hydrated on reads.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Endereco {
    pub id: i64,
    pub logradouro: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub bairro: String,
    pub cidade: String,
    pub cep: String,
    pub estado: String,
    #[sqlx(skip)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub empresas: Vec<Empresa>,
    pub criado: DateTime<Utc>,
    pub atualizado: Option<DateTime<Utc>>,
    pub apagado: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnderecoCreate {
    pub logradouro: String,
    pub numero: String,
    pub complemento: Option<String>,
    pub bairro: String,
    pub cidade: String,
    pub cep: String,
    pub estado: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnderecoUpdate {
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub cep: Option<String>,
    pub estado: Option<String>,
}

/// Query-string filters for the address list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnderecoFiltro {
    pub search: Option<String>,
    pub logradouro: Option<String>,
    pub numero: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub cidade: Option<String>,
    pub cep: Option<String>,
    pub estado: Option<String>,
}
