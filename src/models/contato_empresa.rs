use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Empresa;

/// A contact channel (telefone, whatsapp, email) belonging to one company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContatoEmpresa {
    pub id: i64,
    pub id_empresa: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empresa: Option<Empresa>,
    pub tipo: String,
    pub contato: String,
    pub criado: DateTime<Utc>,
    pub atualizado: Option<DateTime<Utc>>,
    pub apagado: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContatoEmpresaCreate {
    pub id_empresa: i64,
    pub tipo: String,
    pub contato: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContatoEmpresaUpdate {
    pub id_empresa: Option<i64>,
    pub tipo: Option<String>,
    pub contato: Option<String>,
}

/// Query-string filters for the contact list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContatoEmpresaFiltro {
    pub search: Option<String>,
    pub empresa: Option<String>,
    pub tipo: Option<String>,
    pub contato: Option<String>,
}
