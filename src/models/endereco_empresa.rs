use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Empresa, Endereco};

/// Join entity linking one company to one address, with its own identifier
/// and soft-delete lifecycle independent of either side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnderecoEmpresa {
    pub id: i64,
    pub empresa: Empresa,
    pub endereco: Endereco,
    pub criado: DateTime<Utc>,
    pub atualizado: Option<DateTime<Utc>>,
    pub apagado: Option<DateTime<Utc>>,
}

/// Body of `POST /endereco-empresa/assign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRequest {
    pub id_empresa: i64,
    pub id_endereco: i64,
}
