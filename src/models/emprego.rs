use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Empresa;

/// A job listing belonging to one company. Reads hydrate the live parent
/// company; writes carry only `id_empresa`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Emprego {
    pub id: i64,
    pub id_empresa: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empresa: Option<Empresa>,
    pub ocupacao: String,
    pub remuneracao_inicial: f64,
    pub tipo_contrato: String,
    pub data_inicio: NaiveDate,
    pub data_fim: Option<NaiveDate>,
    pub carga_horaria: i64,
    pub criado: DateTime<Utc>,
    pub atualizado: Option<DateTime<Utc>>,
    pub apagado: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpregoCreate {
    pub id_empresa: i64,
    pub ocupacao: String,
    pub remuneracao_inicial: f64,
    pub tipo_contrato: String,
    pub data_inicio: NaiveDate,
    pub data_fim: Option<NaiveDate>,
    pub carga_horaria: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpregoUpdate {
    pub id_empresa: Option<i64>,
    pub ocupacao: Option<String>,
    pub remuneracao_inicial: Option<f64>,
    pub tipo_contrato: Option<String>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
    pub carga_horaria: Option<i64>,
}

/// Query-string filters for the job list endpoint. Values are matched as
/// strings so the store applies its own coercion, dates via
/// `STR_TO_DATE(?, '%Y-%m-%d')`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmpregoFiltro {
    pub search: Option<String>,
    pub empresa: Option<String>,
    pub ocupacao: Option<String>,
    pub remuneracao_inicial: Option<String>,
    pub tipo_contrato: Option<String>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub carga_horaria: Option<String>,
}
