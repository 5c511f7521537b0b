use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::{
    database::Database,
    error::ApiError,
    models::{Emprego, EmpregoFiltro, Empresa},
};

use super::{filter::FilterBuilder, log_select_error, ERRO_DELETE, ERRO_INSERT, ERRO_UPDATE};

#[async_trait]
pub trait EmpregoRepository: Send + Sync {
    async fn create(&self, emprego: Emprego) -> Result<Emprego, ApiError>;
    async fn find_all(&self, filtro: &EmpregoFiltro) -> Result<Vec<Emprego>, ApiError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Emprego>, ApiError>;
    async fn update(&self, emprego: &Emprego) -> Result<(), ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

pub struct SqlxEmpregoRepository {
    db: Database,
}

impl SqlxEmpregoRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

// Reads join the owning company so listings carry the live parent.
const BASE_SELECT: &str =
    "SELECT job.id, job.id_empresa, \
            emp.nome AS empresa_nome, emp.cnpj AS empresa_cnpj, \
            emp.criado AS empresa_criado, emp.atualizado AS empresa_atualizado, \
            emp.apagado AS empresa_apagado, \
            job.ocupacao, job.remuneracao_inicial, job.tipo_contrato, \
            job.data_inicio, job.data_fim, job.carga_horaria, \
            job.criado, job.atualizado, job.apagado \
     FROM empregos job \
     JOIN empresas emp ON emp.id = job.id_empresa \
     WHERE job.apagado IS NULL AND emp.apagado IS NULL";

const SEARCH_COLUMNS: &[&str] = &[
    "emp.nome",
    "emp.cnpj",
    "job.ocupacao",
    "job.remuneracao_inicial",
    "job.tipo_contrato",
    "job.carga_horaria",
];

#[async_trait]
impl EmpregoRepository for SqlxEmpregoRepository {
    async fn create(&self, mut emprego: Emprego) -> Result<Emprego, ApiError> {
        let result = sqlx::query(
            "INSERT INTO empregos (id_empresa, ocupacao, remuneracao_inicial, tipo_contrato, \
             data_inicio, data_fim, carga_horaria, criado) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(emprego.id_empresa)
        .bind(&emprego.ocupacao)
        .bind(emprego.remuneracao_inicial)
        .bind(&emprego.tipo_contrato)
        .bind(emprego.data_inicio)
        .bind(emprego.data_fim)
        .bind(emprego.carga_horaria)
        .bind(emprego.criado)
        .execute(self.db.write())
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "{}", ERRO_INSERT);
            err
        })?;

        emprego.id = result.last_insert_id() as i64;

        Ok(emprego)
    }

    async fn find_all(&self, filtro: &EmpregoFiltro) -> Result<Vec<Emprego>, ApiError> {
        let mut filter = FilterBuilder::new();
        filter.search(SEARCH_COLUMNS, filtro.search.as_deref());
        filter.equals("job.id_empresa", filtro.empresa.as_deref());
        filter.equals("job.ocupacao", filtro.ocupacao.as_deref());
        filter.equals("job.remuneracao_inicial", filtro.remuneracao_inicial.as_deref());
        filter.equals("job.tipo_contrato", filtro.tipo_contrato.as_deref());
        filter.fragment(
            "job.data_inicio = STR_TO_DATE(?, '%Y-%m-%d')",
            filtro.data_inicio.as_deref(),
        );
        filter.fragment(
            "job.data_fim = STR_TO_DATE(?, '%Y-%m-%d')",
            filtro.data_fim.as_deref(),
        );
        filter.equals("job.carga_horaria", filtro.carga_horaria.as_deref());

        let sql = format!("{BASE_SELECT}{}", filter.clause());
        let mut query = sqlx::query_as::<_, EmpregoRow>(&sql);
        for argument in filter.arguments() {
            query = query.bind(argument);
        }

        let rows = query.fetch_all(self.db.read()).await.map_err(|err| {
            log_select_error(&err);
            err
        })?;

        Ok(rows.into_iter().map(Emprego::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Emprego>, ApiError> {
        let sql = format!("{BASE_SELECT} AND job.id = ?");
        let row = sqlx::query_as::<_, EmpregoRow>(&sql)
            .bind(id)
            .fetch_optional(self.db.read())
            .await
            .map_err(|err| {
                log_select_error(&err);
                err
            })?;

        Ok(row.map(Emprego::from))
    }

    async fn update(&self, emprego: &Emprego) -> Result<(), ApiError> {
        sqlx::query(
            "UPDATE empregos SET id_empresa = ?, ocupacao = ?, remuneracao_inicial = ?, \
             tipo_contrato = ?, data_inicio = ?, data_fim = ?, carga_horaria = ?, atualizado = ? \
             WHERE id = ? AND apagado IS NULL",
        )
        .bind(emprego.id_empresa)
        .bind(&emprego.ocupacao)
        .bind(emprego.remuneracao_inicial)
        .bind(&emprego.tipo_contrato)
        .bind(emprego.data_inicio)
        .bind(emprego.data_fim)
        .bind(emprego.carga_horaria)
        .bind(emprego.atualizado)
        .bind(emprego.id)
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
            "UPDATE empregos SET atualizado = CURRENT_TIMESTAMP, apagado = CURRENT_TIMESTAMP \
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

/// Flattened job row with the joined company columns aliased `empresa_*`.
#[derive(Debug, FromRow)]
struct EmpregoRow {
    id: i64,
    id_empresa: i64,
    empresa_nome: String,
    empresa_cnpj: String,
    empresa_criado: DateTime<Utc>,
    empresa_atualizado: Option<DateTime<Utc>>,
    empresa_apagado: Option<DateTime<Utc>>,
    ocupacao: String,
    remuneracao_inicial: f64,
    tipo_contrato: String,
    data_inicio: NaiveDate,
    data_fim: Option<NaiveDate>,
    carga_horaria: i64,
    criado: DateTime<Utc>,
    atualizado: Option<DateTime<Utc>>,
    apagado: Option<DateTime<Utc>>,
}

impl From<EmpregoRow> for Emprego {
    fn from(row: EmpregoRow) -> Self {
        Emprego {
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
            ocupacao: row.ocupacao,
            remuneracao_inicial: row.remuneracao_inicial,
            tipo_contrato: row.tipo_contrato,
            data_inicio: row.data_inicio,
            data_fim: row.data_fim,
            carga_horaria: row.carga_horaria,
            criado: row.criado,
            atualizado: row.atualizado,
            apagado: row.apagado,
        }
    }
}
