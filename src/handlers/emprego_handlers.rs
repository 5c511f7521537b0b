use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

use crate::{
    error::ApiError,
    models::{Emprego, EmpregoCreate, EmpregoFiltro, EmpregoUpdate, Response},
    AppState,
};

use super::NO_RESULTS;

const CREATE_SUCCESS: &str = "Emprego cadastrado com sucesso.";
const LIST_SUCCESS: &str = "Consulta de empregos realizada com sucesso.";
const UPDATE_SUCCESS: &str = "Emprego atualizado com sucesso.";
const DELETE_SUCCESS: &str = "Emprego removido com sucesso.";

/// POST /emprego
pub async fn create_emprego(
    State(state): State<AppState>,
    Json(payload): Json<EmpregoCreate>,
) -> Result<Json<Response<Emprego>>, ApiError> {
    let emprego = Emprego {
        id: 0,
        id_empresa: payload.id_empresa,
        empresa: None,
        ocupacao: payload.ocupacao,
        remuneracao_inicial: payload.remuneracao_inicial,
        tipo_contrato: payload.tipo_contrato,
        data_inicio: payload.data_inicio,
        data_fim: payload.data_fim,
        carga_horaria: payload.carga_horaria,
        criado: Utc::now(),
        atualizado: None,
        apagado: None,
    };

    let result = state.emprego_service.create(emprego).await?;

    Ok(Json(Response::with_data(1, CREATE_SUCCESS, result)))
}

/// GET /emprego
pub async fn list_empregos(
    State(state): State<AppState>,
    Query(filtro): Query<EmpregoFiltro>,
) -> Result<Json<Response<Vec<Emprego>>>, ApiError> {
    let empregos = state.emprego_service.find_all(&filtro).await?;

    if empregos.is_empty() {
        return Ok(Json(Response::empty(NO_RESULTS)));
    }

    Ok(Json(Response::with_data(
        empregos.len(),
        LIST_SUCCESS,
        empregos,
    )))
}

/// GET /emprego/:id
pub async fn get_emprego(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<Emprego>>, ApiError> {
    match state.emprego_service.find_by_id(id).await? {
        Some(emprego) => Ok(Json(Response::with_data(1, LIST_SUCCESS, emprego))),
        None => Ok(Json(Response::empty(NO_RESULTS))),
    }
}

/// PUT /emprego/:id
pub async fn update_emprego(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmpregoUpdate>,
) -> Result<Json<Response<Emprego>>, ApiError> {
    if id == 0 {
        return Err(ApiError::validation("id é obrigatório"));
    }

    let Some(mut emprego) = state.emprego_service.find_by_id(id).await? else {
        return Ok(Json(Response::empty(NO_RESULTS)));
    };

    if let Some(id_empresa) = payload.id_empresa {
        emprego.id_empresa = id_empresa;
    }
    if let Some(ocupacao) = payload.ocupacao {
        emprego.ocupacao = ocupacao;
    }
    if let Some(remuneracao_inicial) = payload.remuneracao_inicial {
        emprego.remuneracao_inicial = remuneracao_inicial;
    }
    if let Some(tipo_contrato) = payload.tipo_contrato {
        emprego.tipo_contrato = tipo_contrato;
    }
    if let Some(data_inicio) = payload.data_inicio {
        emprego.data_inicio = data_inicio;
    }
    if payload.data_fim.is_some() {
        emprego.data_fim = payload.data_fim;
    }
    if let Some(carga_horaria) = payload.carga_horaria {
        emprego.carga_horaria = carga_horaria;
    }
    emprego.atualizado = Some(Utc::now());

    state.emprego_service.update(&emprego).await?;

    Ok(Json(Response::with_data(1, UPDATE_SUCCESS, emprego)))
}

/// DELETE /emprego/:id
pub async fn delete_emprego(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<()>>, ApiError> {
    state.emprego_service.delete(id).await?;

    Ok(Json(Response::empty(DELETE_SUCCESS)))
}
