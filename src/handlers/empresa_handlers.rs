use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

use crate::{
    error::ApiError,
    models::{Empresa, EmpresaCreate, EmpresaFiltro, EmpresaUpdate, Response},
    AppState,
};

use super::NO_RESULTS;

const CREATE_SUCCESS: &str = "Empresa cadastrada com sucesso.";
const LIST_SUCCESS: &str = "Consulta de empresas realizada com sucesso.";
const UPDATE_SUCCESS: &str = "Empresa atualizada com sucesso.";
const DELETE_SUCCESS: &str = "Empresa removida com sucesso.";

/// POST /empresa
pub async fn create_empresa(
    State(state): State<AppState>,
    Json(payload): Json<EmpresaCreate>,
) -> Result<Json<Response<Empresa>>, ApiError> {
    let empresa = Empresa {
        id: 0,
        nome: payload.nome,
        cnpj: payload.cnpj,
        enderecos: Vec::new(),
        criado: Utc::now(),
        atualizado: None,
        apagado: None,
    };

    let result = state.empresa_service.create(empresa).await?;

    Ok(Json(Response::with_data(1, CREATE_SUCCESS, result)))
}

/// GET /empresa
pub async fn list_empresas(
    State(state): State<AppState>,
    Query(filtro): Query<EmpresaFiltro>,
) -> Result<Json<Response<Vec<Empresa>>>, ApiError> {
    let empresas = state.empresa_service.find_all(&filtro).await?;

    if empresas.is_empty() {
        return Ok(Json(Response::empty(NO_RESULTS)));
    }

    Ok(Json(Response::with_data(
        empresas.len(),
        LIST_SUCCESS,
        empresas,
    )))
}

/// GET /empresa/:id
pub async fn get_empresa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<Empresa>>, ApiError> {
    match state.empresa_service.find_by_id(id).await? {
        Some(empresa) => Ok(Json(Response::with_data(1, LIST_SUCCESS, empresa))),
        None => Ok(Json(Response::empty(NO_RESULTS))),
    }
}

/// PUT /empresa/:id
pub async fn update_empresa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmpresaUpdate>,
) -> Result<Json<Response<Empresa>>, ApiError> {
    if id == 0 {
        return Err(ApiError::validation("id é obrigatório"));
    }

    let Some(mut empresa) = state.empresa_service.find_by_id(id).await? else {
        return Ok(Json(Response::empty(NO_RESULTS)));
    };

    if let Some(nome) = payload.nome {
        empresa.nome = nome;
    }
    if let Some(cnpj) = payload.cnpj {
        empresa.cnpj = cnpj;
    }
    empresa.atualizado = Some(Utc::now());

    state.empresa_service.update(&empresa).await?;

    Ok(Json(Response::with_data(1, UPDATE_SUCCESS, empresa)))
}

/// DELETE /empresa/:id
pub async fn delete_empresa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<()>>, ApiError> {
    state.empresa_service.delete(id).await?;

    Ok(Json(Response::empty(DELETE_SUCCESS)))
}
