use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

use crate::{
    error::ApiError,
    models::{
        ContatoEmpresa, ContatoEmpresaCreate, ContatoEmpresaFiltro, ContatoEmpresaUpdate, Response,
    },
    AppState,
};

use super::NO_RESULTS;

const CREATE_SUCCESS: &str = "Contato cadastrado com sucesso.";
const LIST_SUCCESS: &str = "Consulta de contatos realizada com sucesso.";
const UPDATE_SUCCESS: &str = "Contato atualizado com sucesso.";
const DELETE_SUCCESS: &str = "Contato removido com sucesso.";

/// POST /contato-empresa
pub async fn create_contato(
    State(state): State<AppState>,
    Json(payload): Json<ContatoEmpresaCreate>,
) -> Result<Json<Response<ContatoEmpresa>>, ApiError> {
    let contato = ContatoEmpresa {
        id: 0,
        id_empresa: payload.id_empresa,
        empresa: None,
        tipo: payload.tipo,
        contato: payload.contato,
        criado: Utc::now(),
        atualizado: None,
        apagado: None,
    };

    let result = state.contato_empresa_service.create(contato).await?;

    Ok(Json(Response::with_data(1, CREATE_SUCCESS, result)))
}

/// GET /contato-empresa
pub async fn list_contatos(
    State(state): State<AppState>,
    Query(filtro): Query<ContatoEmpresaFiltro>,
) -> Result<Json<Response<Vec<ContatoEmpresa>>>, ApiError> {
    let contatos = state.contato_empresa_service.find_all(&filtro).await?;

    if contatos.is_empty() {
        return Ok(Json(Response::empty(NO_RESULTS)));
    }

    Ok(Json(Response::with_data(
        contatos.len(),
        LIST_SUCCESS,
        contatos,
    )))
}

/// GET /contato-empresa/:id
pub async fn get_contato(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<ContatoEmpresa>>, ApiError> {
    match state.contato_empresa_service.find_by_id(id).await? {
        Some(contato) => Ok(Json(Response::with_data(1, LIST_SUCCESS, contato))),
        None => Ok(Json(Response::empty(NO_RESULTS))),
    }
}

/// PUT /contato-empresa/:id
pub async fn update_contato(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ContatoEmpresaUpdate>,
) -> Result<Json<Response<ContatoEmpresa>>, ApiError> {
    if id == 0 {
        return Err(ApiError::validation("id é obrigatório"));
    }

    let Some(mut contato) = state.contato_empresa_service.find_by_id(id).await? else {
        return Ok(Json(Response::empty(NO_RESULTS)));
    };

    if let Some(id_empresa) = payload.id_empresa {
        contato.id_empresa = id_empresa;
    }
    if let Some(tipo) = payload.tipo {
        contato.tipo = tipo;
    }
    if let Some(valor) = payload.contato {
        contato.contato = valor;
    }
    contato.atualizado = Some(Utc::now());

    state.contato_empresa_service.update(&contato).await?;

    Ok(Json(Response::with_data(1, UPDATE_SUCCESS, contato)))
}

/// DELETE /contato-empresa/:id
pub async fn delete_contato(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<()>>, ApiError> {
    state.contato_empresa_service.delete(id).await?;

    Ok(Json(Response::empty(DELETE_SUCCESS)))
}
