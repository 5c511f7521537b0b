use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;

use crate::{
    error::ApiError,
    models::{Endereco, EnderecoCreate, EnderecoFiltro, EnderecoUpdate, Response},
    AppState,
};

use super::NO_RESULTS;

const CREATE_SUCCESS: &str = "Endereço cadastrado com sucesso.";
const LIST_SUCCESS: &str = "Consulta de endereços realizada com sucesso.";
const UPDATE_SUCCESS: &str = "Endereço atualizado com sucesso.";
const DELETE_SUCCESS: &str = "Endereço removido com sucesso.";

/// POST /endereco
pub async fn create_endereco(
    State(state): State<AppState>,
    Json(payload): Json<EnderecoCreate>,
) -> Result<Json<Response<Endereco>>, ApiError> {
    let endereco = Endereco {
        id: 0,
        logradouro: payload.logradouro,
        numero: payload.numero,
        complemento: payload.complemento,
        bairro: payload.bairro,
        cidade: payload.cidade,
        cep: payload.cep,
        estado: payload.estado,
        empresas: Vec::new(),
        criado: Utc::now(),
        atualizado: None,
        apagado: None,
    };

    let result = state.endereco_service.create(endereco).await?;

    Ok(Json(Response::with_data(1, CREATE_SUCCESS, result)))
}

/// GET /endereco
pub async fn list_enderecos(
    State(state): State<AppState>,
    Query(filtro): Query<EnderecoFiltro>,
) -> Result<Json<Response<Vec<Endereco>>>, ApiError> {
    let enderecos = state.endereco_service.find_all(&filtro).await?;

    if enderecos.is_empty() {
        return Ok(Json(Response::empty(NO_RESULTS)));
    }

    Ok(Json(Response::with_data(
        enderecos.len(),
        LIST_SUCCESS,
        enderecos,
    )))
}

/// GET /endereco/:id
pub async fn get_endereco(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<Endereco>>, ApiError> {
    match state.endereco_service.find_by_id(id).await? {
        Some(endereco) => Ok(Json(Response::with_data(1, LIST_SUCCESS, endereco))),
        None => Ok(Json(Response::empty(NO_RESULTS))),
    }
}

/// PUT /endereco/:id
pub async fn update_endereco(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EnderecoUpdate>,
) -> Result<Json<Response<Endereco>>, ApiError> {
    if id == 0 {
        return Err(ApiError::validation("id é obrigatório"));
    }

    let Some(mut endereco) = state.endereco_service.find_by_id(id).await? else {
        return Ok(Json(Response::empty(NO_RESULTS)));
    };

    if let Some(logradouro) = payload.logradouro {
        endereco.logradouro = logradouro;
    }
    if let Some(numero) = payload.numero {
        endereco.numero = numero;
    }
    if payload.complemento.is_some() {
        endereco.complemento = payload.complemento;
    }
    if let Some(bairro) = payload.bairro {
        endereco.bairro = bairro;
    }
    if let Some(cidade) = payload.cidade {
        endereco.cidade = cidade;
    }
    if let Some(cep) = payload.cep {
        endereco.cep = cep;
    }
    if let Some(estado) = payload.estado {
        endereco.estado = estado;
    }
    endereco.atualizado = Some(Utc::now());

    state.endereco_service.update(&endereco).await?;

    Ok(Json(Response::with_data(1, UPDATE_SUCCESS, endereco)))
}

/// DELETE /endereco/:id
pub async fn delete_endereco(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<()>>, ApiError> {
    state.endereco_service.delete(id).await?;

    Ok(Json(Response::empty(DELETE_SUCCESS)))
}
