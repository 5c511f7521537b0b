use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::ApiError,
    models::{AssignRequest, Empresa, Endereco, EnderecoEmpresa, Response},
    AppState,
};

use super::NO_RESULTS;

const ERROR_ASSIGN: &str = "Erro ao atribuir endereço à empresa.";
const ASSIGN_SUCCESS: &str = "Endereço atribuído à empresa com sucesso.";
const EMPRESAS_BY_ENDERECO_SUCCESS: &str =
    "Consulta de empresas por endereço realizada com sucesso.";
const ENDERECOS_BY_EMPRESA_SUCCESS: &str =
    "Consulta de endereços por empresa realizada com sucesso.";

/// POST /endereco-empresa/assign
///
/// Resolves both sides before inserting; an unresolvable reference answers
/// 500 with the failed lookup named, and nothing is written.
pub async fn assign(
    State(state): State<AppState>,
    Json(payload): Json<AssignRequest>,
) -> Result<(StatusCode, Json<Response<EnderecoEmpresa>>), ApiError> {
    if payload.id_empresa == 0 {
        return Err(ApiError::validation("id_empresa é obrigatório"));
    }
    if payload.id_endereco == 0 {
        return Err(ApiError::validation("id_endereco é obrigatório"));
    }

    let Some(empresa) = state
        .endereco_empresa_service
        .get_empresa(payload.id_empresa)
        .await?
    else {
        return Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Response::failure(
                ERROR_ASSIGN,
                vec![format!("Empresa {} não encontrada.", payload.id_empresa)],
            )),
        ));
    };

    let Some(endereco) = state
        .endereco_empresa_service
        .get_endereco(payload.id_endereco)
        .await?
    else {
        return Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(Response::failure(
                ERROR_ASSIGN,
                vec![format!("Endereço {} não encontrado.", payload.id_endereco)],
            )),
        ));
    };

    let resultado = state
        .endereco_empresa_service
        .assign(&empresa, &endereco)
        .await?;

    Ok((
        StatusCode::OK,
        Json(Response::with_data(1, ASSIGN_SUCCESS, resultado)),
    ))
}

/// GET /endereco-empresa/empresas-por-endereco/:id
pub async fn empresas_by_endereco(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<Vec<Empresa>>>, ApiError> {
    let empresas = state
        .endereco_empresa_service
        .empresas_by_endereco(id)
        .await?;

    if empresas.is_empty() {
        return Ok(Json(Response::empty(NO_RESULTS)));
    }

    Ok(Json(Response::with_data(
        empresas.len(),
        EMPRESAS_BY_ENDERECO_SUCCESS,
        empresas,
    )))
}

/// GET /endereco-empresa/enderecos-por-empresa/:id
pub async fn enderecos_by_empresa(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Response<Vec<Endereco>>>, ApiError> {
    let enderecos = state
        .endereco_empresa_service
        .enderecos_by_empresa(id)
        .await?;

    if enderecos.is_empty() {
        return Ok(Json(Response::empty(NO_RESULTS)));
    }

    Ok(Json(Response::with_data(
        enderecos.len(),
        ENDERECOS_BY_EMPRESA_SUCCESS,
        enderecos,
    )))
}
