use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ApiError {
    /// Create a new validation error
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ApiError::Database(ref err) => {
                tracing::error!(error = %err, "database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro ao acessar o banco de dados.",
                    err.to_string(),
                )
            }
            ApiError::Migration(ref err) => {
                tracing::error!(error = %err, "database migration error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Erro ao executar migrações do banco de dados.",
                    err.to_string(),
                )
            }
            ApiError::Validation(ref msg) => {
                tracing::warn!(error = %msg, "validation error occurred");
                (StatusCode::BAD_REQUEST, "Requisição inválida.", msg.clone())
            }
        };

        let body = Json(models::Response::<()>::failure(message, vec![detail]));

        (status, body).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;
