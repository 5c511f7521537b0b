use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{Endereco, EnderecoFiltro},
    repositories::EnderecoRepository,
};

/// Pass-through between the address handlers and the repository.
pub struct EnderecoService {
    repository: Arc<dyn EnderecoRepository + Send + Sync>,
}

impl EnderecoService {
    pub fn new(repository: Arc<dyn EnderecoRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, endereco: Endereco) -> Result<Endereco, ApiError> {
        self.repository.create(endereco).await
    }

    pub async fn find_all(&self, filtro: &EnderecoFiltro) -> Result<Vec<Endereco>, ApiError> {
        self.repository.find_all(filtro).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Endereco>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn update(&self, endereco: &Endereco) -> Result<(), ApiError> {
        self.repository.update(endereco).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repository.delete(id).await
    }
}
