use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{ContatoEmpresa, ContatoEmpresaFiltro},
    repositories::ContatoEmpresaRepository,
};

/// Pass-through between the contact handlers and the repository.
pub struct ContatoEmpresaService {
    repository: Arc<dyn ContatoEmpresaRepository + Send + Sync>,
}

impl ContatoEmpresaService {
    pub fn new(repository: Arc<dyn ContatoEmpresaRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, contato: ContatoEmpresa) -> Result<ContatoEmpresa, ApiError> {
        self.repository.create(contato).await
    }

    pub async fn find_all(
        &self,
        filtro: &ContatoEmpresaFiltro,
    ) -> Result<Vec<ContatoEmpresa>, ApiError> {
        self.repository.find_all(filtro).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContatoEmpresa>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn update(&self, contato: &ContatoEmpresa) -> Result<(), ApiError> {
        self.repository.update(contato).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repository.delete(id).await
    }
}
