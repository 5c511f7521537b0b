use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{Empresa, EmpresaFiltro},
    repositories::EmpresaRepository,
};

/// Pass-through between the company handlers and the repository.
pub struct EmpresaService {
    repository: Arc<dyn EmpresaRepository + Send + Sync>,
}

impl EmpresaService {
    pub fn new(repository: Arc<dyn EmpresaRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, empresa: Empresa) -> Result<Empresa, ApiError> {
        self.repository.create(empresa).await
    }

    pub async fn find_all(&self, filtro: &EmpresaFiltro) -> Result<Vec<Empresa>, ApiError> {
        self.repository.find_all(filtro).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Empresa>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn update(&self, empresa: &Empresa) -> Result<(), ApiError> {
        self.repository.update(empresa).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repository.delete(id).await
    }
}
