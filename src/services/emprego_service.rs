use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{Emprego, EmpregoFiltro},
    repositories::EmpregoRepository,
};

/// Pass-through between the job handlers and the repository.
pub struct EmpregoService {
    repository: Arc<dyn EmpregoRepository + Send + Sync>,
}

impl EmpregoService {
    pub fn new(repository: Arc<dyn EmpregoRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, emprego: Emprego) -> Result<Emprego, ApiError> {
        self.repository.create(emprego).await
    }

    pub async fn find_all(&self, filtro: &EmpregoFiltro) -> Result<Vec<Emprego>, ApiError> {
        self.repository.find_all(filtro).await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Emprego>, ApiError> {
        self.repository.find_by_id(id).await
    }

    pub async fn update(&self, emprego: &Emprego) -> Result<(), ApiError> {
        self.repository.update(emprego).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repository.delete(id).await
    }
}
