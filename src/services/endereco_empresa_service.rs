use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{Empresa, Endereco, EnderecoEmpresa},
    repositories::{EmpresaRepository, EnderecoEmpresaRepository, EnderecoRepository},
};

/// Pass-through for the company–address association, plus lookups of either
/// side by id so the handler can resolve both ends before assigning.
pub struct EnderecoEmpresaService {
    repository: Arc<dyn EnderecoEmpresaRepository + Send + Sync>,
    empresa_repository: Arc<dyn EmpresaRepository + Send + Sync>,
    endereco_repository: Arc<dyn EnderecoRepository + Send + Sync>,
}

impl EnderecoEmpresaService {
    pub fn new(
        repository: Arc<dyn EnderecoEmpresaRepository + Send + Sync>,
        empresa_repository: Arc<dyn EmpresaRepository + Send + Sync>,
        endereco_repository: Arc<dyn EnderecoRepository + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            empresa_repository,
            endereco_repository,
        }
    }

    pub async fn assign(
        &self,
        empresa: &Empresa,
        endereco: &Endereco,
    ) -> Result<EnderecoEmpresa, ApiError> {
        self.repository.assign(empresa, endereco).await
    }

    pub async fn empresas_by_endereco(&self, id_endereco: i64) -> Result<Vec<Empresa>, ApiError> {
        self.repository.empresas_by_endereco(id_endereco).await
    }

    pub async fn enderecos_by_empresa(&self, id_empresa: i64) -> Result<Vec<Endereco>, ApiError> {
        self.repository.enderecos_by_empresa(id_empresa).await
    }

    pub async fn get_empresa(&self, id_empresa: i64) -> Result<Option<Empresa>, ApiError> {
        self.empresa_repository.find_by_id(id_empresa).await
    }

    pub async fn get_endereco(&self, id_endereco: i64) -> Result<Option<Endereco>, ApiError> {
        self.endereco_repository.find_by_id(id_endereco).await
    }
}
