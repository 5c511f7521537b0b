pub mod contato_empresa_repo;
pub mod empresa_repo;
pub mod endereco_empresa_repo;
pub mod endereco_repo;
pub mod emprego_repo;
pub mod filter;

pub use contato_empresa_repo::ContatoEmpresaRepository;
pub use empresa_repo::EmpresaRepository;
pub use endereco_empresa_repo::EnderecoEmpresaRepository;
pub use endereco_repo::EnderecoRepository;
pub use emprego_repo::EmpregoRepository;

// Fixed category messages attached to every data-access failure.
pub(crate) const ERRO_INSERT: &str = "erro ao inserir registro";
pub(crate) const ERRO_SELECT: &str = "erro ao realizar consulta";
pub(crate) const ERRO_SELECT_SCAN: &str = "erro ao associar valores da consulta";
pub(crate) const ERRO_UPDATE: &str = "erro ao atualizar registro";
pub(crate) const ERRO_DELETE: &str = "erro ao apagar registro";

/// Log a SELECT failure under the right category: row-decode failures are
/// scan errors, everything else is a query error. The error itself is
/// returned to the caller unchanged.
pub(crate) fn log_select_error(err: &sqlx::Error) {
    match err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_) => {
            tracing::error!(error = %err, "{}", ERRO_SELECT_SCAN);
        }
        _ => tracing::error!(error = %err, "{}", ERRO_SELECT),
    }
}
