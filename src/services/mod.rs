pub mod contato_empresa_service;
pub mod empresa_service;
pub mod endereco_empresa_service;
pub mod endereco_service;
pub mod emprego_service;

pub use contato_empresa_service::ContatoEmpresaService;
pub use empresa_service::EmpresaService;
pub use endereco_empresa_service::EnderecoEmpresaService;
pub use endereco_service::EnderecoService;
pub use emprego_service::EmpregoService;
