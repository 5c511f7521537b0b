pub mod contato_empresa;
pub mod empresa;
pub mod endereco;
pub mod endereco_empresa;
pub mod emprego;
pub mod response;

pub use contato_empresa::{
    ContatoEmpresa, ContatoEmpresaCreate, ContatoEmpresaFiltro, ContatoEmpresaUpdate,
};
pub use empresa::{Empresa, EmpresaCreate, EmpresaFiltro, EmpresaUpdate};
pub use endereco::{Endereco, EnderecoCreate, EnderecoFiltro, EnderecoUpdate};
pub use endereco_empresa::{AssignRequest, EnderecoEmpresa};
pub use emprego::{Emprego, EmpregoCreate, EmpregoFiltro, EmpregoUpdate};
pub use response::Response;
