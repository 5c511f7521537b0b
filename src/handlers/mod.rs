pub mod contato_empresa_handlers;
pub mod empresa_handlers;
pub mod endereco_empresa_handlers;
pub mod endereco_handlers;
pub mod emprego_handlers;
pub mod health_handlers;

pub use health_handlers::health_check;

/// Message returned whenever a lookup matches no live rows. Applied uniformly
/// across every resource.
pub const NO_RESULTS: &str = "Nenhum resultado encontrado para os parâmetros informados.";
