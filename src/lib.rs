//! CNPJ company lookup service library.

pub mod cnpj;
pub mod company;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use cnpj::Cnpj;
pub use company::Company;
pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use store::{CompanyStore, StoreError};
