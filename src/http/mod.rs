//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (middleware: request ID, trace, body limit)
//!     → route table: "/" → lookup_company, "/healthz" → health
//!     → handlers.rs (method check, body buffering, form parsing, CNPJ validation, store call)
//!     → response.rs (status code + JSON body)
//!     → Send to client
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use response::{ApiError, LookupResponse};
pub use server::{routes, AppState, HttpServer, HEALTH_PATH, LOOKUP_PATH};
