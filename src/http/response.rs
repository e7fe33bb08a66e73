//! Response rendering.
//!
//! # Responsibilities
//! - Map lookup outcomes to status codes and JSON bodies
//! - Keep `Content-Type: application/json` on every lookup response,
//!   including the empty 204
//! - Render every client error as `{"message": "..."}` with user-facing text
//!
//! # Design Decisions
//! - Error text lives in the `#[error]` attributes so logs and bodies agree
//! - Store failures never reach this module as errors; they arrive as `NoContent`

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::cnpj::InvalidCnpj;
use crate::company::Company;

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Request errors surfaced to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The route only accepts the given method.
    #[error("Essa URL aceita apenas o método {0}.")]
    MethodNotAllowed(Method),

    /// Missing or non form-encoded body.
    #[error("Conteúdo inválido na requisição POST.")]
    InvalidContent,

    #[error("CNPJ não enviado na requisição POST.")]
    MissingCnpj,

    /// Carries the value exactly as the client sent it.
    #[error("CNPJ {0} inválido.")]
    InvalidCnpj(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidContent | ApiError::MissingCnpj | ApiError::InvalidCnpj(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl From<InvalidCnpj> for ApiError {
    fn from(err: InvalidCnpj) -> Self {
        ApiError::InvalidCnpj(err.input)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

/// Successful lookup outcomes.
#[derive(Debug)]
pub enum LookupResponse {
    /// 200 with the record as JSON.
    Found(Box<Company>),
    /// 204; covers both a missing record and a failing store.
    NoContent,
}

impl IntoResponse for LookupResponse {
    fn into_response(self) -> Response {
        match self {
            LookupResponse::Found(company) => (StatusCode::OK, Json(company)).into_response(),
            LookupResponse::NoContent => (
                StatusCode::NO_CONTENT,
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                )],
            )
                .into_response(),
        }
    }
}
