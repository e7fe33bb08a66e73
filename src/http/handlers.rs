//! Route handlers.
//!
//! Both routes are registered for every method and enforce their own method
//! policy, so a HEAD request is rejected instead of being served by GET.
//!
//! The lookup body is buffered only after the method check, under the
//! router's `DefaultBodyLimit`, so every rejection stays a JSON error.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::{header, HeaderMap, Method, StatusCode},
};

use crate::cnpj::Cnpj;
use crate::http::response::{ApiError, LookupResponse};
use crate::http::server::AppState;
use crate::observability::metrics::{self, LookupOutcome};
use crate::store::StoreError;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
const CNPJ_FIELD: &str = "cnpj";

/// `POST /`: look up a company by CNPJ sent as a form field.
pub async fn lookup_company(
    State(state): State<AppState>,
    request: Request,
) -> Result<LookupResponse, ApiError> {
    if request.method() != Method::POST {
        return Err(ApiError::MethodNotAllowed(Method::POST));
    }

    let start = Instant::now();
    let headers = request.headers().clone();
    let body = match Bytes::from_request(request, &state).await {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable lookup body");
            metrics::record_lookup(LookupOutcome::Invalid, start);
            return Err(ApiError::InvalidContent);
        }
    };

    let raw = match extract_cnpj(&headers, &body) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected lookup request");
            metrics::record_lookup(LookupOutcome::Invalid, start);
            return Err(e);
        }
    };

    let cnpj: Cnpj = match raw.parse() {
        Ok(cnpj) => cnpj,
        Err(e) => {
            tracing::debug!(input = %raw, "Invalid CNPJ");
            metrics::record_lookup(LookupOutcome::Invalid, start);
            return Err(ApiError::from(e));
        }
    };

    match state.store.get_company(cnpj.as_str()).await {
        Ok(company) => {
            tracing::debug!(cnpj = %cnpj, "Company found");
            metrics::record_lookup(LookupOutcome::Found, start);
            Ok(LookupResponse::Found(Box::new(company)))
        }
        Err(StoreError::NotFound(_)) => {
            tracing::debug!(cnpj = %cnpj, "Company not found");
            metrics::record_lookup(LookupOutcome::NotFound, start);
            Ok(LookupResponse::NoContent)
        }
        Err(e) => {
            // Clients get the same 204 as for a missing record.
            tracing::warn!(cnpj = %cnpj, error = %e, "Company store failed");
            metrics::record_lookup(LookupOutcome::StoreError, start);
            Ok(LookupResponse::NoContent)
        }
    }
}

/// `GET /healthz`: liveness check.
pub async fn health(method: Method) -> Result<StatusCode, ApiError> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed(Method::GET));
    }
    Ok(StatusCode::OK)
}

/// Pull the raw `cnpj` value out of a form-encoded body.
fn extract_cnpj(headers: &HeaderMap, body: &[u8]) -> Result<String, ApiError> {
    if !is_form_encoded(headers) || body.is_empty() {
        return Err(ApiError::InvalidContent);
    }

    url::form_urlencoded::parse(body)
        .find(|(key, _)| key == CNPJ_FIELD)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
        .ok_or(ApiError::MissingCnpj)
}

/// True if `Content-Type` is form-urlencoded, ignoring parameters like charset.
fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case(FORM_URLENCODED))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn form_headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_content_type_parameters_are_ignored() {
        assert!(is_form_encoded(&form_headers(
            "application/x-www-form-urlencoded; charset=UTF-8"
        )));
        assert!(is_form_encoded(&form_headers(
            "Application/X-WWW-Form-Urlencoded"
        )));
        assert!(!is_form_encoded(&form_headers("application/json")));
        assert!(!is_form_encoded(&HeaderMap::new()));
    }

    #[test]
    fn test_extract_requires_form_body() {
        let headers = form_headers(FORM_URLENCODED);
        assert_eq!(extract_cnpj(&headers, b""), Err(ApiError::InvalidContent));
        assert_eq!(
            extract_cnpj(&form_headers("application/json"), br#"{"cnpj":"1"}"#),
            Err(ApiError::InvalidContent)
        );
    }

    #[test]
    fn test_extract_missing_or_empty_field() {
        let headers = form_headers(FORM_URLENCODED);
        assert_eq!(
            extract_cnpj(&headers, b"cpf=foobar"),
            Err(ApiError::MissingCnpj)
        );
        assert_eq!(extract_cnpj(&headers, b"cnpj="), Err(ApiError::MissingCnpj));
    }

    #[test]
    fn test_extract_decodes_and_takes_first_value() {
        let headers = form_headers(FORM_URLENCODED);
        assert_eq!(
            extract_cnpj(&headers, b"cnpj=19.131.243%2F0001-97&cnpj=other"),
            Ok("19.131.243/0001-97".to_string())
        );
        assert_eq!(
            extract_cnpj(&headers, b"x=1&cnpj=foo+bar"),
            Ok("foo bar".to_string())
        );
    }

    #[tokio::test]
    async fn test_health_method_policy() {
        assert_eq!(health(Method::GET).await, Ok(StatusCode::OK));
        assert_eq!(
            health(Method::HEAD).await,
            Err(ApiError::MethodNotAllowed(Method::GET))
        );
    }
}
