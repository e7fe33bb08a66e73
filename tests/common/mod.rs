//! Shared utilities for integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use tower::ServiceExt;

use cnpj_lookup::cnpj;
use cnpj_lookup::http::routes;
use cnpj_lookup::{Company, CompanyStore, StoreError};

/// The one identifier the mock store knows about.
pub const KNOWN_CNPJ: &str = "19131243000197";

/// Store double: one canned record for `KNOWN_CNPJ`, a backend error otherwise.
#[derive(Default)]
pub struct MockStore {
    calls: AtomicUsize,
}

impl MockStore {
    /// Number of times the store was queried.
    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompanyStore for MockStore {
    async fn get_company(&self, n: &str) -> Result<Company, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if cnpj::unmask(n) == KNOWN_CNPJ {
            return Ok(Company {
                cnpj: KNOWN_CNPJ.to_string(),
                data_inicio_atividade: NaiveDate::from_ymd_opt(2013, 10, 3),
                ..Default::default()
            });
        }
        Err(StoreError::Unavailable("company not found".into()))
    }
}

/// Router over a fresh mock store.
pub fn app() -> Router {
    routes(Arc::new(MockStore::default()))
}

/// Golden response for `KNOWN_CNPJ`.
#[allow(dead_code)]
pub fn expected_company() -> serde_json::Value {
    serde_json::from_str(include_str!("../fixtures/response.json")).unwrap()
}

/// Captured response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    #[allow(dead_code)]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}

/// Send one request through `app` in-process.
///
/// `form` is url-encoded into the body with the form content type; `None`
/// sends an empty body. POST requests always carry the form content type.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    form: Option<&[(&str, &str)]>,
) -> TestResponse {
    let mut builder = Request::builder().method(method.clone()).uri(uri);
    if method == Method::POST {
        builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    }

    let body = match form {
        Some(fields) => Body::from(encode_form(fields)),
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub fn encode_form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}
