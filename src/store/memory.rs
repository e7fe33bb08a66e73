//! In-memory company store.
//!
//! Backed by a `DashMap` keyed by canonical CNPJ. Useful for development,
//! small datasets and tests; can be seeded from a JSON array on disk.

use std::fs;
use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::cnpj;
use crate::company::Company;
use crate::store::{CompanyStore, StoreError};

/// Company store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    companies: DashMap<String, Company>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load records from a JSON file containing an array of companies.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref())?;
        let companies: Vec<Company> = serde_json::from_str(&content)?;

        let store = Self::new();
        for company in companies {
            store.insert(company);
        }
        Ok(store)
    }

    /// Insert or replace a record. The key is the unmasked `cnpj` field.
    pub fn insert(&self, company: Company) {
        let key = cnpj::unmask(&company.cnpj);
        self.companies.insert(key, company);
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn get_company(&self, cnpj: &str) -> Result<Company, StoreError> {
        self.companies
            .get(cnpj)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| StoreError::NotFound(cnpj.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn company(cnpj: &str, name: &str) -> Company {
        Company {
            cnpj: cnpj.to_string(),
            razao_social: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = MemoryStore::new();
        store.insert(company("19131243000197", "Open Knowledge Brasil"));

        let found = store.get_company("19131243000197").await.unwrap();
        assert_eq!(found.razao_social.as_deref(), Some("Open Knowledge Brasil"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_masked_records_are_keyed_canonically() {
        let store = MemoryStore::new();
        store.insert(company("19.131.243/0001-97", "Open Knowledge Brasil"));

        assert!(store.get_company("19131243000197").await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_record_is_not_found() {
        let store = MemoryStore::new();
        let err = store.get_company("00000000000191").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ref n) if n == "00000000000191"));
    }

    #[tokio::test]
    async fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"cnpj": "19131243000197", "razao_social": "Open Knowledge Brasil"}},
                {{"cnpj": "33000167000101", "razao_social": "Petrobras", "uf": "RJ"}}
            ]"#
        )
        .unwrap();

        let store = MemoryStore::from_json_file(file.path()).unwrap();
        assert_eq!(store.len(), 2);

        let petrobras = store.get_company("33000167000101").await.unwrap();
        assert_eq!(petrobras.uf.as_deref(), Some("RJ"));
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = MemoryStore::from_json_file(file.path()).unwrap_err();
        assert!(matches!(err, StoreError::Decode(_)));
    }
}
