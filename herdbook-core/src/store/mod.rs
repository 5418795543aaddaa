//! The document-database contract.
//!
//! Documents live in named collections and are addressed by a string id.
//! Payloads are schema-free JSON objects; typed views are built on top by
//! the registry and the catalog.

mod memory;

pub use memory::MemoryStore;

use crate::error::StoreError;

/// A document payload.
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// A point-in-time read of one document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub id: String,
    data: Option<Fields>,
}

impl DocumentSnapshot {
    pub fn found(id: impl Into<String>, data: Fields) -> Self {
        Self {
            id: id.into(),
            data: Some(data),
        }
    }

    pub fn missing(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: None,
        }
    }

    pub fn exists(&self) -> bool {
        self.data.is_some()
    }

    /// The payload, or `None` when the document does not exist.
    pub fn data(&self) -> Option<&Fields> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<Fields> {
        self.data
    }
}

/// Key-addressed document storage.
///
/// Implementations must honour these semantics:
/// - `list` returns the collection's documents ordered by id.
/// - `get` never fails for a missing id; the snapshot reports `exists() == false`.
/// - `set` overwrites the whole document and creates it when absent.
/// - `update` merges top-level keys and fails with [`StoreError::Missing`]
///   when the document does not exist.
/// - `delete` succeeds whether or not the document exists.
#[allow(async_fn_in_trait)]
pub trait DocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<DocumentSnapshot>, StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<DocumentSnapshot, StoreError>;

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError>;

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError>;
}

/// Builds a one-field payload.
pub fn single_field(key: &str, value: impl Into<serde_json::Value>) -> Fields {
    let mut fields = Fields::new();
    fields.insert(key.to_string(), value.into());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_accessors() {
        let found = DocumentSnapshot::found("a", single_field("weight", "1"));
        assert!(found.exists());
        assert_eq!(found.data().unwrap()["weight"], "1");

        let missing = DocumentSnapshot::missing("b");
        assert!(!missing.exists());
        assert!(missing.data().is_none());
        assert!(missing.into_data().is_none());
    }
}
