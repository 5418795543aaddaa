//! Error types shared by the registry, the catalog and document stores.

use std::fmt;

use thiserror::Error;

/// Errors raised by a [`DocumentStore`](crate::store::DocumentStore).
///
/// Anything the storage layer reports (connectivity, permissions, corrupt
/// payloads) ends up here. Callers treat it as a transport failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A partial update targeted a document that does not exist.
    #[error("Document {collection}/{id} does not exist")]
    Missing { collection: String, id: String },

    /// A stored payload could not be read as the expected shape.
    #[error("Invalid document {collection}/{id}: {reason}")]
    Decode {
        collection: String,
        id: String,
        reason: String,
    },

    /// The backing database failed.
    #[error("Database error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn decode(collection: &str, id: &str, reason: impl fmt::Display) -> Self {
        StoreError::Decode {
            collection: collection.to_string(),
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn backend(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(e))
    }
}

/// Errors from [`TypeRegistry`](crate::registry::TypeRegistry) operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Transport(#[from] StoreError),
}

/// A required input on the Beeste forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Number,
    Weight,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Number => write!(f, "number"),
            InputField::Weight => write!(f, "weight"),
        }
    }
}

/// Errors from [`RecordCatalog`](crate::catalog::RecordCatalog) operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A required input was empty; raised before any network call.
    #[error("No bees {field} was entered")]
    Validation { field: InputField },

    /// A record with this id already exists.
    #[error("Bees {id} already exists")]
    Conflict { id: String },

    /// The targeted record does not exist.
    #[error("Bees {id} does not exist!")]
    NotFound { id: String },

    #[error(transparent)]
    Transport(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_messages() {
        let err = CatalogError::Validation {
            field: InputField::Number,
        };
        assert_eq!(err.to_string(), "No bees number was entered");

        let err = CatalogError::Validation {
            field: InputField::Weight,
        };
        assert_eq!(err.to_string(), "No bees weight was entered");

        let err = CatalogError::Conflict { id: "7".into() };
        assert_eq!(err.to_string(), "Bees 7 already exists");

        let err = CatalogError::NotFound { id: "7".into() };
        assert_eq!(err.to_string(), "Bees 7 does not exist!");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: CatalogError = StoreError::Missing {
            collection: "Beeste".into(),
            id: "1".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Document Beeste/1 does not exist");
        assert!(matches!(err, CatalogError::Transport(_)));
    }
}
