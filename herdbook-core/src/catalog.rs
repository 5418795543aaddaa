//! The Beeste record catalog.
//!
//! Each record is its own document in the `Beeste` collection, keyed by the
//! animal's number. Existence checks and the writes that follow them are two
//! separate round trips, so concurrent clients can race past the check.

use serde_json::Value;

use crate::error::{CatalogError, InputField, StoreError};
use crate::models::BeesRecord;
use crate::store::{single_field, DocumentSnapshot, DocumentStore};

pub const BEESTE_COLLECTION: &str = "Beeste";
const WEIGHT_FIELD: &str = "weight";

pub struct RecordCatalog<S> {
    store: S,
}

impl<S: DocumentStore> RecordCatalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Every record, sorted ascending by id using string comparison.
    pub async fn list_all(&self) -> Result<Vec<BeesRecord>, CatalogError> {
        let docs = self.store.list(BEESTE_COLLECTION).await?;
        tracing::debug!("Read {} document(s) from {}", docs.len(), BEESTE_COLLECTION);

        let mut records = docs
            .iter()
            .map(to_record)
            .collect::<Result<Vec<_>, _>>()?;
        records.sort_by(BeesRecord::cmp_by_id);
        Ok(records)
    }

    /// Creates a record. Fails if either input is empty or the id is taken.
    ///
    /// Both inputs are trimmed before they are checked and stored.
    pub async fn add(&self, id: &str, weight: &str) -> Result<(), CatalogError> {
        let id = require(id, InputField::Number)?;
        let weight = require(weight, InputField::Weight)?;

        let doc = self.store.get(BEESTE_COLLECTION, id).await?;
        if doc.exists() {
            tracing::warn!("Bees {} already exists", id);
            return Err(CatalogError::Conflict { id: id.to_string() });
        }

        self.store
            .set(BEESTE_COLLECTION, id, single_field(WEIGHT_FIELD, weight))
            .await?;
        tracing::info!("Created bees {} ({} KG)", id, weight);
        Ok(())
    }

    /// Replaces the weight of an existing record.
    pub async fn edit(&self, id: &str, weight: &str) -> Result<(), CatalogError> {
        let id = id.trim();
        let weight = require(weight, InputField::Weight)?;

        let doc = self.store.get(BEESTE_COLLECTION, id).await?;
        if !doc.exists() {
            tracing::warn!("Bees {} does not exist", id);
            return Err(CatalogError::NotFound { id: id.to_string() });
        }

        self.store
            .update(BEESTE_COLLECTION, id, single_field(WEIGHT_FIELD, weight))
            .await?;
        tracing::info!("Updated bees {} ({} KG)", id, weight);
        Ok(())
    }

    /// Deletes a record.
    ///
    /// A missing record is reported as `NotFound`, but only after the delete
    /// request has been issued anyway.
    pub async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        let id = id.trim();
        let doc = self.store.get(BEESTE_COLLECTION, id).await?;
        let missing = !doc.exists();
        if missing {
            tracing::warn!("Bees {} does not exist", id);
        }

        self.store.delete(BEESTE_COLLECTION, id).await?;

        if missing {
            return Err(CatalogError::NotFound { id: id.to_string() });
        }
        tracing::info!("Deleted bees {}", id);
        Ok(())
    }
}

/// Keeps records whose id contains `substring` (case-sensitive), sorted by
/// id. An empty substring returns the full list.
pub fn filter_records(records: &[BeesRecord], substring: &str) -> Vec<BeesRecord> {
    if substring.is_empty() {
        return records.to_vec();
    }

    let mut filtered: Vec<BeesRecord> = records
        .iter()
        .filter(|r| r.id.contains(substring))
        .cloned()
        .collect();
    filtered.sort_by(BeesRecord::cmp_by_id);
    filtered
}

/// The trimmed input, or a validation error when nothing is left.
fn require(value: &str, field: InputField) -> Result<&str, CatalogError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CatalogError::Validation { field });
    }
    Ok(value)
}

fn to_record(doc: &DocumentSnapshot) -> Result<BeesRecord, StoreError> {
    let weight = match doc.data().and_then(|data| data.get(WEIGHT_FIELD)) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        other => {
            return Err(StoreError::decode(
                BEESTE_COLLECTION,
                &doc.id,
                format!("expected a string weight, found {:?}", other),
            ))
        }
    };
    Ok(BeesRecord::new(doc.id.clone(), weight))
}
