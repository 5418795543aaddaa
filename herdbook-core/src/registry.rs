//! The animal-type list.
//!
//! The whole list lives in one configuration document as the `animalTypes`
//! array. Every mutation reads the array, computes a new one, writes it back
//! in full and then re-reads the canonical list. Two concurrent writers can
//! lose one another's change; the last write wins.

use serde_json::Value;

use crate::error::{RegistryError, StoreError};
use crate::models::AnimalType;
use crate::store::{single_field, DocumentSnapshot, DocumentStore};
use crate::text::camelize;

pub const ANIMAL_TYPE_COLLECTION: &str = "animalType";
pub const ANIMAL_TYPES_FIELD: &str = "animalTypes";

pub struct TypeRegistry<S> {
    store: S,
}

impl<S: DocumentStore> TypeRegistry<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The configuration document, if the collection holds one.
    ///
    /// Only the first document is ever read.
    async fn config_document(&self) -> Result<Option<DocumentSnapshot>, StoreError> {
        let docs = self.store.list(ANIMAL_TYPE_COLLECTION).await?;
        tracing::debug!(
            "Read {} document(s) from {}",
            docs.len(),
            ANIMAL_TYPE_COLLECTION
        );
        Ok(docs.into_iter().next())
    }

    /// Returns every animal type, or an empty list when there is no
    /// configuration document.
    pub async fn list_all(&self) -> Result<Vec<AnimalType>, RegistryError> {
        match self.config_document().await? {
            Some(doc) => Ok(animal_types(&doc)?),
            None => Ok(Vec::new()),
        }
    }

    /// Appends a new animal type unless one with the same normalized id
    /// already exists. Returns the resulting list.
    pub async fn add(&self, raw_name: &str) -> Result<Vec<AnimalType>, RegistryError> {
        let Some(doc) = self.config_document().await? else {
            tracing::warn!("No {} document; add skipped", ANIMAL_TYPE_COLLECTION);
            return Ok(Vec::new());
        };

        let mut types = animal_types(&doc)?;
        let id = camelize(raw_name);
        if types.iter().any(|t| t.id == id) {
            tracing::debug!("Animal type '{}' already present", id);
            return Ok(types);
        }

        types.push(AnimalType {
            id: id.clone(),
            name: raw_name.to_string(),
        });
        self.write(&doc.id, &types).await?;
        tracing::info!("Added animal type '{}'", id);

        self.list_all().await
    }

    /// Drops the entry with `id` (if any), writes the list back and returns
    /// the resulting list.
    pub async fn remove(&self, id: &str) -> Result<Vec<AnimalType>, RegistryError> {
        let Some(doc) = self.config_document().await? else {
            tracing::warn!("No {} document; remove skipped", ANIMAL_TYPE_COLLECTION);
            return Ok(Vec::new());
        };

        let types: Vec<AnimalType> = animal_types(&doc)?
            .into_iter()
            .filter(|t| t.id != id)
            .collect();
        self.write(&doc.id, &types).await?;
        tracing::info!("Removed animal type '{}'", id);

        self.list_all().await
    }

    async fn write(&self, doc_id: &str, types: &[AnimalType]) -> Result<(), StoreError> {
        let value = serde_json::to_value(types)
            .map_err(|e| StoreError::decode(ANIMAL_TYPE_COLLECTION, doc_id, e))?;
        self.store
            .set(
                ANIMAL_TYPE_COLLECTION,
                doc_id,
                single_field(ANIMAL_TYPES_FIELD, value),
            )
            .await
    }
}

/// Reads the `animalTypes` array; an absent field is an empty list.
fn animal_types(doc: &DocumentSnapshot) -> Result<Vec<AnimalType>, StoreError> {
    match doc.data().and_then(|data| data.get(ANIMAL_TYPES_FIELD)) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|e| StoreError::decode(ANIMAL_TYPE_COLLECTION, &doc.id, e)),
    }
}
