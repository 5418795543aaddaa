//! In-process document store.

use std::collections::BTreeMap;
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::{DocumentSnapshot, DocumentStore, Fields};
use crate::error::StoreError;

type Collections = BTreeMap<String, BTreeMap<String, Fields>>;

/// A [`DocumentStore`] held entirely in memory.
///
/// Clones share the same data. The store counts every write request
/// (`set`, `update`, `delete`) and can be switched offline so that every
/// call fails the way an unreachable database would.
#[derive(Clone, Default)]
pub struct MemoryStore {
    collections: Arc<Mutex<Collections>>,
    writes: Arc<AtomicUsize>,
    offline: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of write requests issued so far, including failed ones.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn lock(&self) -> MutexGuard<'_, Collections> {
        self.collections
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::backend(io::Error::new(
                io::ErrorKind::NotConnected,
                "document store is offline",
            )));
        }
        Ok(())
    }

    fn record_write(&self) -> Result<(), StoreError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.check_online()
    }
}

impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str) -> Result<Vec<DocumentSnapshot>, StoreError> {
        self.check_online()?;
        let collections = self.lock();
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, data)| DocumentSnapshot::found(id.clone(), data.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<DocumentSnapshot, StoreError> {
        self.check_online()?;
        let collections = self.lock();
        Ok(
            match collections.get(collection).and_then(|docs| docs.get(id)) {
                Some(data) => DocumentSnapshot::found(id, data.clone()),
                None => DocumentSnapshot::missing(id),
            },
        )
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        self.record_write()?;
        self.lock()
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), fields);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        self.record_write()?;
        let mut collections = self.lock();
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::Missing {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        doc.extend(fields);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        self.record_write()?;
        if let Some(docs) = self.lock().get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::single_field;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_missing_document() {
        let store = MemoryStore::new();
        let snapshot = store.get("Beeste", "1").await.unwrap();
        assert!(!snapshot.exists());
        assert_eq!(snapshot.id, "1");
    }

    #[tokio::test]
    async fn test_set_creates_then_overwrites() {
        let store = MemoryStore::new();
        let mut fields = single_field("weight", "10");
        fields.insert("note".into(), json!("old"));
        store.set("Beeste", "1", fields).await.unwrap();

        store
            .set("Beeste", "1", single_field("weight", "11"))
            .await
            .unwrap();

        let snapshot = store.get("Beeste", "1").await.unwrap();
        let data = snapshot.data().unwrap();
        assert_eq!(data["weight"], "11");
        assert!(!data.contains_key("note"));
        assert_eq!(store.writes(), 2);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let store = MemoryStore::new();
        let mut fields = single_field("weight", "10");
        fields.insert("note".into(), json!("kept"));
        store.set("Beeste", "1", fields).await.unwrap();

        store
            .update("Beeste", "1", single_field("weight", "12"))
            .await
            .unwrap();

        let snapshot = store.get("Beeste", "1").await.unwrap();
        let data = snapshot.data().unwrap();
        assert_eq!(data["weight"], "12");
        assert_eq!(data["note"], "kept");
    }

    #[tokio::test]
    async fn test_update_missing_document_fails() {
        let store = MemoryStore::new();
        let result = store
            .update("Beeste", "nope", single_field("weight", "1"))
            .await;
        assert!(matches!(result, Err(StoreError::Missing { .. })));
    }

    #[tokio::test]
    async fn test_delete_missing_document_succeeds() {
        let store = MemoryStore::new();
        store.delete("Beeste", "nope").await.unwrap();
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = MemoryStore::new();
        for id in ["10", "2", "1"] {
            store
                .set("Beeste", id, single_field("weight", "1"))
                .await
                .unwrap();
        }
        let ids: Vec<String> = store
            .list("Beeste")
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["1", "10", "2"]);
        assert!(store.list("animalType").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_offline_store_fails_every_call() {
        let store = MemoryStore::new();
        store.set_offline(true);
        assert!(store.list("Beeste").await.is_err());
        assert!(store.get("Beeste", "1").await.is_err());
        assert!(store
            .set("Beeste", "1", single_field("weight", "1"))
            .await
            .is_err());

        store.set_offline(false);
        assert!(store.list("Beeste").await.unwrap().is_empty());
    }
}
