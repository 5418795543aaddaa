use herdbook_core::store::{DocumentSnapshot, DocumentStore, Fields};
use herdbook_core::StoreError;
use sqlx::SqlitePool;

/// A [`DocumentStore`] backed by the `documents` table.
///
/// Payloads are stored as JSON text.
#[derive(Clone)]
pub struct SqliteDocumentStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: String,
    data: String,
}

impl SqliteDocumentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn snapshot(collection: &str, row: DocumentRow) -> Result<DocumentSnapshot, StoreError> {
        let fields: Fields = serde_json::from_str(&row.data)
            .map_err(|e| StoreError::decode(collection, &row.id, e))?;
        Ok(DocumentSnapshot::found(row.id, fields))
    }

    fn encode(collection: &str, id: &str, fields: &Fields) -> Result<String, StoreError> {
        serde_json::to_string(fields).map_err(|e| StoreError::decode(collection, id, e))
    }
}

impl DocumentStore for SqliteDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<DocumentSnapshot>, StoreError> {
        let rows: Vec<DocumentRow> =
            sqlx::query_as("SELECT id, data FROM documents WHERE collection = ? ORDER BY id")
                .bind(collection)
                .fetch_all(&self.pool)
                .await
                .map_err(StoreError::backend)?;

        tracing::debug!("Listed {} document(s) in {}", rows.len(), collection);
        rows.into_iter()
            .map(|row| Self::snapshot(collection, row))
            .collect()
    }

    async fn get(&self, collection: &str, id: &str) -> Result<DocumentSnapshot, StoreError> {
        let row: Option<DocumentRow> =
            sqlx::query_as("SELECT id, data FROM documents WHERE collection = ? AND id = ?")
                .bind(collection)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::backend)?;

        tracing::debug!("Read {}/{} (exists: {})", collection, id, row.is_some());
        match row {
            Some(row) => Self::snapshot(collection, row),
            None => Ok(DocumentSnapshot::missing(id)),
        }
    }

    async fn set(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let data = Self::encode(collection, id, &fields)?;

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data)
            VALUES (?, ?, ?)
            ON CONFLICT (collection, id) DO UPDATE SET data = excluded.data
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(&data)
        .execute(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        tracing::debug!("Set {}/{}", collection, id);
        Ok(())
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(StoreError::backend)?;

        let row: Option<DocumentRow> =
            sqlx::query_as("SELECT id, data FROM documents WHERE collection = ? AND id = ?")
                .bind(collection)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(StoreError::backend)?;

        let Some(row) = row else {
            return Err(StoreError::Missing {
                collection: collection.to_string(),
                id: id.to_string(),
            });
        };

        let mut merged = Self::snapshot(collection, row)?
            .into_data()
            .unwrap_or_default();
        merged.extend(fields);
        let data = Self::encode(collection, id, &merged)?;

        sqlx::query("UPDATE documents SET data = ? WHERE collection = ? AND id = ?")
            .bind(&data)
            .bind(collection)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(StoreError::backend)?;

        tx.commit().await.map_err(StoreError::backend)?;

        tracing::debug!("Updated {}/{}", collection, id);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;

        tracing::debug!("Deleted {}/{}", collection, id);
        Ok(())
    }
}
