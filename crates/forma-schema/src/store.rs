//! Persistence contract for schema records.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use forma_core::ids::ObjectId;
use forma_core::schema_record::{SchemaRecord, SchemaRecordDraft};
use indexmap::IndexMap;
use tracing::debug;

use crate::error::SchemaError;

/// Storage for schema records, keyed uniquely by collection name.
#[allow(async_fn_in_trait)]
pub trait SchemaStore: Send + Sync {
    async fn find_by_collection(&self, collection: &str)
    -> Result<Option<SchemaRecord>, SchemaError>;

    async fn find_all(&self) -> Result<Vec<SchemaRecord>, SchemaError>;

    /// Insert (`draft.id == None`) or replace in place (`Some(id)`).
    ///
    /// Inserting a second record for an existing collection fails with
    /// `SchemaError::DuplicateSchema`.
    async fn save(&self, draft: SchemaRecordDraft) -> Result<SchemaRecord, SchemaError>;

    /// Remove the record for `collection`; no-op if there is none.
    async fn delete_by_collection(&self, collection: &str) -> Result<(), SchemaError>;
}

/// In-memory schema store (for tests and embedding).
#[derive(Debug, Default)]
pub struct InMemorySchemaStore {
    records: RwLock<IndexMap<String, SchemaRecord>>,
    counter: AtomicU64,
}

impl InMemorySchemaStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        let seconds = u32::try_from(chrono::Utc::now().timestamp()).unwrap_or(u32::MAX);
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&n.to_be_bytes());
        ObjectId::from_bytes(bytes).to_hex()
    }
}

fn lock_error(e: impl std::fmt::Display) -> SchemaError {
    SchemaError::Store(format!("Lock error: {e}"))
}

impl SchemaStore for InMemorySchemaStore {
    async fn find_by_collection(
        &self,
        collection: &str,
    ) -> Result<Option<SchemaRecord>, SchemaError> {
        let records = self.records.read().map_err(lock_error)?;
        Ok(records.get(collection).cloned())
    }

    async fn find_all(&self) -> Result<Vec<SchemaRecord>, SchemaError> {
        let records = self.records.read().map_err(lock_error)?;
        Ok(records.values().cloned().collect())
    }

    async fn save(&self, draft: SchemaRecordDraft) -> Result<SchemaRecord, SchemaError> {
        let mut records = self.records.write().map_err(lock_error)?;

        let record = match draft.id.clone() {
            Some(id) => {
                if records
                    .get(&draft.collection)
                    .is_some_and(|existing| existing.id != id)
                {
                    return Err(SchemaError::DuplicateSchema {
                        collection: draft.collection,
                    });
                }
                records.retain(|_, r| r.id != id);
                draft.into_record(id)
            }
            None => {
                if records.contains_key(&draft.collection) {
                    return Err(SchemaError::DuplicateSchema {
                        collection: draft.collection,
                    });
                }
                let id = self.next_id();
                draft.into_record(id)
            }
        };

        debug!(collection = %record.collection, id = %record.id, "stored schema record");
        records.insert(record.collection.clone(), record.clone());
        Ok(record)
    }

    async fn delete_by_collection(&self, collection: &str) -> Result<(), SchemaError> {
        let mut records = self.records.write().map_err(lock_error)?;
        records.shift_remove(collection);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use forma_core::field_schema::FieldMap;

    use super::*;

    fn draft(id: Option<&str>, collection: &str) -> SchemaRecordDraft {
        SchemaRecordDraft {
            id: id.map(str::to_string),
            collection: collection.into(),
            display_name: collection.to_uppercase(),
            fields: FieldMap::new(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_distinct_hex_ids() {
        let store = InMemorySchemaStore::new();
        let a = store.save(draft(None, "a")).await.unwrap();
        let b = store.save(draft(None, "b")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(ObjectId::is_valid(&a.id));
        assert_eq!(store.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn second_insert_for_collection_is_duplicate() {
        let store = InMemorySchemaStore::new();
        store.save(draft(None, "skin")).await.unwrap();
        let err = store.save(draft(None, "skin")).await.unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateSchema { collection } if collection == "skin"));
    }

    #[tokio::test]
    async fn save_with_id_replaces_in_place() {
        let store = InMemorySchemaStore::new();
        let first = store.save(draft(None, "skin")).await.unwrap();
        let mut replacement = draft(Some(&first.id), "skin");
        replacement.display_name = "Skin".into();
        let saved = store.save(replacement).await.unwrap();

        assert_eq!(saved.id, first.id);
        let all = store.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].display_name, "Skin");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemorySchemaStore::new();
        store.save(draft(None, "tile")).await.unwrap();
        store.delete_by_collection("tile").await.unwrap();
        store.delete_by_collection("tile").await.unwrap();
        assert!(store.find_by_collection("tile").await.unwrap().is_none());
    }
}
