//! Generic content access: CRUD against any collection named at runtime.
//!
//! Identifiers cross this boundary as 24-character hex strings. Every
//! id-taking operation validates the id before touching the store, and
//! documents come back with `_id` rendered as hex, first.

use std::sync::Arc;

use forma_core::document::{Document, with_hex_id, without_id};
use forma_core::ids::ObjectId;
use tracing::debug;

use crate::error::DatabaseError;
use crate::helpers::validate_collection;
use crate::store::DocumentStore;

/// Collection-agnostic CRUD over a [`DocumentStore`].
pub struct ContentService<S> {
    store: Arc<S>,
}

impl<S> Clone for ContentService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

fn parse_id(id: &str) -> Result<ObjectId, DatabaseError> {
    Ok(ObjectId::parse(id)?)
}

impl<S: DocumentStore> ContentService<S> {
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// `DatabaseError::InvalidCollection` for a blank name, or store failures.
    pub async fn find_all(&self, collection: &str) -> Result<Vec<Document>, DatabaseError> {
        validate_collection(collection)?;
        let docs = self.store.find_all(collection).await?;
        Ok(docs.into_iter().map(|d| d.into_document()).collect())
    }

    /// # Errors
    ///
    /// `DatabaseError::InvalidIdentifier` if `id` is not 24 hex characters
    /// (the store is not contacted), or store failures.
    pub async fn find_by_id(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, DatabaseError> {
        let id = parse_id(id)?;
        validate_collection(collection)?;
        let doc = self.store.find_by_id(collection, id).await?;
        Ok(doc.map(|d| d.into_document()))
    }

    /// Insert `fields` as a new record. Any `_id` in `fields` is ignored;
    /// identifiers are always assigned by the store.
    ///
    /// # Errors
    ///
    /// `DatabaseError::InvalidCollection`, or store failures.
    pub async fn insert(&self, collection: &str, fields: Document) -> Result<Document, DatabaseError> {
        validate_collection(collection)?;
        let body = without_id(fields);
        let id = self.store.insert(collection, body.clone()).await?;
        debug!(collection, id = %id, "created content");
        Ok(with_hex_id(id, body))
    }

    /// Merge `fields` into an existing record and return the result.
    ///
    /// `_id` in `fields` is stripped. Returns `None` when no record has the
    /// id, or when it disappears before the trailing read.
    ///
    /// # Errors
    ///
    /// `DatabaseError::InvalidIdentifier` before any store access, or store
    /// failures.
    pub async fn update(
        &self,
        collection: &str,
        id: &str,
        fields: Document,
    ) -> Result<Option<Document>, DatabaseError> {
        let id = parse_id(id)?;
        validate_collection(collection)?;

        let matched = self
            .store
            .update_by_id(collection, id, without_id(fields))
            .await?;
        debug!(collection, id = %id, matched, "updated content");

        let doc = self.store.find_by_id(collection, id).await?;
        Ok(doc.map(|d| d.into_document()))
    }

    /// Delete a record; succeeds whether or not it existed.
    ///
    /// # Errors
    ///
    /// `DatabaseError::InvalidIdentifier` before any store access, or store
    /// failures.
    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), DatabaseError> {
        let id = parse_id(id)?;
        validate_collection(collection)?;
        self.store.delete_by_id(collection, id).await?;
        debug!(collection, id = %id, "deleted content");
        Ok(())
    }
}
