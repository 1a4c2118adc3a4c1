//! Document store contract consumed by [`ContentService`](crate::ContentService).

use forma_core::document::{Document, with_hex_id};
use forma_core::ids::ObjectId;

use crate::error::DatabaseError;

/// A stored record: native id plus body (the body never holds `_id`).
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: ObjectId,
    pub body: Document,
}

impl StoredDocument {
    /// Boundary form: `_id` rendered as hex, first, then the body fields.
    #[must_use]
    pub fn into_document(self) -> Document {
        with_hex_id(self.id, self.body)
    }
}

/// Collection-agnostic primitives over loosely typed records.
#[allow(async_fn_in_trait)]
pub trait DocumentStore: Send + Sync {
    /// All records of a collection, in insertion order.
    async fn find_all(&self, collection: &str) -> Result<Vec<StoredDocument>, DatabaseError>;

    async fn find_by_id(
        &self,
        collection: &str,
        id: ObjectId,
    ) -> Result<Option<StoredDocument>, DatabaseError>;

    /// Store a new record and return its assigned id.
    async fn insert(&self, collection: &str, body: Document) -> Result<ObjectId, DatabaseError>;

    /// Merge `fields` into the record at the top level. Returns whether a
    /// record matched.
    async fn update_by_id(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> Result<bool, DatabaseError>;

    /// Remove the record if present.
    async fn delete_by_id(&self, collection: &str, id: ObjectId) -> Result<(), DatabaseError>;
}
