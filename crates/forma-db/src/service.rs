//! Service facade over one database.
//!
//! `FormaService` owns a shared [`FormaDb`] and exposes the two services
//! built on it: the schema registry (schema store) and the generic content
//! layer (document store).

use std::sync::Arc;

use forma_core::responses::BulkRegistrationReport;
use forma_schema::{SchemaRegistry, TypeRegistry};
use tracing::info;

use crate::FormaDb;
use crate::content::ContentService;
use crate::error::DatabaseError;

pub struct FormaService {
    db: Arc<FormaDb>,
    schemas: SchemaRegistry<FormaDb>,
    content: ContentService<FormaDb>,
}

impl FormaService {
    /// Create a service over a local database file (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str, types: TypeRegistry) -> Result<Self, DatabaseError> {
        let db = FormaDb::open_local(db_path).await?;
        Ok(Self::from_db(db, types))
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established.
    pub async fn new_remote(
        url: &str,
        auth_token: &str,
        types: TypeRegistry,
    ) -> Result<Self, DatabaseError> {
        let db = FormaDb::open_remote(url, auth_token).await?;
        Ok(Self::from_db(db, types))
    }

    /// Create from an existing `FormaDb`.
    #[must_use]
    pub fn from_db(db: FormaDb, types: TypeRegistry) -> Self {
        let db = Arc::new(db);
        Self {
            schemas: SchemaRegistry::new(Arc::clone(&db), Arc::new(types)),
            content: ContentService::new(Arc::clone(&db)),
            db,
        }
    }

    #[must_use]
    pub fn db(&self) -> &FormaDb {
        &self.db
    }

    #[must_use]
    pub const fn schemas(&self) -> &SchemaRegistry<FormaDb> {
        &self.schemas
    }

    #[must_use]
    pub const fn content(&self) -> &ContentService<FormaDb> {
        &self.content
    }

    /// Generate schemas for the configured startup types.
    pub async fn register_startup_types(&self, types: &[String]) -> BulkRegistrationReport {
        info!(count = types.len(), "registering startup schemas");
        self.schemas.register_types(types).await
    }
}
