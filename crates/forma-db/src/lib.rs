//! # forma-db
//!
//! libSQL storage for Forma: the document store behind the generic content
//! layer and the schema store behind the schema registry.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29), locally or against a
//! remote libSQL server.

pub mod content;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod store;
mod test_support;

use error::DatabaseError;
use forma_core::ids::ObjectId;
use libsql::Builder;
use tracing::debug;

pub use content::ContentService;
pub use service::FormaService;
pub use store::DocumentStore;

/// Mints a 24-hex identifier: 8 hex chars of epoch seconds, then 8 random bytes.
const OBJECT_ID_SQL: &str =
    "SELECT printf('%08x', CAST(strftime('%s', 'now') AS INTEGER)) || lower(hex(randomblob(8)))";

/// Central database handle for documents and schema records.
pub struct FormaDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl FormaDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Creates missing parent directories and runs migrations.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        if path != ":memory:" {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        DatabaseError::Other(anyhow::anyhow!(
                            "creating {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }

        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        debug!(path, "opened local database");

        let forma_db = Self { db, conn };
        forma_db.run_migrations().await?;
        Ok(forma_db)
    }

    /// Open a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        debug!(url, "opened remote database");

        let forma_db = Self { db, conn };
        forma_db.run_migrations().await?;
        Ok(forma_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Mint a fresh document identifier in SQL.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_object_id(&self) -> Result<ObjectId, DatabaseError> {
        let mut rows = self.conn.query(OBJECT_ID_SQL, ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(ObjectId::parse(&row.get::<String>(0)?)?)
    }
}
