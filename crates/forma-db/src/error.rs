//! Database error types for forma-db.

use forma_core::errors::CoreError;
use forma_schema::SchemaError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A caller-supplied identifier is not a 24-character hex string.
    #[error("Invalid ObjectId: {0}")]
    InvalidIdentifier(String),

    /// A collection name is blank or contains control characters.
    #[error("Invalid collection name: {0:?}")]
    InvalidCollection(String),

    /// Caller input failed a domain validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A stored JSON body could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<CoreError> for DatabaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidIdentifier(id) => Self::InvalidIdentifier(id),
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::Other(e) => Self::Other(e),
        }
    }
}

impl DatabaseError {
    /// Whether the failure is a violated `UNIQUE` constraint.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, Self::LibSql(e) if e.to_string().contains("UNIQUE constraint failed"))
    }
}

impl From<DatabaseError> for SchemaError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::Validation(msg) => Self::Validation(msg),
            other => Self::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_validation_stays_a_validation_error() {
        let err = DatabaseError::from(CoreError::Validation("Collection name is required".into()));
        assert!(matches!(&err, DatabaseError::Validation(msg) if msg.contains("Collection")));
        assert!(matches!(
            SchemaError::from(err),
            SchemaError::Validation(msg) if msg.contains("Collection")
        ));
    }

    #[test]
    fn core_invalid_identifier_maps_through() {
        let err = DatabaseError::from(CoreError::InvalidIdentifier("nope".into()));
        assert!(matches!(err, DatabaseError::InvalidIdentifier(id) if id == "nope"));
    }

    #[test]
    fn unique_violation_only_comes_from_libsql() {
        let query = DatabaseError::Query("UNIQUE constraint failed: model_schemas.collection".into());
        assert!(!query.is_unique_violation());
        assert!(!DatabaseError::NoResult.is_unique_violation());
    }

    #[tokio::test]
    async fn duplicate_key_insert_is_a_unique_violation() {
        let db = crate::FormaDb::open_local(":memory:").await.unwrap();
        let insert = "INSERT INTO documents (collection, id, body) VALUES ('c', 'x', '{}')";
        db.conn().execute(insert, ()).await.unwrap();
        let err: DatabaseError = db.conn().execute(insert, ()).await.unwrap_err().into();
        assert!(err.is_unique_violation(), "{err}");
    }

    #[test]
    fn other_failures_become_store_errors() {
        let err = SchemaError::from(DatabaseError::NoResult);
        assert!(matches!(err, SchemaError::Store(msg) if msg == "No result returned"));
    }
}
