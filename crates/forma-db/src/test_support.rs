//! Shared test utilities for forma-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::sync::Arc;

    use forma_core::document::Document;
    use forma_schema::TypeRegistry;
    use serde_json::Value;

    use crate::FormaDb;
    use crate::content::ContentService;
    use crate::service::FormaService;

    /// In-memory database with migrations applied.
    pub async fn test_db() -> FormaDb {
        FormaDb::open_local(":memory:").await.unwrap()
    }

    /// Content service over a fresh in-memory database.
    pub async fn test_content() -> ContentService<FormaDb> {
        ContentService::new(Arc::new(test_db().await))
    }

    /// Facade over a fresh in-memory database with the built-in types.
    pub async fn test_service() -> FormaService {
        FormaService::from_db(test_db().await, TypeRegistry::builtin())
    }

    /// Unwrap a `json!` object literal into a `Document`.
    pub fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }
}
