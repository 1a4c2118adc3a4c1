//! Persisted schema records and registration payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::field_schema::{FieldMap, check_fields};

/// A registered schema for one collection.
///
/// `collection` is the unique lowercase key. `id` is assigned by the schema
/// store and stays stable across regenerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchemaRecord {
    pub id: String,
    pub collection: String,
    pub display_name: String,
    pub fields: FieldMap,
}

/// What a schema store is asked to persist.
///
/// `id: None` inserts a new record; `Some(id)` replaces the record with that
/// id in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaRecordDraft {
    pub id: Option<String>,
    pub collection: String,
    pub display_name: String,
    pub fields: FieldMap,
}

impl SchemaRecordDraft {
    /// Attach a store-assigned id, producing the persisted record.
    #[must_use]
    pub fn into_record(self, id: String) -> SchemaRecord {
        SchemaRecord {
            id,
            collection: self.collection,
            display_name: self.display_name,
            fields: self.fields,
        }
    }
}

/// Explicit registration of a hand-written schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSchemaRequest {
    pub collection: String,
    pub display_name: String,
    pub fields: FieldMap,
}

impl RegisterSchemaRequest {
    /// Reject blank names and field trees whose populated parts disagree
    /// with their kind.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` listing every problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut problems = Vec::new();
        if self.collection.trim().is_empty() {
            problems.push("Collection name cannot be blank".to_string());
        }
        if self.display_name.trim().is_empty() {
            problems.push("Display name cannot be blank".to_string());
        }
        problems.extend(check_fields(&self.fields));

        if problems.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(problems.join("; ")))
        }
    }

    #[must_use]
    pub fn into_draft(self) -> SchemaRecordDraft {
        SchemaRecordDraft {
            id: None,
            collection: self.collection,
            display_name: self.display_name,
            fields: self.fields,
        }
    }
}
