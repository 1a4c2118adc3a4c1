//! Report types returned by schema operations and printed by `forma` commands.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::field_schema::FieldMap;

/// Field name → reference issues. Only fields with at least one issue appear.
pub type ReferenceReport = IndexMap<String, Vec<String>>;

/// Introspection result for a type, without persisting anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypePreview {
    pub type_name: String,
    pub fields: FieldMap,
}

/// A type whose schema was generated and stored during a bulk run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredType {
    pub type_name: String,
    pub collection: String,
    pub id: String,
}

/// A type that failed during a bulk run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationFailure {
    pub type_name: String,
    pub error: String,
}

/// Outcome of registering a list of types, one entry per input in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BulkRegistrationReport {
    pub total: usize,
    pub registered: Vec<RegisteredType>,
    pub failures: Vec<RegistrationFailure>,
}

impl BulkRegistrationReport {
    #[must_use]
    pub const fn succeeded(&self) -> usize {
        self.registered.len()
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
