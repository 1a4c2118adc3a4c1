//! API contracts: JSON Schemas for the payloads `forma` accepts and emits.
//!
//! Contracts are built from `forma-core` types with [`schemars::schema_for!`]
//! at construction time and validated with `jsonschema`. They are distinct
//! from the descriptive field schemas the registry stores per collection.

use std::collections::HashMap;

use schemars::schema_for;
use serde_json::Value;

use crate::error::SchemaError;

/// Name of the contract for schema registration payloads.
pub const REGISTER_SCHEMA_REQUEST: &str = "register_schema_request";

/// JSON Schemas by contract name.
pub struct ContractRegistry {
    contracts: HashMap<&'static str, Value>,
}

macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl ContractRegistry {
    #[must_use]
    pub fn new() -> Self {
        let mut contracts = HashMap::new();

        // --- Schema registry payloads ---
        register!(
            contracts,
            REGISTER_SCHEMA_REQUEST,
            forma_core::schema_record::RegisterSchemaRequest
        );
        register!(
            contracts,
            "schema_record",
            forma_core::schema_record::SchemaRecord
        );
        register!(
            contracts,
            "field_schema",
            forma_core::field_schema::FieldSchema
        );
        register!(
            contracts,
            "type_preview",
            forma_core::responses::TypePreview
        );
        register!(
            contracts,
            "bulk_registration_report",
            forma_core::responses::BulkRegistrationReport
        );

        // --- Domain models ---
        register!(contracts, "skin", forma_core::models::Skin);
        register!(
            contracts,
            "purchase_product",
            forma_core::models::PurchaseProduct
        );
        register!(contracts, "offer", forma_core::models::Offer);
        register!(contracts, "cascade", forma_core::models::Cascade);
        register!(contracts, "tile", forma_core::models::Tile);

        Self { contracts }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.contracts.get(name)
    }

    /// Validate a JSON value against a named contract.
    ///
    /// # Errors
    ///
    /// `SchemaError::ContractNotFound` for an unknown name,
    /// `SchemaError::ContractViolation` listing every validation error.
    pub fn validate(&self, name: &str, instance: &Value) -> Result<(), SchemaError> {
        let contract = self
            .get(name)
            .ok_or_else(|| SchemaError::ContractNotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(contract)
            .map_err(|e| SchemaError::Validation(format!("invalid contract {name}: {e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ContractViolation { errors })
        }
    }

    /// All contract names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.contracts.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

impl Default for ContractRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn registry_has_expected_contracts() {
        let reg = ContractRegistry::new();
        assert_eq!(reg.len(), 10);
        for name in ["register_schema_request", "schema_record", "skin", "tile"] {
            assert!(reg.get(name).is_some(), "missing contract {name}");
        }
    }

    #[test]
    fn list_is_sorted() {
        let names = ContractRegistry::new().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn valid_register_request_passes() {
        let reg = ContractRegistry::new();
        let payload = json!({
            "collection": "tile",
            "displayName": "Tile",
            "fields": {
                "name": { "type": "String" },
                "skinId": { "type": "Number", "reference": "skin" },
                "tags": { "type": "Array", "items": { "type": "String" } }
            }
        });
        assert!(reg.validate(REGISTER_SCHEMA_REQUEST, &payload).is_ok());
    }

    #[test]
    fn unknown_field_kind_is_a_violation() {
        let reg = ContractRegistry::new();
        let payload = json!({
            "collection": "tile",
            "displayName": "Tile",
            "fields": { "name": { "type": "Text" } }
        });
        let err = reg.validate(REGISTER_SCHEMA_REQUEST, &payload).unwrap_err();
        match err {
            SchemaError::ContractViolation { errors } => assert!(!errors.is_empty()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_display_name_is_a_violation() {
        let reg = ContractRegistry::new();
        let payload = json!({ "collection": "tile", "fields": {} });
        assert!(matches!(
            reg.validate(REGISTER_SCHEMA_REQUEST, &payload),
            Err(SchemaError::ContractViolation { .. })
        ));
    }

    #[test]
    fn unknown_contract_is_not_found() {
        let reg = ContractRegistry::new();
        assert!(matches!(
            reg.validate("bogus", &json!({})),
            Err(SchemaError::ContractNotFound(_))
        ));
    }
}
