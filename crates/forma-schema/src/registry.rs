//! Schema registry service: registration, generation from descriptors, lookup,
//! deletion and reference validation.

use std::sync::Arc;

use forma_core::responses::{
    BulkRegistrationReport, ReferenceReport, RegisteredType, RegistrationFailure, TypePreview,
};
use forma_core::schema_record::{RegisterSchemaRequest, SchemaRecord, SchemaRecordDraft};
use tracing::{debug, info, warn};

use crate::error::{IntrospectionStage, SchemaError};
use crate::introspect;
use crate::store::SchemaStore;
use crate::types::TypeRegistry;

/// Schema registry over a [`SchemaStore`] and a [`TypeRegistry`].
pub struct SchemaRegistry<S> {
    store: Arc<S>,
    types: Arc<TypeRegistry>,
}

impl<S> Clone for SchemaRegistry<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            types: Arc::clone(&self.types),
        }
    }
}

impl<S: SchemaStore> SchemaRegistry<S> {
    pub const fn new(store: Arc<S>, types: Arc<TypeRegistry>) -> Self {
        Self { store, types }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Store a hand-written schema for a new collection.
    ///
    /// # Errors
    ///
    /// `SchemaError::Validation` for a malformed request,
    /// `SchemaError::DuplicateSchema` if the collection already has a schema.
    pub async fn register(&self, request: RegisterSchemaRequest) -> Result<SchemaRecord, SchemaError> {
        request.validate()?;

        if self
            .store
            .find_by_collection(&request.collection)
            .await?
            .is_some()
        {
            return Err(SchemaError::DuplicateSchema {
                collection: request.collection,
            });
        }

        let record = self.store.save(request.into_draft()).await?;
        info!(collection = %record.collection, id = %record.id, "registered schema");
        Ok(record)
    }

    /// Introspect a registered type and upsert its schema.
    ///
    /// The collection is the lowercased type name; an existing record for
    /// that collection keeps its id.
    ///
    /// # Errors
    ///
    /// `SchemaError::TypeResolution` for an unknown type,
    /// `SchemaError::Introspection` if its type graph cannot be parsed.
    pub async fn generate_from_type(&self, type_name: &str) -> Result<SchemaRecord, SchemaError> {
        info!(type_name, "generating schema");

        let descriptor = self.types.resolve(type_name)?;
        let fields = introspect::parse(&descriptor)
            .map_err(|e| e.at_stage(IntrospectionStage::SchemaGeneration))?;
        debug!(type_name, fields = fields.len(), "parsed type");

        let collection = type_name.to_lowercase();
        let existing = self.store.find_by_collection(&collection).await?;
        debug!(collection = %collection, existing = existing.is_some(), "looked up existing schema");

        let record = self
            .store
            .save(SchemaRecordDraft {
                id: existing.map(|r| r.id),
                collection,
                display_name: type_name.to_string(),
                fields,
            })
            .await?;

        info!(collection = %record.collection, id = %record.id, "saved generated schema");
        Ok(record)
    }

    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn get_schema(&self, collection: &str) -> Result<Option<SchemaRecord>, SchemaError> {
        self.store.find_by_collection(collection).await
    }

    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn get_all_schemas(&self) -> Result<Vec<SchemaRecord>, SchemaError> {
        self.store.find_all().await
    }

    /// Remove the schema for `collection`; succeeds when none exists.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn delete_by_collection(&self, collection: &str) -> Result<(), SchemaError> {
        self.store.delete_by_collection(collection).await?;
        info!(collection, "deleted schema");
        Ok(())
    }

    /// Check every top-level field reference of a type against the
    /// registered collections. Only fields with issues are reported.
    ///
    /// # Errors
    ///
    /// `SchemaError::TypeResolution` for an unknown type,
    /// `SchemaError::Introspection` at stage `reference_validation` if the
    /// type cannot be parsed.
    pub async fn validate_references(&self, type_name: &str) -> Result<ReferenceReport, SchemaError> {
        let descriptor = self.types.resolve(type_name)?;
        let fields = introspect::parse(&descriptor)
            .map_err(|e| e.at_stage(IntrospectionStage::ReferenceValidation))?;

        let mut report = ReferenceReport::new();
        for (name, field) in &fields {
            let Some(reference) = &field.reference else {
                continue;
            };
            if self.store.find_by_collection(reference).await?.is_none() {
                report.insert(
                    name.clone(),
                    vec![format!("Referenced collection '{reference}' does not exist")],
                );
            }
        }

        debug!(type_name, issues = report.len(), "validated references");
        Ok(report)
    }

    /// Generate schemas for each type in order, continuing past failures.
    pub async fn register_types<I, T>(&self, type_names: I) -> BulkRegistrationReport
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut report = BulkRegistrationReport::default();

        for type_name in type_names {
            let type_name = type_name.as_ref().trim();
            report.total += 1;
            match self.generate_from_type(type_name).await {
                Ok(record) => report.registered.push(RegisteredType {
                    type_name: type_name.to_string(),
                    collection: record.collection,
                    id: record.id,
                }),
                Err(e) => {
                    warn!(type_name, error = %e, "schema registration failed");
                    report.failures.push(RegistrationFailure {
                        type_name: type_name.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            "schema registration completed: {}/{} types registered",
            report.succeeded(),
            report.total
        );
        report
    }

    /// Names of all types that can be generated, sorted.
    #[must_use]
    pub fn available_types(&self) -> Vec<&'static str> {
        self.types.names()
    }

    /// Introspect a type without persisting anything.
    ///
    /// # Errors
    ///
    /// Same as [`generate_from_type`](Self::generate_from_type), without
    /// store failures.
    pub fn preview(&self, type_name: &str) -> Result<TypePreview, SchemaError> {
        let descriptor = self.types.resolve(type_name)?;
        let fields = introspect::parse(&descriptor)?;
        Ok(TypePreview {
            type_name: descriptor.name.to_string(),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use forma_core::describe_struct;
    use forma_core::field_schema::{FieldKind, FieldMap, FieldSchema};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::InMemorySchemaStore;

    #[allow(dead_code)]
    struct Promotion;
    describe_struct!(Promotion { "name" => String, "offerId" => String, "priority" => i32 });

    #[allow(dead_code)]
    struct Loop;
    describe_struct!(Loop { "next" => Option<Box<Loop>> });

    fn registry() -> SchemaRegistry<InMemorySchemaStore> {
        let mut types = TypeRegistry::builtin();
        types.register::<Promotion>().register::<Loop>();
        SchemaRegistry::new(Arc::new(InMemorySchemaStore::new()), Arc::new(types))
    }

    fn request(collection: &str) -> RegisterSchemaRequest {
        let mut fields = FieldMap::new();
        fields.insert("name".into(), FieldSchema::primitive(FieldKind::String));
        RegisterSchemaRequest {
            collection: collection.into(),
            display_name: "Offer".into(),
            fields,
        }
    }

    #[tokio::test]
    async fn register_then_get() {
        let reg = registry();
        let saved = reg.register(request("offer")).await.unwrap();
        let fetched = reg.get_schema("offer").await.unwrap().unwrap();
        assert_eq!(saved, fetched);
        assert_eq!(fetched.display_name, "Offer");
    }

    #[tokio::test]
    async fn register_twice_is_duplicate() {
        let reg = registry();
        reg.register(request("offer")).await.unwrap();
        let err = reg.register(request("offer")).await.unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateSchema { collection } if collection == "offer"));
        assert_eq!(reg.get_all_schemas().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn register_rejects_blank_collection() {
        let reg = registry();
        let err = reg.register(request("  ")).await.unwrap_err();
        assert!(matches!(err, SchemaError::Validation(msg) if msg.contains("Collection name")));
    }

    #[tokio::test]
    async fn generation_is_idempotent_and_keeps_id() {
        let reg = registry();
        let first = reg.generate_from_type("Skin").await.unwrap();
        let second = reg.generate_from_type("Skin").await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.collection, "skin");
        assert_eq!(second.display_name, "Skin");
        assert_eq!(second.fields["createdDate"].kind, FieldKind::Date);
        assert_eq!(reg.get_all_schemas().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn generation_overwrites_registered_schema_in_place() {
        let reg = registry();
        let manual = reg.register(request("offer")).await.unwrap();
        let generated = reg.generate_from_type("Offer").await.unwrap();
        assert_eq!(generated.id, manual.id);
        assert!(generated.fields.contains_key("purchaseProductId"));
    }

    #[tokio::test]
    async fn unknown_type_is_resolution_error() {
        let reg = registry();
        let err = reg.generate_from_type("Nope").await.unwrap_err();
        assert!(matches!(err, SchemaError::TypeResolution { type_name } if type_name == "Nope"));
        assert!(reg.get_all_schemas().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn cyclic_type_fails_at_the_caller_stage() {
        let reg = registry();
        let err = reg.generate_from_type("Loop").await.unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Introspection {
                stage: IntrospectionStage::SchemaGeneration,
                ..
            }
        ));

        let err = reg.validate_references("Loop").await.unwrap_err();
        assert!(matches!(
            err,
            SchemaError::Introspection {
                stage: IntrospectionStage::ReferenceValidation,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn validate_references_reports_missing_collection_until_registered() {
        let reg = registry();

        let report = reg.validate_references("Promotion").await.unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(
            report["offerId"],
            vec!["Referenced collection 'offer' does not exist".to_string()]
        );

        reg.generate_from_type("Offer").await.unwrap();
        let report = reg.validate_references("Promotion").await.unwrap();
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let reg = registry();
        reg.generate_from_type("Tile").await.unwrap();
        reg.delete_by_collection("tile").await.unwrap();
        reg.delete_by_collection("tile").await.unwrap();
        assert!(reg.get_schema("tile").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn bulk_registration_continues_past_failures() {
        let reg = registry();
        let report = reg
            .register_types(["Skin", "Missing", " Tile ", "Loop"])
            .await;

        assert_eq!(report.total, 4);
        assert_eq!(report.succeeded(), 2);
        assert!(!report.is_complete());
        let registered: Vec<_> = report.registered.iter().map(|r| r.collection.as_str()).collect();
        assert_eq!(registered, vec!["skin", "tile"]);
        let failed: Vec<_> = report.failures.iter().map(|f| f.type_name.as_str()).collect();
        assert_eq!(failed, vec!["Missing", "Loop"]);
    }

    #[test]
    fn preview_does_not_need_the_store() {
        let reg = registry();
        let preview = reg.preview("Offer").unwrap();
        assert_eq!(preview.type_name, "Offer");
        assert_eq!(
            preview.fields["purchaseProductId"].reference.as_deref(),
            Some("purchaseProduct")
        );
        assert!(reg.available_types().contains(&"Promotion"));
    }
}
