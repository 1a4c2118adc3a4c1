//! Schema error types.

use std::fmt;

use forma_core::errors::CoreError;
use thiserror::Error;

/// Stage of schema work during which an introspection failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntrospectionStage {
    /// Resolving a type name to its descriptor. Unknown names fail earlier
    /// as [`SchemaError::TypeResolution`], so no introspection error is
    /// tagged with this stage today; it keeps the stage names stable for
    /// clients that match on them.
    ClassLoading,
    SchemaGeneration,
    ReferenceValidation,
}

impl IntrospectionStage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ClassLoading => "class_loading",
            Self::SchemaGeneration => "schema_generation",
            Self::ReferenceValidation => "reference_validation",
        }
    }
}

impl fmt::Display for IntrospectionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from type resolution, introspection and the schema registry.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The type name does not correspond to any registered type.
    #[error("Type not found: {type_name}")]
    TypeResolution { type_name: String },

    /// Walking a type's fields failed (malformed type graph).
    #[error("Introspection failed for {type_name} during {stage}: {reason}")]
    Introspection {
        type_name: String,
        stage: IntrospectionStage,
        reason: String,
    },

    /// `register` was called for a collection that already has a schema.
    #[error("Schema already exists for collection: {collection}")]
    DuplicateSchema { collection: String },

    /// A registration payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested API contract name was not found.
    #[error("Contract not found: {0}")]
    ContractNotFound(String),

    /// JSON value did not pass contract validation.
    #[error("Contract validation failed: {errors:?}")]
    ContractViolation {
        /// Individual error messages from the validator.
        errors: Vec<String>,
    },

    /// The schema store failed.
    #[error("Schema store error: {0}")]
    Store(String),
}

impl SchemaError {
    /// Re-tag an introspection failure with the stage of the caller.
    #[must_use]
    pub fn at_stage(self, stage: IntrospectionStage) -> Self {
        match self {
            Self::Introspection {
                type_name, reason, ..
            } => Self::Introspection {
                type_name,
                stage,
                reason,
            },
            other => other,
        }
    }
}

impl From<CoreError> for SchemaError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            other => Self::Store(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_renders_snake_case() {
        assert_eq!(IntrospectionStage::ClassLoading.to_string(), "class_loading");
        assert_eq!(
            IntrospectionStage::ReferenceValidation.as_str(),
            "reference_validation"
        );
    }

    #[test]
    fn at_stage_only_retags_introspection_errors() {
        let err = SchemaError::Introspection {
            type_name: "Node".into(),
            stage: IntrospectionStage::SchemaGeneration,
            reason: "cycle".into(),
        }
        .at_stage(IntrospectionStage::ReferenceValidation);
        assert!(matches!(
            err,
            SchemaError::Introspection {
                stage: IntrospectionStage::ReferenceValidation,
                ..
            }
        ));

        let err = SchemaError::TypeResolution {
            type_name: "X".into(),
        }
        .at_stage(IntrospectionStage::ReferenceValidation);
        assert!(matches!(err, SchemaError::TypeResolution { .. }));
    }
}
