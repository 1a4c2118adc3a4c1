//! Field-schema model: the inferred, serializable shape of one field.
//!
//! A `FieldSchema` is a recursive tree. Its JSON form is what API callers
//! and the admin frontend consume:
//!
//! ```json
//! { "type": "Array", "items": { "type": "Object", "fields": { ... } }, "reference": "step" }
//! ```

use std::fmt;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Field name → schema, in declaration order.
pub type FieldMap = IndexMap<String, FieldSchema>;

/// Classification of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Date,
    Enum,
    Object,
    Array,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::Enum => "Enum",
            Self::Object => "Object",
            Self::Array => "Array",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive shape of a single field.
///
/// `enum_name` is set only for `Enum`, `fields` only for `Object`, `items`
/// only for `Array`. `reference` is independent of the kind: a `Number`
/// field named `skinId` carries `reference = "skin"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldSchema {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enum_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<FieldSchema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl FieldSchema {
    /// A leaf field of a primitive kind (`String`, `Number`, `Boolean`, `Date`).
    #[must_use]
    pub const fn primitive(kind: FieldKind) -> Self {
        Self {
            kind,
            enum_name: None,
            fields: None,
            items: None,
            reference: None,
        }
    }

    #[must_use]
    pub fn enumeration(enum_name: impl Into<String>) -> Self {
        Self {
            enum_name: Some(enum_name.into()),
            ..Self::primitive(FieldKind::Enum)
        }
    }

    #[must_use]
    pub fn object(fields: FieldMap) -> Self {
        Self {
            fields: Some(fields),
            ..Self::primitive(FieldKind::Object)
        }
    }

    #[must_use]
    pub fn array(items: Self) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::primitive(FieldKind::Array)
        }
    }

    #[must_use]
    pub fn with_reference(mut self, reference: Option<String>) -> Self {
        self.reference = reference;
        self
    }

    /// Walk the tree and describe every place where the populated
    /// sub-structure disagrees with `kind`.
    ///
    /// Paths are dotted field names; array elements are written as `name[]`.
    /// An empty result means the tree is well-formed.
    #[must_use]
    pub fn check_shape(&self, path: &str) -> Vec<String> {
        let mut problems = Vec::new();
        self.collect_shape_problems(path, &mut problems);
        problems
    }

    fn collect_shape_problems(&self, path: &str, problems: &mut Vec<String>) {
        let is_enum = self.kind == FieldKind::Enum;
        let is_object = self.kind == FieldKind::Object;
        let is_array = self.kind == FieldKind::Array;

        if is_enum != self.enum_name.is_some() {
            problems.push(format!(
                "{path}: enumName must be set if and only if type is Enum (type is {})",
                self.kind
            ));
        }
        if is_object != self.fields.is_some() {
            problems.push(format!(
                "{path}: fields must be set if and only if type is Object (type is {})",
                self.kind
            ));
        }
        if is_array != self.items.is_some() {
            problems.push(format!(
                "{path}: items must be set if and only if type is Array (type is {})",
                self.kind
            ));
        }

        if let Some(fields) = &self.fields {
            check_field_map(fields, path, problems);
        }
        if let Some(items) = &self.items {
            items.collect_shape_problems(&format!("{path}[]"), problems);
        }
    }
}

/// Check every field of a map, prefixing paths with `prefix` (empty for the root).
#[must_use]
pub fn check_fields(fields: &FieldMap) -> Vec<String> {
    let mut problems = Vec::new();
    check_field_map(fields, "", &mut problems);
    problems
}

fn check_field_map(fields: &FieldMap, prefix: &str, problems: &mut Vec<String>) {
    for (name, schema) in fields {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        schema.collect_shape_problems(&path, problems);
    }
}
