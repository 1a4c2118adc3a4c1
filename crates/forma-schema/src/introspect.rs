//! Schema introspection: derive a [`FieldMap`] from a [`StructDescriptor`].
//!
//! Each declared field is classified in priority order:
//!
//! 1. a 64-bit integer whose lowercase name contains `date`, `time`,
//!    `created`, `updated` or `expire` is a `Date` (epoch milliseconds);
//! 2. an enumeration is `Enum` with the enum's declared name;
//! 3. a sequence is `Array`, its element classified without a name;
//! 4. a primitive is `String`, `Number`, `Boolean` or `Date`;
//! 5. anything else is a nested `Object`.
//!
//! Every struct field also gets a reference inferred from its name alone
//! (see [`infer_reference`]). Array elements never carry a reference.

use forma_core::descriptor::{Primitive, StructDescriptor, TypeRef};
use forma_core::field_schema::{FieldKind, FieldMap, FieldSchema};

use crate::error::{IntrospectionStage, SchemaError};

const DATE_NAME_HINTS: [&str; 5] = ["date", "time", "created", "updated", "expire"];

/// Parse a struct descriptor into its field-schema map.
///
/// # Errors
///
/// Returns `SchemaError::Introspection` at stage `schema_generation` when the
/// type graph contains a struct reachable from itself.
pub fn parse(descriptor: &StructDescriptor) -> Result<FieldMap, SchemaError> {
    SchemaParser::new().parse(descriptor)
}

/// Infer the collection a field points at from its name.
///
/// `skinId` → `skin`, `rewardIds` → `reward`, `PurchaseProductId` →
/// `purchaseProduct`. The suffix match is case-sensitive, so `_id` yields
/// nothing. A field named exactly `Id` yields the empty string.
#[must_use]
pub fn infer_reference(field_name: &str) -> Option<String> {
    let stem = field_name
        .strip_suffix("Ids")
        .or_else(|| field_name.strip_suffix("Id"))?;
    Some(lower_first(stem))
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

fn is_date_like(field_name: &str) -> bool {
    let lower = field_name.to_lowercase();
    DATE_NAME_HINTS.iter().any(|hint| lower.contains(hint))
}

const fn primitive_kind(primitive: Primitive) -> FieldKind {
    match primitive {
        Primitive::String => FieldKind::String,
        Primitive::Integer | Primitive::Long | Primitive::Float => FieldKind::Number,
        Primitive::Boolean => FieldKind::Boolean,
        Primitive::Date => FieldKind::Date,
    }
}

/// Stateful parser that tracks the structs currently being expanded.
#[derive(Debug, Default)]
pub struct SchemaParser {
    stack: Vec<&'static str>,
}

impl SchemaParser {
    #[must_use]
    pub const fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Parse `descriptor`, recursing into nested structs.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Introspection` if a struct is reached again while
    /// it is still being expanded.
    pub fn parse(&mut self, descriptor: &StructDescriptor) -> Result<FieldMap, SchemaError> {
        if self.stack.contains(&descriptor.name) {
            let root = self.stack.first().copied().unwrap_or(descriptor.name);
            let mut path = self.stack.join(" -> ");
            path.push_str(" -> ");
            path.push_str(descriptor.name);
            return Err(SchemaError::Introspection {
                type_name: root.to_string(),
                stage: IntrospectionStage::SchemaGeneration,
                reason: format!("type cycle: {path}"),
            });
        }

        self.stack.push(descriptor.name);
        let result = self.parse_fields(descriptor);
        self.stack.pop();
        result
    }

    fn parse_fields(&mut self, descriptor: &StructDescriptor) -> Result<FieldMap, SchemaError> {
        let mut fields = FieldMap::with_capacity(descriptor.fields.len());
        for field in &descriptor.fields {
            let schema = self
                .classify_field(field.name, &field.ty)?
                .with_reference(infer_reference(field.name));
            fields.insert(field.name.to_string(), schema);
        }
        Ok(fields)
    }

    fn classify_field(&mut self, name: &str, ty: &TypeRef) -> Result<FieldSchema, SchemaError> {
        match ty {
            TypeRef::Primitive(Primitive::Long) if is_date_like(name) => {
                Ok(FieldSchema::primitive(FieldKind::Date))
            }
            TypeRef::Enum(e) => Ok(FieldSchema::enumeration(e.name)),
            TypeRef::Sequence(element) => Ok(FieldSchema::array(self.classify_element(element)?)),
            TypeRef::Primitive(p) => Ok(FieldSchema::primitive(primitive_kind(*p))),
            TypeRef::Struct(s) => Ok(FieldSchema::object(self.parse(&s.resolve())?)),
        }
    }

    fn classify_element(&mut self, ty: &TypeRef) -> Result<FieldSchema, SchemaError> {
        match ty {
            TypeRef::Enum(e) => Ok(FieldSchema::enumeration(e.name)),
            TypeRef::Sequence(inner) => Ok(FieldSchema::array(self.classify_element(inner)?)),
            TypeRef::Primitive(p) => Ok(FieldSchema::primitive(primitive_kind(*p))),
            TypeRef::Struct(s) => Ok(FieldSchema::object(self.parse(&s.resolve())?)),
        }
    }
}
