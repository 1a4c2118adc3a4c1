//! Open document records.
//!
//! A `Document` is an insertion-ordered map from field name to an arbitrary
//! JSON value (string, number, boolean, null, nested record, sequence). The
//! only field with meaning outside the store is [`ID_FIELD`].

use serde_json::{Map, Value};

use crate::ids::ObjectId;

/// An open, ordered record of fields.
pub type Document = Map<String, Value>;

/// Name of the identifier field on every stored document.
pub const ID_FIELD: &str = "_id";

/// Build the boundary form of a stored document: `_id` first, rendered as
/// hex, followed by the body fields in stored order.
///
/// Any `_id` key inside `body` is replaced by the native identifier.
#[must_use]
pub fn with_hex_id(id: ObjectId, body: Document) -> Document {
    let mut doc = Document::with_capacity(body.len() + 1);
    doc.insert(ID_FIELD.to_string(), Value::String(id.to_hex()));
    for (key, value) in body {
        if key != ID_FIELD {
            doc.insert(key, value);
        }
    }
    doc
}

/// Remove the identifier field, returning the remaining fields.
#[must_use]
pub fn without_id(mut fields: Document) -> Document {
    fields.shift_remove(ID_FIELD);
    fields
}
