//! Row-to-value parsing helpers shared by the repos.
//!
//! Both tables keep their structured payloads (document bodies, field-schema
//! maps) as JSON text. These helpers isolate encoding, decoding and the
//! top-level merge used by partial updates.

use forma_core::document::Document;
use serde_json::Value;

use crate::error::DatabaseError;

/// Decode a JSON text column that must hold an object.
///
/// # Errors
///
/// Returns `DatabaseError::Serialization` for invalid JSON and
/// `DatabaseError::Query` if the JSON is not an object.
pub fn parse_document(s: &str) -> Result<Document, DatabaseError> {
    match serde_json::from_str::<Value>(s)? {
        Value::Object(map) => Ok(map),
        other => Err(DatabaseError::Query(format!(
            "Expected a JSON object in column, found {}",
            json_kind(&other)
        ))),
    }
}

/// Encode a document body as JSON text.
///
/// # Errors
///
/// Returns `DatabaseError::Serialization` if encoding fails.
pub fn encode_document(body: &Document) -> Result<String, DatabaseError> {
    Ok(serde_json::to_string(body)?)
}

/// Apply `fields` over `body` at the top level, `$set`-style.
///
/// Existing keys keep their position; new keys are appended. Nested objects
/// are replaced wholesale, not merged.
pub fn merge_fields(body: &mut Document, fields: Document) {
    for (key, value) in fields {
        body.insert(key, value);
    }
}

/// Check a runtime collection name: non-blank, no control characters.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidCollection` otherwise.
pub fn validate_collection(collection: &str) -> Result<(), DatabaseError> {
    if collection.trim().is_empty() || collection.chars().any(char::is_control) {
        return Err(DatabaseError::InvalidCollection(collection.to_string()));
    }
    Ok(())
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn merge_keeps_untouched_fields_and_order() {
        let mut body = doc(json!({ "a": 0, "b": 2, "nested": { "x": 1, "y": 2 } }));
        merge_fields(&mut body, doc(json!({ "a": 1, "c": 3, "nested": { "x": 9 } })));
        assert_eq!(
            Value::Object(body.clone()),
            json!({ "a": 1, "b": 2, "nested": { "x": 9 }, "c": 3 })
        );
        let keys: Vec<_> = body.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "nested", "c"]);
    }

    #[test]
    fn parse_rejects_non_objects() {
        assert!(matches!(parse_document("[1,2]"), Err(DatabaseError::Query(_))));
        assert!(matches!(
            parse_document("{broken"),
            Err(DatabaseError::Serialization(_))
        ));
    }

    #[test]
    fn encode_then_parse_keeps_nested_values() {
        let body = doc(json!({ "tags": ["a", null], "inner": { "n": 1.5, "ok": true } }));
        let text = encode_document(&body).unwrap();
        assert_eq!(parse_document(&text).unwrap(), body);
    }

    #[rstest]
    #[case("skin", true)]
    #[case("purchase product", true)]
    #[case("", false)]
    #[case("   ", false)]
    #[case("bad\nname", false)]
    #[case("tab\tname", false)]
    fn collection_names(#[case] name: &str, #[case] ok: bool) {
        assert_eq!(validate_collection(name).is_ok(), ok);
    }
}
