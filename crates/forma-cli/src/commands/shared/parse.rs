use std::path::Path;

use anyhow::Context;
use forma_core::document::Document;
use serde_json::Value;

/// Parse a JSON object into a document.
pub fn parse_document(raw: &str, source: &str) -> anyhow::Result<Document> {
    let value: Value =
        serde_json::from_str(raw).with_context(|| format!("invalid JSON in {source}"))?;
    match value {
        Value::Object(map) => Ok(map),
        other => anyhow::bail!("{source} must be a JSON object, got {}", kind_of(&other)),
    }
}

/// Read a JSON file into a value.
pub fn read_json_file(path: &Path) -> anyhow::Result<Value> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Resolve the `--data` / `--file` pair into a document.
pub fn read_payload(data: Option<&str>, file: Option<&Path>) -> anyhow::Result<Document> {
    match (data, file) {
        (Some(raw), _) => parse_document(raw, "--data"),
        (None, Some(path)) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            parse_document(&raw, &path.display().to_string())
        }
        (None, None) => anyhow::bail!("one of --data or --file must be provided"),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
