use serde_json::Value;

use super::Document;
use crate::error::StoreError;
use crate::id::generate_id;

/// Make sure `record` carries a non-empty string id and return it.
///
/// Missing, `null` and `""` ids are replaced with a generated one; numeric
/// ids become their decimal string.
pub(crate) fn ensure_id(collection: &str, record: &mut Document) -> Result<String, StoreError> {
    let id = match record.get("id") {
        Some(Value::String(s)) if !s.is_empty() => return Ok(s.clone()),
        Some(Value::Number(n)) => n.to_string(),
        None | Some(Value::Null) | Some(Value::String(_)) => generate_id(),
        Some(other) => {
            return Err(StoreError::InvalidId {
                collection: collection.to_string(),
                value: other.to_string(),
            })
        }
    };
    record.insert("id".to_string(), Value::String(id.clone()));
    Ok(id)
}

/// True when the record's id equals `id`. Numeric ids compare by their
/// decimal form so data written by other tools still resolves.
pub(crate) fn matches_id(doc: &Document, id: &str) -> bool {
    match doc.get("id") {
        Some(Value::String(s)) => s == id,
        Some(Value::Number(n)) => n.to_string() == id,
        _ => false,
    }
}

/// `needle` must already be lowercase.
pub(super) fn matches_text(doc: &Document, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    doc.values().any(|value| match value {
        Value::String(s) => s.to_lowercase().contains(needle),
        _ => false,
    })
}
