//! Item entity and request body parsing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A persisted item: a schema-less mapping of field names to JSON values.
///
/// Exactly one field (the identifier field, chosen at deployment) acts as the
/// store key. The entity itself does not know which field that is; callers
/// pass the field name to [`Item::id`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the identifier value if the field holds a string.
    pub fn id(&self, id_field: &str) -> Option<&str> {
        self.0.get(id_field).and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(field.into(), value)
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sets every field of `patch` on this item, leaving absent fields untouched.
    pub fn merge(&mut self, patch: Item) {
        for (field, value) in patch.0 {
            self.0.insert(field, value);
        }
    }
}

/// Outcome of parsing a raw request body into an [`Item`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedBody {
    Valid(Item),
    /// No body, or only whitespace.
    Missing,
    /// Body present but not a JSON object (directly or as an encoded string).
    Malformed,
}

impl ParsedBody {
    /// Parses raw bytes.
    ///
    /// Accepts a JSON object, or a JSON string whose contents are themselves
    /// an encoded JSON object (one extra parse step, no more).
    pub fn parse(raw: &[u8]) -> Self {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return ParsedBody::Missing;
        }

        match serde_json::from_slice::<Value>(raw) {
            Ok(Value::Object(fields)) => ParsedBody::Valid(Item::new(fields)),
            Ok(Value::String(encoded)) => {
                if encoded.trim().is_empty() {
                    return ParsedBody::Missing;
                }
                match serde_json::from_str::<Value>(&encoded) {
                    Ok(Value::Object(fields)) => ParsedBody::Valid(Item::new(fields)),
                    _ => ParsedBody::Malformed,
                }
            }
            Ok(Value::Null) => ParsedBody::Missing,
            _ => ParsedBody::Malformed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        match value {
            Value::Object(fields) => Item::new(fields),
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_parse_object() {
        let parsed = ParsedBody::parse(br#"{"itemId":"abc123","title":"buy milk"}"#);

        assert_eq!(
            parsed,
            ParsedBody::Valid(item(json!({"itemId": "abc123", "title": "buy milk"})))
        );
    }

    #[test]
    fn test_parse_encoded_string() {
        let raw = serde_json::to_vec(&json!(r#"{"itemId":"abc123"}"#)).unwrap();

        assert_eq!(
            ParsedBody::parse(&raw),
            ParsedBody::Valid(item(json!({"itemId": "abc123"})))
        );
    }

    #[test]
    fn test_parse_doubly_encoded_string_is_malformed() {
        let inner = serde_json::to_string(&json!(r#"{"itemId":"abc123"}"#)).unwrap();
        let raw = serde_json::to_vec(&json!(inner)).unwrap();

        assert_eq!(ParsedBody::parse(&raw), ParsedBody::Malformed);
    }

    #[test]
    fn test_parse_missing() {
        assert_eq!(ParsedBody::parse(b""), ParsedBody::Missing);
        assert_eq!(ParsedBody::parse(b"  \n"), ParsedBody::Missing);
        assert_eq!(ParsedBody::parse(b"null"), ParsedBody::Missing);
        assert_eq!(ParsedBody::parse(br#""""#), ParsedBody::Missing);
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(ParsedBody::parse(b"{not json"), ParsedBody::Malformed);
        assert_eq!(ParsedBody::parse(b"[1,2,3]"), ParsedBody::Malformed);
        assert_eq!(ParsedBody::parse(b"42"), ParsedBody::Malformed);
    }

    #[test]
    fn test_id_requires_string() {
        let numeric = item(json!({"itemId": 7}));
        let text = item(json!({"itemId": "abc"}));

        assert_eq!(numeric.id("itemId"), None);
        assert_eq!(text.id("itemId"), Some("abc"));
        assert_eq!(text.id("otherId"), None);
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut stored = item(json!({"itemId": "a", "title": "t", "status": "open"}));
        stored.merge(item(json!({"status": "done"})));

        assert_eq!(
            stored,
            item(json!({"itemId": "a", "title": "t", "status": "done"}))
        );
    }
}
