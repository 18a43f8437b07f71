//! DTOs for item endpoints.
//!
//! Item bodies themselves are schema-less and travel as
//! [`crate::domain::entities::Item`]; only confirmations have a fixed shape.

use serde::Serialize;
use serde_json::{Map, Value};

/// Confirmation returned by update and delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Builds the create confirmation: a message plus the new identifier keyed
/// by the configured identifier field name.
///
/// ```json
/// { "message": "Item abc123 created", "itemId": "abc123" }
/// ```
pub fn created_response(id_field: &str, id: &str) -> Value {
    let mut body = Map::new();
    body.insert(
        "message".to_string(),
        Value::String(format!("Item {} created", id)),
    );
    body.insert(id_field.to_string(), Value::String(id.to_string()));
    Value::Object(body)
}
