//! Item CRUD service.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::{Item, ParsedBody};
use crate::domain::repositories::ItemRepository;
use crate::error::AppError;

pub const MISSING_BODY: &str = "invalid request, you are missing the parameter body";
pub const MALFORMED_BODY: &str = "invalid request, body must be a JSON object";
pub const MISSING_PATH_ID: &str = "invalid request, you are missing the path parameter id";
pub const MISSING_ID: &str = "invalid request, you are missing the identifier field";
pub const BLANK_ID: &str = "invalid request, the identifier field must not be blank";
pub const NON_STRING_ID: &str = "invalid request, the identifier field must be a string";
pub const NO_FIELDS: &str = "invalid request, no fields to update";
pub const ID_MISMATCH: &str = "invalid request, identifier in body does not match path";

/// Request→outcome logic for the five item operations.
///
/// Holds no per-request state. The identifier field name is fixed at
/// construction and used both to validate bodies and to key the store.
pub struct ItemService {
    repository: Arc<dyn ItemRepository>,
    id_field: String,
}

impl ItemService {
    /// Creates a new item service.
    ///
    /// # Arguments
    ///
    /// - `repository` - the item store
    /// - `id_field` - name of the identifier field (e.g. `itemId`)
    pub fn new(repository: Arc<dyn ItemRepository>, id_field: impl Into<String>) -> Self {
        Self {
            repository,
            id_field: id_field.into(),
        }
    }

    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    /// Writes a new item, overwriting any record with the same identifier.
    ///
    /// Returns the identifier of the written item.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ClientInput`] if the body is missing, is not an
    /// object, or lacks a non-empty string identifier. The store is not
    /// touched in that case.
    ///
    /// Returns [`AppError::Store`] if the write fails.
    pub async fn create(&self, body: ParsedBody) -> Result<String, AppError> {
        let item = require_item(body)?;

        let id = match (item.get(&self.id_field), item.id(&self.id_field)) {
            (_, Some(id)) if !id.trim().is_empty() => id.to_string(),
            (_, Some(_)) => return Err(AppError::bad_request(BLANK_ID)),
            (None, None) => return Err(AppError::bad_request(MISSING_ID)),
            (Some(_), None) => return Err(AppError::bad_request(NON_STRING_ID)),
        };

        self.repository.put(&id, item).await?;

        Ok(id)
    }

    /// Looks up a single item. An absent item is `Ok(None)`, not an error.
    pub async fn get(&self, id: &str) -> Result<Option<Item>, AppError> {
        let id = require_id(id)?;
        Ok(self.repository.get(id).await?)
    }

    /// Returns every stored item.
    pub async fn list(&self) -> Result<Vec<Item>, AppError> {
        Ok(self.repository.scan().await?)
    }

    /// Applies the supplied fields to the item at `id`.
    ///
    /// The path identifier is authoritative. An identifier field in the body
    /// is accepted only if it equals `id`; it is never used for addressing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ClientInput`] if the path id or body is missing,
    /// the body carries a different identifier, or there is nothing to set.
    pub async fn update(&self, id: &str, body: ParsedBody) -> Result<(), AppError> {
        let id = require_id(id)?;
        let mut fields = require_item(body)?;

        if let Some(body_id) = fields.remove(&self.id_field)
            && body_id.as_str() != Some(id)
        {
            return Err(AppError::bad_request(ID_MISMATCH));
        }

        if fields.is_empty() {
            return Err(AppError::bad_request(NO_FIELDS));
        }

        fields.insert(self.id_field.clone(), Value::String(id.to_string()));

        self.repository.update(id, fields).await?;

        Ok(())
    }

    /// Removes the item at `id`. Deleting an absent item succeeds.
    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = require_id(id)?;
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Reports whether the store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        Ok(self.repository.health_check().await?)
    }
}

fn require_item(body: ParsedBody) -> Result<Item, AppError> {
    match body {
        ParsedBody::Valid(item) => Ok(item),
        ParsedBody::Missing => Err(AppError::bad_request(MISSING_BODY)),
        ParsedBody::Malformed => Err(AppError::bad_request(MALFORMED_BODY)),
    }
}

fn require_id(id: &str) -> Result<&str, AppError> {
    if id.trim().is_empty() {
        return Err(AppError::bad_request(MISSING_PATH_ID));
    }
    Ok(id)
}
