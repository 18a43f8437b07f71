//! Handlers for item endpoints (create, read, update, delete).

use axum::{
    Extension, Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::item::{MessageResponse, created_response};
use crate::domain::authorizer::Claims;
use crate::domain::entities::{Item, ParsedBody};
use crate::error::AppError;
use crate::state::AppState;

/// Creates an item, overwriting any item with the same identifier.
///
/// # Endpoint
///
/// `POST /items`
///
/// # Request Body
///
/// A JSON object containing the identifier field, or a JSON string holding
/// such an object:
///
/// ```json
/// { "itemId": "abc123", "title": "buy milk" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// { "message": "Item abc123 created", "itemId": "abc123" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing, not an object, or lacks
/// a string identifier. Returns 500 if the store write fails.
pub async fn create_item_handler(
    State(state): State<AppState>,
    claims: Option<Extension<Claims>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let id = state
        .item_service
        .create(ParsedBody::parse(&body))
        .await?;

    match claims {
        Some(Extension(claims)) => tracing::info!(id = %id, sub = %claims.sub, "Item created"),
        None => tracing::info!(id = %id, "Item created"),
    }

    Ok((
        StatusCode::CREATED,
        Json(created_response(state.item_service.id_field(), &id)),
    ))
}

/// Returns a single item.
///
/// # Endpoint
///
/// `GET /items/{id}`
///
/// # Response
///
/// **200 OK** with the item, or with `{}` when no item has this id.
/// Absence is deliberately not a 404.
pub async fn get_item_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Item>, AppError> {
    let item = state.item_service.get(&id).await?;

    Ok(Json(item.unwrap_or_default()))
}

/// Returns every item in the store's native scan order.
///
/// # Endpoint
///
/// `GET /items`
pub async fn list_items_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.item_service.list().await?;

    Ok(Json(items))
}

/// Sets the supplied fields on an item; other fields are left untouched.
///
/// # Endpoint
///
/// `PATCH /items/{id}`
///
/// # Request Body
///
/// ```json
/// { "title": "buy milk and eggs" }
/// ```
///
/// An identifier field in the body must match `{id}`.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is missing, malformed, empty, or
/// names a different identifier.
pub async fn update_item_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .item_service
        .update(&id, ParsedBody::parse(&body))
        .await?;

    tracing::info!(id = %id, "Item updated");

    Ok(Json(MessageResponse::new(format!("Item {} updated", id))))
}

/// Deletes an item. Deleting an absent item still succeeds.
///
/// # Endpoint
///
/// `DELETE /items/{id}`
pub async fn delete_item_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.item_service.delete(&id).await?;

    tracing::info!(id = %id, "Item deleted");

    Ok(Json(MessageResponse::new(format!("Item {} deleted", id))))
}
