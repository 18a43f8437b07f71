//! Application layer services implementing the item operations.
//!
//! Services consume the domain traits and give HTTP handlers a small API
//! whose results already carry the error taxonomy of [`crate::error`].
//!
//! # Available Services
//!
//! - [`services::item_service::ItemService`] - Item create, read, update, delete

pub mod services;
