//! Core domain entities.
//!
//! - [`Item`] - The single persisted entity, a schema-less field mapping
//! - [`ParsedBody`] - Tagged result of parsing a request body into an item

pub mod item;

pub use item::{Item, ParsedBody};
