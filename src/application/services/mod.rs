//! Business logic services for the application layer.

pub mod item_service;

pub use item_service::ItemService;
