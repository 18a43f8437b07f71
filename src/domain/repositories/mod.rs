//! Repository trait definitions for the domain layer.
//!
//! Traits define the persistence contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.

pub mod item_repository;

pub use item_repository::{ItemRepository, StoreError};

#[cfg(test)]
pub use item_repository::MockItemRepository;
