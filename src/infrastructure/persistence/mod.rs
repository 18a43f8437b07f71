//! Item store implementations.
//!
//! Concrete implementations of [`crate::domain::repositories::ItemRepository`].
//!
//! # Repositories
//!
//! - [`MemoryItemRepository`] - Process-local ordered map
//! - [`PgItemRepository`] - PostgreSQL JSONB table via SQLx
//! - [`RedisItemRepository`] - Redis hash via a connection manager

pub mod memory_item_repository;
pub mod pg_item_repository;
pub mod redis_item_repository;

pub use memory_item_repository::MemoryItemRepository;
pub use pg_item_repository::PgItemRepository;
pub use redis_item_repository::RedisItemRepository;
