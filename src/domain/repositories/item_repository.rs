//! Repository trait for item persistence.

use async_trait::async_trait;

use crate::domain::entities::Item;

/// Failures reported by an item store.
///
/// Backend driver errors are boxed so the domain layer does not name any
/// driver type; each store converts its own errors into [`StoreError::Backend`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{backend} error: {source}")]
    Backend {
        backend: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored record could not be interpreted as an item.
    #[error("corrupt record for key {key}: {reason}")]
    Corrupt { key: String, reason: String },

    /// The configured table name is not a plain identifier.
    #[error("invalid table name: {0}")]
    InvalidTableName(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Key-value persistence for items, keyed by the identifier value.
///
/// Implementations own the persisted state exclusively. No operation
/// coordinates with concurrent writers; the last write to a key wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryItemRepository`] - process-local map
/// - [`crate::infrastructure::persistence::PgItemRepository`] - PostgreSQL JSONB table
/// - [`crate::infrastructure::persistence::RedisItemRepository`] - Redis hash
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Looks up a single item.
    ///
    /// Returns `Ok(None)` when no record exists for `id`.
    async fn get(&self, id: &str) -> Result<Option<Item>, StoreError>;

    /// Writes an item under `id`, replacing any existing record.
    async fn put(&self, id: &str, item: Item) -> Result<(), StoreError>;

    /// Returns every stored item in the store's native order.
    async fn scan(&self) -> Result<Vec<Item>, StoreError>;

    /// Sets each field of `fields` on the record stored under `id`.
    ///
    /// Fields not present in `fields` are left untouched. When no record
    /// exists, one is created from `fields`; callers are expected to include
    /// the identifier field.
    async fn update(&self, id: &str, fields: Item) -> Result<(), StoreError>;

    /// Removes the record under `id`. Removing an absent key is not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
