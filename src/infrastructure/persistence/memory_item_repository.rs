//! In-process item repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::Item;
use crate::domain::repositories::{ItemRepository, StoreError};

/// Item store backed by a process-local ordered map.
///
/// Scans return items in key order. State is lost on restart.
///
/// # Use Cases
///
/// - Development environments without a database
/// - Integration tests that exercise the HTTP surface
#[derive(Default)]
pub struct MemoryItemRepository {
    items: RwLock<BTreeMap<String, Item>>,
}

impl MemoryItemRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory item store");
        Self::default()
    }

    /// Number of stored items.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl ItemRepository for MemoryItemRepository {
    async fn get(&self, id: &str) -> Result<Option<Item>, StoreError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn put(&self, id: &str, item: Item) -> Result<(), StoreError> {
        self.items.write().await.insert(id.to_string(), item);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn update(&self, id: &str, fields: Item) -> Result<(), StoreError> {
        self.items
            .write()
            .await
            .entry(id.to_string())
            .or_default()
            .merge(fields);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.items.write().await.remove(id);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
