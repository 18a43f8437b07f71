//! Redis implementation of the item repository.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use crate::domain::entities::Item;
use crate::domain::repositories::{ItemRepository, StoreError};
use crate::utils::table_name::validate_table_name;

impl From<redis::RedisError> for StoreError {
    fn from(e: redis::RedisError) -> Self {
        StoreError::Backend {
            backend: "redis",
            source: Box::new(e),
        }
    }
}

/// Redis repository keeping all items of a table in a single hash.
///
/// The hash key is `items:<table>`; each field is an item id and each value
/// the item's JSON encoding. Updates read, merge and write back the record
/// without a transaction, so concurrent updates to one id resolve
/// last-write-wins.
pub struct RedisItemRepository {
    client: ConnectionManager,
    hash_key: String,
}

impl RedisItemRepository {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidTableName`] if `table` is not a plain
    /// identifier, and [`StoreError::Backend`] if the connection or PING fails.
    pub async fn connect(redis_url: &str, table: &str) -> Result<Self, StoreError> {
        validate_table_name(table).map_err(StoreError::InvalidTableName)?;

        info!("Connecting to Redis item store");

        let client = Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut test_conn = manager.clone();
        test_conn.ping::<()>().await?;

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            hash_key: format!("items:{}", table),
        })
    }

    fn decode(id: &str, raw: &str) -> Result<Item, StoreError> {
        serde_json::from_str(raw).map_err(|e| StoreError::Corrupt {
            key: id.to_string(),
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl ItemRepository for RedisItemRepository {
    async fn get(&self, id: &str) -> Result<Option<Item>, StoreError> {
        let mut conn = self.client.clone();

        let raw: Option<String> = conn.hget(&self.hash_key, id).await?;

        raw.map(|r| Self::decode(id, &r)).transpose()
    }

    async fn put(&self, id: &str, item: Item) -> Result<(), StoreError> {
        let mut conn = self.client.clone();
        let encoded = serde_json::to_string(&item)?;

        let _: () = conn.hset(&self.hash_key, id, encoded).await?;
        debug!(id, "Item written");

        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let mut conn = self.client.clone();

        let entries: Vec<(String, String)> = conn.hgetall(&self.hash_key).await?;

        entries
            .iter()
            .map(|(id, raw)| Self::decode(id, raw))
            .collect()
    }

    async fn update(&self, id: &str, fields: Item) -> Result<(), StoreError> {
        let mut conn = self.client.clone();

        let raw: Option<String> = conn.hget(&self.hash_key, id).await?;
        let mut item = match raw {
            Some(r) => Self::decode(id, &r)?,
            None => Item::default(),
        };
        item.merge(fields);

        let encoded = serde_json::to_string(&item)?;
        let _: () = conn.hset(&self.hash_key, id, encoded).await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut conn = self.client.clone();

        let removed: i64 = conn.hdel(&self.hash_key, id).await?;
        debug!(id, removed, "Item delete");

        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        let mut conn = self.client.clone();
        conn.ping::<()>().await?;
        Ok(())
    }
}
