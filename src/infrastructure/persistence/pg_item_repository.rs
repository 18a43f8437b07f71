//! PostgreSQL implementation of the item repository.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;
use std::sync::Arc;

use crate::domain::entities::Item;
use crate::domain::repositories::{ItemRepository, StoreError};
use crate::utils::table_name::validate_table_name;

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        StoreError::Backend {
            backend: "postgres",
            source: Box::new(e),
        }
    }
}

/// PostgreSQL repository storing each item as a JSONB document keyed by id.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE <table> (id TEXT PRIMARY KEY, body JSONB NOT NULL)
/// ```
///
/// Updates use JSONB concatenation, so a patch only replaces the top-level
/// fields it names.
pub struct PgItemRepository {
    pool: Arc<PgPool>,
    table: String,
}

impl PgItemRepository {
    /// Creates a new repository over `table`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidTableName`] if `table` is not a plain identifier.
    pub fn new(pool: Arc<PgPool>, table: &str) -> Result<Self, StoreError> {
        validate_table_name(table).map_err(StoreError::InvalidTableName)?;

        Ok(Self {
            pool,
            table: table.to_string(),
        })
    }

    /// Creates the backing table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (id TEXT PRIMARY KEY, body JSONB NOT NULL)",
            self.table
        );
        sqlx::query(&sql).execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn get(&self, id: &str) -> Result<Option<Item>, StoreError> {
        let sql = format!("SELECT body FROM {} WHERE id = $1", self.table);

        let row = sqlx::query_scalar::<_, Json<Item>>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(|Json(item)| item))
    }

    async fn put(&self, id: &str, item: Item) -> Result<(), StoreError> {
        let sql = format!(
            r#"
            INSERT INTO {} (id, body)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET body = EXCLUDED.body
            "#,
            self.table
        );

        sqlx::query(&sql)
            .bind(id)
            .bind(Json(item))
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn scan(&self) -> Result<Vec<Item>, StoreError> {
        let sql = format!("SELECT body FROM {}", self.table);

        let rows = sqlx::query_scalar::<_, Json<Item>>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(|Json(item)| item).collect())
    }

    async fn update(&self, id: &str, fields: Item) -> Result<(), StoreError> {
        let sql = format!(
            r#"
            INSERT INTO {table} (id, body)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET body = {table}.body || EXCLUDED.body
            "#,
            table = self.table
        );

        sqlx::query(&sql)
            .bind(id)
            .bind(Json(fields))
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table);

        sqlx::query(&sql)
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
