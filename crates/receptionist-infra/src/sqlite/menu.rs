//! SQLite menu repository implementation.
//!
//! The training UI always submits the complete menu, so `replace_all`
//! deletes everything and inserts the new list in one transaction. A
//! `position` column preserves the submitted order.

use receptionist_core::shop::repository::MenuRepository;
use receptionist_types::error::RepositoryError;
use receptionist_types::shop::MenuItem;
use chrono::Utc;
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MenuRepository`.
pub struct SqliteMenuRepository {
    pool: DatabasePool,
}

impl SqliteMenuRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl MenuRepository for SqliteMenuRepository {
    async fn all(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT name, description, price, category FROM menu_items ORDER BY position ASC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut items = Vec::with_capacity(rows.len());
        for row in &rows {
            items.push(MenuItem {
                name: row
                    .try_get("name")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                description: row
                    .try_get("description")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                price: row
                    .try_get("price")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                category: row
                    .try_get("category")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
            });
        }

        Ok(items)
    }

    async fn replace_all(&self, items: &[MenuItem]) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        sqlx::query("DELETE FROM menu_items")
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let now = Utc::now().to_rfc3339();
        for (position, item) in items.iter().enumerate() {
            sqlx::query(
                r#"INSERT INTO menu_items (id, name, description, price, category, position, created_at)
                   VALUES (?, ?, ?, ?, ?, ?, ?)"#,
            )
            .bind(Uuid::now_v7().to_string())
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(&item.category)
            .bind(position as i64)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))
    }
}
