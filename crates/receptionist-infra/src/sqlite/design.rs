//! SQLite cake design repository implementation.
//!
//! Replace-all semantics like the menu. Designs submitted with a
//! `data:image/...;base64,` URL have the payload decoded and stored as a
//! BLOB; reads re-encode stored binary back into a data URL so the
//! frontend round-trips cleanly. A payload that fails to decode is kept
//! as the submitted URL.

use receptionist_core::shop::repository::DesignRepository;
use receptionist_types::error::RepositoryError;
use receptionist_types::shop::CakeDesign;
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::Utc;
use sqlx::Row;
use tracing::warn;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `DesignRepository`.
pub struct SqliteDesignRepository {
    pool: DatabasePool,
}

impl SqliteDesignRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Split a data URL into its base64 payload, if it is one.
fn data_url_payload(url: &str) -> Option<&str> {
    if !url.starts_with("data:image") {
        return None;
    }
    url.split_once(',').map(|(_, payload)| payload)
}

impl DesignRepository for SqliteDesignRepository {
    async fn all(&self) -> Result<Vec<CakeDesign>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT design_id, name, description, image_url, image_data FROM cake_designs ORDER BY position ASC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut designs = Vec::with_capacity(rows.len());
        for row in &rows {
            let image_url: Option<String> = row
                .try_get("image_url")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;
            let image_data: Option<Vec<u8>> = row
                .try_get("image_data")
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

            let image_url = match image_data {
                Some(data) => Some(format!("data:image/png;base64,{}", BASE64.encode(data))),
                None => image_url,
            };

            designs.push(CakeDesign {
                design_id: row
                    .try_get("design_id")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                name: row
                    .try_get("name")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                description: row
                    .try_get("description")
                    .map_err(|e| RepositoryError::Query(e.to_string()))?,
                image_url,
            });
        }

        Ok(designs)
    }

    async fn replace_all(&self, designs: &[CakeDesign]) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .writer
            .begin()
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        sqlx::query("DELETE FROM cake_designs")
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let now = Utc::now().to_rfc3339();
        for (position, design) in designs.iter().enumerate() {
            let mut image_url = design.image_url.clone();
            let mut image_data: Option<Vec<u8>> = None;

            if let Some(payload) = design.image_url.as_deref().and_then(data_url_payload) {
                match BASE64.decode(payload) {
                    Ok(decoded) => {
                        image_data = Some(decoded);
                        image_url = None;
                    }
                    Err(e) => {
                        warn!(design_id = %design.design_id, error = %e, "invalid image data URL, storing as plain URL");
                    }
                }
            }

            sqlx::query(
                r#"INSERT INTO cake_designs (id, design_id, name, description, image_url, image_data, position, created_at)
                   VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
            )
            .bind(Uuid::now_v7().to_string())
            .bind(&design.design_id)
            .bind(&design.name)
            .bind(&design.description)
            .bind(&image_url)
            .bind(&image_data)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::DatabasePool;

    async fn test_pool() -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    fn design(design_id: &str, image_url: Option<&str>) -> CakeDesign {
        CakeDesign {
            design_id: design_id.to_string(),
            name: format!("Design {design_id}"),
            description: "A cake".to_string(),
            image_url: image_url.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_plain_url_passes_through() {
        let pool = test_pool().await;
        let repo = SqliteDesignRepository::new(pool);

        let designs = vec![design("d1", Some("https://example.com/cake.png"))];
        repo.replace_all(&designs).await.unwrap();

        let stored = repo.all().await.unwrap();
        assert_eq!(stored, designs);
    }

    #[tokio::test]
    async fn test_data_url_roundtrips_through_blob() {
        let pool = test_pool().await;
        let repo = SqliteDesignRepository::new(pool);

        let payload = BASE64.encode(b"fake png bytes");
        let url = format!("data:image/png;base64,{payload}");
        repo.replace_all(&[design("d1", Some(&url))]).await.unwrap();

        // The raw row holds binary, not the data URL.
        let row = sqlx::query("SELECT image_url, image_data FROM cake_designs")
            .fetch_one(&repo.pool.reader)
            .await
            .unwrap();
        let stored_url: Option<String> = row.try_get("image_url").unwrap();
        let stored_data: Option<Vec<u8>> = row.try_get("image_data").unwrap();
        assert!(stored_url.is_none());
        assert_eq!(stored_data.as_deref(), Some(b"fake png bytes".as_slice()));

        // Reads re-encode to an equivalent data URL.
        let stored = repo.all().await.unwrap();
        assert_eq!(stored[0].image_url.as_deref(), Some(url.as_str()));
    }

    #[tokio::test]
    async fn test_invalid_data_url_kept_as_submitted() {
        let pool = test_pool().await;
        let repo = SqliteDesignRepository::new(pool);

        let url = "data:image/png;base64,not!!valid@@base64";
        repo.replace_all(&[design("d1", Some(url))]).await.unwrap();

        let stored = repo.all().await.unwrap();
        assert_eq!(stored[0].image_url.as_deref(), Some(url));
    }

    #[tokio::test]
    async fn test_replace_all_overwrites() {
        let pool = test_pool().await;
        let repo = SqliteDesignRepository::new(pool);

        repo.replace_all(&[design("d1", None), design("d2", None)])
            .await
            .unwrap();
        repo.replace_all(&[design("d3", None)]).await.unwrap();

        let stored = repo.all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].design_id, "d3");
    }

    #[tokio::test]
    async fn test_order_preserved() {
        let pool = test_pool().await;
        let repo = SqliteDesignRepository::new(pool);

        let designs = vec![design("z", None), design("a", None), design("m", None)];
        repo.replace_all(&designs).await.unwrap();

        let stored = repo.all().await.unwrap();
        let ids: Vec<&str> = stored.iter().map(|d| d.design_id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }
}
