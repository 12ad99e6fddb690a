//! MySQL adapter for the serietrack SeriesStore trait

use async_trait::async_trait;
use serietrack_core::prelude::*;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::FromRow;
use tracing::{debug, info};

mod config;

pub use config::MySqlConfig;

const SELECT_COLUMNS: &str =
    "SELECT id, title, status, last_episode_watched, total_episodes, ranking FROM series";

/// A row of the `series` table
#[derive(Debug, FromRow)]
struct SeriesRow {
    id: i64,
    title: String,
    status: String,
    last_episode_watched: i32,
    total_episodes: i32,
    ranking: i32,
}

impl From<SeriesRow> for Series {
    fn from(row: SeriesRow) -> Self {
        Series {
            id: SeriesId::new(row.id),
            title: row.title,
            status: row.status,
            last_episode_watched: row.last_episode_watched,
            total_episodes: row.total_episodes,
            ranking: row.ranking,
        }
    }
}

/// Convert MySQL's unsigned insert id into a SeriesId
fn assigned_id(raw: u64) -> Result<SeriesId, StoreError> {
    i64::try_from(raw)
        .map(SeriesId::new)
        .map_err(|_| StoreError::DatabaseError(format!("Insert id {} out of range", raw)))
}

/// MySQL implementation of SeriesStore over a pooled connection
pub struct MySqlSeriesStore {
    pool: MySqlPool,
}

impl MySqlSeriesStore {
    /// Connect to MySQL, verify reachability, and ensure the `series`
    /// table exists.
    pub async fn connect(config: &MySqlConfig) -> Result<Self, StoreError> {
        info!("Connecting to MySQL at {}", config.display_target());

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url())
            .await
            .map_err(|e| StoreError::ConnectionFailed(format!("MySQL connection failed: {}", e)))?;

        let store = Self { pool };
        store.health_check().await?;
        store.ensure_schema().await?;

        info!("Connected to MySQL");
        Ok(store)
    }

    /// Wrap an existing pool, for callers that manage their own connection
    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the `series` table when it does not exist yet. A single
    /// statement, not a migration facility.
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        let ddl = "CREATE TABLE IF NOT EXISTS series (
            id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
            title TEXT NOT NULL,
            status TEXT NOT NULL,
            last_episode_watched INT NOT NULL,
            total_episodes INT NOT NULL,
            ranking INT NOT NULL
        )";

        debug!("Ensuring series table exists");
        sqlx::query(ddl)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::DatabaseError(format!("Failed to create series table: {}", e)))?;

        Ok(())
    }

    /// First-run path: when the table holds zero rows, insert a handful of
    /// example series. Returns how many rows were inserted.
    pub async fn seed_if_empty(&self) -> Result<usize, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM series")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("Failed to count series: {}", e)))?;

        if count > 0 {
            debug!("Series table already has {} rows, skipping seed", count);
            return Ok(0);
        }

        let examples = [
            SeriesDraft::new("Breaking Bad")
                .with_status("Completed")
                .with_progress(62, 62)
                .with_ranking(10),
            SeriesDraft::new("Attack on Titan")
                .with_status("Ongoing")
                .with_progress(87, 87)
                .with_ranking(9),
            SeriesDraft::new("Stranger Things")
                .with_status("Ongoing")
                .with_progress(34, 34)
                .with_ranking(8),
            SeriesDraft::new("Game of Thrones")
                .with_status("Completed")
                .with_progress(73, 73)
                .with_ranking(7),
        ];

        info!("Seeding {} example series", examples.len());
        for draft in examples.iter().cloned() {
            self.create(draft).await?;
        }

        Ok(examples.len())
    }
}

#[async_trait]
impl SeriesStore for MySqlSeriesStore {
    async fn list(&self) -> Result<Vec<Series>, StoreError> {
        let rows: Vec<SeriesRow> = sqlx::query_as(SELECT_COLUMNS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("Failed to list series: {}", e)))?;

        Ok(rows.into_iter().map(Series::from).collect())
    }

    async fn get(&self, id: SeriesId) -> Result<Option<Series>, StoreError> {
        let query = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let row: Option<SeriesRow> = sqlx::query_as(&query)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("Failed to get series {}: {}", id, e)))?;

        Ok(row.map(Series::from))
    }

    async fn create(&self, draft: SeriesDraft) -> Result<Series, StoreError> {
        let result = sqlx::query(
            "INSERT INTO series (title, status, last_episode_watched, total_episodes, ranking) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&draft.title)
        .bind(&draft.status)
        .bind(draft.last_episode_watched)
        .bind(draft.total_episodes)
        .bind(draft.ranking)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(format!("Failed to create series: {}", e)))?;

        let id = assigned_id(result.last_insert_id())?;
        debug!("Created series {}", id);
        Ok(Series::from_draft(id, draft))
    }

    async fn replace(&self, id: SeriesId, draft: SeriesDraft) -> Result<Series, StoreError> {
        // No rows-affected check: MySQL reports changed rows, so an
        // idempotent replace would look identical to a missing id.
        sqlx::query(
            "UPDATE series SET title = ?, status = ?, last_episode_watched = ?, \
             total_episodes = ?, ranking = ? WHERE id = ?",
        )
        .bind(&draft.title)
        .bind(&draft.status)
        .bind(draft.last_episode_watched)
        .bind(draft.total_episodes)
        .bind(draft.ranking)
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(format!("Failed to replace series {}: {}", id, e)))?;

        Ok(Series::from_draft(id, draft))
    }

    async fn delete(&self, id: SeriesId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM series WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("Failed to delete series {}: {}", id, e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn advance_episode(&self, id: SeriesId) -> Result<bool, StoreError> {
        // field = field + 1 is atomic per statement; concurrent requests
        // never lose an increment.
        let result = sqlx::query(
            "UPDATE series SET last_episode_watched = last_episode_watched + 1 WHERE id = ?",
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(format!("Failed to advance episode for {}: {}", id, e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_status(&self, id: SeriesId, status: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE series SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("Failed to set status for {}: {}", id, e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn adjust_ranking(&self, id: SeriesId, delta: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE series SET ranking = ranking + ? WHERE id = ?")
            .bind(delta)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed(format!("Failed to adjust ranking for {}: {}", id, e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::ConnectionFailed(format!("MySQL ping failed: {}", e)))?;
        Ok(())
    }
}
