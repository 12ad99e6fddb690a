//! Core trait defining the storage interface for serietrack

use crate::errors::StoreError;
use crate::types::{Series, SeriesDraft, SeriesId};
use async_trait::async_trait;

/// Core trait for series storage backends.
///
/// Every write that targets a single row by id reports whether a row was
/// actually affected: `Ok(false)` means the id did not match anything, which
/// presentation layers translate to a not-found response. Each operation is
/// a single statement against the backend; there are no multi-row
/// transactions.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    /// Read all series, in whatever order the storage returns them
    async fn list(&self) -> Result<Vec<Series>, StoreError>;

    /// Read one series by id, `None` when absent
    async fn get(&self, id: SeriesId) -> Result<Option<Series>, StoreError>;

    /// Insert a new series and return it with the storage-assigned id
    async fn create(&self, draft: SeriesDraft) -> Result<Series, StoreError>;

    /// Overwrite all mutable fields of a series, returning it as submitted.
    ///
    /// Does not report whether the id matched a row; replacing a missing id
    /// is indistinguishable from an idempotent replace at this layer.
    async fn replace(&self, id: SeriesId, draft: SeriesDraft) -> Result<Series, StoreError>;

    /// Delete a series by id; `false` when zero rows were affected
    async fn delete(&self, id: SeriesId) -> Result<bool, StoreError>;

    /// Increment `last_episode_watched` by one; `false` on zero rows.
    /// Unbounded: the count may exceed `total_episodes`.
    async fn advance_episode(&self, id: SeriesId) -> Result<bool, StoreError>;

    /// Set the free-text status field; `false` on zero rows
    async fn set_status(&self, id: SeriesId, status: &str) -> Result<bool, StoreError>;

    /// Adjust the ranking by `delta` (±1 from the HTTP surface); `false` on
    /// zero rows. Unbounded in both directions.
    async fn adjust_ranking(&self, id: SeriesId, delta: i32) -> Result<bool, StoreError>;

    /// Test the connection to the storage backend
    async fn health_check(&self) -> Result<(), StoreError>;
}
