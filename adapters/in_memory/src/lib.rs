//! In-memory implementation of SeriesStore for testing and development

use async_trait::async_trait;
use serietrack_core::prelude::*;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Internal map of rows, keyed by id
#[derive(Debug, Default)]
struct MemoryTable {
    rows: BTreeMap<i64, Series>,
    next_id: i64,
}

impl MemoryTable {
    fn assign_id(&mut self) -> SeriesId {
        self.next_id += 1;
        SeriesId::new(self.next_id)
    }
}

/// In-memory series store backed by a `BTreeMap` behind an async lock.
///
/// Ids are assigned monotonically and never reused, matching autoincrement
/// behavior of the relational backend.
#[derive(Debug, Default)]
pub struct InMemorySeriesStore {
    table: RwLock<MemoryTable>,
}

impl InMemorySeriesStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently stored
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Whether the store holds no rows
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl SeriesStore for InMemorySeriesStore {
    async fn list(&self) -> Result<Vec<Series>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get(&self, id: SeriesId) -> Result<Option<Series>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id.as_i64()).cloned())
    }

    async fn create(&self, draft: SeriesDraft) -> Result<Series, StoreError> {
        let mut table = self.table.write().await;
        let id = table.assign_id();
        let series = Series::from_draft(id, draft);
        table.rows.insert(id.as_i64(), series.clone());
        debug!("Created series {}", id);
        Ok(series)
    }

    async fn replace(&self, id: SeriesId, draft: SeriesDraft) -> Result<Series, StoreError> {
        let mut table = self.table.write().await;
        let series = Series::from_draft(id, draft);
        // Writes through only when the row exists; like the relational
        // backend, replace does not report a missing id.
        if let Some(row) = table.rows.get_mut(&id.as_i64()) {
            *row = series.clone();
        }
        Ok(series)
    }

    async fn delete(&self, id: SeriesId) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id.as_i64()).is_some())
    }

    async fn advance_episode(&self, id: SeriesId) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id.as_i64()) {
            Some(row) => {
                row.last_episode_watched += 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_status(&self, id: SeriesId, status: &str) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id.as_i64()) {
            Some(row) => {
                row.status = status.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn adjust_ranking(&self, id: SeriesId, delta: i32) -> Result<bool, StoreError> {
        let mut table = self.table.write().await;
        match table.rows.get_mut(&id.as_i64()) {
            Some(row) => {
                row.ranking += delta;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
