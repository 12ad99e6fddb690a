//! Core data types for serietrack

use serde::{Deserialize, Serialize};

/// Unique identifier for a series, assigned by storage on insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesId(pub i64);

impl SeriesId {
    /// Create a new SeriesId
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for SeriesId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SeriesId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A tracked show record with watch progress and a ranking score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Storage-assigned identifier, immutable once set
    pub id: SeriesId,
    /// Display title of the show
    pub title: String,
    /// Free-text watch state (e.g. "Ongoing", "Completed"); not constrained
    /// to an enumerated set
    pub status: String,
    /// Number of the last episode watched
    pub last_episode_watched: i32,
    /// Total episodes the show has
    pub total_episodes: i32,
    /// Free-integer score adjusted by up/down actions, no bounds
    pub ranking: i32,
}

impl Series {
    /// Attach a storage-assigned id to a draft
    pub fn from_draft(id: SeriesId, draft: SeriesDraft) -> Self {
        Self {
            id,
            title: draft.title,
            status: draft.status,
            last_episode_watched: draft.last_episode_watched,
            total_episodes: draft.total_episodes,
            ranking: draft.ranking,
        }
    }
}

/// A series as submitted by a client: every field except the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDraft {
    pub title: String,
    pub status: String,
    pub last_episode_watched: i32,
    pub total_episodes: i32,
    pub ranking: i32,
}

impl SeriesDraft {
    /// Create a new draft with the given title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: String::new(),
            last_episode_watched: 0,
            total_episodes: 0,
            ranking: 0,
        }
    }

    /// Set the watch status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the watch progress
    pub fn with_progress(mut self, last_episode_watched: i32, total_episodes: i32) -> Self {
        self.last_episode_watched = last_episode_watched;
        self.total_episodes = total_episodes;
        self
    }

    /// Set the ranking score
    pub fn with_ranking(mut self, ranking: i32) -> Self {
        self.ranking = ranking;
        self
    }
}

/// Request body for the status patch operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_wire_field_names() {
        let series = Series {
            id: SeriesId::new(7),
            title: "Breaking Bad".to_string(),
            status: "Completed".to_string(),
            last_episode_watched: 62,
            total_episodes: 62,
            ranking: 10,
        };

        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["lastEpisodeWatched"], 62);
        assert_eq!(json["totalEpisodes"], 62);
        assert_eq!(json["ranking"], 10);
    }

    #[test]
    fn test_draft_roundtrip() {
        let body = r#"{"title":"X","status":"Ongoing","lastEpisodeWatched":0,"totalEpisodes":12,"ranking":5}"#;
        let draft: SeriesDraft = serde_json::from_str(body).unwrap();

        assert_eq!(draft.title, "X");
        assert_eq!(draft.status, "Ongoing");
        assert_eq!(draft.last_episode_watched, 0);
        assert_eq!(draft.total_episodes, 12);
        assert_eq!(draft.ranking, 5);
    }

    #[test]
    fn test_draft_rejects_missing_fields() {
        let body = r#"{"title":"X"}"#;
        assert!(serde_json::from_str::<SeriesDraft>(body).is_err());
    }

    #[test]
    fn test_draft_builders() {
        let draft = SeriesDraft::new("Attack on Titan")
            .with_status("Ongoing")
            .with_progress(87, 87)
            .with_ranking(9);

        assert_eq!(draft.title, "Attack on Titan");
        assert_eq!(draft.ranking, 9);
    }

    #[test]
    fn test_series_id_display() {
        assert_eq!(SeriesId::new(42).to_string(), "42");
    }
}
