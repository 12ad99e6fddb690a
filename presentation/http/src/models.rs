//! Wire models for the HTTP layer

use serde::{Deserialize, Serialize};

/// Re-export core wire types for convenience
pub use serietrack_core::types::{Series, SeriesDraft, SeriesId, StatusUpdate};

/// Simple JSON message envelope, used for the root greeting and for
/// patch confirmations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_shape() {
        let json = serde_json::to_value(Message::new("Hello, World!")).unwrap();
        assert_eq!(json["message"], "Hello, World!");
    }
}
