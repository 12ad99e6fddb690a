//! # serietrack core
//!
//! Core types, traits, and errors for the serietrack watch-progress service.
//! This crate provides the abstractions that storage adapters and
//! presentation layers implement; it performs no I/O of its own.

pub mod errors;
pub mod traits;
pub mod types;

// Re-export commonly used types and traits
pub use errors::{CoreError, PresentationError, StoreError};
pub use traits::SeriesStore;
pub use types::{Series, SeriesDraft, SeriesId, StatusUpdate};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::traits::*;
    pub use crate::types::*;
    pub use async_trait::async_trait;
}
