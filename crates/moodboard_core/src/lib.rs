//! Core domain logic for the employee mood board.
//! This crate owns the entry store and the stats computation.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod stats;

pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::mood::{Mood, MoodEntry, MoodEntryId, MoodValidationError, ANONYMOUS_EMPLOYEE};
pub use repo::mood_repo::{MoodRepository, RepoError, RepoResult, SqliteMoodRepository};
pub use service::mood_service::{MoodService, MoodServiceError, MoodSnapshot, SubmitMoodRequest};
pub use service::mood_store::MoodStore;
pub use stats::{MoodCounts, MoodStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
