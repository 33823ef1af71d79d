//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the append/list/count contract for mood entries.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Only fully constructed `MoodEntry` values can be appended, so an
//!   invalid mood category has no path into storage.

pub mod mood_repo;
