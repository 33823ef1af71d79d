//! Domain model for mood submissions.
//!
//! # Responsibility
//! - Define the canonical entry record and its fixed mood categories.
//!
//! # Invariants
//! - Every entry is identified by a stable `MoodEntryId`.
//! - Entries are append-only: no update or delete shape exists.

pub mod mood;
