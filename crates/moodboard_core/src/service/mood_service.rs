//! Mood submission and query use-cases.
//!
//! # Responsibility
//! - Create normalized entries and append them through a repository.
//! - Provide the full newest-first listing and the stats snapshot.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - A rejected submission leaves storage untouched.
//! - Stats are recomputed from storage on every call.

use crate::model::mood::{Mood, MoodEntry};
use crate::repo::mood_repo::{MoodRepository, RepoError};
use crate::stats::MoodStats;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for mood use-cases.
#[derive(Debug)]
pub enum MoodServiceError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// The store lock was poisoned by a panicking holder.
    StorePoisoned,
}

impl Display for MoodServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::StorePoisoned => write!(f, "mood store lock poisoned"),
        }
    }
}

impl Error for MoodServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::StorePoisoned => None,
        }
    }
}

impl From<RepoError> for MoodServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Validated submission input.
///
/// `mood` is already a [`Mood`]; string validation belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitMoodRequest {
    pub mood: Mood,
    pub comment: Option<String>,
    pub employee_name: Option<String>,
}

impl SubmitMoodRequest {
    /// Request with only a mood; comment and name are absent.
    pub fn new(mood: Mood) -> Self {
        Self {
            mood,
            comment: None,
            employee_name: None,
        }
    }
}

/// Entries and stats read from the same store state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodSnapshot {
    /// All entries, newest first.
    pub entries: Vec<MoodEntry>,
    pub stats: MoodStats,
}

/// Mood service facade over repository implementations.
pub struct MoodService<R: MoodRepository> {
    repo: R,
}

impl<R: MoodRepository> MoodService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one entry and appends it to storage.
    ///
    /// # Contract
    /// - Generates a fresh id and the current timestamp.
    /// - Blank `employee_name` becomes `Anonymous`; blank `comment` is dropped.
    pub fn submit(&self, request: SubmitMoodRequest) -> Result<MoodEntry, MoodServiceError> {
        let entry = MoodEntry::new(request.mood, request.comment, request.employee_name);
        match self.repo.append_entry(&entry) {
            Ok(entry_id) => {
                info!(
                    "event=mood_submit module=service status=ok entry_id={} mood={} has_comment={}",
                    entry_id,
                    entry.mood(),
                    entry.comment().is_some()
                );
                Ok(entry)
            }
            Err(err) => {
                error!(
                    "event=mood_submit module=service status=error mood={} error={}",
                    entry.mood(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Lists all entries, newest first.
    pub fn list_all(&self) -> Result<Vec<MoodEntry>, MoodServiceError> {
        Ok(self.repo.list_entries()?)
    }

    /// Computes the stats snapshot for the current store contents.
    pub fn compute_stats(&self) -> Result<MoodStats, MoodServiceError> {
        let counts = self.repo.count_by_mood()?;
        Ok(MoodStats::from_counts(&counts))
    }

    /// Reads the listing and stats together.
    pub fn snapshot(&self) -> Result<MoodSnapshot, MoodServiceError> {
        let entries = self.list_all()?;
        let stats = self.compute_stats()?;
        Ok(MoodSnapshot { entries, stats })
    }

    /// Returns the number of stored entries.
    pub fn count(&self) -> Result<u64, MoodServiceError> {
        Ok(self.repo.count_entries()?)
    }
}
