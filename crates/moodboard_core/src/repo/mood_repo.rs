//! Mood entry repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide append and full-listing APIs over `mood_entries` storage.
//! - Provide per-category counts for stats aggregation.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - The contract has no update or delete operation.
//! - Listing order is `created_at DESC, seq DESC`: newest first, and later
//!   inserts first among same-millisecond entries.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::mood::{Mood, MoodEntry, MoodEntryId};
use crate::stats::MoodCounts;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ENTRY_SELECT_SQL: &str = "SELECT
    id,
    mood,
    comment,
    employee_name,
    created_at
FROM mood_entries";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted mood data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the append-only entry collection.
pub trait MoodRepository {
    /// Appends one entry and returns its id.
    fn append_entry(&self, entry: &MoodEntry) -> RepoResult<MoodEntryId>;
    /// Returns every stored entry, newest first.
    fn list_entries(&self) -> RepoResult<Vec<MoodEntry>>;
    /// Returns per-category entry counts.
    fn count_by_mood(&self) -> RepoResult<MoodCounts>;
    /// Returns the number of stored entries.
    fn count_entries(&self) -> RepoResult<u64>;
}

/// SQLite-backed entry repository.
pub struct SqliteMoodRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMoodRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MoodRepository for SqliteMoodRepository<'_> {
    fn append_entry(&self, entry: &MoodEntry) -> RepoResult<MoodEntryId> {
        self.conn.execute(
            "INSERT INTO mood_entries (
                id,
                mood,
                comment,
                employee_name,
                created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                entry.id().to_string(),
                entry.mood().as_str(),
                entry.comment(),
                entry.employee_name(),
                entry.timestamp().timestamp_millis(),
            ],
        )?;

        Ok(entry.id())
    }

    fn list_entries(&self) -> RepoResult<Vec<MoodEntry>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ENTRY_SELECT_SQL} ORDER BY created_at DESC, seq DESC;"
        ))?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();

        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }

        Ok(entries)
    }

    fn count_by_mood(&self) -> RepoResult<MoodCounts> {
        let mut stmt = self
            .conn
            .prepare("SELECT mood, COUNT(*) FROM mood_entries GROUP BY mood;")?;
        let mut rows = stmt.query([])?;
        let mut counts = MoodCounts::default();

        while let Some(row) = rows.next()? {
            let mood_text: String = row.get(0)?;
            let mood = parse_mood(&mood_text)?;
            let count: i64 = row.get(1)?;
            counts.add(mood, non_negative(count)?);
        }

        Ok(counts)
    }

    fn count_entries(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM mood_entries;", [], |row| row.get(0))?;
        non_negative(count)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<MoodEntry> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in mood_entries.id"))
    })?;

    let mood_text: String = row.get("mood")?;
    let mood = parse_mood(&mood_text)?;

    let created_at: i64 = row.get("created_at")?;
    let timestamp = DateTime::<Utc>::from_timestamp_millis(created_at).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "out of range timestamp `{created_at}` in mood_entries.created_at"
        ))
    })?;

    MoodEntry::restore(
        id,
        mood,
        row.get("comment")?,
        row.get("employee_name")?,
        timestamp,
    )
    .ok_or_else(|| {
        RepoError::InvalidData(format!("blank name or comment in mood_entries row `{id_text}`"))
    })
}

fn parse_mood(value: &str) -> RepoResult<Mood> {
    value.parse::<Mood>().map_err(|_| {
        RepoError::InvalidData(format!("invalid mood `{value}` in mood_entries.mood"))
    })
}

fn non_negative(count: i64) -> RepoResult<u64> {
    u64::try_from(count)
        .map_err(|_| RepoError::InvalidData(format!("negative row count `{count}`")))
}
