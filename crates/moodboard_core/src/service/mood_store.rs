//! Process-lifetime mood store shared across request handlers.
//!
//! # Responsibility
//! - Own the single in-memory connection holding every entry.
//! - Serialize submit and read operations behind one mutex.
//!
//! # Invariants
//! - No caller ever receives a handle to the connection; reads return owned
//!   copies.
//! - Each operation holds the lock for its full duration, so `snapshot`
//!   lists and counts the same state.
//! - Dropping the store discards all entries.

use crate::db::{open_db_in_memory, DbResult};
use crate::model::mood::MoodEntry;
use crate::repo::mood_repo::SqliteMoodRepository;
use crate::service::mood_service::{
    MoodService, MoodServiceError, MoodSnapshot, SubmitMoodRequest,
};
use crate::stats::MoodStats;
use log::error;
use rusqlite::Connection;
use std::sync::Mutex;

/// Lock-guarded owner of the entry collection.
pub struct MoodStore {
    conn: Mutex<Connection>,
}

impl MoodStore {
    /// Opens a fresh, empty in-memory store.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    /// Wraps an already migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Creates and appends one entry.
    pub fn submit(&self, request: SubmitMoodRequest) -> Result<MoodEntry, MoodServiceError> {
        self.with_service(|service| service.submit(request))
    }

    /// Lists all entries, newest first.
    pub fn list_all(&self) -> Result<Vec<MoodEntry>, MoodServiceError> {
        self.with_service(|service| service.list_all())
    }

    /// Computes the stats snapshot for the current contents.
    pub fn compute_stats(&self) -> Result<MoodStats, MoodServiceError> {
        self.with_service(|service| service.compute_stats())
    }

    /// Lists entries and computes stats under a single lock.
    pub fn snapshot(&self) -> Result<MoodSnapshot, MoodServiceError> {
        self.with_service(|service| service.snapshot())
    }

    /// Returns the number of stored entries.
    pub fn len(&self) -> Result<u64, MoodServiceError> {
        self.with_service(|service| service.count())
    }

    /// Returns whether no entry has been submitted yet.
    pub fn is_empty(&self) -> Result<bool, MoodServiceError> {
        Ok(self.len()? == 0)
    }

    fn with_service<T>(
        &self,
        f: impl FnOnce(&MoodService<SqliteMoodRepository<'_>>) -> Result<T, MoodServiceError>,
    ) -> Result<T, MoodServiceError> {
        let conn = self.conn.lock().map_err(|_| {
            error!("event=store_lock module=store status=error error_code=lock_poisoned");
            MoodServiceError::StorePoisoned
        })?;
        let service = MoodService::new(SqliteMoodRepository::new(&conn));
        f(&service)
    }
}
