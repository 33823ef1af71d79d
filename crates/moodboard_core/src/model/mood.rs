//! Mood entry domain model.
//!
//! # Responsibility
//! - Define the fixed mood categories and the submitted entry record.
//! - Apply creation-time normalization for optional free-text fields.
//!
//! # Invariants
//! - `id` is generated once and never reused for another entry.
//! - `mood` is always one of `happy|neutral|sad`; other values cannot be
//!   represented.
//! - `employee_name` is never blank; missing names become `Anonymous`.
//! - `comment` is either `None` or a non-blank string.
//! - Entries have no mutation API after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Sentinel stored when a submission carries no employee name.
pub const ANONYMOUS_EMPLOYEE: &str = "Anonymous";

/// Stable identifier for one submitted entry.
pub type MoodEntryId = Uuid;

/// Fixed mood category carried by every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Neutral,
    Sad,
}

impl Mood {
    /// All categories in display order.
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Neutral, Mood::Sad];

    /// Wire/storage name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Neutral => "neutral",
            Self::Sad => "sad",
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = MoodValidationError;

    /// Parses an exact, case-sensitive category name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "happy" => Ok(Self::Happy),
            "neutral" => Ok(Self::Neutral),
            "sad" => Ok(Self::Sad),
            other => Err(MoodValidationError::InvalidMood(other.to_string())),
        }
    }
}

/// Validation failure for submitted mood input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodValidationError {
    /// Mood value is not one of `happy|neutral|sad`.
    InvalidMood(String),
}

impl Display for MoodValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMood(value) => {
                write!(f, "invalid mood `{value}`; expected happy|neutral|sad")
            }
        }
    }
}

impl Error for MoodValidationError {}

/// One employee mood submission.
///
/// Fields are private: the constructors are the only way in, so every entry
/// carries normalized name and comment values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    id: MoodEntryId,
    mood: Mood,
    /// Omitted from JSON when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    employee_name: String,
    /// Creation instant, millisecond precision. Serialized as RFC 3339.
    timestamp: DateTime<Utc>,
}

impl MoodEntry {
    /// Creates a new entry with a generated id and the current time.
    pub fn new(mood: Mood, comment: Option<String>, employee_name: Option<String>) -> Self {
        Self::with_timestamp(mood, comment, employee_name, now_millis())
    }

    /// Creates a new entry with a generated id at the given instant.
    ///
    /// The instant is truncated to millisecond precision so the returned
    /// value matches what storage reads back.
    pub fn with_timestamp(
        mood: Mood,
        comment: Option<String>,
        employee_name: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            mood,
            comment: normalize_comment(comment),
            employee_name: normalize_employee_name(employee_name),
            timestamp: truncate_to_millis(timestamp),
        }
    }

    /// Rebuilds a stored entry, keeping its persisted identity.
    ///
    /// Returns `None` when the stored fields break the normalization
    /// invariants.
    pub(crate) fn restore(
        id: MoodEntryId,
        mood: Mood,
        comment: Option<String>,
        employee_name: String,
        timestamp: DateTime<Utc>,
    ) -> Option<Self> {
        if employee_name.trim().is_empty() {
            return None;
        }
        if comment.as_deref().is_some_and(|value| value.trim().is_empty()) {
            return None;
        }
        Some(Self {
            id,
            mood,
            comment,
            employee_name,
            timestamp,
        })
    }

    pub fn id(&self) -> MoodEntryId {
        self.id
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Submitter name, or `Anonymous`.
    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Maps a missing or blank comment to `None`; keeps other text verbatim.
pub fn normalize_comment(comment: Option<String>) -> Option<String> {
    comment.filter(|value| !value.trim().is_empty())
}

/// Maps a missing or blank name to [`ANONYMOUS_EMPLOYEE`].
pub fn normalize_employee_name(employee_name: Option<String>) -> String {
    employee_name
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| ANONYMOUS_EMPLOYEE.to_string())
}

fn now_millis() -> DateTime<Utc> {
    truncate_to_millis(Utc::now())
}

fn truncate_to_millis(timestamp: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(timestamp.timestamp_millis()).unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::{normalize_comment, normalize_employee_name, Mood, MoodEntry};
    use chrono::{DateTime, Timelike};

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!("sad".parse::<Mood>().unwrap(), Mood::Sad);
        assert!("Sad".parse::<Mood>().is_err());
        assert!(" happy".parse::<Mood>().is_err());
    }

    #[test]
    fn blank_fields_normalize() {
        assert_eq!(normalize_comment(Some("  \t".to_string())), None);
        assert_eq!(normalize_employee_name(Some("   ".to_string())), "Anonymous");
        assert_eq!(normalize_employee_name(None), "Anonymous");
    }

    #[test]
    fn non_blank_fields_are_kept_verbatim() {
        assert_eq!(
            normalize_comment(Some(" padded ".to_string())).as_deref(),
            Some(" padded ")
        );
        assert_eq!(normalize_employee_name(Some("Alex".to_string())), "Alex");
    }

    #[test]
    fn timestamp_is_truncated_to_millis() {
        let precise = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let entry = MoodEntry::with_timestamp(Mood::Happy, None, None, precise);
        assert_eq!(entry.timestamp().nanosecond(), 123_000_000);
    }

    #[test]
    fn restore_rejects_blank_name_and_comment() {
        let entry = MoodEntry::new(Mood::Sad, None, None);
        let restore = |comment: Option<&str>, name: &str| {
            MoodEntry::restore(
                entry.id(),
                entry.mood(),
                comment.map(str::to_string),
                name.to_string(),
                entry.timestamp(),
            )
        };

        assert!(restore(None, "  ").is_none());
        assert!(restore(Some(" "), "Alex").is_none());
        assert_eq!(restore(None, "Anonymous"), Some(entry.clone()));
    }
}
