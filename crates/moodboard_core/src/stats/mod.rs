//! Aggregate statistics over stored mood entries.
//!
//! # Responsibility
//! - Count entries per mood category.
//! - Derive per-category integer percentages for the admin view.
//!
//! # Invariants
//! - Stats are recomputed from counts on every call; nothing is cached.
//! - Each percentage is rounded independently, so the three values may sum
//!   to 99 or 101.
//! - An empty store yields all-zero percentages.

use crate::model::mood::Mood;
use serde::{Deserialize, Serialize};

/// Raw per-category entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoodCounts {
    pub happy: u64,
    pub neutral: u64,
    pub sad: u64,
}

impl MoodCounts {
    /// Total number of entries across all categories.
    pub fn total(&self) -> u64 {
        self.happy + self.neutral + self.sad
    }

    /// Count for one category.
    pub fn get(&self, mood: Mood) -> u64 {
        match mood {
            Mood::Happy => self.happy,
            Mood::Neutral => self.neutral,
            Mood::Sad => self.sad,
        }
    }

    /// Adds `count` entries to one category.
    pub fn add(&mut self, mood: Mood, count: u64) {
        match mood {
            Mood::Happy => self.happy += count,
            Mood::Neutral => self.neutral += count,
            Mood::Sad => self.sad += count,
        }
    }
}

/// Stats snapshot: total entry count plus per-category percentages (0-100).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodStats {
    pub total: u64,
    pub happy: u8,
    pub neutral: u8,
    pub sad: u8,
}

impl MoodStats {
    /// Builds a snapshot from per-category counts.
    pub fn from_counts(counts: &MoodCounts) -> Self {
        let total = counts.total();
        Self {
            total,
            happy: rounded_percentage(counts.happy, total),
            neutral: rounded_percentage(counts.neutral, total),
            sad: rounded_percentage(counts.sad, total),
        }
    }

    /// Percentage for one category.
    pub fn percentage(&self, mood: Mood) -> u8 {
        match mood {
            Mood::Happy => self.happy,
            Mood::Neutral => self.neutral,
            Mood::Sad => self.sad,
        }
    }
}

/// Rounds `count / total * 100` to the nearest integer, halves rounding up.
///
/// Returns 0 when `total` is 0.
pub fn rounded_percentage(count: u64, total: u64) -> u8 {
    if total == 0 {
        return 0;
    }
    let count = u128::from(count.min(total));
    let total = u128::from(total);
    // floor((200 * count + total) / (2 * total)) == round_half_up(100 * count / total)
    let rounded = (200 * count + total) / (2 * total);
    u8::try_from(rounded).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::{rounded_percentage, MoodCounts, MoodStats};
    use crate::model::mood::Mood;

    #[test]
    fn empty_counts_yield_zero_stats() {
        let stats = MoodStats::from_counts(&MoodCounts::default());
        assert_eq!(stats, MoodStats::default());
    }

    #[test]
    fn one_happy_two_sad() {
        let counts = MoodCounts {
            happy: 1,
            neutral: 0,
            sad: 2,
        };
        let stats = MoodStats::from_counts(&counts);
        assert_eq!(
            stats,
            MoodStats {
                total: 3,
                happy: 33,
                neutral: 0,
                sad: 67,
            }
        );
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(1, 2), 50);
        assert_eq!(rounded_percentage(1, 200), 1);
        assert_eq!(rounded_percentage(1, 201), 0);
    }

    #[test]
    fn independent_rounding_can_exceed_one_hundred() {
        // 1/8 -> 12.5 -> 13, 1/8 -> 13, 6/8 -> 75
        let counts = MoodCounts {
            happy: 1,
            neutral: 1,
            sad: 6,
        };
        let stats = MoodStats::from_counts(&counts);
        let sum: u32 = Mood::ALL
            .iter()
            .map(|mood| u32::from(stats.percentage(*mood)))
            .sum();
        assert_eq!(sum, 101);
    }

    #[test]
    fn independent_rounding_can_fall_short_of_one_hundred() {
        // each third rounds down to 33
        let counts = MoodCounts {
            happy: 1,
            neutral: 1,
            sad: 1,
        };
        let stats = MoodStats::from_counts(&counts);
        assert_eq!((stats.happy, stats.neutral, stats.sad), (33, 33, 33));
    }

    #[test]
    fn counts_add_per_category() {
        let mut counts = MoodCounts::default();
        counts.add(Mood::Neutral, 2);
        counts.add(Mood::Sad, 1);
        assert_eq!(counts.get(Mood::Neutral), 2);
        assert_eq!(counts.total(), 3);
    }
}
