//! Core types for pronunciation practice.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries in the catalog.
pub const CATALOG_SIZE: usize = 99;

/// Number of entries in each tier.
pub const TIER_SIZE: usize = 33;

/// Accuracy an attempt needs to extend the current streak.
pub const STREAK_THRESHOLD: u8 = 70;

/// Difficulty band, derived from an item's position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    /// All tiers in catalog order.
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    /// Tier for a catalog index. Indices past the catalog end are `Advanced`.
    pub fn for_index(index: usize) -> Self {
        if index < TIER_SIZE {
            Self::Beginner
        } else if index < 2 * TIER_SIZE {
            Self::Intermediate
        } else {
            Self::Advanced
        }
    }

    /// Minimum accuracy that masters an item of this tier.
    pub fn mastery_threshold(self) -> u8 {
        match self {
            Self::Beginner => 70,
            Self::Intermediate => 75,
            Self::Advanced => 80,
        }
    }

    /// Catalog indices covered by this tier.
    pub fn indices(self) -> std::ops::Range<usize> {
        let start = match self {
            Self::Beginner => 0,
            Self::Intermediate => TIER_SIZE,
            Self::Advanced => 2 * TIER_SIZE,
        };
        start..start + TIER_SIZE
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// One immutable catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NamedItem {
    pub index: usize,
    /// Full form with diacritics.
    pub canonical_text: &'static str,
    /// Form with diacritics stripped.
    pub simple_text: &'static str,
    pub transliteration: &'static str,
    pub meaning: &'static str,
}

impl NamedItem {
    pub fn tier(&self) -> Tier {
        Tier::for_index(self.index)
    }

    /// 1-based number shown to learners.
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

/// Record of one completed recognition in practice mode.
///
/// Field names on the wire match the stored attempt log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    #[serde(rename = "nameIndex")]
    pub item_index: usize,
    #[serde(rename = "target")]
    pub target_text: String,
    #[serde(rename = "recognized")]
    pub recognized_text: String,
    pub accuracy: u8,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "level")]
    pub tier: Tier,
}

/// Aggregate statistics over the attempt log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AttemptStats {
    pub total_attempts: usize,
    /// Mean accuracy, rounded half up.
    pub average_accuracy: u8,
    pub best_score: u8,
    pub current_streak: usize,
}

/// Mastery count for one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierProgress {
    pub tier: Tier,
    pub mastered: usize,
    pub total: usize,
    pub threshold: u8,
}

/// Mastery progress across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MasteryProgress {
    pub mastered: usize,
    pub total: usize,
    /// Rounded share of mastered items, 0-100.
    pub percentage: u8,
    pub tiers: Vec<TierProgress>,
}

/// Catalog listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogFilter {
    All,
    Beginner,
    Intermediate,
    Advanced,
    Mastered,
    NotMastered,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self::All
    }
}

impl CatalogFilter {
    /// Whether an item at `index` passes the filter.
    pub fn matches(self, index: usize, mastered: bool) -> bool {
        match self {
            Self::All => true,
            Self::Beginner => Tier::for_index(index) == Tier::Beginner,
            Self::Intermediate => Tier::for_index(index) == Tier::Intermediate,
            Self::Advanced => Tier::for_index(index) == Tier::Advanced,
            Self::Mastered => mastered,
            Self::NotMastered => !mastered,
        }
    }
}

/// Outcome of one position in a recitation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecitationOutcome {
    Correct,
    Incorrect,
    Skipped,
}

/// One line of recitation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub position: usize,
    pub outcome: RecitationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognized_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<u8>,
    pub timestamp: DateTime<Utc>,
}

/// Summary written when a recitation session completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub date: DateTime<Utc>,
    pub success_rate: u8,
    pub total_mistakes: u32,
    /// Milliseconds since the Unix epoch.
    pub completion_time: i64,
}

impl CompletionRecord {
    /// Build a record for a session finished at `now`.
    pub fn new(total_mistakes: u32, now: DateTime<Utc>) -> Self {
        Self {
            date: now,
            success_rate: success_rate(total_mistakes),
            total_mistakes,
            completion_time: now.timestamp_millis(),
        }
    }
}

/// `round((99 - mistakes) / 99 * 100)`, floored at zero.
pub fn success_rate(total_mistakes: u32) -> u8 {
    let size = CATALOG_SIZE as u32;
    if total_mistakes >= size {
        return 0;
    }
    let correct = size - total_mistakes;
    ((correct * 200 + size) / (2 * size)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_partition_the_catalog() {
        assert_eq!(Tier::for_index(0), Tier::Beginner);
        assert_eq!(Tier::for_index(32), Tier::Beginner);
        assert_eq!(Tier::for_index(33), Tier::Intermediate);
        assert_eq!(Tier::for_index(65), Tier::Intermediate);
        assert_eq!(Tier::for_index(66), Tier::Advanced);
        assert_eq!(Tier::for_index(98), Tier::Advanced);

        let covered: usize = Tier::ALL.iter().map(|t| t.indices().len()).sum();
        assert_eq!(covered, CATALOG_SIZE);
        assert_eq!(Tier::Advanced.indices().end, CATALOG_SIZE);
    }

    #[test]
    fn thresholds_rise_with_tier() {
        assert_eq!(Tier::Beginner.mastery_threshold(), 70);
        assert_eq!(Tier::Intermediate.mastery_threshold(), 75);
        assert_eq!(Tier::Advanced.mastery_threshold(), 80);
    }

    #[test]
    fn tier_string_roundtrip() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_str(tier.as_str()), Some(tier));
        }
        assert_eq!(Tier::from_str("expert"), None);
    }

    #[test]
    fn filter_matches() {
        assert!(CatalogFilter::All.matches(50, false));
        assert!(CatalogFilter::Intermediate.matches(40, false));
        assert!(!CatalogFilter::Intermediate.matches(70, false));
        assert!(CatalogFilter::Mastered.matches(3, true));
        assert!(!CatalogFilter::NotMastered.matches(3, true));
    }

    #[test]
    fn success_rate_formula() {
        assert_eq!(success_rate(0), 100);
        assert_eq!(success_rate(1), 99);
        assert_eq!(success_rate(10), 90);
        assert_eq!(success_rate(50), 49);
        assert_eq!(success_rate(99), 0);
        assert_eq!(success_rate(250), 0);
    }

    #[test]
    fn attempt_uses_stored_field_names() {
        let attempt = Attempt {
            item_index: 4,
            target_text: "السلام".to_string(),
            recognized_text: "السلام".to_string(),
            accuracy: 100,
            timestamp: Utc::now(),
            tier: Tier::Beginner,
        };
        let value = serde_json::to_value(&attempt).unwrap();
        assert_eq!(value["nameIndex"], 4);
        assert_eq!(value["level"], "beginner");
        assert_eq!(value["target"], "السلام");
    }
}
