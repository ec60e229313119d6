//! Stored form of practice progress and recitation records.
//!
//! Each value is stored as JSON under a fixed key of a string key-value
//! store. Reads are lenient: a missing or undecodable value loads as empty so
//! that a corrupt entry never blocks startup.

use crate::achievements::AchievementId;
use crate::error::StoreError;
use crate::types::{Attempt, CompletionRecord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Attempt log.
pub const ATTEMPTS_KEY: &str = "namesAttempts";
/// Mastered catalog indices.
pub const MASTERED_KEY: &str = "masteredNames";
/// Unlocked achievement ids.
pub const ACHIEVEMENTS_KEY: &str = "unlockedAchievements";
/// Recitation completion records.
pub const RECORDS_KEY: &str = "recitationRecords";

/// Practice progress as it is stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedProgress {
    pub attempts: Vec<Attempt>,
    pub mastered: Vec<usize>,
    pub unlocked: Vec<AchievementId>,
}

impl PersistedProgress {
    /// Decode from raw stored values, any of which may be absent.
    pub fn decode(
        attempts: Option<&str>,
        mastered: Option<&str>,
        unlocked: Option<&str>,
    ) -> Self {
        Self {
            attempts: decode_or_default(ATTEMPTS_KEY, attempts),
            mastered: decode_or_default(MASTERED_KEY, mastered),
            unlocked: decode_or_default(ACHIEVEMENTS_KEY, unlocked),
        }
    }

    /// Encode into `(key, value)` pairs.
    pub fn encode(&self) -> Result<Vec<(&'static str, String)>, StoreError> {
        Ok(vec![
            (ATTEMPTS_KEY, encode(ATTEMPTS_KEY, &self.attempts)?),
            (MASTERED_KEY, encode(MASTERED_KEY, &self.mastered)?),
            (ACHIEVEMENTS_KEY, encode(ACHIEVEMENTS_KEY, &self.unlocked)?),
        ])
    }
}

/// Decode the completion record list.
pub fn decode_records(raw: Option<&str>) -> Vec<CompletionRecord> {
    decode_or_default(RECORDS_KEY, raw)
}

/// Encode the completion record list.
pub fn encode_records(records: &[CompletionRecord]) -> Result<String, StoreError> {
    encode(RECORDS_KEY, records)
}

/// Add `record` to the stored list in `raw`, returning the new stored value.
pub fn append_record(raw: Option<&str>, record: CompletionRecord) -> Result<String, StoreError> {
    let mut records = decode_records(raw);
    records.push(record);
    encode_records(&records)
}

fn decode_or_default<T>(key: &str, raw: Option<&str>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(key, %error, "discarding unreadable stored value");
            T::default()
        }
    }
}

fn encode<T: Serialize + ?Sized>(key: &'static str, value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })
}
