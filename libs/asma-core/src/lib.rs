//! Core library for practicing the 99 Names, shared by every front-end.
//!
//! Provides:
//! - The fixed catalog with tier lookup
//! - Transcript normalization and accuracy scoring (Levenshtein distance)
//! - Progress tracking with mastery and achievements
//! - The sequential recitation state machine
//! - Speech-recognition collaborator types and the persisted-state codec

pub mod achievements;
pub mod catalog;
pub mod error;
pub mod matching;
pub mod recitation;
pub mod speech;
pub mod store;
pub mod tracker;
pub mod types;

pub use achievements::{AchievementDefinition, AchievementId, AchievementStatus};
pub use error::{RecitationError, StoreError, TrackerError};
pub use matching::{
    compare, compare_item, levenshtein_distance, normalize, score, score_item, Feedback,
    MatchResult,
};
pub use recitation::{
    Effect, ListenToken, RecitationConfig, RecitationPhase, RecitationSession, RecitationSnapshot,
};
pub use speech::{ListenConfig, RecognitionError, RecognitionErrorKind, TranscriptBuffer, TranscriptSegment};
pub use store::PersistedProgress;
pub use tracker::{AttemptOutcome, ProgressEvent, ProgressObserver, Tracker};
pub use types::{
    Attempt, AttemptStats, CatalogFilter, CompletionRecord, HistoryEntry, MasteryProgress,
    NamedItem, RecitationOutcome, Tier, TierProgress,
};
