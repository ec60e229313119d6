//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from asma-core
pub use asma_core::{
    AchievementStatus, AttemptOutcome, AttemptStats, CatalogFilter, CompletionRecord, Effect,
    Feedback, ListenConfig, ListenToken, MasteryProgress, MatchResult, NamedItem,
    RecitationSnapshot, RecognitionError, RecognitionErrorKind, Tier, TranscriptSegment,
};

// === Catalog Types ===

/// Query parameters for the catalog listing
#[derive(Debug, Default, Deserialize)]
pub struct NamesQuery {
    #[serde(default)]
    pub filter: CatalogFilter,
}

/// Catalog entry with the learner's mastery flag
#[derive(Debug, Clone, Serialize)]
pub struct NameEntry {
    #[serde(flatten)]
    pub item: NamedItem,
    pub number: usize,
    pub tier: Tier,
    pub mastered: bool,
}

impl NameEntry {
    pub fn new(item: &NamedItem, mastered: bool) -> Self {
        Self {
            item: *item,
            number: item.number(),
            tier: item.tier(),
            mastered,
        }
    }
}

/// A single catalog entry with the engine setup for practicing it
#[derive(Debug, Clone, Serialize)]
pub struct NameDetail {
    #[serde(flatten)]
    pub entry: NameEntry,
    pub listen: ListenConfig,
}

// === Scoring Types ===

/// Request to score a transcript without recording it.
///
/// Exactly one of `target` or `item_index` must be given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub recognized: String,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub item_index: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub message: &'static str,
}

impl From<MatchResult> for ScoreResponse {
    fn from(result: MatchResult) -> Self {
        let message = result.feedback.message();
        Self { result, message }
    }
}

// === Practice Types ===

/// Record a practice attempt for one catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordAttemptRequest {
    pub item_index: usize,
    pub recognized: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordAttemptResponse {
    #[serde(flatten)]
    pub outcome: AttemptOutcome,
    pub message: &'static str,
    pub progress: MasteryProgress,
}

/// Recognition error reported by a practice front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionErrorRequest {
    pub error: RecognitionErrorKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetProgressRequest {
    #[serde(default)]
    pub confirm: bool,
}

// === Recitation Types ===

/// State after a recitation action, plus the effects the client must perform
#[derive(Debug, Clone, Serialize)]
pub struct RecitationResponse {
    pub session: RecitationSnapshot,
    pub effects: Vec<Effect>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenResultRequest {
    pub token: ListenToken,
    pub transcript: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenErrorRequest {
    pub token: ListenToken,
    pub error: RecognitionErrorKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenEndRequest {
    pub token: ListenToken,
}

// === Free Listening Types ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptResultsRequest {
    pub segments: Vec<TranscriptSegment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TranscriptResponse {
    /// Text finalized by this batch, if any
    pub finalized: Option<String>,
    pub committed: String,
    /// Committed text followed by the current interim text
    pub display_text: String,
    /// Engine setup the client should keep listening with
    pub listen: ListenConfig,
}
