//! Sequential recitation drill.
//!
//! The learner recites the catalog in order. The session never talks to the
//! recognition engine itself: every transition returns [`Effect`]s that the
//! caller carries out, and every listen request carries a [`ListenToken`]
//! that must come back with its result, error or end signal.
//!
//! At most one listen is outstanding. After a result or error the session
//! waits for that listen's end signal before asking for the next one.

use crate::catalog;
use crate::error::RecitationError;
use crate::matching::score_item;
use crate::speech::{ListenConfig, RecognitionErrorKind};
use crate::types::{
    CompletionRecord, HistoryEntry, NamedItem, RecitationOutcome, CATALOG_SIZE,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use uuid::Uuid;

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecitationPhase {
    Idle,
    Reciting,
    Paused,
    Completed,
}

impl fmt::Display for RecitationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Reciting => "reciting",
            Self::Paused => "paused",
            Self::Completed => "completed",
        })
    }
}

/// Tag identifying one listen request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenToken {
    pub session: Uuid,
    pub position: usize,
    pub sequence: u64,
}

impl fmt::Display for ListenToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.session, self.position, self.sequence)
    }
}

/// Pass threshold and listen delays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecitationConfig {
    pub pass_threshold: u8,
    /// Wait after a correct answer before listening for the next item.
    pub success_delay_ms: u64,
    /// Wait after an incorrect answer before listening again.
    pub retry_delay_ms: u64,
    /// Wait after a recognition error before listening again.
    pub error_delay_ms: u64,
    /// Wait after a listen ended with neither result nor error.
    pub restart_delay_ms: u64,
}

impl Default for RecitationConfig {
    fn default() -> Self {
        Self {
            pass_threshold: 70,
            success_delay_ms: 1500,
            retry_delay_ms: 2000,
            error_delay_ms: 2000,
            restart_delay_ms: 500,
        }
    }
}

/// Action the caller must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    /// Start listening for the item at `token.position` after `delay_ms`,
    /// with the engine set up as `config`.
    Listen {
        token: ListenToken,
        delay_ms: u64,
        config: ListenConfig,
    },
    /// Abort the outstanding listen, if any.
    CancelListening,
    /// The session finished; persist the record.
    Completed { record: CompletionRecord },
}

/// Read-only view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecitationSnapshot {
    pub session_id: Uuid,
    pub phase: RecitationPhase,
    pub position: usize,
    pub total_mistakes: u32,
    pub progress_percentage: u8,
    pub current_item: Option<NamedItem>,
    pub history: Vec<HistoryEntry>,
    pub pending: Option<ListenToken>,
}

/// State of the single active recitation drill.
#[derive(Debug, Clone)]
pub struct RecitationSession {
    id: Uuid,
    phase: RecitationPhase,
    position: usize,
    total_mistakes: u32,
    /// Most recent first.
    history: VecDeque<HistoryEntry>,
    pending: Option<ListenToken>,
    /// Delay chosen by the result or error of the pending listen.
    next_delay_ms: Option<u64>,
    sequence: u64,
    config: RecitationConfig,
}

impl Default for RecitationSession {
    fn default() -> Self {
        Self::new(RecitationConfig::default())
    }
}

impl RecitationSession {
    pub fn new(config: RecitationConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: RecitationPhase::Idle,
            position: 0,
            total_mistakes: 0,
            history: VecDeque::new(),
            pending: None,
            next_delay_ms: None,
            sequence: 0,
            config,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> RecitationPhase {
        self.phase
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_mistakes(&self) -> u32 {
        self.total_mistakes
    }

    pub fn history(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.history.iter()
    }

    pub fn pending(&self) -> Option<ListenToken> {
        self.pending
    }

    /// Item the learner should recite next.
    pub fn current_item(&self) -> Option<&'static NamedItem> {
        catalog::get(self.position)
    }

    pub fn snapshot(&self) -> RecitationSnapshot {
        RecitationSnapshot {
            session_id: self.id,
            phase: self.phase,
            position: self.position,
            total_mistakes: self.total_mistakes,
            progress_percentage: ((self.position * 200 + CATALOG_SIZE) / (2 * CATALOG_SIZE)) as u8,
            current_item: self.current_item().copied(),
            history: self.history.iter().cloned().collect(),
            pending: self.pending,
        }
    }

    /// Begin reciting, or resume a paused session.
    pub fn start(&mut self) -> Result<Vec<Effect>, RecitationError> {
        match self.phase {
            RecitationPhase::Idle => {
                tracing::info!(session = %self.id, position = self.position, "recitation started");
                self.phase = RecitationPhase::Reciting;
                Ok(vec![self.issue_listen(0)])
            }
            RecitationPhase::Paused => self.resume(),
            phase => Err(RecitationError::InvalidTransition {
                action: "start",
                phase,
            }),
        }
    }

    /// Continue a paused session at the same position.
    pub fn resume(&mut self) -> Result<Vec<Effect>, RecitationError> {
        if self.phase != RecitationPhase::Paused {
            return Err(RecitationError::InvalidTransition {
                action: "resume",
                phase: self.phase,
            });
        }
        tracing::info!(session = %self.id, position = self.position, "recitation resumed");
        self.phase = RecitationPhase::Reciting;
        Ok(vec![self.issue_listen(0)])
    }

    /// Stop listening without losing position or history.
    pub fn pause(&mut self) -> Result<Vec<Effect>, RecitationError> {
        if self.phase != RecitationPhase::Reciting {
            return Err(RecitationError::InvalidTransition {
                action: "pause",
                phase: self.phase,
            });
        }
        tracing::info!(session = %self.id, position = self.position, "recitation paused");
        self.phase = RecitationPhase::Paused;
        Ok(self.cancel_pending().into_iter().collect())
    }

    /// Record the current item as skipped and move on.
    pub fn skip(&mut self) -> Result<Vec<Effect>, RecitationError> {
        if self.phase != RecitationPhase::Reciting {
            return Err(RecitationError::InvalidTransition {
                action: "skip",
                phase: self.phase,
            });
        }

        let mut effects: Vec<Effect> = self.cancel_pending().into_iter().collect();
        self.log(RecitationOutcome::Skipped, None, None);
        self.position += 1;

        if self.position >= CATALOG_SIZE {
            effects.push(self.complete());
        } else {
            effects.push(self.issue_listen(0));
        }
        Ok(effects)
    }

    /// Return to idle with a fresh session.
    pub fn reset(&mut self) -> Vec<Effect> {
        let effects = self.cancel_pending().into_iter().collect();
        tracing::info!(session = %self.id, "recitation reset");
        *self = Self::new(self.config.clone());
        effects
    }

    /// Handle a transcript for the listen identified by `token`.
    pub fn on_result(
        &mut self,
        token: ListenToken,
        transcript: &str,
    ) -> Result<Vec<Effect>, RecitationError> {
        self.check_token(token)?;
        if self.next_delay_ms.is_some() {
            // A single-utterance listen yields one result; later ones are ignored.
            return Err(RecitationError::StaleToken {
                expected: None,
                received: token,
            });
        }

        let Some(item) = self.current_item() else {
            return Ok(Vec::new());
        };
        let accuracy = score_item(item, transcript);
        let transcript = transcript.trim().to_string();

        if accuracy >= self.config.pass_threshold {
            tracing::debug!(position = self.position, accuracy, "recitation correct");
            self.log(RecitationOutcome::Correct, Some(transcript), Some(accuracy));
            self.position += 1;
            if self.position >= CATALOG_SIZE {
                self.pending = None;
                return Ok(vec![self.complete()]);
            }
            self.next_delay_ms = Some(self.config.success_delay_ms);
        } else {
            tracing::debug!(position = self.position, accuracy, "recitation incorrect");
            self.total_mistakes += 1;
            self.log(RecitationOutcome::Incorrect, Some(transcript), Some(accuracy));
            self.next_delay_ms = Some(self.config.retry_delay_ms);
        }
        Ok(Vec::new())
    }

    /// Handle a recognition error for the listen identified by `token`.
    pub fn on_error(
        &mut self,
        token: ListenToken,
        kind: &RecognitionErrorKind,
    ) -> Result<Vec<Effect>, RecitationError> {
        self.check_token(token)?;
        tracing::warn!(position = self.position, %kind, "recognition error during recitation");
        if self.next_delay_ms.is_none() {
            self.next_delay_ms = Some(self.config.error_delay_ms);
        }
        Ok(Vec::new())
    }

    /// Handle the end signal for the listen identified by `token`.
    ///
    /// Ends for listens that are no longer outstanding are ignored.
    pub fn on_end(&mut self, token: ListenToken) -> Vec<Effect> {
        if self.pending != Some(token) {
            return Vec::new();
        }
        self.pending = None;
        let delay = self
            .next_delay_ms
            .take()
            .unwrap_or(self.config.restart_delay_ms);

        if self.phase == RecitationPhase::Reciting && self.position < CATALOG_SIZE {
            vec![self.issue_listen(delay)]
        } else {
            Vec::new()
        }
    }

    fn check_token(&self, token: ListenToken) -> Result<(), RecitationError> {
        if self.phase == RecitationPhase::Reciting && self.pending == Some(token) {
            return Ok(());
        }
        tracing::warn!(%token, phase = %self.phase, "rejecting stale listen token");
        Err(RecitationError::StaleToken {
            expected: self.pending,
            received: token,
        })
    }

    fn issue_listen(&mut self, delay_ms: u64) -> Effect {
        self.sequence += 1;
        let token = ListenToken {
            session: self.id,
            position: self.position,
            sequence: self.sequence,
        };
        self.pending = Some(token);
        self.next_delay_ms = None;
        Effect::Listen {
            token,
            delay_ms,
            config: ListenConfig::single_utterance(),
        }
    }

    fn cancel_pending(&mut self) -> Option<Effect> {
        self.next_delay_ms = None;
        self.pending.take().map(|_| Effect::CancelListening)
    }

    fn complete(&mut self) -> Effect {
        self.phase = RecitationPhase::Completed;
        let record = CompletionRecord::new(self.total_mistakes, Utc::now());
        tracing::info!(
            session = %self.id,
            success_rate = record.success_rate,
            total_mistakes = record.total_mistakes,
            "recitation completed"
        );
        Effect::Completed { record }
    }

    fn log(&mut self, outcome: RecitationOutcome, recognized: Option<String>, accuracy: Option<u8>) {
        self.history.push_front(HistoryEntry {
            position: self.position,
            outcome,
            recognized_text: recognized,
            accuracy,
            timestamp: Utc::now(),
        });
    }
}
