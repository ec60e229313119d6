//! Error types for asma-core.

use crate::recitation::{ListenToken, RecitationPhase};
use thiserror::Error;

/// Errors from the progress tracker.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("item index {index} is outside the catalog")]
    ItemOutOfRange { index: usize },
}

/// Errors from the recitation session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecitationError {
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: RecitationPhase,
    },

    #[error("stale listen token {received}, expected {expected:?}")]
    StaleToken {
        expected: Option<ListenToken>,
        received: ListenToken,
    },
}

/// Errors writing to a key-value store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to encode {key}: {source}")]
    Encode {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("store backend error: {0}")]
    Backend(String),
}
