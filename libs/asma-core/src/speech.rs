//! Types for talking to the external speech-recognition engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error kinds reported by the recognition engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecognitionErrorKind {
    NoSpeech,
    AudioCapture,
    NotAllowed,
    Network,
    Other(String),
}

impl RecognitionErrorKind {
    /// Parse the engine's error code. Unknown codes become `Other`.
    pub fn parse(code: &str) -> Self {
        match code {
            "no-speech" => Self::NoSpeech,
            "audio-capture" => Self::AudioCapture,
            "not-allowed" => Self::NotAllowed,
            "network" => Self::Network,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::NoSpeech => "no-speech",
            Self::AudioCapture => "audio-capture",
            Self::NotAllowed => "not-allowed",
            Self::Network => "network",
            Self::Other(code) => code,
        }
    }

    /// What the learner can do about it.
    pub fn hint(&self) -> String {
        match self {
            Self::NoSpeech => "No speech detected. Please try again.".to_string(),
            Self::AudioCapture => "No microphone found. Please check your microphone.".to_string(),
            Self::NotAllowed => {
                "Microphone permission denied. Please allow microphone access.".to_string()
            }
            Self::Network => "Network error. Please check your internet connection.".to_string(),
            Self::Other(code) => format!("Recognition failed ({code}). Please try again."),
        }
    }
}

impl fmt::Display for RecognitionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecognitionErrorKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecognitionErrorKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::parse(&code))
    }
}

/// A classified recognition failure. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("recognition error ({kind}): {hint}")]
pub struct RecognitionError {
    pub kind: RecognitionErrorKind,
    pub hint: String,
}

impl From<RecognitionErrorKind> for RecognitionError {
    fn from(kind: RecognitionErrorKind) -> Self {
        let hint = kind.hint();
        Self { kind, hint }
    }
}

/// How the engine should be started.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenConfig {
    pub language: String,
    pub continuous: bool,
    pub interim_results: bool,
    pub max_alternatives: u8,
}

impl ListenConfig {
    /// One final result per listen, used by practice and recitation.
    pub fn single_utterance() -> Self {
        Self {
            language: "ar-SA".to_string(),
            continuous: false,
            interim_results: false,
            max_alternatives: 1,
        }
    }

    /// Continuous listening with interim results, used by free listening.
    pub fn continuous() -> Self {
        Self {
            continuous: true,
            interim_results: true,
            ..Self::single_utterance()
        }
    }
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self::single_utterance()
    }
}

/// One result segment from a continuous listen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    pub transcript: String,
    #[serde(default)]
    pub is_final: bool,
}

/// Accumulates final transcripts across results of a continuous listen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptBuffer {
    committed: String,
    interim: String,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one batch of segments. Returns the newly finalized text, trimmed,
    /// if the batch contained any final segment with content.
    pub fn apply(&mut self, segments: &[TranscriptSegment]) -> Option<String> {
        let mut finalized = String::new();
        let mut interim = String::new();
        for segment in segments {
            if segment.is_final {
                finalized.push_str(&segment.transcript);
            } else {
                interim.push_str(&segment.transcript);
            }
        }

        self.interim = interim;
        if finalized.is_empty() {
            return None;
        }

        self.committed.push_str(&finalized);
        let trimmed = finalized.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }

    /// Final text so far.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Final text followed by the pending interim text.
    pub fn display_text(&self) -> String {
        if self.interim.is_empty() {
            self.committed.clone()
        } else {
            format!("{} {}", self.committed, self.interim)
        }
    }

    pub fn clear(&mut self) {
        self.committed.clear();
        self.interim.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str, is_final: bool) -> TranscriptSegment {
        TranscriptSegment {
            transcript: text.to_string(),
            is_final,
        }
    }

    #[test]
    fn error_codes_roundtrip() {
        for code in ["no-speech", "audio-capture", "not-allowed", "network", "aborted"] {
            assert_eq!(RecognitionErrorKind::parse(code).as_str(), code);
        }
        assert_eq!(
            RecognitionErrorKind::parse("aborted"),
            RecognitionErrorKind::Other("aborted".to_string())
        );
    }

    #[test]
    fn error_kind_serde_uses_codes() {
        let json = serde_json::to_string(&RecognitionErrorKind::NotAllowed).unwrap();
        assert_eq!(json, "\"not-allowed\"");
        let kind: RecognitionErrorKind = serde_json::from_str("\"service-not-allowed\"").unwrap();
        assert_eq!(kind, RecognitionErrorKind::Other("service-not-allowed".to_string()));
    }

    #[test]
    fn classified_error_carries_hint() {
        let error = RecognitionError::from(RecognitionErrorKind::NoSpeech);
        assert_eq!(error.hint, "No speech detected. Please try again.");
        assert!(error.to_string().starts_with("recognition error (no-speech)"));
    }

    #[test]
    fn listen_presets() {
        let single = ListenConfig::single_utterance();
        assert!(!single.continuous && !single.interim_results);
        let continuous = ListenConfig::continuous();
        assert!(continuous.continuous && continuous.interim_results);
        assert_eq!(continuous.language, "ar-SA");
    }

    #[test]
    fn buffer_commits_finals_and_shows_interim() {
        let mut buffer = TranscriptBuffer::new();
        assert_eq!(buffer.apply(&[segment("الرح", false)]), None);
        assert_eq!(buffer.display_text(), " الرح");

        let finalized = buffer.apply(&[segment("الرحمن ", true), segment("الر", false)]);
        assert_eq!(finalized.as_deref(), Some("الرحمن"));
        assert_eq!(buffer.committed(), "الرحمن ");
        assert_eq!(buffer.display_text(), "الرحمن  الر");

        buffer.clear();
        assert_eq!(buffer.display_text(), "");
    }
}
