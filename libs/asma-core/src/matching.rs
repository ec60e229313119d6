//! Transcript scoring for spoken practice.
//!
//! Text is normalized (Arabic marks stripped, whitespace collapsed, case
//! folded) and then compared by Levenshtein distance over code points.

use crate::types::NamedItem;
use serde::{Deserialize, Serialize};

/// Whether `c` is an Arabic nonspacing mark.
///
/// Covers harakat, tanwin, shadda, sukun, superscript alef, the Quranic
/// annotation marks and the Extended-A combining marks. Base letters,
/// including hamza-bearing ones, are not marks.
pub fn is_arabic_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0610}'..='\u{061A}'
            | '\u{064B}'..='\u{065F}'
            | '\u{0670}'
            | '\u{06D6}'..='\u{06DC}'
            | '\u{06DF}'..='\u{06E4}'
            | '\u{06E7}'..='\u{06E8}'
            | '\u{06EA}'..='\u{06ED}'
            | '\u{08CA}'..='\u{08E1}'
            | '\u{08E3}'..='\u{08FF}'
    )
}

/// Remove Arabic marks, leaving everything else untouched.
pub fn strip_diacritics(text: &str) -> String {
    text.chars().filter(|&c| !is_arabic_mark(c)).collect()
}

/// Normalize text for comparison.
pub fn normalize(text: &str) -> String {
    normalize_whitespace(&strip_diacritics(text)).to_lowercase()
}

/// Normalize whitespace in a string (trim and collapse multiple spaces).
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Calculate Levenshtein distance between two strings.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    // Use two rows instead of full matrix for memory efficiency
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;

        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };

            curr[j] = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity of two already-normalized strings as a rounded percentage.
///
/// Lengths are counted in code points. Two empty strings are identical.
pub fn similarity_percent(a: &str, b: &str) -> u8 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100;
    }

    let distance = levenshtein_distance(a, b);
    let matched = max_len - distance;
    // round(matched / max_len * 100), half up, without floating point
    ((matched * 200 + max_len) / (2 * max_len)) as u8
}

/// Score a recognized phrase against a target phrase, 0-100.
pub fn score(target: &str, recognized: &str) -> u8 {
    let target = normalize(target);
    let recognized = normalize(recognized);

    if target == recognized {
        return 100;
    }

    similarity_percent(&target, &recognized)
}

/// Best score against any of several spellings of the same target.
pub fn score_variants<'a, I>(targets: I, recognized: &str) -> u8
where
    I: IntoIterator<Item = &'a str>,
{
    targets
        .into_iter()
        .map(|target| score(target, recognized))
        .max()
        .unwrap_or(0)
}

/// Best score against an item's canonical and simple forms.
pub fn score_item(item: &NamedItem, recognized: &str) -> u8 {
    score_variants([item.canonical_text, item.simple_text], recognized)
}

/// Feedback band for a practice attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Feedback {
    Excellent,
    Good,
    NeedsPractice,
}

impl Feedback {
    pub fn for_accuracy(accuracy: u8) -> Self {
        if accuracy >= 85 {
            Self::Excellent
        } else if accuracy >= 65 {
            Self::Good
        } else {
            Self::NeedsPractice
        }
    }

    /// Message shown to the learner.
    pub fn message(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent pronunciation!",
            Self::Good => "Good! Keep practicing.",
            Self::NeedsPractice => "Try again. Listen carefully to the pronunciation.",
        }
    }
}

/// Result of comparing a transcript to a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Accuracy between 0 and 100.
    pub accuracy: u8,
    pub feedback: Feedback,
    /// Normalized target (for display).
    pub target_normalized: String,
    /// Normalized transcript (for display).
    pub recognized_normalized: String,
}

/// Compare a transcript to a target, keeping the normalized forms.
pub fn compare(target: &str, recognized: &str) -> MatchResult {
    let accuracy = score(target, recognized);
    tracing::debug!(accuracy, "scored transcript");
    MatchResult {
        accuracy,
        feedback: Feedback::for_accuracy(accuracy),
        target_normalized: normalize(target),
        recognized_normalized: normalize(recognized),
    }
}

/// Compare a transcript to a catalog item, accepting either spelling.
pub fn compare_item(item: &NamedItem, recognized: &str) -> MatchResult {
    let accuracy = score_item(item, recognized);
    MatchResult {
        accuracy,
        feedback: Feedback::for_accuracy(accuracy),
        target_normalized: normalize(item.simple_text),
        recognized_normalized: normalize(recognized),
    }
}
