//! Test fixtures and factory functions for request bodies.

use serde_json::{json, Value};

use asma_core::catalog;

/// Diacritic-free text of a catalog item, as a recognizer would return it.
pub fn simple_text(index: usize) -> &'static str {
    catalog::get(index).expect("index inside catalog").simple_text
}

/// Body for POST /api/practice/attempts.
pub fn attempt_request(item_index: usize, recognized: &str) -> Value {
    json!({
        "item_index": item_index,
        "recognized": recognized,
    })
}

/// Body for POST /api/score against a catalog item.
pub fn score_item_request(item_index: usize, recognized: &str) -> Value {
    json!({
        "item_index": item_index,
        "recognized": recognized,
    })
}

/// Body for POST /api/score against free text.
pub fn score_text_request(target: &str, recognized: &str) -> Value {
    json!({
        "target": target,
        "recognized": recognized,
    })
}

/// Body for POST /api/recitation/result.
pub fn listen_result(token: &Value, transcript: &str) -> Value {
    json!({
        "token": token,
        "transcript": transcript,
    })
}

/// Body for POST /api/recitation/error.
pub fn listen_error(token: &Value, code: &str) -> Value {
    json!({
        "token": token,
        "error": code,
    })
}

/// Body for POST /api/recitation/end.
pub fn listen_end(token: &Value) -> Value {
    json!({ "token": token })
}

/// Body for POST /api/listen/results.
pub fn transcript_segments(segments: &[(&str, bool)]) -> Value {
    let segments: Vec<Value> = segments
        .iter()
        .map(|(transcript, is_final)| json!({ "transcript": transcript, "is_final": is_final }))
        .collect();
    json!({ "segments": segments })
}
