//! Scoring endpoint

use axum::Json;

use crate::error::{ApiError, Result};
use crate::models::*;
use asma_core::{catalog, matching};

/// Longest transcript or target accepted, in characters
pub const MAX_SCORE_INPUT_CHARS: usize = 500;

/// POST /api/score
pub async fn score(Json(payload): Json<ScoreRequest>) -> Result<Json<ScoreResponse>> {
    check_length("recognized", &payload.recognized)?;
    if let Some(target) = &payload.target {
        check_length("target", target)?;
    }

    let result = match (payload.target.as_deref(), payload.item_index) {
        (Some(target), None) => matching::compare(target, &payload.recognized),
        (None, Some(index)) => {
            let item = catalog::get(index)
                .ok_or_else(|| ApiError::NotFound(format!("Name {} not found", index)))?;
            matching::compare_item(item, &payload.recognized)
        }
        _ => {
            return Err(ApiError::BadRequest(
                "Provide exactly one of target or item_index".to_string(),
            ))
        }
    };

    Ok(Json(result.into()))
}

fn check_length(field: &str, text: &str) -> Result<()> {
    if text.chars().count() > MAX_SCORE_INPUT_CHARS {
        return Err(ApiError::BadRequest(format!(
            "{} is longer than {} characters",
            field, MAX_SCORE_INPUT_CHARS
        )));
    }
    Ok(())
}
