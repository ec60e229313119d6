//! Single-item practice endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/practice/attempts
pub async fn record_attempt(
    State(state): State<AppState>,
    Json(payload): Json<RecordAttemptRequest>,
) -> Result<Json<RecordAttemptResponse>> {
    let (outcome, progress) = state
        .progress
        .record_attempt(payload.item_index, &payload.recognized)
        .await?;

    Ok(Json(RecordAttemptResponse {
        message: outcome.feedback.message(),
        outcome,
        progress,
    }))
}

/// POST /api/practice/errors
///
/// Practice mode never retries on its own; the learner starts a new attempt.
pub async fn report_error(
    Json(payload): Json<RecognitionErrorRequest>,
) -> Json<RecognitionError> {
    tracing::warn!(kind = %payload.error, "recognition error during practice");
    Json(RecognitionError::from(payload.error))
}

/// GET /api/practice/stats
pub async fn stats(State(state): State<AppState>) -> Json<AttemptStats> {
    Json(state.progress.stats().await)
}

/// GET /api/practice/progress
pub async fn progress(State(state): State<AppState>) -> Json<MasteryProgress> {
    Json(state.progress.progress().await)
}

/// GET /api/practice/achievements
pub async fn achievements(State(state): State<AppState>) -> Json<Vec<AchievementStatus>> {
    Json(state.progress.achievements().await)
}

/// POST /api/practice/reset
pub async fn reset(
    State(state): State<AppState>,
    Json(payload): Json<ResetProgressRequest>,
) -> Result<Json<MasteryProgress>> {
    if !payload.confirm {
        return Err(ApiError::BadRequest("Reset requires confirm: true".to_string()));
    }

    state.progress.reset().await?;
    Ok(Json(state.progress.progress().await))
}
