//! Free listening endpoints

use axum::{extract::State, http::StatusCode, Json};

use crate::models::*;
use crate::AppState;

/// POST /api/listen/results
pub async fn results(
    State(state): State<AppState>,
    Json(payload): Json<TranscriptResultsRequest>,
) -> Json<TranscriptResponse> {
    let mut buffer = state.listen.lock().await;
    let finalized = buffer.apply(&payload.segments);
    if let Some(text) = &finalized {
        tracing::debug!(text = %text, "free listening transcript");
    }

    Json(TranscriptResponse {
        finalized,
        committed: buffer.committed().to_string(),
        display_text: buffer.display_text(),
        listen: ListenConfig::continuous(),
    })
}

/// DELETE /api/listen
pub async fn clear(State(state): State<AppState>) -> StatusCode {
    state.listen.lock().await.clear();
    StatusCode::NO_CONTENT
}
