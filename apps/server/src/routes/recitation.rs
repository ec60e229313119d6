//! Recitation drill endpoints
//!
//! Every action returns the session snapshot and the effects the client must
//! carry out: start listening after a delay, cancel the outstanding listen, or
//! show the completion record.

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/recitation
pub async fn snapshot(State(state): State<AppState>) -> Json<RecitationResponse> {
    Json(state.recitation.snapshot().await)
}

/// POST /api/recitation/start
pub async fn start(State(state): State<AppState>) -> Result<Json<RecitationResponse>> {
    Ok(Json(state.recitation.start().await?))
}

/// POST /api/recitation/pause
pub async fn pause(State(state): State<AppState>) -> Result<Json<RecitationResponse>> {
    Ok(Json(state.recitation.pause().await?))
}

/// POST /api/recitation/skip
pub async fn skip(State(state): State<AppState>) -> Result<Json<RecitationResponse>> {
    Ok(Json(state.recitation.skip().await?))
}

/// POST /api/recitation/reset
pub async fn reset(State(state): State<AppState>) -> Result<Json<RecitationResponse>> {
    Ok(Json(state.recitation.reset().await?))
}

/// POST /api/recitation/result
pub async fn result(
    State(state): State<AppState>,
    Json(payload): Json<ListenResultRequest>,
) -> Result<Json<RecitationResponse>> {
    let response = state
        .recitation
        .on_result(payload.token, &payload.transcript)
        .await?;
    Ok(Json(response))
}

/// POST /api/recitation/error
pub async fn error(
    State(state): State<AppState>,
    Json(payload): Json<ListenErrorRequest>,
) -> Result<Json<RecitationResponse>> {
    let response = state
        .recitation
        .on_error(payload.token, &payload.error)
        .await?;
    Ok(Json(response))
}

/// POST /api/recitation/end
pub async fn end(
    State(state): State<AppState>,
    Json(payload): Json<ListenEndRequest>,
) -> Result<Json<RecitationResponse>> {
    Ok(Json(state.recitation.on_end(payload.token).await?))
}

/// GET /api/recitation/records
pub async fn records(State(state): State<AppState>) -> Result<Json<Vec<CompletionRecord>>> {
    Ok(Json(state.recitation.records().await?))
}
