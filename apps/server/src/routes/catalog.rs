//! Catalog endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;
use asma_core::catalog;

/// GET /api/names
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<NamesQuery>,
) -> Json<Vec<NameEntry>> {
    let mastered = state.progress.mastered().await;

    let names = catalog::filter(query.filter, |index| mastered.contains(&index))
        .map(|item| NameEntry::new(item, mastered.contains(&item.index)))
        .collect();

    Json(names)
}

/// GET /api/names/:index
pub async fn get(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> Result<Json<NameDetail>> {
    let item = catalog::get(index)
        .ok_or_else(|| ApiError::NotFound(format!("Name {} not found", index)))?;
    let mastered = state.progress.mastered().await;

    Ok(Json(NameDetail {
        entry: NameEntry::new(item, mastered.contains(&index)),
        listen: ListenConfig::single_utterance(),
    }))
}
