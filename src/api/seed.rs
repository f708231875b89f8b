use axum::{Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::db::SeedSummary;

/// GET /seed
///
/// Resets every table to the embedded seed data.
pub async fn reseed(State(state): State<Arc<AppState>>) -> Result<Json<SeedSummary>, ApiError> {
    let summary = state.catalog.reseed().await?;
    Ok(Json(summary))
}
