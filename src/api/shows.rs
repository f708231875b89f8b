use axum::{Extension, Json, body::Bytes, extract::State};
use serde_json::Value;
use std::sync::Arc;

use super::{ApiError, AppState, ShowDto};
use crate::domain::{Genre, ShowUpdate, ShowUpdateRequest};
use crate::entities::shows;

/// GET /shows
pub async fn list_shows(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ShowDto>>, ApiError> {
    let shows = state.catalog.list_shows().await?;
    Ok(Json(shows.into_iter().map(ShowDto::from).collect()))
}

/// GET /shows/genres
pub async fn list_genres() -> Json<Vec<&'static str>> {
    Json(Genre::names())
}

/// GET /shows/{show_id}
pub async fn get_show(Extension(show): Extension<shows::Model>) -> Json<ShowDto> {
    Json(ShowDto::from(show))
}

/// GET /shows/genres/{genre}
pub async fn list_shows_by_genre(
    State(state): State<Arc<AppState>>,
    Extension(genre): Extension<Genre>,
) -> Result<Json<Vec<ShowDto>>, ApiError> {
    let shows = state.catalog.shows_by_genre(genre).await?;
    Ok(Json(shows.into_iter().map(ShowDto::from).collect()))
}

/// PATCH /shows/{show_id}
///
/// Responds with the fields that were written, e.g. `{"rating":8}`.
pub async fn update_show(
    State(state): State<Arc<AppState>>,
    Extension(show): Extension<shows::Model>,
    body: Bytes,
) -> Result<Json<ShowUpdate>, ApiError> {
    let request = parse_update_body(&body)?;
    let update = request.validate().map_err(ApiError::ValidationError)?;

    let changed = state.catalog.update_show(show, update).await?;
    Ok(Json(changed))
}

/// DELETE /shows/{show_id}
pub async fn delete_show(
    State(state): State<Arc<AppState>>,
    Extension(show): Extension<shows::Model>,
) -> Result<Json<ShowDto>, ApiError> {
    let deleted = state.catalog.delete_show(show).await?;
    Ok(Json(ShowDto::from(deleted)))
}

/// An empty body means "change nothing".
fn parse_update_body(body: &[u8]) -> Result<ShowUpdateRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ShowUpdateRequest::default());
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => Ok(ShowUpdateRequest::from_object(map)),
        Ok(_) => Err(ApiError::bad_request("Request body must be a JSON object.")),
        Err(_) => Err(ApiError::bad_request("Request body must be valid JSON.")),
    }
}
