use axum::{Extension, Json, extract::State};
use std::sync::Arc;

use super::{ApiError, AppState, ShowDto, UserDto};
use crate::entities::{shows, users};

/// GET /users
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.catalog.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /users/{user_id}
pub async fn get_user(Extension(user): Extension<users::Model>) -> Json<UserDto> {
    Json(UserDto::from(user))
}

/// DELETE /users/{user_id}
pub async fn delete_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<users::Model>,
) -> Result<Json<UserDto>, ApiError> {
    let deleted = state.catalog.delete_user(user).await?;
    Ok(Json(UserDto::from(deleted)))
}

/// GET /users/{user_id}/shows
pub async fn list_user_shows(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<users::Model>,
) -> Result<Json<Vec<ShowDto>>, ApiError> {
    let shows = state.catalog.user_shows(user.id).await?;
    Ok(Json(shows.into_iter().map(ShowDto::from).collect()))
}

/// PATCH /users/{user_id}/shows/{show_id}
///
/// Safe to repeat; the association is only stored once.
pub async fn add_show_to_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<users::Model>,
    Extension(show): Extension<shows::Model>,
) -> Result<Json<ShowDto>, ApiError> {
    let show = state.catalog.add_show_to_user(&user, show).await?;
    Ok(Json(ShowDto::from(show)))
}
