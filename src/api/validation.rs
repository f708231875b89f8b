use super::ApiError;
use crate::domain::Genre;

/// Parses a path id. Anything that is not an optionally signed run of decimal
/// digits is a 400; an integer that cannot be a row id (outside `i32`, however
/// many digits it has) can only be a 404.
pub fn parse_id(raw: &str, entity: &str) -> Result<i32, ApiError> {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::invalid_id(entity));
    }

    raw.parse::<i32>().map_err(|_| ApiError::not_found(entity))
}

pub fn resolve_genre(raw: Option<&str>) -> Result<Genre, ApiError> {
    let raw = raw
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::bad_request("Genre must be provided."))?;

    Genre::parse(raw).ok_or_else(|| ApiError::not_found("Genre"))
}
