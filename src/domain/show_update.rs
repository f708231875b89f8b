//! Validation for partial show updates.
//!
//! A `PATCH /shows/{id}` body may carry `rating` and/or `status`. Each field is
//! checked independently and failures are collected, so a body with two bad
//! fields reports both. Fields that are absent are left untouched.

use serde::Serialize;
use serde_json::{Map, Value};

pub const RATING_MIN: i32 = 0;
pub const RATING_MAX: i32 = 10;
pub const STATUS_MIN_LEN: usize = 5;
pub const STATUS_MAX_LEN: usize = 25;

const RATING_NOT_INTEGER: &str = "new rating must be an integer";
const RATING_OUT_OF_RANGE: &str = "new rating must be 0-10 (inclusive)";
const STATUS_NOT_STRING: &str = "new status must be a string";
const STATUS_HAS_SPACES: &str = "new status must not contain spaces";
const STATUS_BAD_LENGTH: &str = "new status must be 5-25 characters (inclusive)";

/// A single rejected field, serialized in the shape clients already expect:
/// `{"type":"field","value":..,"msg":..,"path":..,"location":"body"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub value: Value,
    pub msg: String,
    pub path: String,
    pub location: &'static str,
}

impl FieldError {
    fn body(path: &str, value: &Value, msg: &str) -> Self {
        Self {
            kind: "field",
            value: value.clone(),
            msg: msg.to_string(),
            path: path.to_string(),
            location: "body",
        }
    }
}

/// Raw update payload. `None` means the key was absent; an explicit JSON
/// `null` is kept as `Some(Value::Null)` and rejected by validation.
#[derive(Debug, Clone, Default)]
pub struct ShowUpdateRequest {
    pub rating: Option<Value>,
    pub status: Option<Value>,
}

impl ShowUpdateRequest {
    /// Pulls the updatable keys out of a JSON object; other keys are ignored.
    #[must_use]
    pub fn from_object(mut body: Map<String, Value>) -> Self {
        Self {
            rating: body.remove("rating"),
            status: body.remove("status"),
        }
    }

    pub fn validate(&self) -> Result<ShowUpdate, Vec<FieldError>> {
        let mut errors = Vec::new();
        let mut update = ShowUpdate::default();

        if let Some(value) = &self.rating {
            match parse_rating(value) {
                Ok(rating) => update.rating = Some(rating),
                Err(msg) => errors.push(FieldError::body("rating", value, msg)),
            }
        }

        if let Some(value) = &self.status {
            match parse_status(value) {
                Ok(status) => update.status = Some(status),
                Err(msg) => errors.push(FieldError::body("status", value, msg)),
            }
        }

        if errors.is_empty() {
            Ok(update)
        } else {
            Err(errors)
        }
    }
}

/// A validated update. Serializes to the map of fields that were changed,
/// e.g. `{"rating":8}` or `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ShowUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rating.is_none() && self.status.is_none()
    }
}

/// Numbers must be integral; strings are accepted when their trimmed content
/// is an integral number (`"8"`, `" 7 "`, `"8.0"`).
#[allow(clippy::cast_possible_truncation)]
fn parse_rating(value: &Value) -> Result<i32, &'static str> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        _ => None,
    };

    let Some(number) = number.filter(|n| n.is_finite() && n.fract() == 0.0) else {
        return Err(RATING_NOT_INTEGER);
    };

    if !(f64::from(RATING_MIN)..=f64::from(RATING_MAX)).contains(&number) {
        return Err(RATING_OUT_OF_RANGE);
    }

    Ok(number as i32)
}

fn parse_status(value: &Value) -> Result<String, &'static str> {
    let Value::String(status) = value else {
        return Err(STATUS_NOT_STRING);
    };

    if status.chars().any(char::is_whitespace) {
        return Err(STATUS_HAS_SPACES);
    }

    let len = status.chars().count();
    if !(STATUS_MIN_LEN..=STATUS_MAX_LEN).contains(&len) {
        return Err(STATUS_BAD_LENGTH);
    }

    Ok(status.clone())
}
