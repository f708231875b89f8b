use serde::Serialize;

use crate::entities::{shows, users};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowDto {
    pub id: i32,
    pub title: String,
    pub genre: String,
    pub rating: Option<i32>,
    pub status: Option<String>,
}

impl From<shows::Model> for ShowDto {
    fn from(model: shows::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            genre: model.genre,
            rating: model.rating,
            status: model.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub password: String,
}

impl From<users::Model> for UserDto {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            password: model.password,
        }
    }
}
