//! Domain service for the show/user catalog.
//!
//! Handlers and path validators only talk to this trait; the database sits
//! behind [`SeaOrmCatalogService`](super::SeaOrmCatalogService).

use crate::db::SeedSummary;
use crate::domain::{Genre, ShowUpdate};
use crate::entities::{shows, users};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for CatalogError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait CatalogService: Send + Sync {
    /// All shows in id order.
    async fn list_shows(&self) -> Result<Vec<shows::Model>, CatalogError>;

    async fn find_show(&self, id: i32) -> Result<Option<shows::Model>, CatalogError>;

    async fn shows_by_genre(&self, genre: Genre) -> Result<Vec<shows::Model>, CatalogError>;

    /// Applies the supplied fields and returns the ones that were written.
    async fn update_show(
        &self,
        show: shows::Model,
        update: ShowUpdate,
    ) -> Result<ShowUpdate, CatalogError>;

    /// Removes the show and returns it as it was before deletion.
    async fn delete_show(&self, show: shows::Model) -> Result<shows::Model, CatalogError>;

    /// All users in id order.
    async fn list_users(&self) -> Result<Vec<users::Model>, CatalogError>;

    async fn find_user(&self, id: i32) -> Result<Option<users::Model>, CatalogError>;

    /// Removes the user and its associations, returning the prior row.
    async fn delete_user(&self, user: users::Model) -> Result<users::Model, CatalogError>;

    /// Shows the user has added, ordered by show id.
    async fn user_shows(&self, user_id: i32) -> Result<Vec<shows::Model>, CatalogError>;

    /// Idempotently links `show` to `user` and returns the show.
    async fn add_show_to_user(
        &self,
        user: &users::Model,
        show: shows::Model,
    ) -> Result<shows::Model, CatalogError>;

    /// Wipes the tables and loads the embedded seed data.
    async fn reseed(&self) -> Result<SeedSummary, CatalogError>;
}
