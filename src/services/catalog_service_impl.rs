//! `SeaORM` implementation of the `CatalogService` trait.

use crate::db::{SeedSummary, Store};
use crate::domain::{Genre, ShowUpdate};
use crate::entities::{shows, users};
use crate::services::catalog_service::{CatalogError, CatalogService};
use async_trait::async_trait;

pub struct SeaOrmCatalogService {
    store: Store,
}

impl SeaOrmCatalogService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CatalogService for SeaOrmCatalogService {
    async fn list_shows(&self) -> Result<Vec<shows::Model>, CatalogError> {
        Ok(self.store.list_shows().await?)
    }

    async fn find_show(&self, id: i32) -> Result<Option<shows::Model>, CatalogError> {
        Ok(self.store.get_show(id).await?)
    }

    async fn shows_by_genre(&self, genre: Genre) -> Result<Vec<shows::Model>, CatalogError> {
        Ok(self.store.list_shows_by_genre(genre).await?)
    }

    async fn update_show(
        &self,
        show: shows::Model,
        update: ShowUpdate,
    ) -> Result<ShowUpdate, CatalogError> {
        self.store.update_show(show, &update).await?;
        Ok(update)
    }

    async fn delete_show(&self, show: shows::Model) -> Result<shows::Model, CatalogError> {
        if self.store.delete_show(show.id).await? {
            Ok(show)
        } else {
            Err(CatalogError::NotFound {
                entity: "Show",
                id: show.id,
            })
        }
    }

    async fn list_users(&self) -> Result<Vec<users::Model>, CatalogError> {
        Ok(self.store.list_users().await?)
    }

    async fn find_user(&self, id: i32) -> Result<Option<users::Model>, CatalogError> {
        Ok(self.store.get_user(id).await?)
    }

    async fn delete_user(&self, user: users::Model) -> Result<users::Model, CatalogError> {
        if self.store.delete_user(user.id).await? {
            Ok(user)
        } else {
            Err(CatalogError::NotFound {
                entity: "User",
                id: user.id,
            })
        }
    }

    async fn user_shows(&self, user_id: i32) -> Result<Vec<shows::Model>, CatalogError> {
        Ok(self.store.list_user_shows(user_id).await?)
    }

    async fn add_show_to_user(
        &self,
        user: &users::Model,
        show: shows::Model,
    ) -> Result<shows::Model, CatalogError> {
        self.store.add_show_to_user(user.id, show.id).await?;
        Ok(show)
    }

    async fn reseed(&self) -> Result<SeedSummary, CatalogError> {
        Ok(self.store.reseed().await?)
    }
}
