use crate::domain::{Genre, ShowUpdate};
use crate::entities::{prelude::*, shows, user_shows};
use anyhow::{Context, Result};
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

/// Repository for the `shows` table
pub struct ShowRepository {
    conn: DatabaseConnection,
}

impl ShowRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<shows::Model>> {
        Shows::find()
            .order_by_asc(shows::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list shows")
    }

    pub async fn get(&self, id: i32) -> Result<Option<shows::Model>> {
        Shows::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query show by ID")
    }

    /// Matches on `LOWER(genre)` so rows written with non-canonical casing
    /// are still found.
    pub async fn list_by_genre(&self, genre: Genre) -> Result<Vec<shows::Model>> {
        Shows::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(shows::Column::Genre)))
                    .eq(genre.as_str().to_lowercase()),
            )
            .order_by_asc(shows::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to query shows by genre")
    }

    /// Writes only the fields present in `update`. An empty update returns the
    /// model unchanged without touching the database.
    pub async fn update(&self, show: shows::Model, update: &ShowUpdate) -> Result<shows::Model> {
        if update.is_empty() {
            return Ok(show);
        }

        let id = show.id;
        let mut active: shows::ActiveModel = show.into();
        if let Some(rating) = update.rating {
            active.rating = Set(Some(rating));
        }
        if let Some(status) = &update.status {
            active.status = Set(Some(status.clone()));
        }

        let updated = active
            .update(&self.conn)
            .await
            .with_context(|| format!("Failed to update show {id}"))?;

        info!(show_id = id, "Updated show");
        Ok(updated)
    }

    /// Deletes the show and every association pointing at it.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        UserShows::delete_many()
            .filter(user_shows::Column::ShowId.eq(id))
            .exec(&txn)
            .await?;

        let result = Shows::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        if result.rows_affected > 0 {
            info!(show_id = id, "Deleted show");
        }
        Ok(result.rows_affected > 0)
    }
}
