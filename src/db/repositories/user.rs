use crate::entities::{prelude::*, shows, user_shows, users};
use anyhow::{Context, Result};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info};

/// Repository for the `users` table and its `user_shows` associations
pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list_all(&self) -> Result<Vec<users::Model>> {
        Users::find()
            .order_by_asc(users::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list users")
    }

    pub async fn get(&self, id: i32) -> Result<Option<users::Model>> {
        Users::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query user by ID")
    }

    /// Deletes the user and its associations in one transaction.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let txn = self.conn.begin().await?;

        UserShows::delete_many()
            .filter(user_shows::Column::UserId.eq(id))
            .exec(&txn)
            .await?;

        let result = Users::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        if result.rows_affected > 0 {
            info!(user_id = id, "Deleted user");
        }
        Ok(result.rows_affected > 0)
    }

    /// Shows the user has added, ordered by show id.
    pub async fn shows_for(&self, user_id: i32) -> Result<Vec<shows::Model>> {
        Shows::find()
            .inner_join(UserShows)
            .filter(user_shows::Column::UserId.eq(user_id))
            .order_by_asc(shows::Column::Id)
            .all(&self.conn)
            .await
            .with_context(|| format!("Failed to query shows for user {user_id}"))
    }

    /// Links a show to a user. Adding the same pair twice is a no-op.
    pub async fn add_show(&self, user_id: i32, show_id: i32) -> Result<()> {
        let inserted = UserShows::insert(user_shows::ActiveModel {
            user_id: Set(user_id),
            show_id: Set(show_id),
        })
        .on_conflict(
            sea_orm::sea_query::OnConflict::columns([
                user_shows::Column::UserId,
                user_shows::Column::ShowId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(&self.conn)
        .await
        .with_context(|| format!("Failed to add show {show_id} to user {user_id}"))?;

        if inserted == 0 {
            debug!(user_id, show_id, "Show already on user's list");
        } else {
            info!(user_id, show_id, "Added show to user");
        }
        Ok(())
    }
}
