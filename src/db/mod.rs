use crate::domain::{Genre, ShowUpdate};
use crate::entities::{shows, users};
use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;
pub mod seed;

pub use seed::SeedSummary;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn show_repo(&self) -> repositories::show::ShowRepository {
        repositories::show::ShowRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    pub async fn reseed(&self) -> Result<SeedSummary> {
        seed::reseed(&self.conn).await
    }

    // ========== Shows ==========

    pub async fn list_shows(&self) -> Result<Vec<shows::Model>> {
        self.show_repo().list_all().await
    }

    pub async fn get_show(&self, id: i32) -> Result<Option<shows::Model>> {
        self.show_repo().get(id).await
    }

    pub async fn list_shows_by_genre(&self, genre: Genre) -> Result<Vec<shows::Model>> {
        self.show_repo().list_by_genre(genre).await
    }

    pub async fn update_show(
        &self,
        show: shows::Model,
        update: &ShowUpdate,
    ) -> Result<shows::Model> {
        self.show_repo().update(show, update).await
    }

    pub async fn delete_show(&self, id: i32) -> Result<bool> {
        self.show_repo().delete(id).await
    }

    // ========== Users ==========

    pub async fn list_users(&self) -> Result<Vec<users::Model>> {
        self.user_repo().list_all().await
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<users::Model>> {
        self.user_repo().get(id).await
    }

    pub async fn delete_user(&self, id: i32) -> Result<bool> {
        self.user_repo().delete(id).await
    }

    pub async fn list_user_shows(&self, user_id: i32) -> Result<Vec<shows::Model>> {
        self.user_repo().shows_for(user_id).await
    }

    pub async fn add_show_to_user(&self, user_id: i32, show_id: i32) -> Result<()> {
        self.user_repo().add_show(user_id, show_id).await
    }
}
