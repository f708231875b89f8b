//! Embedded seed data for the `shows`, `users` and `user_shows` tables.

use crate::domain::{Genre, ShowUpdateRequest};
use crate::entities::{prelude::*, shows, user_shows, users};
use anyhow::{Context, Result};
use sea_orm::{DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

const SHOWS_JSON: &str = include_str!("../../data/shows.json");
const USERS_JSON: &str = include_str!("../../data/users.json");
const USER_SHOWS_JSON: &str = include_str!("../../data/user_shows.json");

#[derive(Debug, Clone, Deserialize)]
pub struct SeedShow {
    pub title: String,
    pub genre: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
}

/// A link between seeded rows, by their 1-based position in the seed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct SeedUserShow {
    pub user_id: i32,
    pub show_id: i32,
}

#[derive(Debug, Clone)]
pub struct SeedData {
    pub shows: Vec<SeedShow>,
    pub users: Vec<SeedUser>,
    pub user_shows: Vec<SeedUserShow>,
}

/// Row counts written by a reseed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub shows: usize,
    pub users: usize,
    pub user_shows: usize,
}

/// Parses the embedded seed files and checks every show against the same
/// rules the API enforces. Genres are normalized to their canonical name.
pub fn load_seed_data() -> Result<SeedData> {
    let mut shows: Vec<SeedShow> =
        serde_json::from_str(SHOWS_JSON).context("Failed to parse shows seed data")?;
    let users: Vec<SeedUser> =
        serde_json::from_str(USERS_JSON).context("Failed to parse users seed data")?;
    let user_shows: Vec<SeedUserShow> =
        serde_json::from_str(USER_SHOWS_JSON).context("Failed to parse user_shows seed data")?;

    for show in &mut shows {
        let genre = Genre::parse(&show.genre).ok_or_else(|| {
            anyhow::anyhow!("Seed show '{}' has unknown genre '{}'", show.title, show.genre)
        })?;
        show.genre = genre.as_str().to_string();

        let check = ShowUpdateRequest {
            rating: show.rating.map(Into::into),
            status: show.status.clone().map(Into::into),
        };
        if let Err(errors) = check.validate() {
            let reasons: Vec<String> = errors.into_iter().map(|e| e.msg).collect();
            anyhow::bail!("Seed show '{}' is invalid: {}", show.title, reasons.join(", "));
        }
    }

    check_links(&user_shows, shows.len(), users.len())?;

    Ok(SeedData {
        shows,
        users,
        user_shows,
    })
}

/// Every link must point at a seeded row and appear once.
fn check_links(links: &[SeedUserShow], show_count: usize, user_count: usize) -> Result<()> {
    let in_range =
        |id: i32, count: usize| usize::try_from(id).is_ok_and(|id| (1..=count).contains(&id));
    let mut seen = HashSet::new();

    for link in links {
        if !in_range(link.user_id, user_count) {
            anyhow::bail!("Seed link references unknown user {}", link.user_id);
        }
        if !in_range(link.show_id, show_count) {
            anyhow::bail!("Seed link references unknown show {}", link.show_id);
        }
        if !seen.insert(*link) {
            anyhow::bail!(
                "Seed link user {} -> show {} is listed twice",
                link.user_id,
                link.show_id
            );
        }
    }

    Ok(())
}

/// Replaces the contents of all three tables with the seed data. Rows get ids
/// 1..=n in file order.
pub async fn reseed(conn: &DatabaseConnection) -> Result<SeedSummary> {
    let SeedData {
        shows: seed_shows,
        users: seed_users,
        user_shows: seed_links,
    } = load_seed_data()?;

    let txn = conn.begin().await?;

    UserShows::delete_many().exec(&txn).await?;
    Users::delete_many().exec(&txn).await?;
    Shows::delete_many().exec(&txn).await?;

    let summary = SeedSummary {
        shows: seed_shows.len(),
        users: seed_users.len(),
        user_shows: seed_links.len(),
    };

    let show_models: Vec<shows::ActiveModel> = seed_shows
        .into_iter()
        .zip(1..)
        .map(|(s, id)| shows::ActiveModel {
            id: Set(id),
            title: Set(s.title),
            genre: Set(s.genre),
            rating: Set(s.rating),
            status: Set(s.status),
        })
        .collect();

    if !show_models.is_empty() {
        Shows::insert_many(show_models)
            .exec_without_returning(&txn)
            .await
            .context("Failed to insert seed shows")?;
    }

    let user_models: Vec<users::ActiveModel> = seed_users
        .into_iter()
        .zip(1..)
        .map(|(u, id)| users::ActiveModel {
            id: Set(id),
            username: Set(u.username),
            password: Set(u.password),
        })
        .collect();

    if !user_models.is_empty() {
        Users::insert_many(user_models)
            .exec_without_returning(&txn)
            .await
            .context("Failed to insert seed users")?;
    }

    let link_models: Vec<user_shows::ActiveModel> = seed_links
        .into_iter()
        .map(|l| user_shows::ActiveModel {
            user_id: Set(l.user_id),
            show_id: Set(l.show_id),
        })
        .collect();

    if !link_models.is_empty() {
        UserShows::insert_many(link_models)
            .exec_without_returning(&txn)
            .await
            .context("Failed to insert seed user_shows")?;
    }

    txn.commit().await?;

    info!(
        shows = summary.shows,
        users = summary.users,
        user_shows = summary.user_shows,
        "Seed data loaded"
    );
    Ok(summary)
}
