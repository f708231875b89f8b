//! Table listing command handlers

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_list_shows(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let shows = store.list_shows().await?;

    if shows.is_empty() {
        println!("No shows found.");
        println!();
        println!("Load the bundled data with: watchlist seed");
        return Ok(());
    }

    println!("Shows ({} total)", shows.len());
    println!("{:-<70}", "");

    for show in shows {
        let rating = show
            .rating
            .map_or_else(|| "-".to_string(), |r| format!("{r}/10"));
        let status = show.status.as_deref().unwrap_or("-");

        println!("[{}] {}", show.id, show.title);
        println!(
            "    Genre: {} | Rating: {} | Status: {}",
            show.genre, rating, status
        );
    }

    Ok(())
}

pub async fn cmd_list_users(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let users = store.list_users().await?;

    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!("Users ({} total)", users.len());
    println!("{:-<70}", "");

    for user in users {
        let shows = store.list_user_shows(user.id).await?;
        println!("[{}] {} ({} shows)", user.id, user.username, shows.len());
    }

    Ok(())
}
