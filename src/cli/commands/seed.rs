//! Seed command handler

use crate::config::Config;
use crate::db::Store;

pub async fn cmd_seed(config: &Config) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;
    let summary = store.reseed().await?;

    println!(
        "✓ Seeded {} shows, {} users and {} user/show links into {}",
        summary.shows, summary.users, summary.user_shows, config.general.database_path
    );

    Ok(())
}
