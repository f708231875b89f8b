//! Command-line interface for the watchlist service.

mod commands;

use clap::{Parser, Subcommand};

/// Watchlist - shows and users over HTTP
#[derive(Parser)]
#[command(name = "watchlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Replace every row with the bundled seed data
    Seed,

    /// Create default config file
    Init,

    /// List all shows
    #[command(alias = "ls")]
    Shows,

    /// List all users
    Users,
}

pub use commands::*;
