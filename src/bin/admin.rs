//! CLI administration tool for shortlink.
//!
//! Works directly on the SQLite database file, so it can be used while the
//! server is stopped or running.
//!
//! # Usage
//!
//! ```bash
//! # Export every link as JSON
//! cargo run --bin admin -- export --output links.json
//!
//! # Insert an example link into an empty database
//! cargo run --bin admin -- seed
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection and apply migrations
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (optional): SQLite database, defaults to `sqlite://shortlink.db`

use shortlink::config::DEFAULT_DATABASE_URL;
use shortlink::domain::entities::{LinkState, NewLink};
use shortlink::domain::repositories::LinkRepository;
use shortlink::infrastructure::persistence::{SqliteLinkRepository, connect, run_migrations};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::sync::Arc;

const SEED_CODE: &str = "hello";
const SEED_URL: &str = "https://example.com";

/// CLI tool for managing shortlink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Export all links as a JSON array
    Export {
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Insert an example link if the database is empty
    Seed,

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and apply migrations
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = connect(&database_url, 1).await?;
    run_migrations(&pool).await?;

    let repo = SqliteLinkRepository::new(Arc::new(pool.clone()));

    match cli.command {
        Commands::Export { output, force } => export_links(&repo, output, force).await?,
        Commands::Seed => seed(&repo).await?,
        Commands::Stats => handle_stats(&repo).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    pool.close().await;

    Ok(())
}

/// Writes every stored link, expired ones included, to `output`.
///
/// Asks before replacing an existing file unless `force` is set.
async fn export_links(repo: &SqliteLinkRepository, output: PathBuf, force: bool) -> Result<()> {
    println!("{}", "Export links".bright_blue().bold());
    println!();

    if output.exists() && !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", output.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let links = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    let json = serde_json::to_string_pretty(&links)?;
    std::fs::write(&output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "{} {} links to {}",
        "Exported".green().bold(),
        links.len().to_string().bright_white().bold(),
        output.display().to_string().cyan()
    );
    println!();

    Ok(())
}

/// Inserts `hello -> https://example.com` when no links exist yet.
async fn seed(repo: &SqliteLinkRepository) -> Result<()> {
    let count = repo
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    if count > 0 {
        println!(
            "{}",
            format!("Database already holds {} links, nothing to seed", count).yellow()
        );
        return Ok(());
    }

    let link = repo
        .create(NewLink {
            code: SEED_CODE.to_string(),
            target_url: SEED_URL.to_string(),
            created_at: Utc::now(),
            expires_at: None,
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!(
        "{} {} -> {}",
        "Seeded".green().bold(),
        link.code.cyan(),
        link.target_url.bright_white()
    );

    Ok(())
}

/// Displays link statistics.
///
/// Shows:
/// - Total number of links
/// - Active and expired links
/// - Total number of clicks
async fn handle_stats(repo: &SqliteLinkRepository) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let links = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    let now = Utc::now();
    let expired = links
        .iter()
        .filter(|l| l.state_at(now) == LinkState::Expired)
        .count();
    let clicks: i64 = links.iter().map(|l| l.clicks).sum();

    println!(
        "  Links:   {}",
        links.len().to_string().bright_green().bold()
    );
    println!(
        "  Active:  {}",
        (links.len() - expired).to_string().bright_green().bold()
    );
    println!("  Expired: {}", expired.to_string().yellow().bold());
    println!("  Clicks:  {}", clicks.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  Database: {}", database_url.bright_white());
            println!("  SQLite:   {}", version.bright_white());
            println!("{}", "Database connection OK, schema up to date".green().bold());
        }
    }

    Ok(())
}
