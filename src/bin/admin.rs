//! CLI administration tool for map-coordinates.
//!
//! Inspects the coordinate cache and runs lookups without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Most recently cached coordinates
//! cargo run --bin admin -- cache list --limit 20
//!
//! # Show the record for one URL
//! cargo run --bin admin -- cache show "https://maps.app.goo.gl/vURqYiX57oEown6N6"
//!
//! # Resolve a link without storing it
//! cargo run --bin admin -- resolve "https://maps.app.goo.gl/vURqYiX57oEown6N6"
//!
//! # Cache-or-resolve, storing on a miss
//! cargo run --bin admin -- lookup
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*` components) and the
//! `RESOLVER_*` settings.

use map_coordinates::application::services::CoordinateService;
use map_coordinates::config::{self, Config};
use map_coordinates::domain::entities::Coordinates;
use map_coordinates::domain::repositories::CoordinateRepository;
use map_coordinates::infrastructure::persistence::PgCoordinateRepository;
use map_coordinates::infrastructure::resolver::HttpResolver;
use map_coordinates::server::connect_pool;
use map_coordinates::utils::coordinate_pattern::extract_coordinates;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing map-coordinates.
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
    /// Inspect the coordinate cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Resolve a map URL without storing the result
    Resolve {
        /// Map URL (prompted if omitted)
        url: Option<String>,
    },

    /// Look up a map URL through the cache, storing it on a miss
    Lookup {
        /// Map URL (prompted if omitted)
        url: Option<String>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Cache inspection subcommands.
#[derive(Subcommand)]
enum CacheAction {
    /// List the most recently cached records
    List {
        /// Maximum number of records to show
        #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..=1000))]
        limit: u32,
    },

    /// Show the record stored for a URL
    Show {
        /// Exact map URL as originally submitted
        url: String,
    },

    /// Show the number of cached records
    Stats,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Resolve { url } => handle_resolve(&config, url).await?,
        Commands::Cache { action } => {
            let pool = connect_pool(&config).await?;
            handle_cache_action(action, &pool).await?
        }
        Commands::Lookup { url } => {
            let pool = connect_pool(&config).await?;
            handle_lookup(&config, &pool, url).await?
        }
        Commands::Db { action } => {
            let pool = connect_pool(&config).await?;
            handle_db_action(action, &config, &pool).await?
        }
    }

    Ok(())
}

/// Returns the provided URL or prompts for one.
fn url_or_prompt(url: Option<String>) -> Result<String> {
    match url {
        Some(u) => Ok(u),
        None => Ok(Input::new()
            .with_prompt("Google Maps URL")
            .interact_text()?),
    }
}

/// Dispatches cache inspection commands.
async fn handle_cache_action(action: CacheAction, pool: &PgPool) -> Result<()> {
    let repo = PgCoordinateRepository::new(Arc::new(pool.clone()));

    match action {
        CacheAction::List { limit } => list_records(&repo, limit).await?,
        CacheAction::Show { url } => show_record(&repo, &url).await?,
        CacheAction::Stats => {
            println!("{}", "📊 Cache statistics".bright_blue().bold());
            println!();

            let count = repo
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count records: {}", e))?;

            println!(
                "  Cached URLs: {}",
                count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Lists recently cached records.
///
/// # Output Format
///
/// ```text
/// 📍 Cached coordinates
///
///   ID   Latitude     Longitude     Created            URL
///   ──────────────────────────────────────────────────────────────────
///   1    37.422       -122.084      2025-06-01 10:30   https://maps.app.goo.gl/...
/// ```
async fn list_records(repo: &PgCoordinateRepository, limit: u32) -> Result<()> {
    println!("{}", "📍 Cached coordinates".bright_blue().bold());
    println!();

    let records = repo
        .list_recent(i64::from(limit))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list records: {}", e))?;

    if records.is_empty() {
        println!("{}", "  Cache is empty".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<12} {:<13} {:<18} {}",
        "ID".bright_white().bold(),
        "Latitude".bright_white().bold(),
        "Longitude".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for record in &records {
        println!(
            "  {:<4} {:<12} {:<13} {:<18} {}",
            record.id.to_string().bright_black(),
            record.latitude.to_string().green(),
            record.longitude.to_string().green(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            record.map_url.cyan()
        );
    }

    println!();
    println!(
        "  Shown: {}",
        records.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints the record stored for `url`.
async fn show_record(repo: &PgCoordinateRepository, url: &str) -> Result<()> {
    let record = repo
        .find_by_url(url)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("No cached record for this URL")?;

    println!("  URL:       {}", record.map_url.cyan());
    println!("  Latitude:  {}", record.latitude.to_string().green().bold());
    println!("  Longitude: {}", record.longitude.to_string().green().bold());
    println!(
        "  Cached at: {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    Ok(())
}

/// Resolves a URL with the configured resolver and prints the result.
async fn handle_resolve(config: &Config, url: Option<String>) -> Result<()> {
    let url = url_or_prompt(url)?;
    let resolver = HttpResolver::new(&config.resolver_settings())?;

    println!("{}", "🔎 Resolving...".bright_blue());

    let final_url = resolver
        .resolve_final_url(&url)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    println!("  Resolved:  {}", final_url.bright_black());

    let coords = coordinates_in(&final_url)?;
    println!("  Latitude:  {}", coords.latitude.to_string().green().bold());
    println!(
        "  Longitude: {}",
        coords.longitude.to_string().green().bold()
    );

    Ok(())
}

/// Extracts the coordinates from a resolved URL, failing when there are none.
fn coordinates_in(final_url: &str) -> Result<Coordinates> {
    extract_coordinates(final_url).context("Coordinates not found in URL")
}

/// Runs the full cache-or-resolve sequence, storing the result on a miss.
async fn handle_lookup(config: &Config, pool: &PgPool, url: Option<String>) -> Result<()> {
    let url = url_or_prompt(url)?;

    let repository = Arc::new(PgCoordinateRepository::new(Arc::new(pool.clone())));
    let resolver = Arc::new(HttpResolver::new(&config.resolver_settings())?);
    let service = CoordinateService::new(repository, resolver);

    let lookup = service
        .get_coordinates(&url)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!(
        "  Latitude:  {}",
        lookup.coordinates.latitude.to_string().green().bold()
    );
    println!(
        "  Longitude: {}",
        lookup.coordinates.longitude.to_string().green().bold()
    );
    if lookup.from_cache {
        println!("  {}", "(From cache)".bright_black());
    } else {
        println!("  {}", "✅ Stored".green());
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &Config, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!(
                "{} {}",
                "🔍 Checking database connection:".bright_blue(),
                config.database.masked()
            );

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
