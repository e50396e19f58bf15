//! CLI administration tool for adposts.
//!
//! Manages admin API tokens and enabled ad sizes, shows ad counters and
//! runs database diagnostics without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a new admin token
//! cargo run --bin admin -- token create
//!
//! # List / revoke tokens
//! cargo run --bin admin -- token list
//! cargo run --bin admin -- token revoke "CI deploy"
//!
//! # Top ads by views or clicks
//! cargo run --bin admin -- stats --sort clicks --limit 10
//!
//! # Enabled ad sizes (applied on next server start)
//! cargo run --bin admin -- sizes list
//! cargo run --bin admin -- sizes set 300x250 728x90 160x600
//! cargo run --bin admin -- sizes reset
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for `token create`): HMAC key shared
//!   with the server

use adposts::application::services::{SettingsService, hash_token};
use adposts::domain::repositories::{AdRepository, AdSort, TokenRepository};
use adposts::domain::size_catalog::STANDARD_SIZES;
use adposts::infrastructure::persistence::{
    PgAdRepository, PgSettingsRepository, PgTokenRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing adposts.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage admin API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Show ad counters
    Stats {
        /// Counter to rank ads by
        #[arg(short, long, value_enum, default_value_t = StatsSort::Views)]
        sort: StatsSort,

        /// Number of ads to show
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },

    /// Manage enabled ad sizes
    Sizes {
        #[command(subcommand)]
        action: SizesAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Create a new admin token
    Create {
        /// Token name (e.g., "CI deploy", "Dashboard")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

#[derive(Subcommand)]
enum SizesAction {
    /// Show the standard catalog and which sizes are enabled
    List,

    /// Replace the enabled set
    Set {
        /// Size ids such as 300x250
        #[arg(required = true)]
        sizes: Vec<String>,
    },

    /// Go back to the default sizes
    Reset,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum StatsSort {
    Views,
    Clicks,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Stats { sort, limit } => handle_stats(&pool, sort, limit).await?,
        Commands::Sizes { action } => handle_sizes_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    match action {
        TokenAction::Create { name, token, yes } => {
            let secret = std::env::var("TOKEN_SIGNING_SECRET")
                .context("TOKEN_SIGNING_SECRET must be set")?;
            create_token(repo, &secret, name, token, yes).await?;
        }
        TokenAction::List => list_tokens(repo).await?,
        TokenAction::Revoke { name_or_id } => revoke_token(repo, name_or_id).await?,
    }

    Ok(())
}

/// Creates an admin token.
///
/// Only the HMAC of the token is stored, keyed with `TOKEN_SIGNING_SECRET`.
/// The raw value is printed once.
async fn create_token(
    repo: Arc<PgTokenRepository>,
    secret: &str,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Create Admin Token".bright_blue().bold());
    println!();

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Dashboard")
            .interact_text()?,
    };

    let token_value = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            t
        }
        None => {
            println!("{}", "✨ Generated new token".green());
            generate_token()
        }
    };

    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:  {}", token_name.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.create_token(&token_name, &hash_token(secret, &token_value))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/ads",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "📋 Admin Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<28} {:<17} {:<17} {:<8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    for token in &tokens {
        let status = if token.is_revoked() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };
        let last_used = token
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<4} {:<28} {:<17} {:<17} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token looked up by ID (numeric input) or exact name.
async fn revoke_token(repo: Arc<PgTokenRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke Admin Token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo.find_by_id(id).await,
        Err(_) => repo.find_by_name(&name_or_id).await,
    }
    .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
    .context("Token not found")?;

    if token.is_revoked() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Prints the top ads by the chosen counter plus totals.
async fn handle_stats(pool: &PgPool, sort: StatsSort, limit: i64) -> Result<()> {
    println!("{}", "📊 Ad Statistics".bright_blue().bold());
    println!();

    let repo = PgAdRepository::new(Arc::new(pool.clone()));
    let ad_sort = match sort {
        StatsSort::Views => AdSort::Views,
        StatsSort::Clicks => AdSort::Clicks,
    };

    let ads = repo
        .list(ad_sort, 0, limit.max(1))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list ads: {}", e))?;

    let (total_views, total_clicks): (i64, i64) = sqlx::query_as(
        "SELECT COALESCE(SUM(view_count), 0)::BIGINT, COALESCE(SUM(click_count), 0)::BIGINT FROM ads",
    )
    .fetch_one(pool)
    .await?;

    if ads.is_empty() {
        println!("{}", "  No ads found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<5} {:<32} {:>10} {:>10} {:>7}",
        "ID".bright_white().bold(),
        "Slug".bright_white().bold(),
        "Views".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "CTR".bright_white().bold()
    );
    println!("  {}", "─".repeat(68).bright_black());

    for ad in &ads {
        let slug = if ad.published {
            ad.slug.cyan()
        } else {
            ad.slug.bright_black()
        };

        println!(
            "  {:<5} {:<32} {:>10} {:>10} {:>7}",
            ad.id.to_string().bright_black(),
            slug,
            ad.view_count,
            ad.click_count,
            click_through_rate(ad.view_count, ad.click_count)
        );
    }

    println!();
    println!(
        "  Views:  {}",
        total_views.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        total_clicks.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn handle_sizes_action(action: SizesAction, pool: &PgPool) -> Result<()> {
    let service = SettingsService::new(Arc::new(PgSettingsRepository::new(Arc::new(
        pool.clone(),
    ))));

    let catalog = match action {
        SizesAction::List => service.load_catalog().await,
        SizesAction::Set { sizes } => service.set_enabled_sizes(sizes).await,
        SizesAction::Reset => service.reset().await,
    }
    .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{}", "📐 Ad Sizes".bright_blue().bold());
    println!();

    for size in STANDARD_SIZES {
        let marker = if catalog.enabled_sizes().iter().any(|id| id == size.id) {
            "✔".green()
        } else {
            " ".normal()
        };
        println!("  {} {}", marker, size.id);
    }

    println!();
    println!(
        "  {}",
        "Changes take effect when the server restarts.".bright_black()
    );
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let ads: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ads")
                .fetch_one(pool)
                .await?;
            let locations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM locations")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Ads:        {}", ads.to_string().bright_white());
            println!("  Locations:  {}", locations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

fn click_through_rate(views: i64, clicks: i64) -> String {
    if views == 0 {
        return "-".to_string();
    }
    format!("{:.2}%", clicks as f64 * 100.0 / views as f64)
}

/// Generates a 48-character alphanumeric token.
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
