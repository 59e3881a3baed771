//! CLI administration tool for shortify.
//!
//! Works directly against the store, reusing the same validation and code
//! selection rules as the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Create a short link (prompts for the URL when omitted)
//! cargo run --bin admin -- link create https://example.com --alias docs
//!
//! # Show where a code points
//! cargo run --bin admin -- link resolve docs
//!
//! # Count stored links
//! cargo run --bin admin -- stats
//! ```
//!
//! # Environment Variables
//!
//! - `ACCELERATE_URL` or `DATABASE_URL` (required): PostgreSQL connection string
//! - `CODE_GENERATION_ATTEMPTS` (optional): generated codes tried per create (1-100)
//!
//! Configuration is loaded and validated the same way as for the server.

use shortify::api::dto::shorten::ShortenRequest;
use shortify::application::services::LinkService;
use shortify::config::{self, Config};
use shortify::error::AppError;
use shortify::server::{build_link_service, connect_pool, run_migrations};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shortify.
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
    /// Manage short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link
    Create {
        /// Long URL to shorten
        url: Option<String>,

        /// Custom alias (3-30 characters of letters, digits, '_' or '-')
        #[arg(short, long)]
        alias: Option<String>,

        /// Expiry timestamp in RFC 3339 format (stored, not enforced)
        #[arg(short, long)]
        expires_at: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the long URL behind a short code
    Resolve {
        /// Short code or alias
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &pool, &config).await?,
        Commands::Stats => handle_stats(&pool, &config).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &config).await?,
    }

    pool.close().await;

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool, config: &Config) -> Result<()> {
    let service = build_link_service(Arc::new(pool.clone()), config);

    match action {
        LinkAction::Create {
            url,
            alias,
            expires_at,
            yes,
        } => create_link(&service, url, alias, expires_at, yes).await?,
        LinkAction::Resolve { code } => resolve_link(&service, &code).await?,
    }

    Ok(())
}

/// Creates a short link, prompting for the URL when it was not given.
async fn create_link(
    service: &LinkService,
    url: Option<String>,
    alias: Option<String>,
    expires_at: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Short Link".bright_blue().bold());
    println!();

    let long_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Long URL")
            .with_initial_text("https://")
            .interact_text()?,
    };

    let request = ShortenRequest {
        long_url,
        custom_alias: alias,
        expires_at,
    };

    let request = match request.into_validated() {
        Ok(r) => r,
        Err(AppError::Validation { details, .. }) => {
            println!("{}", "❌ Invalid input:".red().bold());
            for violation in details.as_array().into_iter().flatten() {
                println!(
                    "  {} ({}): {}",
                    violation["field"].as_str().unwrap_or("?").cyan(),
                    violation["reason"].as_str().unwrap_or("?"),
                    violation["message"].as_str().unwrap_or("")
                );
            }
            anyhow::bail!("validation failed");
        }
        Err(e) => return Err(e.into()),
    };

    println!("{}", "Link details:".bright_white().bold());
    println!("  URL:   {}", request.long_url.cyan());
    println!(
        "  Code:  {}",
        request
            .custom_alias
            .as_deref()
            .unwrap_or("(generated)")
            .bright_yellow()
    );
    if let Some(expiry) = request.expires_at {
        println!("  Expires: {}", expiry.to_rfc3339());
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create_short_link(request.long_url, request.custom_alias, request.expires_at)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created successfully!".green().bold());
    println!("  {} → {}", link.code.bright_yellow().bold(), link.long_url);

    Ok(())
}

/// Prints the long URL for a code.
async fn resolve_link(service: &LinkService, code: &str) -> Result<()> {
    match service
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to resolve link: {}", e))?
    {
        Some(link) => {
            println!("{} → {}", link.code.bright_yellow().bold(), link.long_url);
            println!(
                "  Created: {}",
                link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            if let Some(expiry) = link.expires_at {
                println!("  Expires: {} (not enforced)", expiry.to_rfc3339());
            }
        }
        None => println!("{} {}", "❌ Not found:".red(), code),
    }

    Ok(())
}

/// Displays link count.
async fn handle_stats(pool: &PgPool, config: &Config) -> Result<()> {
    let total = build_link_service(Arc::new(pool.clone()), config)
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!("{}", "📊 Statistics".bright_blue().bold());
    println!("  Links: {}", total.to_string().bright_yellow());

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, config: &Config) -> Result<()> {
    match action {
        DbAction::Check => {
            build_link_service(Arc::new(pool.clone()), config)
                .check_store()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;
            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            run_migrations(pool).await?;
            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
