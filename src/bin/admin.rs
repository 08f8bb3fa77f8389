//! CLI administration tool for link-shortener.
//!
//! Runs the same shortening and resolution services as the HTTP server,
//! directly against the database.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link with a generated token
//! cargo run --bin admin -- link create https://example.com
//!
//! # Create a short link under a chosen token
//! cargo run --bin admin -- link create https://example.com --token promo
//!
//! # Look up a token
//! cargo run --bin admin -- link resolve promo
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `TOKEN_LENGTH`, `SHORTEN_MAX_ATTEMPTS`, `STORE_TIMEOUT_MS`: as for the server

use link_shortener::application::services::{Resolution, Resolver, ShortenService};
use link_shortener::config::{Config, mask_connection_string};
use link_shortener::domain::errors::ShortenError;
use link_shortener::domain::repositories::LinkRepository;
use link_shortener::infrastructure::persistence::PgLinkRepository;
use link_shortener::utils::token_generator::{RandomTokenGenerator, TokenGenerator};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
    /// Create and look up short links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a short link (prompts for the destination if omitted)
    Create {
        /// Destination URL
        destination: Option<String>,

        /// Token to use instead of a generated one
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Show where a token redirects
    Resolve {
        /// Token to look up
        token: String,
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

    let config = Config::from_env()?;
    let pool = PgPool::connect(&config.database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database at {}",
                mask_connection_string(&config.database_url)
            )
        })?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkRepository::with_timeout(
        Arc::new(pool),
        config.store_timeout(),
    ));

    match action {
        LinkAction::Create { destination, token } => {
            let service = ShortenService::new(
                repo,
                Arc::new(RandomTokenGenerator::new(config.token_length)),
            )
            .with_max_attempts(config.shorten_max_attempts);

            let destination = match destination {
                Some(d) => d,
                None => Input::new()
                    .with_prompt("Destination URL")
                    .interact_text()?,
            };

            create_link(&service, destination, token).await?;
        }
        LinkAction::Resolve { token } => {
            let resolver = Resolver::new(repo);

            match resolver
                .resolve(&token)
                .await
                .context("Link store unavailable")?
            {
                Resolution::Found { destination } => {
                    println!("  {} → {}", token.cyan(), destination.bright_white());
                }
                Resolution::NotFound => {
                    println!("{}", format!("Token '{token}' not found").yellow());
                }
            }
        }
    }

    Ok(())
}

/// Creates a link and prints the result. Any failure exits non-zero.
async fn create_link<L, G>(
    service: &ShortenService<L, G>,
    destination: String,
    token: Option<String>,
) -> Result<()>
where
    L: LinkRepository + ?Sized,
    G: TokenGenerator + ?Sized,
{
    println!("{}", "Create short link".bright_blue().bold());
    println!();

    let link = match service.shorten(destination, token).await {
        Ok(link) => link,
        Err(ShortenError::Unavailable(e)) => return Err(e).context("Link store unavailable"),
        Err(e) => return Err(e).context("Link not created"),
    };

    println!("{}", "Link created".green().bold());
    println!("  Token:       {}", link.token.bright_yellow().bold());
    println!("  Destination: {}", link.destination.cyan());
    println!(
        "  Created:     {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("{}", "Database connection OK".green().bold());
            println!(
                "  Links: {}",
                links_count.to_string().bright_green().bold()
            );
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to migrate")?;

            println!("{}", "Migrations applied".green().bold());
        }
    }

    Ok(())
}
