//! CLI administration tool for content-cms.
//!
//! Provides commands for managing sessions, viewing content counts,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Open a session (prints the bearer token once)
//! cargo run --bin admin -- session open --email editor@example.com
//!
//! # List all sessions
//! cargo run --bin admin -- session list
//!
//! # Revoke a session by id
//! cargo run --bin admin -- session revoke 6f1c...
//!
//! # View content counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (required): PostgreSQL connection
//! - `SESSION_SIGNING_SECRET` (required for `session open`): must match the server's

use content_cms::application::services::SessionService;
use content_cms::config::Config;
use content_cms::domain::entities::Session;
use content_cms::infrastructure::persistence::PgSessionRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

type PgSessionService = SessionService<PgSessionRepository>;

/// CLI tool for managing content-cms.
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
    /// Manage sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show content counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Session management subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Open a session and print its bearer token
    Open {
        /// Email of the signed-in user
        #[arg(short, long)]
        email: Option<String>,

        /// Existing user id to attach (a new one is generated otherwise)
        #[arg(short, long)]
        user_id: Option<Uuid>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all sessions
    List,

    /// Revoke a session
    Revoke {
        /// Session id
        id: Uuid,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url().context("Database is not configured")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Session { action } => handle_session_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches session management commands.
async fn handle_session_action(action: SessionAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgSessionRepository::new(Arc::new(pool.clone())));
    // Listing and revoking never hash tokens, so the secret is only needed to open.
    let secret = std::env::var("SESSION_SIGNING_SECRET").unwrap_or_default();
    let has_secret = !secret.is_empty();
    let service = SessionService::new(repo, secret);

    match action {
        SessionAction::Open {
            email,
            user_id,
            yes,
        } => {
            if !has_secret {
                anyhow::bail!("SESSION_SIGNING_SECRET must be set to open a session");
            }
            open_session(&service, email, user_id, yes).await?
        }
        SessionAction::List => list_sessions(&service).await?,
        SessionAction::Revoke { id } => revoke_session(&service, id).await?,
    }

    Ok(())
}

/// Opens a new session with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for email (or use provided)
/// 2. Confirm (unless `--yes` flag)
/// 3. Generate token, store its HMAC hash
/// 4. Display the raw token once with usage instructions
async fn open_session(
    service: &PgSessionService,
    email: Option<String>,
    user_id: Option<Uuid>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Open Session".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    println!("  Email:   {}", email.cyan());
    match user_id {
        Some(id) => println!("  User id: {}", id.to_string().bright_black()),
        None => println!("  User id: {}", "(new)".bright_black()),
    }
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Open this session?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let opened = service
        .open_session(email, user_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open session: {}", e))?;

    println!();
    println!("{}", "✅ Session opened!".green().bold());
    println!("  Session id: {}", opened.session.id.to_string().bright_black());
    println!("  User id:    {}", opened.session.user_id.to_string().bright_black());
    println!("  Token:      {}", opened.token.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/session",
        opened.token.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all sessions with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 Sessions
///
///   ID                                    Email                     Created           Status
///   ─────────────────────────────────────────────────────────────────────────────────────────
///   6f1c…                                 editor@example.com        2025-01-15 10:30  ACTIVE
/// ```
async fn list_sessions(service: &PgSessionService) -> Result<()> {
    println!("{}", "📋 Sessions".bright_blue().bold());
    println!();

    let sessions = service
        .list_sessions()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list sessions: {}", e))?;

    if sessions.is_empty() {
        println!("{}", "  No sessions found".yellow());
        println!();
        println!(
            "  Open one with: {} admin session open",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<37} {:<25} {:<17} {:<10}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(92).bright_black());

    for session in &sessions {
        println!(
            "  {:<37} {:<25} {:<17} {}",
            session.id.to_string().bright_black(),
            session.email.cyan(),
            session
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status_label(session)
        );
    }

    println!();
    println!(
        "  Total: {}",
        sessions.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn status_label(session: &Session) -> ColoredString {
    if session.is_revoked() {
        "REVOKED".red()
    } else {
        "ACTIVE".green()
    }
}

/// Revokes a session by id after confirmation (default: No).
async fn revoke_session(service: &PgSessionService, id: Uuid) -> Result<()> {
    println!("{}", "🔒 Revoke Session".bright_blue().bold());
    println!();
    println!("  Session: {}", id.to_string().cyan());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this session?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    service
        .revoke_session(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke session: {}", e))?;

    println!();
    println!("{}", "✅ Session revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays content counts.
///
/// Shows:
/// - Categories and tags
/// - Posts, split by status
/// - Active sessions
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let categories_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories")
        .fetch_one(pool)
        .await?;

    let tags_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
        .fetch_one(pool)
        .await?;

    let posts_by_status: Vec<(String, i64)> =
        sqlx::query_as("SELECT status, COUNT(*) FROM posts GROUP BY status ORDER BY status")
            .fetch_all(pool)
            .await?;

    let sessions_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE revoked_at IS NULL")
            .fetch_one(pool)
            .await?;

    let posts_total: i64 = posts_by_status.iter().map(|(_, n)| n).sum();

    println!(
        "  Categories:      {}",
        categories_count.to_string().bright_green().bold()
    );
    println!(
        "  Tags:            {}",
        tags_count.to_string().bright_green().bold()
    );
    println!(
        "  Posts:           {}",
        posts_total.to_string().bright_green().bold()
    );
    for (status, count) in &posts_by_status {
        println!("    {:<14} {}", status, count.to_string().bright_white());
    }
    println!(
        "  Active sessions: {}",
        sessions_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
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

            let migrations: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
            .fetch_one(pool)
            .await
            .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
