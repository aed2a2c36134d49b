//! CLI administration tool for api-scaffold.
//!
//! # Usage
//!
//! ```bash
//! # Generate a value for API_KEY
//! cargo run --bin admin -- key generate
//!
//! # Show the effective configuration (secrets masked)
//! cargo run --bin admin -- config show
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! Reads the same environment variables (and `.env` file) as the server.

use api_scaffold::config::{self, Config};
use api_scaffold::infrastructure::{DatabaseClient, PgDatabase};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use rand::RngCore;

/// CLI tool for managing api-scaffold.
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
    /// Manage the shared API key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum KeyAction {
    /// Generate a random API key
    Generate {
        /// Number of random bytes (the key is hex encoded, twice as long)
        #[arg(short, long, default_value_t = 32, value_parser = clap::value_parser!(u16).range(16..=256))]
        bytes: u16,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Load, validate and print the configuration
    Show,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Key { action } => match action {
            KeyAction::Generate { bytes } => generate_key(bytes as usize),
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => show_config(&config::load_from_env()?),
        },
        Commands::Db { action } => match action {
            DbAction::Check => check_database(&config::load_from_env()?).await?,
        },
    }

    Ok(())
}

/// Prints a fresh random key ready to paste into `.env`.
fn generate_key(bytes: usize) {
    let mut buf = vec![0u8; bytes];
    rand::rng().fill_bytes(&mut buf);
    let key = hex::encode(buf);

    println!("{}", "🔑 Generated API key".bright_blue().bold());
    println!();
    println!("  {}={}", "API_KEY".bright_cyan(), key.bright_yellow().bold());
    println!();
    println!("{}", "Send it with every gated request:".bright_white());
    println!("  {}: {}", "x-api-key".bright_cyan(), key.bright_yellow());
    println!();
}

/// Prints the masked configuration summary.
fn show_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();

    for (label, value) in config.summary_lines() {
        let value = if value.is_empty() { "-".to_string() } else { value };
        println!("  {:<18} {}", label.bright_white(), value.cyan());
    }

    println!();
    println!("{}", "✅ Configuration is valid".green().bold());
}

/// Opens the configured pool and runs a ping query.
async fn check_database(config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());

    let database = PgDatabase::connect(config)
        .await
        .context("Failed to connect to database")?;

    database
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Ping failed: {}", e))?;

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(database.pool())
        .await?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!();
    println!("  {}", version.bright_black());
    println!();

    database.close().await;

    Ok(())
}
