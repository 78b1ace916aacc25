//! CLI command definitions and dispatch.

pub mod categories;
pub mod migrate;
pub mod token;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use recipebox_core::config::AppConfig;
use recipebox_core::error::AppError;
use recipebox_database::{DatabasePool, PgStore};

/// RecipeBox administration
#[derive(Debug, Parser)]
#[command(name = "recipebox", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (`config/{env}.toml` is layered over `config/default.toml`)
    #[arg(short, long, default_value = "development", env = "RECIPEBOX_ENV")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Category catalog management
    Categories(categories::CategoriesArgs),
    /// Session token issuance for local development
    Token(token::TokenArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load(&self.env)?;

        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Categories(args) => categories::execute(args, &config, self.format).await,
            Commands::Token(args) => token::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: connect to PostgreSQL and wrap the pool in a store
pub async fn connect_store(config: &AppConfig) -> Result<(DatabasePool, PgStore), AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    let store = PgStore::new(db.pool().clone());
    Ok((db, store))
}
