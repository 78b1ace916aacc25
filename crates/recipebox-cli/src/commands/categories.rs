//! Category catalog CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use recipebox_core::config::AppConfig;
use recipebox_core::error::AppError;
use recipebox_database::RecipeStore;
use recipebox_entity::category::CategoryWithCount;

/// Arguments for category commands
#[derive(Debug, Args)]
pub struct CategoriesArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoriesCommand,
}

/// Category subcommands
#[derive(Debug, Subcommand)]
pub enum CategoriesCommand {
    /// Insert the configured default categories that do not exist yet
    Seed,
    /// List all categories with their recipe counts
    List,
}

/// Category display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    /// Category ID
    id: String,
    /// Name
    name: String,
    /// Number of recipes
    recipes: i64,
    /// Created at
    created_at: String,
}

impl From<&CategoryWithCount> for CategoryRow {
    fn from(c: &CategoryWithCount) -> Self {
        Self {
            id: c.id.to_string(),
            name: c.name.clone(),
            recipes: c.recipe_count,
            created_at: c.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute category commands
pub async fn execute(
    args: &CategoriesArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let (db, store) = super::connect_store(config).await?;

    match &args.command {
        CategoriesCommand::Seed => {
            let inserted = store
                .ensure_categories(&config.recipes.default_categories)
                .await?;
            if inserted == 0 {
                output::print_warning("Default categories already exist.");
            } else {
                output::print_success(&format!("Inserted {inserted} default categories."));
            }
        }
        CategoriesCommand::List => {
            let categories = store.list_categories().await?;
            let rows: Vec<CategoryRow> = categories.iter().map(CategoryRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
