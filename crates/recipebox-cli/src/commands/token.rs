//! Development session token issuance.
//!
//! RecipeBox delegates sign-in to an external identity provider. This
//! command stands in for it: it upserts the user by email and prints a
//! signed session token for them.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, OutputFormat};
use recipebox_auth::JwtEncoder;
use recipebox_core::config::AppConfig;
use recipebox_core::error::AppError;
use recipebox_database::RecipeStore;
use recipebox_entity::user::CreateUser;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Upsert a user and issue a session token for them
    Issue {
        /// User email (identity key)
        #[arg(long)]
        email: String,
        /// Display name
        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Debug, Serialize)]
struct IssuedTokenOutput {
    user_id: String,
    email: String,
    token: String,
    expires_at: String,
}

/// Execute token commands
pub async fn execute(
    args: &TokenArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        TokenCommand::Issue { email, name } => {
            let email = email.trim();
            if email.is_empty() {
                return Err(AppError::validation("Email is required"));
            }

            let (db, store) = super::connect_store(config).await?;
            let user = store
                .upsert_user(CreateUser {
                    name: name.clone(),
                    email: email.to_string(),
                })
                .await?;
            db.close().await;

            let issued = JwtEncoder::new(&config.auth).issue(&user)?;
            let out = IssuedTokenOutput {
                user_id: user.id.to_string(),
                email: user.email.clone(),
                token: issued.token,
                expires_at: issued.expires_at.to_rfc3339(),
            };

            match format {
                OutputFormat::Json => output::print_item(&out, format),
                OutputFormat::Table => {
                    output::print_success(&format!("Token issued for {}", user.display_name()));
                    output::print_kv("User ID", &out.user_id);
                    output::print_kv("Expires", &out.expires_at);
                    println!();
                    println!("{}", out.token);
                }
            }
        }
    }

    Ok(())
}
