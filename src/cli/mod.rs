//! CLI module for the PIM user model
//!
//! Subcommands check field values against the user and group tables and
//! hash passwords with the configured Argon2 parameters.

pub mod hash;
pub mod validate;

use clap::{Args, Parser, Subcommand};
use serde_json::json;

use crate::config::AppConfig;
use crate::domain::validator::{EnglishMessages, FieldErrors, MessageRenderer};
use crate::infrastructure::logging;

/// PIM user tools - field validation and password hashing
#[derive(Parser)]
#[command(name = "pim-user")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate user fields
    ValidateUser(validate::UserArgs),

    /// Validate group fields
    ValidateGroup(validate::GroupArgs),

    /// Validate and hash a password
    HashPassword(hash::HashArgs),
}

/// Output options shared by the subcommands
#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Load `.env`, configuration and logging
pub(crate) fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    config
}

/// Render collected field errors for the terminal
pub(crate) fn format_errors(errors: &FieldErrors, renderer: &dyn MessageRenderer, json: bool) -> String {
    if json {
        let fields: serde_json::Map<String, serde_json::Value> = errors
            .fields()
            .map(|field| {
                let entries = errors
                    .get(field)
                    .iter()
                    .map(|e| {
                        json!({
                            "code": e.kind().code(),
                            "message": renderer.render(e),
                            "limit": e.limit(),
                            "actual": e.actual(),
                        })
                    })
                    .collect::<Vec<_>>();
                (field.to_string(), json!(entries))
            })
            .collect();

        json!({ "valid": errors.is_empty(), "errors": fields }).to_string()
    } else if errors.is_empty() {
        "OK".to_string()
    } else {
        errors.render(renderer).join("\n")
    }
}

/// Print the outcome and fail when any field was rejected
pub(crate) fn report(errors: FieldErrors, output: &OutputArgs) -> anyhow::Result<()> {
    println!("{}", format_errors(&errors, &EnglishMessages, output.json));

    if errors.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("validation failed for {} field(s)", errors.fields().count())
    }
}
