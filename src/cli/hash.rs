//! Password hashing command

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::{OutputArgs, bootstrap, report};
use crate::domain::user::{PASSWORD, validate_password};
use crate::domain::validator::FieldErrors;
use crate::infrastructure::user::{Argon2Hasher, PasswordHasher};

/// Arguments for the hash-password command
#[derive(Args, Clone, Debug)]
pub struct HashArgs {
    /// Plaintext password
    pub password: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Run the hash-password command
pub async fn run(args: HashArgs) -> anyhow::Result<()> {
    let config = bootstrap();

    if let Err(e) = validate_password(&args.password) {
        return report(FieldErrors::single(PASSWORD, e), &args.output);
    }

    let hasher = Argon2Hasher::from_config(&config.password_hashing)?;
    info!(
        memory_kib = config.password_hashing.memory_kib,
        iterations = config.password_hashing.iterations,
        "Hashing password"
    );

    let password = args.password;
    let hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .context("hashing task failed")??;

    if args.output.json {
        println!("{}", serde_json::json!({ "hash": hash }));
    } else {
        println!("{}", hash);
    }

    Ok(())
}
