use clap::Parser;
use pim_user::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::ValidateUser(args) => cli::validate::run_user(args),
        Command::ValidateGroup(args) => cli::validate::run_group(args),
        Command::HashPassword(args) => cli::hash::run(args).await,
    }
}
