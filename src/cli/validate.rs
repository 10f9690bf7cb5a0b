//! Field validation commands

use clap::Args;

use super::{OutputArgs, bootstrap, report};
use crate::domain::group::{DESCRIPTION, GROUP_NAME, group_schema};
use crate::domain::user::{CELLPHONE, EMAIL, GROUP, PASSWORD, USERNAME, user_schema};
use crate::domain::validator::FieldErrors;

/// Arguments for the validate-user command
#[derive(Args, Clone, Debug)]
pub struct UserArgs {
    #[arg(long)]
    pub username: String,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub cellphone: Option<String>,

    #[arg(long)]
    pub group: Option<String>,

    /// Checked only when given
    #[arg(long)]
    pub password: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the validate-group command
#[derive(Args, Clone, Debug)]
pub struct GroupArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Run the validate-user command
pub fn run_user(args: UserArgs) -> anyhow::Result<()> {
    bootstrap();
    report(user_errors(&args), &args.output)
}

/// Run the validate-group command
pub fn run_group(args: GroupArgs) -> anyhow::Result<()> {
    bootstrap();
    report(group_errors(&args), &args.output)
}

fn user_errors(args: &UserArgs) -> FieldErrors {
    let mut values = vec![
        (USERNAME, Some(args.username.as_str())),
        (EMAIL, args.email.as_deref()),
        (CELLPHONE, args.cellphone.as_deref()),
        (GROUP, args.group.as_deref()),
    ];
    if let Some(password) = args.password.as_deref() {
        values.push((PASSWORD, Some(password)));
    }

    user_schema().validate(values)
}

fn group_errors(args: &GroupArgs) -> FieldErrors {
    group_schema().validate([
        (GROUP_NAME, Some(args.name.as_str())),
        (DESCRIPTION, Some(args.description.as_str())),
    ])
}
