//! Presence CLI - headless host for the rich presence settings panel
//!
//! Drives the settings synchronizer the way a preferences dialog would:
//! load, edit, check for pending changes, and commit.

mod cli;
mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::common::Context;
use crate::commands::fields::run_fields;
use crate::commands::folder::{run_check_folder, run_dump, run_open_folder};
use crate::commands::reset::run_reset_defaults;
use crate::commands::set::run_set;
use crate::commands::show::run_show;
use crate::commands::themes::run_themes;
use crate::error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("presence_cli=info,presence_core=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let context = Context::from_cli(&cli)?;

    match cli.command {
        Commands::Show { json } => run_show(&context, json),
        Commands::Fields => run_fields(),
        Commands::Set { pairs, dry_run } => run_set(&context, &pairs, dry_run),
        Commands::ResetDefaults { dry_run } => run_reset_defaults(&context, dry_run),
        Commands::CheckFolder { path } => run_check_folder(&context, path.as_deref()),
        Commands::Dump => run_dump(&context),
        Commands::OpenFolder => run_open_folder(&context),
        Commands::Themes => run_themes(&context),
    }
}
