use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "presence")]
#[command(about = "Inspect and edit rich presence settings")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding application settings (defaults to the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Project root whose project settings are edited
    #[arg(long, global = true, value_name = "DIR", default_value = ".")]
    pub project: PathBuf,

    /// Directory with extra `*.json` theme definitions
    #[arg(long, global = true, value_name = "DIR")]
    pub themes_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show current values, enablement, and log folder status
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List every settings field with its scope and type
    Fields,
    /// Edit fields and commit them
    Set {
        /// FIELD VALUE pairs, e.g. `show_files false inactivity_timeout 30`
        #[arg(required = true, num_args = 2.., value_name = "FIELD VALUE")]
        pairs: Vec<String>,
        /// Report pending changes without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Load default values into every field and commit them
    ResetDefaults {
        /// Report pending changes without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate the configured debug log folder, or PATH instead
    CheckFolder {
        /// Folder to check in place of the configured one
        path: Option<String>,
    },
    /// Write a diagnostic state dump into the debug log folder
    Dump,
    /// Open the debug log folder in the desktop file browser
    OpenFolder,
    /// List available themes
    Themes,
}
