use std::path::PathBuf;

use presence_core::config::SettingsPaths;
use presence_core::themes::StaticThemeCatalog;
use presence_core::{Configurable, SettingsSynchronizer};

use crate::cli::Cli;
use crate::error::CliError;

/// Where settings and themes are read from for one invocation.
pub struct Context {
    pub paths: SettingsPaths,
    pub themes_dir: Option<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Ok(Self {
            paths: SettingsPaths::resolve(cli.config_dir.as_deref(), &cli.project)?,
            themes_dir: cli.themes_dir.clone(),
        })
    }
}

/// Result of committing staged edits.
#[derive(Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Unchanged,
    Pending(Vec<&'static str>),
    Applied(Vec<&'static str>),
}

impl CommitOutcome {
    pub fn describe(&self) -> String {
        match self {
            Self::Unchanged => "No changes to apply".to_string(),
            Self::Pending(fields) => format!("Pending changes (not saved): {}", fields.join(", ")),
            Self::Applied(fields) => format!("Applied: {}", fields.join(", ")),
        }
    }
}

pub fn open_synchronizer(context: &Context) -> Result<SettingsSynchronizer, CliError> {
    let application = context.paths.load_application()?;
    let project = context.paths.load_project()?;
    let themes = match &context.themes_dir {
        Some(dir) => StaticThemeCatalog::from_dir(dir)?,
        None => StaticThemeCatalog::builtin(),
    };
    Ok(SettingsSynchronizer::new(application, project, themes))
}

pub fn save_settings(context: &Context, sync: SettingsSynchronizer) -> Result<(), CliError> {
    let (application, project) = sync.into_settings();
    context.paths.save_application(&application)?;
    context.paths.save_project(&project)?;
    tracing::info!(
        "Saved settings to {} and {}",
        context.paths.application_file.display(),
        context.paths.project_file.display()
    );
    Ok(())
}

/// Commit staged edits the way a preferences dialog would on Apply.
///
/// Edits that cannot be committed because the log folder fails validation
/// are reported as an error rather than partially saved.
pub fn commit_pending(
    context: &Context,
    mut sync: SettingsSynchronizer,
    dry_run: bool,
) -> Result<CommitOutcome, CliError> {
    let changed = sync.modified_fields();
    if changed.is_empty() {
        return Ok(CommitOutcome::Unchanged);
    }
    if !sync.is_dirty() {
        let reason = sync.folder_feedback().message.unwrap_or("Invalid path");
        return Err(CliError::InvalidFolder(reason));
    }
    if dry_run {
        return Ok(CommitOutcome::Pending(changed));
    }

    sync.commit();
    save_settings(context, sync)?;
    Ok(CommitOutcome::Applied(changed))
}
