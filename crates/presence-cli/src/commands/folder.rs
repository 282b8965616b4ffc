use presence_core::validation::FolderFeedback;

use crate::commands::common::{open_synchronizer, Context};
use crate::error::CliError;

pub fn run_check_folder(context: &Context, path: Option<&str>) -> Result<(), CliError> {
    let (folder, feedback) = check_folder(context, path)?;
    for line in format_feedback_lines(&folder, &feedback) {
        println!("{line}");
    }
    if feedback.result.passes() {
        Ok(())
    } else {
        Err(CliError::InvalidFolder(
            feedback.message.unwrap_or("Invalid path"),
        ))
    }
}

pub fn check_folder(
    context: &Context,
    path: Option<&str>,
) -> Result<(String, FolderFeedback), CliError> {
    let mut sync = open_synchronizer(context)?;
    if let Some(path) = path {
        sync.set_field("debug_log_folder", path)?;
    }
    sync.validate_log_folder();
    Ok((sync.form().debug_log_folder.clone(), *sync.folder_feedback()))
}

pub fn format_feedback_lines(folder: &str, feedback: &FolderFeedback) -> Vec<String> {
    let mut lines = vec![
        format!("Folder: {folder}"),
        format!("Status: {}", feedback.result),
    ];
    if let Some(message) = feedback.message {
        lines.push(format!("Note: {message}"));
    }
    lines.push(format!(
        "Dump state: {}",
        enabled_label(feedback.dump_state_enabled)
    ));
    lines.push(format!(
        "Open folder: {}",
        enabled_label(feedback.open_folder_enabled)
    ));
    lines
}

pub fn run_dump(context: &Context) -> Result<(), CliError> {
    let mut sync = open_synchronizer(context)?;
    let path = sync.dump_state()?;
    println!("{}", path.display());
    Ok(())
}

pub fn run_open_folder(context: &Context) -> Result<(), CliError> {
    let mut sync = open_synchronizer(context)?;
    if sync.open_log_folder() {
        println!("Opened {}", sync.form().debug_log_folder);
        Ok(())
    } else {
        Err(CliError::OpenFolderFailed)
    }
}

pub const fn enabled_label(enabled: bool) -> &'static str {
    if enabled {
        "enabled"
    } else {
        "disabled"
    }
}
