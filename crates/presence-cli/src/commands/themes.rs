use presence_core::SettingsSynchronizer;

use crate::commands::common::{open_synchronizer, Context};
use crate::error::CliError;

pub fn run_themes(context: &Context) -> Result<(), CliError> {
    let sync = open_synchronizer(context)?;
    for line in format_theme_lines(&sync) {
        println!("{line}");
    }
    Ok(())
}

pub fn format_theme_lines(sync: &SettingsSynchronizer) -> Vec<String> {
    let current = &sync.form().theme.name;
    sync.themes()
        .themes()
        .into_values()
        .map(|theme| {
            let marker = if &theme.name == current { "*" } else { " " };
            if theme.description.is_empty() {
                format!("{marker} {}", theme.name)
            } else {
                format!("{marker} {} - {}", theme.name, theme.description)
            }
        })
        .collect()
}
