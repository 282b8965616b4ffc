use presence_core::fields::FIELDS;
use presence_core::SettingsSynchronizer;
use serde_json::json;

use crate::commands::common::{open_synchronizer, Context};
use crate::commands::folder::format_feedback_lines;
use crate::error::CliError;

pub fn run_show(context: &Context, as_json: bool) -> Result<(), CliError> {
    let sync = open_synchronizer(context)?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&show_json(&sync))?);
    } else {
        for line in format_show_lines(&sync) {
            println!("{line}");
        }
    }
    Ok(())
}

pub fn show_json(sync: &SettingsSynchronizer) -> serde_json::Value {
    let enablement = sync.enablement().to_map();
    let fields = FIELDS
        .iter()
        .map(|field| {
            json!({
                "name": field.name,
                "scope": field.scope,
                "kind": field.kind,
                "value": field.read(sync.form()),
                "enabled": enablement.get(field.name).copied().unwrap_or(true),
            })
        })
        .collect::<Vec<_>>();

    json!({
        "fields": fields,
        "enablement": enablement,
        "folder": sync.folder_feedback(),
    })
}

pub fn format_show_lines(sync: &SettingsSynchronizer) -> Vec<String> {
    let enablement = sync.enablement().to_map();
    let width = FIELDS
        .iter()
        .map(|field| field.name.len())
        .max()
        .unwrap_or(0);

    let mut lines: Vec<String> = FIELDS
        .iter()
        .map(|field| {
            let disabled = !enablement.get(field.name).copied().unwrap_or(true);
            format!(
                "{:<width$}  {:<11}  {}{}",
                field.name,
                field.scope.to_string(),
                field.read(sync.form()),
                if disabled { "  (disabled)" } else { "" },
            )
        })
        .collect();

    lines.push(String::new());
    lines.extend(format_feedback_lines(
        &sync.form().debug_log_folder,
        sync.folder_feedback(),
    ));
    lines
}
