use presence_core::fields::FIELDS;

use crate::error::CliError;

pub fn run_fields() -> Result<(), CliError> {
    for line in format_field_lines() {
        println!("{line}");
    }
    Ok(())
}

pub fn format_field_lines() -> Vec<String> {
    FIELDS
        .iter()
        .map(|field| format!("{} [{}, {}]", field.name, field.scope, field.kind))
        .collect()
}
