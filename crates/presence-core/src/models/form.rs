//! Editable form state for a settings dialog session

use serde::Serialize;

use super::settings::{clamp_inactivity_timeout, MAX_DESCRIPTION_CHARS};
use super::theme::Theme;
use crate::util::truncate_chars;

/// In-memory mirror of the values a user is editing.
///
/// Built by the synchronizer's `reset`, mutated freely while the dialog is
/// open, and thrown away if the dialog closes without committing. The two
/// bounded values are private so their limits hold for every edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub project_enabled: bool,
    project_description: String,
    pub application_enabled: bool,
    pub show_unknown_image_ide: bool,
    pub show_unknown_image_file: bool,
    pub show_file_extensions: bool,
    pub hide_read_only_files: bool,
    pub show_reading_instead_of_writing: bool,
    pub show_ide_when_no_project_is_available: bool,
    pub hide_after_period_of_inactivity: bool,
    inactivity_timeout: u32,
    pub reset_open_time_after_inactivity: bool,
    pub experimental_window_listener_enabled: bool,
    pub debug_logging_enabled: bool,
    pub debug_log_folder: String,
    pub show_files: bool,
    pub show_elapsed_time: bool,
    pub force_big_ide_icon: bool,
    pub theme: Theme,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            project_enabled: false,
            project_description: String::new(),
            application_enabled: false,
            show_unknown_image_ide: false,
            show_unknown_image_file: false,
            show_file_extensions: false,
            hide_read_only_files: false,
            show_reading_instead_of_writing: false,
            show_ide_when_no_project_is_available: false,
            hide_after_period_of_inactivity: false,
            inactivity_timeout: clamp_inactivity_timeout(0),
            reset_open_time_after_inactivity: false,
            experimental_window_listener_enabled: false,
            debug_logging_enabled: false,
            debug_log_folder: String::new(),
            show_files: false,
            show_elapsed_time: false,
            force_big_ide_icon: false,
            theme: Theme::classic(),
        }
    }
}

impl FormState {
    pub fn project_description(&self) -> &str {
        &self.project_description
    }

    /// Set the project description, keeping at most 128 characters.
    pub fn set_project_description(&mut self, value: &str) {
        self.project_description = truncate_chars(value, MAX_DESCRIPTION_CHARS);
    }

    /// Inactivity timeout in minutes.
    pub const fn inactivity_timeout(&self) -> u32 {
        self.inactivity_timeout
    }

    /// Set the inactivity timeout, clamped to 1..=1440 minutes.
    pub fn set_inactivity_timeout(&mut self, minutes: u32) {
        self.inactivity_timeout = clamp_inactivity_timeout(minutes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn description_is_bounded_to_128_chars() {
        let mut form = FormState::default();
        form.set_project_description(&"é".repeat(300));
        assert_eq!(form.project_description().chars().count(), 128);

        form.set_project_description("My project");
        assert_eq!(form.project_description(), "My project");
    }

    #[test]
    fn inactivity_timeout_is_clamped() {
        let mut form = FormState::default();
        form.set_inactivity_timeout(0);
        assert_eq!(form.inactivity_timeout(), 1);
        form.set_inactivity_timeout(2000);
        assert_eq!(form.inactivity_timeout(), 1440);
        form.set_inactivity_timeout(45);
        assert_eq!(form.inactivity_timeout(), 45);
    }
}
