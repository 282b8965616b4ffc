//! Persisted application and project settings

use serde::{Deserialize, Serialize};

use super::theme::CLASSIC_THEME;
use crate::util::truncate_chars;

/// Longest project description accepted, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 128;
/// Shortest inactivity timeout, in minutes.
pub const MIN_INACTIVITY_TIMEOUT: u32 = 1;
/// Longest inactivity timeout, in minutes (one day).
pub const MAX_INACTIVITY_TIMEOUT: u32 = 24 * 60;

/// Clamp an inactivity timeout into `MIN_INACTIVITY_TIMEOUT..=MAX_INACTIVITY_TIMEOUT`.
pub const fn clamp_inactivity_timeout(minutes: u32) -> u32 {
    if minutes < MIN_INACTIVITY_TIMEOUT {
        MIN_INACTIVITY_TIMEOUT
    } else if minutes > MAX_INACTIVITY_TIMEOUT {
        MAX_INACTIVITY_TIMEOUT
    } else {
        minutes
    }
}

/// Default debug log folder under the user cache directory.
fn default_debug_log_folder() -> String {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("rich-presence")
        .join("logs")
        .to_string_lossy()
        .into_owned()
}

/// Per-project settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    /// Whether presence is shown for this project
    pub enabled: bool,
    /// Free text shown next to the project name
    pub description: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            description: String::new(),
        }
    }
}

impl ProjectSettings {
    /// Enforce the description length bound on values read from disk.
    pub fn normalize(&mut self) {
        if self.description.chars().count() > MAX_DESCRIPTION_CHARS {
            self.description = truncate_chars(&self.description, MAX_DESCRIPTION_CHARS);
        }
    }
}

/// Application-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationSettings {
    /// Master switch for the presence integration
    pub enabled: bool,
    /// Show a placeholder image for IDEs without an icon
    pub show_unknown_image_ide: bool,
    /// Show a placeholder image for unrecognized file types
    pub show_unknown_image_file: bool,
    pub show_file_extensions: bool,
    pub hide_read_only_files: bool,
    /// Show "Reading" rather than "Writing" for read-only files
    pub show_reading_instead_of_writing: bool,
    pub show_ide_when_no_project_is_available: bool,
    pub hide_after_period_of_inactivity: bool,
    /// Inactivity timeout in minutes
    pub inactivity_timeout: u32,
    pub reset_open_time_after_inactivity: bool,
    pub experimental_window_listener_enabled: bool,
    pub debug_logging_enabled: bool,
    /// Folder receiving debug logs and state dumps
    pub debug_log_folder: String,
    pub show_files: bool,
    pub show_elapsed_time: bool,
    pub force_big_ide_icon: bool,
    /// Selected theme name
    pub theme: String,
}

impl Default for ApplicationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            show_unknown_image_ide: true,
            show_unknown_image_file: true,
            show_file_extensions: true,
            hide_read_only_files: true,
            show_reading_instead_of_writing: false,
            show_ide_when_no_project_is_available: false,
            hide_after_period_of_inactivity: true,
            inactivity_timeout: 20,
            reset_open_time_after_inactivity: true,
            experimental_window_listener_enabled: false,
            debug_logging_enabled: false,
            debug_log_folder: default_debug_log_folder(),
            show_files: true,
            show_elapsed_time: true,
            force_big_ide_icon: false,
            theme: CLASSIC_THEME.to_string(),
        }
    }
}

impl ApplicationSettings {
    /// Enforce value bounds on settings read from disk.
    pub fn normalize(&mut self) {
        self.inactivity_timeout = clamp_inactivity_timeout(self.inactivity_timeout);
        if self.theme.trim().is_empty() {
            self.theme = CLASSIC_THEME.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_application_settings_default() {
        let settings = ApplicationSettings::default();
        assert_eq!(settings.inactivity_timeout, 20);
        assert_eq!(settings.theme, "Classic");
        assert!(settings.show_files);
        assert!(!settings.debug_logging_enabled);
    }

    #[test]
    fn clamp_inactivity_timeout_bounds() {
        assert_eq!(clamp_inactivity_timeout(0), 1);
        assert_eq!(clamp_inactivity_timeout(90), 90);
        assert_eq!(clamp_inactivity_timeout(5000), 1440);
    }

    #[test]
    fn normalize_repairs_out_of_range_values() {
        let mut application = ApplicationSettings {
            inactivity_timeout: 0,
            theme: "  ".to_string(),
            ..ApplicationSettings::default()
        };
        application.normalize();
        assert_eq!(application.inactivity_timeout, 1);
        assert_eq!(application.theme, "Classic");

        let mut project = ProjectSettings {
            enabled: true,
            description: "x".repeat(200),
        };
        project.normalize();
        assert_eq!(project.description.chars().count(), MAX_DESCRIPTION_CHARS);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: ApplicationSettings =
            serde_json::from_str(r#"{ "show_files": false, "theme": "Modern" }"#).unwrap();
        assert!(!parsed.show_files);
        assert_eq!(parsed.theme, "Modern");
        assert_eq!(parsed.inactivity_timeout, 20);
    }
}
