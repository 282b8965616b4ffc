//! Derived enablement of dependent fields and folder actions

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::FormState;
use crate::validation::FolderFeedback;

/// Which dependent inputs and actions are currently interactive.
///
/// Every flag is a pure function of the form (and, for the two actions, of
/// the latest folder validation). A UI layer reads these and greys out the
/// matching widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Enablement {
    pub inactivity_timeout: bool,
    pub reset_open_time_after_inactivity: bool,
    pub show_unknown_image_file: bool,
    pub show_file_extensions: bool,
    pub hide_read_only_files: bool,
    pub show_reading_instead_of_writing: bool,
    pub debug_log_folder: bool,
    pub dump_state: bool,
    pub open_folder: bool,
}

impl Enablement {
    /// Field enablement from the form; both actions start disabled.
    pub const fn from_form(form: &FormState) -> Self {
        let inactivity = form.hide_after_period_of_inactivity;
        let files = form.show_files;
        Self {
            inactivity_timeout: inactivity,
            reset_open_time_after_inactivity: inactivity,
            show_unknown_image_file: files,
            show_file_extensions: files,
            hide_read_only_files: files,
            show_reading_instead_of_writing: files && !form.hide_read_only_files,
            debug_log_folder: form.debug_logging_enabled,
            dump_state: false,
            open_folder: false,
        }
    }

    /// Take the action flags from a folder validation.
    #[must_use]
    pub const fn with_folder(mut self, feedback: &FolderFeedback) -> Self {
        self.dump_state = feedback.dump_state_enabled;
        self.open_folder = feedback.open_folder_enabled;
        self
    }

    /// Enablement keyed by field or action name.
    pub fn to_map(&self) -> BTreeMap<&'static str, bool> {
        BTreeMap::from([
            ("inactivity_timeout", self.inactivity_timeout),
            (
                "reset_open_time_after_inactivity",
                self.reset_open_time_after_inactivity,
            ),
            ("show_unknown_image_file", self.show_unknown_image_file),
            ("show_file_extensions", self.show_file_extensions),
            ("hide_read_only_files", self.hide_read_only_files),
            (
                "show_reading_instead_of_writing",
                self.show_reading_instead_of_writing,
            ),
            ("debug_log_folder", self.debug_log_folder),
            ("dump_state", self.dump_state),
            ("open_folder", self.open_folder),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn inactivity_toggle_drives_timeout_inputs() {
        let mut form = FormState::default();
        form.hide_after_period_of_inactivity = false;
        let enablement = Enablement::from_form(&form);
        assert!(!enablement.inactivity_timeout);
        assert!(!enablement.reset_open_time_after_inactivity);

        form.hide_after_period_of_inactivity = true;
        let enablement = Enablement::from_form(&form);
        assert!(enablement.inactivity_timeout);
        assert!(enablement.reset_open_time_after_inactivity);
    }

    #[test]
    fn show_files_off_disables_file_options_whatever_their_state() {
        let mut form = FormState::default();
        form.show_files = false;
        for (unknown, extensions, hide_read_only, reading) in [
            (true, true, true, true),
            (false, false, false, false),
            (true, false, false, true),
        ] {
            form.show_unknown_image_file = unknown;
            form.show_file_extensions = extensions;
            form.hide_read_only_files = hide_read_only;
            form.show_reading_instead_of_writing = reading;

            let enablement = Enablement::from_form(&form);
            assert!(!enablement.show_unknown_image_file);
            assert!(!enablement.show_file_extensions);
            assert!(!enablement.hide_read_only_files);
            assert!(!enablement.show_reading_instead_of_writing);
        }
    }

    #[test]
    fn reading_toggle_needs_files_shown_and_read_only_visible() {
        let mut form = FormState::default();
        form.show_files = true;
        form.hide_read_only_files = true;
        assert!(!Enablement::from_form(&form).show_reading_instead_of_writing);

        form.hide_read_only_files = false;
        assert!(Enablement::from_form(&form).show_reading_instead_of_writing);
    }

    #[test]
    fn to_map_lists_every_dependent_name() {
        let mut form = FormState::default();
        form.debug_logging_enabled = true;
        let map = Enablement::from_form(&form).to_map();
        assert_eq!(map.len(), 9);
        assert_eq!(map.get("debug_log_folder"), Some(&true));
        assert_eq!(map.get("open_folder"), Some(&false));
    }
}
