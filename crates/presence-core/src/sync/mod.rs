//! Synchronization between the settings form and persisted settings
//!
//! `SettingsSynchronizer` owns the editable [`FormState`] plus both persisted
//! objects. The host preferences framework drives it through
//! [`Configurable`]: `load` when the dialog opens or changes are discarded,
//! `is_dirty` to decide whether to offer Apply, and `commit` on Apply/OK.
//! Every operation runs synchronously on the caller's thread.

use std::path::PathBuf;

use crate::desktop::{FolderOpener, SystemFolderOpener};
use crate::dump::{DiagnosticDump, DiagnosticState, JsonStateDump};
use crate::enablement::Enablement;
use crate::error::{Error, Result};
use crate::fields::{Field, Persisted, FIELDS};
use crate::fs::{FileSystem, StdFileSystem};
use crate::models::{ApplicationSettings, FormState, ProjectSettings};
use crate::themes::ThemeCatalog;
use crate::validation::{parse_folder, validate_folder, FolderFeedback, ValidationResult};

/// Lifecycle hooks a preferences host calls on a settings page.
pub trait Configurable {
    /// Discard edits and reload from persisted settings.
    fn load(&mut self);

    /// Whether there are valid pending edits.
    fn is_dirty(&mut self) -> bool;

    /// Persist pending edits.
    fn commit(&mut self);
}

pub struct SettingsSynchronizer {
    application: ApplicationSettings,
    project: ProjectSettings,
    form: FormState,
    enablement: Enablement,
    folder: FolderFeedback,
    themes: Box<dyn ThemeCatalog>,
    fs: Box<dyn FileSystem>,
    dump: Box<dyn DiagnosticDump>,
    opener: Box<dyn FolderOpener>,
}

impl SettingsSynchronizer {
    /// Create a synchronizer with the form loaded from `application` and
    /// `project`, using the real filesystem, JSON dumps, and the system
    /// folder opener.
    pub fn new(
        application: ApplicationSettings,
        project: ProjectSettings,
        themes: impl ThemeCatalog + 'static,
    ) -> Self {
        let form = FormState::default();
        let enablement = Enablement::from_form(&form);
        let folder = validate_folder(&form.debug_log_folder, false, &StdFileSystem);
        let mut synchronizer = Self {
            application,
            project,
            form,
            enablement,
            folder,
            themes: Box::new(themes),
            fs: Box::new(StdFileSystem),
            dump: Box::new(JsonStateDump),
            opener: Box::new(SystemFolderOpener),
        };
        synchronizer.reset();
        synchronizer
    }

    /// Replace the filesystem collaborator and re-derive enablement.
    #[must_use]
    pub fn with_file_system(mut self, fs: impl FileSystem + 'static) -> Self {
        self.fs = Box::new(fs);
        self.refresh_enablement();
        self
    }

    #[must_use]
    pub fn with_dump(mut self, dump: impl DiagnosticDump + 'static) -> Self {
        self.dump = Box::new(dump);
        self
    }

    #[must_use]
    pub fn with_opener(mut self, opener: impl FolderOpener + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    pub const fn form(&self) -> &FormState {
        &self.form
    }

    pub const fn application(&self) -> &ApplicationSettings {
        &self.application
    }

    pub const fn project(&self) -> &ProjectSettings {
        &self.project
    }

    pub fn themes(&self) -> &dyn ThemeCatalog {
        self.themes.as_ref()
    }

    pub const fn enablement(&self) -> &Enablement {
        &self.enablement
    }

    /// Feedback from the latest folder validation.
    pub const fn folder_feedback(&self) -> &FolderFeedback {
        &self.folder
    }

    /// Consume the synchronizer, returning both persisted objects.
    pub fn into_settings(self) -> (ApplicationSettings, ProjectSettings) {
        (self.application, self.project)
    }

    /// Apply an edit to the form, then refresh enablement.
    pub fn edit(&mut self, edit: impl FnOnce(&mut FormState)) {
        edit(&mut self.form);
        self.refresh_enablement();
    }

    /// Parse `raw` into the named field, then refresh enablement.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<()> {
        let field = Field::by_name(name)?;
        field.write(&mut self.form, raw, self.themes.as_ref())?;
        self.refresh_enablement();
        Ok(())
    }

    /// Overwrite the whole form from the persisted settings.
    pub fn reset(&mut self) {
        let stored = Persisted {
            application: &self.application,
            project: &self.project,
        };
        load_form(&mut self.form, &stored, self.themes.as_ref());
        tracing::debug!("Loaded settings form from persisted state");
        self.refresh_enablement();
    }

    /// Overwrite the whole form with default values.
    ///
    /// Persisted settings are untouched until the next `apply`.
    pub fn load_defaults(&mut self) {
        let application = ApplicationSettings::default();
        let project = ProjectSettings::default();
        let stored = Persisted {
            application: &application,
            project: &project,
        };
        load_form(&mut self.form, &stored, self.themes.as_ref());
        tracing::debug!("Loaded default values into settings form");
        self.refresh_enablement();
    }

    /// Names of fields whose form value differs from the persisted value.
    pub fn modified_fields(&self) -> Vec<&'static str> {
        let stored = Persisted {
            application: &self.application,
            project: &self.project,
        };
        FIELDS
            .iter()
            .filter(|field| field.differs(&self.form, &stored))
            .map(|field| field.name)
            .collect()
    }

    /// Whether any field differs and the log folder passes validation.
    pub fn is_modified(&mut self) -> bool {
        self.validate_log_folder().passes() && !self.modified_fields().is_empty()
    }

    /// Write the form back into the persisted settings.
    ///
    /// The log folder is only written while it passes validation; every
    /// other field is always committed. With debug logging on, a missing
    /// folder is created, and failure to do so is only logged.
    pub fn apply(&mut self) {
        let folder_passes = self.validate_log_folder().passes();

        for field in FIELDS {
            if field.gated && !folder_passes {
                tracing::debug!("Keeping persisted {}; folder failed validation", field.name);
                continue;
            }
            field.commit(&self.form, &mut self.application, &mut self.project);
        }

        if folder_passes {
            self.form
                .debug_log_folder
                .clone_from(&self.application.debug_log_folder);
            self.ensure_log_folder();
        }
        tracing::debug!("Applied settings form");
        self.refresh_enablement();
    }

    /// Recompute field enablement, then revalidate the log folder.
    pub fn refresh_enablement(&mut self) {
        self.enablement = Enablement::from_form(&self.form);
        self.validate_log_folder();
    }

    /// Validate the current log folder and update action enablement.
    pub fn validate_log_folder(&mut self) -> ValidationResult {
        let feedback = validate_folder(
            &self.form.debug_log_folder,
            self.form.debug_logging_enabled,
            self.fs.as_ref(),
        );
        self.enablement = self.enablement.with_folder(&feedback);
        self.folder = feedback;
        feedback.result
    }

    /// Write a diagnostic dump into the log folder.
    pub fn dump_state(&mut self) -> Result<PathBuf> {
        self.validate_log_folder();
        if !self.folder.dump_state_enabled {
            return Err(Error::ActionUnavailable("dump state"));
        }
        let folder = parse_folder(&self.form.debug_log_folder)
            .ok_or(Error::ActionUnavailable("dump state"))?;
        self.dump.dump(
            &folder,
            &DiagnosticState {
                application: &self.application,
                project: &self.project,
                form: &self.form,
            },
        )
    }

    /// Open the log folder in the desktop file browser.
    ///
    /// Revalidates first and does nothing if the folder fails. Returns
    /// whether the folder was opened; opener errors are logged, not returned.
    pub fn open_log_folder(&mut self) -> bool {
        if !self.validate_log_folder().passes() {
            return false;
        }
        let Some(folder) = self.ensure_log_folder() else {
            return false;
        };

        match self.opener.open(&folder) {
            Ok(()) => {
                tracing::info!("Opened debug log folder {}", folder.display());
                true
            }
            Err(error) => {
                tracing::error!(
                    "An error occurred while trying to open the debug log folder {}: {}",
                    folder.display(),
                    error
                );
                false
            }
        }
    }

    /// Create the log folder when debug logging is on and it is missing.
    fn ensure_log_folder(&self) -> Option<PathBuf> {
        let folder = parse_folder(&self.form.debug_log_folder)?;
        if self.form.debug_logging_enabled && !self.fs.is_dir(&folder) {
            match self.fs.create_dir_all(&folder) {
                Ok(()) => tracing::info!("Created debug log folder {}", folder.display()),
                Err(error) => {
                    tracing::warn!("Could not create folder {}: {}", folder.display(), error);
                }
            }
        }
        Some(folder)
    }
}

fn load_form(form: &mut FormState, stored: &Persisted<'_>, themes: &dyn ThemeCatalog) {
    for field in FIELDS {
        field.load(form, stored, themes);
    }
}

impl Configurable for SettingsSynchronizer {
    fn load(&mut self) {
        self.reset();
    }

    fn is_dirty(&mut self) -> bool {
        self.is_modified()
    }

    fn commit(&mut self) {
        self.apply();
    }
}
