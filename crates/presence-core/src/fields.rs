//! Declarative table of every synchronized settings field
//!
//! Each entry knows how to compare, load, commit, display, and parse one
//! form value against its persisted counterpart. The synchronizer iterates
//! the table generically, so adding an option means adding one entry here.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{ApplicationSettings, FormState, ProjectSettings};
use crate::themes::ThemeCatalog;
use crate::util::parse_flag;

/// Which persisted object a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Application,
    Project,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => f.write_str("application"),
            Self::Project => f.write_str("project"),
        }
    }
}

/// Value shape of a field, used for display and parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Toggle,
    Text,
    Minutes,
    Path,
    Theme,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Toggle => "toggle",
            Self::Text => "text",
            Self::Minutes => "minutes",
            Self::Path => "path",
            Self::Theme => "theme",
        };
        f.write_str(label)
    }
}

/// Read-only view of both persisted objects.
#[derive(Debug, Clone, Copy)]
pub struct Persisted<'a> {
    pub application: &'a ApplicationSettings,
    pub project: &'a ProjectSettings,
}

/// One synchronized field.
pub struct Field {
    pub name: &'static str,
    pub scope: Scope,
    pub kind: FieldKind,
    /// Committed only while the log folder passes validation.
    pub gated: bool,
    differs: fn(&FormState, &Persisted<'_>) -> bool,
    load: fn(&mut FormState, &Persisted<'_>, &dyn ThemeCatalog),
    commit: fn(&FormState, &mut ApplicationSettings, &mut ProjectSettings),
    read: fn(&FormState) -> String,
    write: fn(&mut FormState, &str, &dyn ThemeCatalog) -> Result<()>,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("kind", &self.kind)
            .field("gated", &self.gated)
            .finish_non_exhaustive()
    }
}

impl Field {
    /// Look a field up by name.
    pub fn by_name(name: &str) -> Result<&'static Self> {
        FIELDS
            .iter()
            .find(|field| field.name == name)
            .ok_or_else(|| Error::UnknownField(name.to_string()))
    }

    /// Whether the form value differs from the persisted one.
    pub fn differs(&self, form: &FormState, stored: &Persisted<'_>) -> bool {
        (self.differs)(form, stored)
    }

    /// Copy the persisted value into the form.
    pub fn load(&self, form: &mut FormState, stored: &Persisted<'_>, themes: &dyn ThemeCatalog) {
        (self.load)(form, stored, themes);
    }

    /// Copy the form value into its persisted object.
    pub fn commit(
        &self,
        form: &FormState,
        application: &mut ApplicationSettings,
        project: &mut ProjectSettings,
    ) {
        (self.commit)(form, application, project);
    }

    /// Display the current form value.
    pub fn read(&self, form: &FormState) -> String {
        (self.read)(form)
    }

    /// Parse `raw` and store it in the form.
    pub fn write(&self, form: &mut FormState, raw: &str, themes: &dyn ThemeCatalog) -> Result<()> {
        (self.write)(form, raw, themes)
    }
}

fn parse_toggle(field: &'static str, raw: &str) -> Result<bool> {
    parse_flag(raw).ok_or_else(|| Error::InvalidValue {
        field,
        reason: format!("expected true/false, got '{raw}'"),
    })
}

fn absolute_folder(raw: &str) -> String {
    std::path::absolute(raw).map_or_else(
        |_| raw.to_string(),
        |path| path.to_string_lossy().into_owned(),
    )
}

macro_rules! toggle {
    (application: $form:ident) => {
        toggle!(application: $form => $form)
    };
    (application: $form:ident => $stored:ident) => {
        Field {
            name: stringify!($form),
            scope: Scope::Application,
            kind: FieldKind::Toggle,
            gated: false,
            differs: |form, stored| form.$form != stored.application.$stored,
            load: |form, stored, _| form.$form = stored.application.$stored,
            commit: |form, application, _| application.$stored = form.$form,
            read: |form| form.$form.to_string(),
            write: |form, raw, _| {
                form.$form = parse_toggle(stringify!($form), raw)?;
                Ok(())
            },
        }
    };
    (project: $form:ident => $stored:ident) => {
        Field {
            name: stringify!($form),
            scope: Scope::Project,
            kind: FieldKind::Toggle,
            gated: false,
            differs: |form, stored| form.$form != stored.project.$stored,
            load: |form, stored, _| form.$form = stored.project.$stored,
            commit: |form, _, project| project.$stored = form.$form,
            read: |form| form.$form.to_string(),
            write: |form, raw, _| {
                form.$form = parse_toggle(stringify!($form), raw)?;
                Ok(())
            },
        }
    };
}

/// Every synchronized field, in commit order.
pub static FIELDS: &[Field] = &[
    toggle!(project: project_enabled => enabled),
    Field {
        name: "project_description",
        scope: Scope::Project,
        kind: FieldKind::Text,
        gated: false,
        differs: |form, stored| form.project_description() != stored.project.description,
        load: |form, stored, _| form.set_project_description(&stored.project.description),
        commit: |form, _, project| project.description = form.project_description().to_string(),
        read: |form| form.project_description().to_string(),
        write: |form, raw, _| {
            form.set_project_description(raw);
            Ok(())
        },
    },
    toggle!(application: application_enabled => enabled),
    toggle!(application: show_unknown_image_ide),
    toggle!(application: show_unknown_image_file),
    toggle!(application: show_file_extensions),
    toggle!(application: hide_read_only_files),
    toggle!(application: show_reading_instead_of_writing),
    toggle!(application: show_ide_when_no_project_is_available),
    toggle!(application: hide_after_period_of_inactivity),
    Field {
        name: "inactivity_timeout",
        scope: Scope::Application,
        kind: FieldKind::Minutes,
        gated: false,
        differs: |form, stored| form.inactivity_timeout() != stored.application.inactivity_timeout,
        load: |form, stored, _| form.set_inactivity_timeout(stored.application.inactivity_timeout),
        commit: |form, application, _| application.inactivity_timeout = form.inactivity_timeout(),
        read: |form| form.inactivity_timeout().to_string(),
        write: |form, raw, _| {
            let minutes = raw
                .trim()
                .parse::<u32>()
                .map_err(|error| Error::InvalidValue {
                    field: "inactivity_timeout",
                    reason: format!("expected minutes, got '{raw}': {error}"),
                })?;
            form.set_inactivity_timeout(minutes);
            Ok(())
        },
    },
    toggle!(application: experimental_window_listener_enabled),
    toggle!(application: reset_open_time_after_inactivity),
    toggle!(application: debug_logging_enabled),
    toggle!(application: show_files),
    toggle!(application: show_elapsed_time),
    toggle!(application: force_big_ide_icon),
    Field {
        name: "theme",
        scope: Scope::Application,
        kind: FieldKind::Theme,
        gated: false,
        differs: |form, stored| !form.theme.same_as(&stored.application.theme),
        load: |form, stored, themes| form.theme = themes.theme_by_name(&stored.application.theme),
        commit: |form, application, _| application.theme = form.theme.name.clone(),
        read: |form| form.theme.name.clone(),
        write: |form, raw, themes| {
            let name = raw.trim();
            form.theme = themes
                .themes()
                .remove(name)
                .ok_or_else(|| Error::InvalidValue {
                    field: "theme",
                    reason: format!("unknown theme '{name}'"),
                })?;
            Ok(())
        },
    },
    Field {
        name: "debug_log_folder",
        scope: Scope::Application,
        kind: FieldKind::Path,
        gated: true,
        differs: |form, stored| form.debug_log_folder != stored.application.debug_log_folder,
        load: |form, stored, _| form.debug_log_folder.clone_from(&stored.application.debug_log_folder),
        commit: |form, application, _| {
            application.debug_log_folder = absolute_folder(&form.debug_log_folder);
        },
        read: |form| form.debug_log_folder.clone(),
        write: |form, raw, _| {
            raw.clone_into(&mut form.debug_log_folder);
            Ok(())
        },
    },
];
