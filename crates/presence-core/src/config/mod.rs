//! Persisted settings locations and JSON storage.
//!
//! Application settings live in the user config directory and project
//! settings inside the project. Missing files load as defaults; unreadable
//! or malformed files are errors so a bad file is never silently replaced.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{ApplicationSettings, ProjectSettings};

const APPLICATION_FILE_NAME: &str = "application.json";
const PROJECT_DIR_NAME: &str = ".presence";
const PROJECT_FILE_NAME: &str = "project.json";

/// Environment variable overriding the application config directory.
pub const CONFIG_DIR_ENV: &str = "PRESENCE_CONFIG_DIR";

/// Resolved paths of both settings files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsPaths {
    pub application_file: PathBuf,
    pub project_file: PathBuf,
}

impl SettingsPaths {
    /// Resolve settings files for `project_root`.
    ///
    /// The application directory is `config_dir` when given, otherwise
    /// `$PRESENCE_CONFIG_DIR`, otherwise `<user config dir>/rich-presence`.
    pub fn resolve(config_dir: Option<&Path>, project_root: &Path) -> Result<Self> {
        let config_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_config_dir()?,
        };
        Ok(Self {
            application_file: config_dir.join(APPLICATION_FILE_NAME),
            project_file: project_root.join(PROJECT_DIR_NAME).join(PROJECT_FILE_NAME),
        })
    }

    pub fn load_application(&self) -> Result<ApplicationSettings> {
        let mut settings: ApplicationSettings = load_json(&self.application_file)?;
        settings.normalize();
        Ok(settings)
    }

    pub fn load_project(&self) -> Result<ProjectSettings> {
        let mut settings: ProjectSettings = load_json(&self.project_file)?;
        settings.normalize();
        Ok(settings)
    }

    pub fn save_application(&self, settings: &ApplicationSettings) -> Result<()> {
        save_json(&self.application_file, settings)
    }

    pub fn save_project(&self, settings: &ProjectSettings) -> Result<()> {
        save_json(&self.project_file, settings)
    }
}

fn default_config_dir() -> Result<PathBuf> {
    config_dir_with_override(std::env::var_os(CONFIG_DIR_ENV))
}

fn config_dir_with_override(env_value: Option<OsString>) -> Result<PathBuf> {
    if let Some(dir) = env_value.filter(|value| !value.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    dirs::config_dir()
        .map(|dir| dir.join("rich-presence"))
        .ok_or_else(|| Error::Config("Failed to resolve user config directory".to_string()))
}

/// Load a JSON settings file, returning the default when it does not exist.
pub fn load_json<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|error| Error::Config(format!("Failed to read {}: {}", path.display(), error)))?;
    serde_json::from_str(&raw)
        .map_err(|error| Error::Config(format!("Failed to parse {}: {}", path.display(), error)))
}

/// Write a JSON settings file through a temporary file and rename.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|error| {
            Error::Config(format!(
                "Failed to create config directory {}: {}",
                parent.display(),
                error
            ))
        })?;
    }

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, serde_json::to_vec_pretty(value)?)?;
    std::fs::rename(&tmp, path)?;
    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolve_places_project_file_inside_project() {
        let paths =
            SettingsPaths::resolve(Some(Path::new("/cfg")), Path::new("/work/project")).unwrap();
        assert_eq!(paths.application_file, PathBuf::from("/cfg/application.json"));
        assert_eq!(
            paths.project_file,
            PathBuf::from("/work/project/.presence/project.json")
        );
    }

    #[test]
    fn env_override_replaces_user_config_dir() {
        let dir = config_dir_with_override(Some(OsString::from("/srv/presence"))).unwrap();
        assert_eq!(dir, PathBuf::from("/srv/presence"));
    }

    #[test]
    fn empty_env_override_is_ignored() {
        let Ok(fallback) = config_dir_with_override(None) else {
            return;
        };
        assert!(fallback.ends_with("rich-presence"));
        assert_eq!(
            config_dir_with_override(Some(OsString::new())).unwrap(),
            fallback
        );
    }

    #[test]
    fn missing_files_load_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SettingsPaths::resolve(Some(dir.path()), dir.path()).unwrap();
        assert_eq!(paths.load_project().unwrap(), ProjectSettings::default());
        assert_eq!(
            paths.load_application().unwrap().theme,
            ApplicationSettings::default().theme
        );
    }

    #[test]
    fn settings_roundtrip_through_files() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SettingsPaths::resolve(Some(&dir.path().join("cfg")), dir.path()).unwrap();

        let application = ApplicationSettings {
            show_files: false,
            inactivity_timeout: 45,
            theme: "Modern".to_string(),
            ..ApplicationSettings::default()
        };
        let project = ProjectSettings {
            enabled: false,
            description: "Side project".to_string(),
        };
        paths.save_application(&application).unwrap();
        paths.save_project(&project).unwrap();

        assert_eq!(paths.load_application().unwrap(), application);
        assert_eq!(paths.load_project().unwrap(), project);
        assert!(!paths.application_file.with_extension("json.tmp").exists());
    }

    #[test]
    fn loading_normalizes_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SettingsPaths::resolve(Some(dir.path()), dir.path()).unwrap();
        std::fs::write(&paths.application_file, r#"{ "inactivity_timeout": 99999 }"#).unwrap();
        assert_eq!(paths.load_application().unwrap().inactivity_timeout, 1440);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = SettingsPaths::resolve(Some(dir.path()), dir.path()).unwrap();
        std::fs::write(&paths.application_file, "{ not json").unwrap();
        let error = paths.load_application().unwrap_err();
        assert!(error.to_string().contains("Failed to parse"));
    }
}
