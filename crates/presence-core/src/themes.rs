//! Theme catalog

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::models::{Theme, CLASSIC_THEME};

/// Lookup service for the themes a user can choose from.
pub trait ThemeCatalog {
    /// All themes keyed by name.
    fn themes(&self) -> BTreeMap<String, Theme>;

    /// Theme by name, falling back to Classic when the name is unknown.
    fn theme_by_name(&self, name: &str) -> Theme {
        let mut themes = self.themes();
        themes
            .remove(name)
            .or_else(|| themes.remove(CLASSIC_THEME))
            .unwrap_or_else(Theme::classic)
    }
}

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticThemeCatalog {
    themes: BTreeMap<String, Theme>,
}

impl StaticThemeCatalog {
    /// The themes shipped with the plugin.
    pub fn builtin() -> Self {
        Self::from_themes([
            Theme::classic(),
            Theme::new("Modern", "Flat icons with a dark background"),
            Theme::new("Material", "Icons following the Material palette"),
        ])
    }

    pub fn from_themes(themes: impl IntoIterator<Item = Theme>) -> Self {
        Self {
            themes: themes
                .into_iter()
                .map(|theme| (theme.name.clone(), theme))
                .collect(),
        }
    }

    /// Built-in themes plus every `*.json` theme definition in `dir`.
    ///
    /// A definition with the same name as a built-in replaces it. Files that
    /// fail to parse are skipped with a warning.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let mut catalog = Self::builtin();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let parsed = std::fs::read(&path)
                .map_err(crate::Error::from)
                .and_then(|bytes| {
                    serde_json::from_slice::<Theme>(&bytes).map_err(crate::Error::from)
                });
            match parsed {
                Ok(theme) if !theme.name.trim().is_empty() => {
                    catalog.themes.insert(theme.name.clone(), theme);
                }
                Ok(_) => {
                    tracing::warn!("Skipping theme without a name: {}", path.display());
                }
                Err(error) => {
                    tracing::warn!("Skipping theme {}: {}", path.display(), error);
                }
            }
        }
        Ok(catalog)
    }
}

impl ThemeCatalog for StaticThemeCatalog {
    fn themes(&self) -> BTreeMap<String, Theme> {
        self.themes.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn theme_by_name_falls_back_to_classic() {
        let catalog = StaticThemeCatalog::builtin();
        assert_eq!(catalog.theme_by_name("Modern").name, "Modern");
        assert_eq!(catalog.theme_by_name("Does not exist").name, "Classic");
    }

    #[test]
    fn theme_by_name_without_classic_uses_builtin_classic() {
        let catalog = StaticThemeCatalog::from_themes([Theme::new("Only", "")]);
        assert_eq!(catalog.theme_by_name("Missing"), Theme::classic());
    }

    #[test]
    fn from_dir_merges_json_definitions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("neon.json"),
            r#"{ "name": "Neon", "description": "Bright" }"#,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("classic.json"),
            r#"{ "name": "Classic", "description": "Overridden" }"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        std::fs::write(dir.path().join("readme.txt"), "ignored").unwrap();

        let catalog = StaticThemeCatalog::from_dir(dir.path()).unwrap();
        let themes = catalog.themes();
        assert_eq!(
            themes.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["Classic", "Material", "Modern", "Neon"]
        );
        assert_eq!(themes["Classic"].description, "Overridden");
    }

    #[test]
    fn from_dir_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(StaticThemeCatalog::from_dir(&dir.path().join("missing")).is_err());
    }
}
