//! Presence theme model

use serde::{Deserialize, Serialize};

/// Name of the theme used whenever a requested theme is unknown.
pub const CLASSIC_THEME: &str = "Classic";

/// An icon theme offered by the theme catalog.
///
/// Settings persist only the theme name; comparisons between the form and
/// the persisted value go by name as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Theme {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// The built-in Classic theme.
    pub fn classic() -> Self {
        Self::new(CLASSIC_THEME, "Colorful icons from the first release")
    }

    /// Whether two themes refer to the same catalog entry.
    pub fn same_as(&self, name: &str) -> bool {
        self.name == name
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}
