//! Data models for presence settings

mod form;
mod settings;
mod theme;

pub use form::FormState;
pub use settings::{ApplicationSettings, ProjectSettings};
pub use theme::{Theme, CLASSIC_THEME};
