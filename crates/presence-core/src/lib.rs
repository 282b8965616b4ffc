//! presence-core - Core library for the rich presence settings panel
//!
//! This crate contains the settings models, the declarative field table,
//! log-folder validation, and the `SettingsSynchronizer` that mediates
//! between the editable form and the persisted application/project settings.
//! Widget construction and the host preferences lifecycle live elsewhere.

pub mod config;
pub mod desktop;
pub mod dump;
pub mod enablement;
pub mod error;
pub mod fields;
pub mod fs;
pub mod models;
pub mod sync;
pub mod themes;
pub mod util;
pub mod validation;

pub use error::{Error, Result};
pub use models::{ApplicationSettings, FormState, ProjectSettings, Theme};
pub use sync::{Configurable, SettingsSynchronizer};
pub use validation::ValidationResult;
