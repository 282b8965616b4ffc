//! Diagnostic state dump

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use crate::error::Result;
use crate::models::{ApplicationSettings, FormState, ProjectSettings};

/// Snapshot handed to a dump collaborator.
#[derive(Debug, Serialize)]
pub struct DiagnosticState<'a> {
    pub application: &'a ApplicationSettings,
    pub project: &'a ProjectSettings,
    pub form: &'a FormState,
}

/// Writes a diagnostic dump into a folder and returns the written file.
pub trait DiagnosticDump {
    fn dump(&self, folder: &Path, state: &DiagnosticState<'_>) -> Result<PathBuf>;
}

#[derive(Serialize)]
struct DumpDocument<'a> {
    version: &'static str,
    generated_at: String,
    #[serde(flatten)]
    state: &'a DiagnosticState<'a>,
}

/// Dumps state as pretty JSON named `presence-state-<timestamp>.json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStateDump;

impl DiagnosticDump for JsonStateDump {
    fn dump(&self, folder: &Path, state: &DiagnosticState<'_>) -> Result<PathBuf> {
        let now = Utc::now();
        let path = folder.join(format!(
            "presence-state-{}.json",
            now.format("%Y%m%d-%H%M%S%.3f")
        ));
        let document = DumpDocument {
            version: env!("CARGO_PKG_VERSION"),
            generated_at: now.to_rfc3339(),
            state,
        };
        std::fs::write(&path, serde_json::to_vec_pretty(&document)?)?;
        tracing::info!("Wrote diagnostic dump to {}", path.display());
        Ok(path)
    }
}
