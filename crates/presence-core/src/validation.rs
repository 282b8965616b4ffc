//! Debug-log folder validation
//!
//! Validation is recomputed from the current folder text and live filesystem
//! queries every time it is asked for; nothing is cached because the folder
//! can change underneath the dialog at any moment.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::fs::FileSystem;

/// Outcome of validating the debug-log folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    /// Existing, writable directory
    Valid,
    /// Text cannot be parsed as a path
    InvalidPath,
    /// Path names an existing regular file
    PathIsFile,
    /// Path exists but rejects writes
    NotWritable,
    /// Path does not exist yet
    NotExisting,
}

impl ValidationResult {
    /// Whether the folder may be persisted and counted as a pending change.
    ///
    /// Only a malformed path or an existing regular file fail; a folder that
    /// is missing or read-only is reported but still passes.
    pub const fn passes(self) -> bool {
        !matches!(self, Self::InvalidPath | Self::PathIsFile)
    }

    /// Whether the folder input should be drawn as invalid.
    pub const fn marks_invalid(self) -> bool {
        matches!(self, Self::InvalidPath | Self::PathIsFile | Self::NotWritable)
    }

    /// Hint shown next to the folder input.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::InvalidPath => Some("Invalid path"),
            Self::PathIsFile => Some("Path is a file"),
            Self::NotWritable => Some("Cannot write to this path"),
            Self::NotExisting => Some("Folder does not exist yet"),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Valid => "valid",
            Self::InvalidPath => "invalid_path",
            Self::PathIsFile => "path_is_file",
            Self::NotWritable => "not_writable",
            Self::NotExisting => "not_existing",
        };
        f.write_str(label)
    }
}

/// Visual and action state derived from a folder validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FolderFeedback {
    pub result: ValidationResult,
    pub marked_invalid: bool,
    pub message: Option<&'static str>,
    pub dump_state_enabled: bool,
    pub open_folder_enabled: bool,
}

impl FolderFeedback {
    fn new(result: ValidationResult, dump_state_enabled: bool, open_folder_enabled: bool) -> Self {
        Self {
            result,
            marked_invalid: result.marks_invalid(),
            message: result.message(),
            dump_state_enabled,
            open_folder_enabled,
        }
    }
}

/// Parse folder text into a path.
///
/// Blank text, NUL bytes, and (on Windows) reserved characters are rejected.
pub fn parse_folder(raw: &str) -> Option<PathBuf> {
    if raw.trim().is_empty() || raw.contains('\0') || has_reserved_chars(raw) {
        return None;
    }
    Some(PathBuf::from(raw))
}

#[cfg(windows)]
fn has_reserved_chars(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    let rest = if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        &raw[2..]
    } else {
        raw
    };
    rest.chars()
        .any(|c| matches!(c, '<' | '>' | ':' | '"' | '|' | '?' | '*'))
}

#[cfg(not(windows))]
const fn has_reserved_chars(_raw: &str) -> bool {
    false
}

/// Validate folder text against the filesystem.
///
/// Checks run in order: parse, regular file, existence, writability. A
/// folder that exists but rejects writes stays marked invalid with the open
/// action disabled, while still passing validation.
///
/// `debug_logging_enabled` only affects whether the dump action is offered.
pub fn validate_folder(
    raw: &str,
    debug_logging_enabled: bool,
    fs: &dyn FileSystem,
) -> FolderFeedback {
    let Some(path) = parse_folder(raw) else {
        return FolderFeedback::new(ValidationResult::InvalidPath, false, false);
    };

    if fs.is_file(&path) {
        return FolderFeedback::new(ValidationResult::PathIsFile, false, false);
    }

    if !fs.exists(&path) {
        return FolderFeedback::new(ValidationResult::NotExisting, false, false);
    }

    if !fs.is_writable(&path) {
        return FolderFeedback::new(ValidationResult::NotWritable, debug_logging_enabled, false);
    }

    FolderFeedback::new(ValidationResult::Valid, debug_logging_enabled, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{MemoryFileSystem, StdFileSystem};
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_or_nul_text_is_invalid_path() {
        let fs = MemoryFileSystem::new();
        for raw in ["", "   ", "/logs\0/x"] {
            let feedback = validate_folder(raw, true, &fs);
            assert_eq!(feedback.result, ValidationResult::InvalidPath);
            assert!(feedback.marked_invalid);
            assert_eq!(feedback.message, Some("Invalid path"));
            assert!(!feedback.dump_state_enabled);
            assert!(!feedback.open_folder_enabled);
        }
    }

    #[cfg(windows)]
    #[test]
    fn reserved_windows_characters_are_invalid_path() {
        assert!(parse_folder("C:\\logs").is_some());
        assert!(parse_folder("C:\\lo?gs").is_none());
        assert!(parse_folder("C:\\a:b").is_none());
    }

    #[test]
    fn regular_file_fails_regardless_of_permissions() {
        let fs = MemoryFileSystem::new()
            .with_file("/data/writable.log")
            .with_read_only_file("/data/locked.log");

        for raw in ["/data/writable.log", "/data/locked.log"] {
            let feedback = validate_folder(raw, true, &fs);
            assert_eq!(feedback.result, ValidationResult::PathIsFile);
            assert!(!feedback.result.passes());
            assert!(feedback.marked_invalid);
            assert!(!feedback.dump_state_enabled);
            assert!(!feedback.open_folder_enabled);
        }
    }

    #[test]
    fn missing_folder_passes_with_actions_disabled() {
        let fs = MemoryFileSystem::new().with_dir("/home/user");
        let feedback = validate_folder("/home/user/logs", true, &fs);
        assert_eq!(feedback.result, ValidationResult::NotExisting);
        assert!(feedback.result.passes());
        assert!(!feedback.marked_invalid);
        assert!(!feedback.dump_state_enabled);
        assert!(!feedback.open_folder_enabled);
    }

    #[test]
    fn read_only_folder_only_disables_open() {
        let fs = MemoryFileSystem::new().with_read_only_dir("/logs");

        let feedback = validate_folder("/logs", true, &fs);
        assert_eq!(feedback.result, ValidationResult::NotWritable);
        assert!(feedback.result.passes());
        assert!(feedback.marked_invalid);
        assert_eq!(feedback.message, Some("Cannot write to this path"));
        assert!(feedback.dump_state_enabled);
        assert!(!feedback.open_folder_enabled);

        let feedback = validate_folder("/logs", false, &fs);
        assert!(!feedback.dump_state_enabled);
    }

    #[test]
    fn writable_folder_is_valid() {
        let fs = MemoryFileSystem::new().with_dir("/logs");

        let feedback = validate_folder("/logs", true, &fs);
        assert_eq!(
            feedback,
            FolderFeedback {
                result: ValidationResult::Valid,
                marked_invalid: false,
                message: None,
                dump_state_enabled: true,
                open_folder_enabled: true,
            }
        );

        let feedback = validate_folder("/logs", false, &fs);
        assert!(!feedback.dump_state_enabled);
        assert!(feedback.open_folder_enabled);
    }

    #[test]
    fn real_temp_dir_is_valid_and_missing_child_is_not_existing() {
        let dir = tempfile::tempdir().unwrap();
        let raw = dir.path().to_string_lossy().into_owned();
        assert_eq!(
            validate_folder(&raw, true, &StdFileSystem).result,
            ValidationResult::Valid
        );

        let missing = dir.path().join("not-yet").to_string_lossy().into_owned();
        let feedback = validate_folder(&missing, true, &StdFileSystem);
        assert_eq!(feedback.result, ValidationResult::NotExisting);
        assert!(feedback.result.passes());
        assert!(!feedback.dump_state_enabled);
        assert!(!feedback.open_folder_enabled);
    }
}
