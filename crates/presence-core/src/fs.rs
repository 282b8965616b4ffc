//! Filesystem queries used by log-folder validation
//!
//! The synchronizer only ever asks a handful of questions about the folder
//! path, so they sit behind a small trait. `StdFileSystem` answers from the
//! real disk; `MemoryFileSystem` is a scripted stand-in for tests and hosts
//! that want deterministic behavior.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

/// Synchronous filesystem collaborator.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// True only for an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Whether the existing entry at `path` accepts writes.
    fn is_writable(&self, path: &Path) -> bool;

    /// Create `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;
}

/// `FileSystem` backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    /// Tries a write: a scratch file for directories, an append handle for
    /// files.
    fn is_writable(&self, path: &Path) -> bool {
        if path.is_dir() {
            tempfile::tempfile_in(path).is_ok()
        } else {
            std::fs::OpenOptions::new().append(true).open(path).is_ok()
        }
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

#[derive(Debug, Clone, Copy)]
struct Entry {
    kind: EntryKind,
    writable: bool,
}

/// In-memory `FileSystem` with scripted entries.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    entries: RefCell<BTreeMap<PathBuf, Entry>>,
    fail_creates: Cell<bool>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_dir(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), EntryKind::Dir, true);
        self
    }

    #[must_use]
    pub fn with_read_only_dir(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), EntryKind::Dir, false);
        self
    }

    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), EntryKind::File, true);
        self
    }

    #[must_use]
    pub fn with_read_only_file(self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), EntryKind::File, false);
        self
    }

    /// Make every subsequent `create_dir_all` fail with permission denied.
    pub fn fail_creates(&self, fail: bool) {
        self.fail_creates.set(fail);
    }

    fn insert(&self, path: PathBuf, kind: EntryKind, writable: bool) {
        self.entries
            .borrow_mut()
            .insert(path, Entry { kind, writable });
    }

    fn entry(&self, path: &Path) -> Option<Entry> {
        self.entries.borrow().get(path).copied()
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entry(path).is_some()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.entry(path)
            .is_some_and(|entry| entry.kind == EntryKind::File)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entry(path)
            .is_some_and(|entry| entry.kind == EntryKind::Dir)
    }

    fn is_writable(&self, path: &Path) -> bool {
        self.entry(path).is_some_and(|entry| entry.writable)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.fail_creates.get() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("cannot create {}", path.display()),
            ));
        }

        let missing: Vec<PathBuf> = path
            .ancestors()
            .filter(|ancestor| !ancestor.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .collect();
        for ancestor in missing.iter().rev() {
            match self.entry(ancestor) {
                Some(entry) if entry.kind == EntryKind::File => {
                    return Err(io::Error::new(
                        io::ErrorKind::AlreadyExists,
                        format!("{} is a file", ancestor.display()),
                    ));
                }
                Some(_) => {}
                None => self.insert(ancestor.clone(), EntryKind::Dir, true),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_fs_create_dir_all_adds_parents() {
        let fs = MemoryFileSystem::new();
        fs.create_dir_all(Path::new("/var/log/presence")).unwrap();
        assert!(fs.is_dir(Path::new("/var")));
        assert!(fs.is_dir(Path::new("/var/log/presence")));
        assert!(fs.is_writable(Path::new("/var/log/presence")));
    }

    #[test]
    fn memory_fs_create_dir_all_refuses_file_ancestor() {
        let fs = MemoryFileSystem::new().with_file("/data/notes.txt");
        let error = fs
            .create_dir_all(Path::new("/data/notes.txt/logs"))
            .unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn memory_fs_scripted_failure() {
        let fs = MemoryFileSystem::new();
        fs.fail_creates(true);
        assert!(fs.create_dir_all(Path::new("/logs")).is_err());
        assert!(!fs.exists(Path::new("/logs")));
    }

    #[test]
    fn std_fs_reports_temp_dir_state() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("state.json");
        std::fs::write(&file, "{}").unwrap();

        let fs = StdFileSystem;
        assert!(fs.is_dir(dir.path()));
        assert!(fs.is_writable(dir.path()));
        assert!(fs.is_file(&file));
        assert!(!fs.exists(&dir.path().join("missing")));
        assert!(!fs.is_writable(&dir.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn std_fs_writability_follows_actual_access() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let locked = dir.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555)).unwrap();

        let trial = locked.join("trial");
        let can_write = std::fs::File::create(&trial).is_ok();
        let _ = std::fs::remove_file(&trial);
        assert_eq!(StdFileSystem.is_writable(&locked), can_write);

        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(StdFileSystem.is_writable(&locked));
        assert_eq!(std::fs::read_dir(&locked).unwrap().count(), 0);
    }
}
