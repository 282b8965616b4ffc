//! Desktop integration for revealing the log folder

use std::io;
use std::path::Path;

/// Opens a folder in the platform file browser.
pub trait FolderOpener {
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// `FolderOpener` that hands the path to the OS default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFolderOpener;

impl FolderOpener for SystemFolderOpener {
    fn open(&self, path: &Path) -> io::Result<()> {
        open::that(path)
    }
}
