//! FileSystem port - abstraction over the file operations a deployment needs
//!
//! The assembler only ever removes, creates and copies. Keeping those
//! behind a trait lets the use case be driven against an in-memory or
//! instrumented implementation in tests.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::AssembleResult;

/// What a directory entry is, following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Broken symlinks, sockets, devices
    Other,
}

/// A direct child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// File name exactly as stored on disk; destinations are joined with this
    pub file_name: OsString,
    /// Lossy UTF-8 form of `file_name`, for matching and display only
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles in the use case tests
pub trait FileSystem {
    /// Check if anything exists at `path`
    fn exists(&self, path: &Path) -> bool;

    /// Check if `path` is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if `path` is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Remove a directory tree or a single file.
    ///
    /// Returns `Ok(false)` when nothing was there.
    fn remove_all(&self, path: &Path) -> AssembleResult<bool>;

    /// Create directory and parents; succeeds if it already exists
    fn create_dir_all(&self, path: &Path) -> AssembleResult<()>;

    /// Copy one file to an exact destination path, overwriting it.
    ///
    /// Permissions and modification time are carried over.
    fn copy_file(&self, from: &Path, to: &Path) -> AssembleResult<()>;

    /// Recursively copy a directory tree into `to` (created if missing).
    ///
    /// Returns the number of files copied.
    fn copy_tree(&self, from: &Path, to: &Path) -> AssembleResult<usize>;

    /// List direct children of a directory, sorted by name
    fn read_dir(&self, path: &Path) -> AssembleResult<Vec<DirEntry>>;
}
