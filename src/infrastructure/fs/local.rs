//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io;
use std::path::Path;

use filetime::{set_file_times, FileTime};

use crate::domain::ports::file_system::{DirEntry, EntryKind, FileSystem};
use crate::error::{AssembleError, AssembleResult};

/// Local file system implementation
///
/// Copies follow symlinks and keep permissions plus access/modification times.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn remove_all(&self, path: &Path) -> AssembleResult<bool> {
        // symlink_metadata: a symlink to a directory is removed as a link, not followed
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(AssembleError::io(path, e)),
        };

        let removed = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };

        match removed {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AssembleError::io(path, e)),
        }
    }

    fn create_dir_all(&self, path: &Path) -> AssembleResult<()> {
        fs::create_dir_all(path).map_err(|e| AssembleError::io(path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> AssembleResult<()> {
        fs::copy(from, to).map_err(|e| {
            // blame the side that failed: a readable source means the write did
            let path = if fs::metadata(from).is_ok() { to } else { from };
            AssembleError::io(path, e)
        })?;
        copy_times(from, to).map_err(|e| AssembleError::io(to, e))
    }

    fn copy_tree(&self, from: &Path, to: &Path) -> AssembleResult<usize> {
        self.create_dir_all(to)?;

        let mut copied = 0;
        for entry in self.read_dir(from)? {
            let target = to.join(&entry.file_name);
            match entry.kind {
                EntryKind::Dir => copied += self.copy_tree(&entry.path, &target)?,
                EntryKind::File => {
                    self.copy_file(&entry.path, &target)?;
                    copied += 1;
                }
                EntryKind::Other => {
                    return Err(AssembleError::io(
                        &entry.path,
                        io::Error::new(
                            io::ErrorKind::InvalidInput,
                            "not a regular file or directory",
                        ),
                    ))
                }
            }
        }

        // after the children, so a read-only source directory stays writable while filling it
        copy_times(from, to).map_err(|e| AssembleError::io(to, e))?;
        Ok(copied)
    }

    fn read_dir(&self, path: &Path) -> AssembleResult<Vec<DirEntry>> {
        let read = fs::read_dir(path).map_err(|e| AssembleError::io(path, e))?;

        let mut entries = Vec::new();
        for entry in read {
            let entry = entry.map_err(|e| AssembleError::io(path, e))?;
            let entry_path = entry.path();
            // fs::metadata follows symlinks, so a linked library counts as a file
            let kind = match fs::metadata(&entry_path) {
                Ok(meta) if meta.is_dir() => EntryKind::Dir,
                Ok(meta) if meta.is_file() => EntryKind::File,
                _ => EntryKind::Other,
            };
            let file_name = entry.file_name();
            entries.push(DirEntry {
                name: file_name.to_string_lossy().into_owned(),
                file_name,
                path: entry_path,
                kind,
            });
        }

        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(entries)
    }
}

/// Carry permissions and access/modification times from `from` to `to`
fn copy_times(from: &Path, to: &Path) -> io::Result<()> {
    let meta = fs::metadata(from)?;
    fs::set_permissions(to, meta.permissions())?;

    let atime = FileTime::from_last_access_time(&meta);
    let mtime = FileTime::from_last_modification_time(&meta);
    set_file_times(to, atime, mtime)
}
