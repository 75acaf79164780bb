//! In-memory directory tree for navigator and session tests.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, EntryKind};
use crate::ports::DirectoryReader;

/// In-memory `DirectoryReader`.
///
/// Seeding a file or directory also seeds every ancestor directory, so a tree
/// can be described by its leaves alone.
#[derive(Clone, Debug, Default)]
pub struct MemoryDirectory {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
    denied: BTreeSet<PathBuf>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an (empty) directory.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        self.add_dir_chain(path.as_ref());
        self
    }

    /// Seed a file with content.
    pub fn with_file(mut self, path: impl AsRef<Path>, content: &str) -> Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir_chain(parent);
        }
        self.files.insert(path.to_path_buf(), content.to_string());
        self
    }

    /// Make every access to `path` fail with permission denied.
    pub fn with_denied(mut self, path: impl AsRef<Path>) -> Self {
        self.denied.insert(path.as_ref().to_path_buf());
        self
    }

    fn add_dir_chain(&mut self, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }

    fn check_access(&self, action: &'static str, path: &Path) -> Result<(), AppError> {
        if self.denied.contains(path) {
            return Err(AppError::filesystem(
                action,
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        Ok(())
    }

    fn not_found(action: &'static str, path: &Path) -> AppError {
        AppError::filesystem(action, path, io::Error::new(io::ErrorKind::NotFound, "not found"))
    }
}

impl DirectoryReader for MemoryDirectory {
    fn list_entries(&self, dir: &Path) -> Result<Vec<OsString>, AppError> {
        self.check_access("list", dir)?;
        if !self.dirs.contains(dir) {
            return Err(Self::not_found("list", dir));
        }

        let children = self.dirs.iter().filter(|path| path.as_path() != dir).chain(self.files.keys());
        let mut names: Vec<OsString> = children
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name())
            .map(|name| name.to_os_string())
            .collect();
        names.sort();
        Ok(names)
    }

    fn entry_kind(&self, path: &Path) -> Result<EntryKind, AppError> {
        self.check_access("stat", path)?;
        if self.dirs.contains(path) {
            Ok(EntryKind::Directory)
        } else if self.files.contains_key(path) {
            Ok(EntryKind::File)
        } else {
            Err(Self::not_found("stat", path))
        }
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        self.check_access("read", path)?;
        self.files.get(path).cloned().ok_or_else(|| Self::not_found("read", path))
    }
}
