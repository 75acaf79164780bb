use std::ffi::OsString;
use std::fs;
use std::path::Path;

use crate::domain::{AppError, EntryKind};
use crate::ports::DirectoryReader;

/// Directory reader backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryReader for LocalFilesystem {
    fn list_entries(&self, dir: &Path) -> Result<Vec<OsString>, AppError> {
        let read_dir = fs::read_dir(dir).map_err(|e| AppError::filesystem("list", dir, e))?;

        let mut names = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| AppError::filesystem("list", dir, e))?;
            names.push(entry.file_name());
        }
        names.sort();
        Ok(names)
    }

    fn entry_kind(&self, path: &Path) -> Result<EntryKind, AppError> {
        let metadata = fs::metadata(path).map_err(|e| AppError::filesystem("stat", path, e))?;
        Ok(if metadata.is_dir() { EntryKind::Directory } else { EntryKind::File })
    }

    fn read_to_string(&self, path: &Path) -> Result<String, AppError> {
        fs::read_to_string(path).map_err(|e| AppError::filesystem("read", path, e))
    }
}
