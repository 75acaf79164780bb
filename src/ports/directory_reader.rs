use std::ffi::OsString;
use std::path::Path;

use crate::domain::{AppError, EntryKind};

/// Port for read-only access to a directory tree.
///
/// Every call is self-contained: no handle outlives the call that opened it.
pub trait DirectoryReader {
    /// Names of the entries directly under `dir`, sorted by name.
    ///
    /// Names are returned as stored on disk, so joining one onto `dir` always
    /// yields a path to the entry even when it is not valid UTF-8.
    fn list_entries(&self, dir: &Path) -> Result<Vec<OsString>, AppError>;

    /// Resolve whether `path` is a file or a directory.
    fn entry_kind(&self, path: &Path) -> Result<EntryKind, AppError>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> Result<String, AppError>;
}
