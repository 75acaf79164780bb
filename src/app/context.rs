use crate::ports::{DirectoryReader, Terminal};

/// Application context holding the I/O dependencies of a session.
pub struct AppContext<D: DirectoryReader, T: Terminal> {
    directory: D,
    terminal: T,
}

impl<D: DirectoryReader, T: Terminal> AppContext<D, T> {
    /// Create a new application context.
    pub fn new(directory: D, terminal: T) -> Self {
        Self { directory, terminal }
    }

    /// Get a reference to the directory reader.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Get a reference to the terminal.
    pub fn terminal(&self) -> &T {
        &self.terminal
    }
}
