pub mod dialoguer_terminal;
pub mod local_filesystem;

pub use dialoguer_terminal::DialoguerTerminal;
pub use local_filesystem::LocalFilesystem;
