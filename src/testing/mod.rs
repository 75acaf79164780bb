mod memory_directory;
mod scripted_terminal;

pub use memory_directory::MemoryDirectory;
pub use scripted_terminal::{Reply, ScriptedTerminal};
