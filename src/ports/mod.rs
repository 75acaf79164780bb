mod directory_reader;
mod terminal;

pub use directory_reader::DirectoryReader;
pub use terminal::Terminal;
