pub mod definition;
pub mod entry;
pub mod error;
pub mod file_filter;
pub mod match_policy;

pub use definition::{DefinitionMap, DefinitionValue};
pub use entry::{Entry, EntryKind};
pub use error::AppError;
pub use file_filter::{DEFAULT_EXTENSION, ExtensionFilter};
pub use match_policy::MatchPolicy;
