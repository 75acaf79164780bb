//! lexis: browse a subjects directory and look up definitions in TOML files.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{browse, list, list_subjects, load_definitions, run_session};
pub use app::config::{DEFAULT_ROOT, SessionOptions};
pub use app::navigator::{NavigatorOptions, PARENT_CHOICE, select_file};
pub use domain::{
    AppError, DefinitionMap, DefinitionValue, Entry, EntryKind, ExtensionFilter, MatchPolicy,
};
