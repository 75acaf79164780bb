use std::path::PathBuf;

use crate::app::navigator::NavigatorOptions;
use crate::domain::{ExtensionFilter, MatchPolicy};

/// Directory browsing starts from, relative to the working directory.
pub const DEFAULT_ROOT: &str = "subjects";

/// Settings for one browse-and-query session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Starting directory for navigation.
    pub root: PathBuf,
    /// Which files end navigation.
    pub filter: ExtensionFilter,
    /// How queries match definition keys.
    pub policy: MatchPolicy,
    pub navigator: NavigatorOptions,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            filter: ExtensionFilter::default(),
            policy: MatchPolicy::default(),
            navigator: NavigatorOptions::default(),
        }
    }
}
