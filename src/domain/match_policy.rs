use std::fmt;

/// How a query is resolved against definition keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// The query must equal a key.
    Exact,
    /// Every key containing the query matches.
    #[default]
    Substring,
}

impl MatchPolicy {
    pub fn matches(self, key: &str, query: &str) -> bool {
        match self {
            MatchPolicy::Exact => key == query,
            MatchPolicy::Substring => key.contains(query),
        }
    }

    /// Message shown when a query resolves to nothing.
    pub fn no_match_message(self) -> &'static str {
        match self {
            MatchPolicy::Exact => "definition not found",
            MatchPolicy::Substring => "no matching definitions found",
        }
    }
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchPolicy::Exact => write!(f, "exact"),
            MatchPolicy::Substring => write!(f, "substring"),
        }
    }
}
