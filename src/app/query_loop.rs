//! Definition lookup prompt loop.

use tracing::debug;

use crate::domain::{AppError, DefinitionMap, MatchPolicy};
use crate::ports::Terminal;

/// Prompt label for the query text.
pub const QUERY_PROMPT: &str = "definition";
/// Prompt label for the continue confirmation.
pub const ASK_AGAIN_PROMPT: &str = "ask again?";
/// Message printed when the user stops asking.
pub const FAREWELL: &str = "Goodbye!";

/// Ask for definitions until the user declines to continue.
///
/// Queries with no match report so and prompt again straight away. Returns
/// `Ok(())` once the user declines; any prompt failure is returned as an error.
pub fn run<T: Terminal>(
    terminal: &T,
    map: &DefinitionMap,
    policy: MatchPolicy,
) -> Result<(), AppError> {
    loop {
        let query = terminal.input(QUERY_PROMPT)?;
        let matches = map.lookup(&query, policy);
        debug!(query = %query, %policy, matches = matches.len(), "query resolved");

        if matches.is_empty() {
            terminal.say(policy.no_match_message());
            continue;
        }

        for (key, value) in matches {
            match policy {
                MatchPolicy::Exact => terminal.say(&value.to_string()),
                MatchPolicy::Substring => terminal.say(&format!("{key}: {value}")),
            }
        }

        if !terminal.confirm(ASK_AGAIN_PROMPT, true)? {
            terminal.say(FAREWELL);
            return Ok(());
        }
    }
}
