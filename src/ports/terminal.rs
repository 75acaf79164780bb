use crate::domain::AppError;

/// Port for the interactive terminal.
pub trait Terminal {
    /// Single-choice list prompt. Returns the index of the chosen item.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, AppError>;

    /// Free-text prompt.
    fn input(&self, prompt: &str) -> Result<String, AppError>;

    /// Yes/no prompt.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;

    /// Print a line of regular output.
    fn say(&self, line: &str);

    /// Print a user-facing warning.
    fn warn(&self, line: &str);
}
