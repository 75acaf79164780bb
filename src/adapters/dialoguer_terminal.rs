use dialoguer::{Confirm, Input, Select};

use crate::domain::AppError;
use crate::ports::Terminal;

/// Terminal backed by `dialoguer` prompts on stdout/stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerTerminal;

impl DialoguerTerminal {
    pub fn new() -> Self {
        Self
    }
}

impl Terminal for DialoguerTerminal {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(|e| AppError::prompt(format!("Selection failed: {e}")))
    }

    fn input(&self, prompt: &str) -> Result<String, AppError> {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| AppError::prompt(format!("Input failed: {e}")))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| AppError::prompt(format!("Confirmation failed: {e}")))
    }

    fn say(&self, line: &str) {
        println!("{line}");
    }

    fn warn(&self, line: &str) {
        eprintln!("⚠️  {line}");
    }
}
