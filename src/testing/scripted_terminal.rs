//! Terminal double driven by a queue of scripted replies.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Terminal;

/// One scripted user reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Pick the list item with this exact label.
    Choose(String),
    /// Type this text.
    Text(String),
    /// Answer a yes/no prompt.
    Confirm(bool),
}

impl Reply {
    pub fn choose(label: &str) -> Self {
        Reply::Choose(label.to_string())
    }

    pub fn text(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

/// Records everything shown to the user and answers prompts from a script.
///
/// An exhausted script or a reply of the wrong shape fails the prompt, the
/// same way a closed terminal would.
#[derive(Default)]
pub struct ScriptedTerminal {
    replies: RefCell<VecDeque<Reply>>,
    listings: RefCell<Vec<Vec<String>>>,
    prompts: RefCell<Vec<String>>,
    output: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
}

impl ScriptedTerminal {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self { replies: RefCell::new(replies.into_iter().collect()), ..Self::default() }
    }

    /// Items presented by each select prompt, in order.
    pub fn listings(&self) -> Vec<Vec<String>> {
        self.listings.borrow().clone()
    }

    pub fn output(&self) -> Vec<String> {
        self.output.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    /// Replies not consumed yet.
    pub fn remaining(&self) -> usize {
        self.replies.borrow().len()
    }

    fn next_reply(&self, prompt: &str) -> Result<Reply, AppError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.replies
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| AppError::prompt(format!("script exhausted at '{prompt}'")))
    }
}

impl Terminal for ScriptedTerminal {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize, AppError> {
        self.listings.borrow_mut().push(items.to_vec());
        match self.next_reply(prompt)? {
            Reply::Choose(label) => items
                .iter()
                .position(|item| *item == label)
                .ok_or_else(|| AppError::prompt(format!("'{label}' is not offered at '{prompt}'"))),
            other => Err(AppError::prompt(format!("expected a choice at '{prompt}', got {other:?}"))),
        }
    }

    fn input(&self, prompt: &str) -> Result<String, AppError> {
        match self.next_reply(prompt)? {
            Reply::Text(text) => Ok(text),
            other => Err(AppError::prompt(format!("expected text at '{prompt}', got {other:?}"))),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, AppError> {
        match self.next_reply(prompt)? {
            Reply::Confirm(answer) => Ok(answer),
            other => Err(AppError::prompt(format!("expected yes/no at '{prompt}', got {other:?}"))),
        }
    }

    fn say(&self, line: &str) {
        self.output.borrow_mut().push(line.to_string());
    }

    fn warn(&self, line: &str) {
        self.warnings.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_interaction_behind_accessors() {
        let terminal = ScriptedTerminal::new(vec![Reply::choose("b"), Reply::text("x")]);

        let index = terminal.select("pick", &["a".to_string(), "b".to_string()]).unwrap();
        terminal.say("shown");
        terminal.warn("careful");
        let text = terminal.input("type").unwrap();

        assert_eq!(index, 1);
        assert_eq!(text, "x");
        assert_eq!(terminal.listings(), vec![vec!["a", "b"]]);
        assert_eq!(terminal.prompts(), vec!["pick", "type"]);
        assert_eq!(terminal.output(), vec!["shown"]);
        assert_eq!(terminal.warnings(), vec!["careful"]);
        assert!(matches!(terminal.confirm("again?", true), Err(AppError::Prompt(_))));
    }
}
