//! Interactive directory navigation.
//!
//! The navigator walks a directory tree one prompt at a time until the user
//! picks a file the caller's predicate accepts. Each prompt either moves to a
//! new directory, re-prompts the same one, or stops with the chosen path.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::app::AppContext;
use crate::domain::{AppError, EntryKind};
use crate::ports::{DirectoryReader, Terminal};

/// Label of the synthetic "go to parent" item.
pub const PARENT_CHOICE: &str = "../";

/// Navigator behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorOptions {
    /// Offer [`PARENT_CHOICE`] as the first item of every listing.
    pub parent_choice: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self { parent_choice: true }
    }
}

/// Outcome of one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Continue(PathBuf),
    Stop(PathBuf),
}

/// Prompt until the user selects a file accepted by `accept`.
///
/// Never returns a directory or a rejected file. Listing or stat failures end
/// the session with an error; rejected files re-prompt the same directory.
pub fn select_file<D, T, F>(
    ctx: &AppContext<D, T>,
    start: &Path,
    options: NavigatorOptions,
    accept: F,
) -> Result<PathBuf, AppError>
where
    D: DirectoryReader,
    T: Terminal,
    F: Fn(&str) -> bool,
{
    let mut current = start.to_path_buf();
    loop {
        match step(ctx, &current, options, &accept)? {
            Step::Continue(next) => current = next,
            Step::Stop(selected) => {
                info!(path = %selected.display(), "file selected");
                return Ok(selected);
            }
        }
    }
}

fn step<D, T, F>(
    ctx: &AppContext<D, T>,
    current: &Path,
    options: NavigatorOptions,
    accept: &F,
) -> Result<Step, AppError>
where
    D: DirectoryReader,
    T: Terminal,
    F: Fn(&str) -> bool,
{
    let names = ctx.directory().list_entries(current)?;

    let mut items = Vec::with_capacity(names.len() + 1);
    if options.parent_choice {
        items.push(PARENT_CHOICE.to_string());
    }
    items.extend(names.iter().map(|name| name.to_string_lossy().into_owned()));

    if items.is_empty() {
        return Err(AppError::EmptyDirectory(current.to_path_buf()));
    }

    let prompt = format!("Select a file in {}", current.display());
    let index = ctx.terminal().select(&prompt, &items)?;

    if options.parent_choice && index == 0 {
        let parent = parent_of(current);
        debug!(from = %current.display(), to = %parent.display(), "ascend");
        return Ok(Step::Continue(parent));
    }

    let offset = usize::from(options.parent_choice);
    let (name, label) = index
        .checked_sub(offset)
        .and_then(|entry| Some((names.get(entry)?, items.get(index)?)))
        .ok_or_else(|| AppError::prompt(format!("selection {index} is out of range")))?;
    let candidate = current.join(name);

    match ctx.directory().entry_kind(&candidate)? {
        EntryKind::Directory => {
            debug!(to = %candidate.display(), "descend");
            Ok(Step::Continue(candidate))
        }
        EntryKind::File if accept(label.as_str()) => Ok(Step::Stop(candidate)),
        EntryKind::File => {
            debug!(path = %candidate.display(), "rejected");
            ctx.terminal().warn(&format!("'{label}' is not a definition file, choose another"));
            Ok(Step::Continue(current.to_path_buf()))
        }
    }
}

/// Lexical dirname: the parent of a root is the root itself, and the parent
/// of a single relative component is `.`.
pub fn parent_of(dir: &Path) -> PathBuf {
    match dir.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => dir.to_path_buf(),
    }
}
