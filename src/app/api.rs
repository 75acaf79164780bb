//! Session entry points shared by the CLI and library callers.

use std::path::Path;

use tracing::info;

use crate::adapters::{DialoguerTerminal, LocalFilesystem};
use crate::app::config::SessionOptions;
use crate::app::{AppContext, navigator, query_loop};
use crate::domain::{AppError, DefinitionMap, Entry};
use crate::ports::{DirectoryReader, Terminal};

/// Read and parse a definition file.
pub fn load_definitions<D: DirectoryReader>(
    reader: &D,
    path: &Path,
) -> Result<DefinitionMap, AppError> {
    let content = reader.read_to_string(path)?;
    let map = DefinitionMap::parse(&content)
        .map_err(|source| AppError::DefinitionParse { path: path.to_path_buf(), source })?;
    info!(path = %path.display(), definitions = map.len(), "definitions loaded");
    Ok(map)
}

/// Entries directly under `root`, sorted by name, with their kinds.
pub fn list_subjects<D: DirectoryReader>(reader: &D, root: &Path) -> Result<Vec<Entry>, AppError> {
    reader
        .list_entries(root)?
        .into_iter()
        .map(|name| -> Result<Entry, AppError> {
            let kind = reader.entry_kind(&root.join(&name))?;
            Ok(Entry::new(name.to_string_lossy(), kind))
        })
        .collect()
}

/// Navigate to a definition file, load it, and answer queries until the user stops.
pub fn run_session<D, T>(ctx: &AppContext<D, T>, options: &SessionOptions) -> Result<(), AppError>
where
    D: DirectoryReader,
    T: Terminal,
{
    let selected = navigator::select_file(ctx, &options.root, options.navigator, |name| {
        options.filter.accepts(name)
    })?;
    let map = load_definitions(ctx.directory(), &selected)?;
    query_loop::run(ctx.terminal(), &map, options.policy)
}

/// Run an interactive session against the local filesystem.
pub fn browse(options: &SessionOptions) -> Result<(), AppError> {
    let root = std::path::absolute(&options.root)?;
    let options = SessionOptions { root, ..options.clone() };
    let ctx = AppContext::new(LocalFilesystem::new(), DialoguerTerminal::new());
    run_session(&ctx, &options)
}

/// List the local `root` directory.
pub fn list(root: &Path) -> Result<Vec<Entry>, AppError> {
    list_subjects(&LocalFilesystem::new(), root)
}
