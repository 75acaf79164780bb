//! CLI Adapter.

mod browse;
mod list;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::config::{DEFAULT_ROOT, SessionOptions};
use crate::app::navigator::NavigatorOptions;
use crate::domain::{AppError, DEFAULT_EXTENSION, ExtensionFilter, MatchPolicy};

#[derive(Parser)]
#[command(name = "lexis")]
#[command(version)]
#[command(about = "Browse a subjects directory and look up definitions in TOML files", long_about = None)]
struct Cli {
    /// Directory to start browsing from
    #[arg(long, global = true, default_value = DEFAULT_ROOT)]
    root: PathBuf,
    /// Extension of selectable definition files
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,
    /// Match queries against whole keys instead of substrings
    #[arg(long)]
    exact: bool,
    /// Hide the "../" entry in directory listings
    #[arg(long)]
    no_parent: bool,
    /// Emit debug diagnostics on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the entries of the root directory as JSON
    #[clap(visible_alias = "ls")]
    List,
}

impl Cli {
    fn session_options(&self) -> SessionOptions {
        SessionOptions {
            root: self.root.clone(),
            filter: ExtensionFilter::new(&self.extension),
            policy: if self.exact { MatchPolicy::Exact } else { MatchPolicy::Substring },
            navigator: NavigatorOptions { parent_choice: !self.no_parent },
        }
    }
}

/// Entry point for the CLI.
///
/// Errors exit with status 1. A session the user ends by declining "ask again?"
/// returns `Ok(())` and falls through, so the process exits with status 0.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result: Result<(), AppError> = match &cli.command {
        Some(Commands::List) => list::run_list(&cli.root),
        None => browse::run_browse(&cli.session_options()),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "session aborted");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
