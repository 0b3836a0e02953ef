mod config;

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

use rx_rename::RxRename;

#[derive(Parser, Debug)]
#[command(author, version, name = env!("CARGO_BIN_NAME"), about = "Rename files using regular expressions")]
pub struct Args {
    /// Regular expression to search for
    #[arg(required_unless_present = "completion")]
    pattern: Option<String>,

    /// Matches are replaced by this string. $N is the Nth capturing group and $& the whole match
    #[arg(allow_hyphen_values = true, required_unless_present = "completion")]
    replacement: Option<String>,

    /// Rename files in this directory
    #[arg(value_hint = clap::ValueHint::DirPath)]
    path: Option<PathBuf>,

    /// Overwrite files if name already exists
    #[arg(short = 'f', long)]
    force: bool,

    /// Show what changes would be made without renaming files
    #[arg(short = 'p', long, visible_alias = "print")]
    dry_run: bool,

    /// Replace (or insert before/after) all occurrences
    #[arg(short = 'a', long)]
    replace_all: bool,

    /// Insert after match instead of replacing
    #[arg(short = 't', long, conflicts_with = "insert_before")]
    insert_after: bool,

    /// Insert before match instead of replacing
    #[arg(short = 'b', long)]
    insert_before: bool,

    /// Regex ignores case
    #[arg(short = 'i', long)]
    ignore_case: bool,

    /// Suppress messages
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    quiet: bool,

    /// Generate shell completion
    #[arg(short = 'l', long, value_name = "SHELL")]
    completion: Option<Shell>,

    /// Print verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(ref shell) = args.completion {
        rx_rename::generate_shell_completion(*shell, Args::command(), true, env!("CARGO_BIN_NAME"))
    } else {
        let config = config::try_from_args(args)?;
        RxRename::new(config).run().await.map(|_| ())
    }
}
