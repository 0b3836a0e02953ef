//! Build the rename config from CLI arguments and the user config file.
//!
//! CLI flags are combined with the `[rxrename]` section of
//! `~/.config/rx-rename.toml`. A flag is enabled if either source enables it.

use anyhow::{Context, Result};

use rx_rename::rename::{RenameConfig, RxRenameConfig};

use crate::Args;

/// Create config from given command line args and user config file.
///
/// # Errors
/// Returns an error if the directory cannot be resolved or the config file cannot be read or parsed.
pub fn try_from_args(args: Args) -> Result<RenameConfig> {
    let user_config = RxRenameConfig::get_user_config()?;
    Ok(config_from_args(args)?.with_user_config(&user_config))
}

fn config_from_args(args: Args) -> Result<RenameConfig> {
    let root = rx_rename::resolve_input_path(args.path.as_deref())?;
    Ok(RenameConfig {
        pattern: args.pattern.context("Missing regex pattern")?,
        replacement: args.replacement.context("Missing replacement")?,
        root,
        dryrun: args.dry_run,
        force: args.force,
        ignore_case: args.ignore_case,
        insert_after: args.insert_after,
        insert_before: args.insert_before,
        quiet: args.quiet,
        replace_all: args.replace_all,
        verbose: args.verbose,
    })
}
