//! Regex rename run: read the directory, plan and execute.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use itertools::Itertools;

use crate::print_warning;
use crate::rename::{Decision, ExecuteOptions, Executor, RenameConfig, RenameOutcome, RenamePlan};

/// Regex rename handler for one directory.
#[derive(Debug, Default)]
pub struct RxRename {
    config: RenameConfig,
}

/// Counts of what happened during a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub renamed: usize,
    pub failed: usize,
    pub skipped_exists: usize,
    pub skipped_conflict: usize,
    pub no_matches: bool,
}

impl RxRename {
    #[must_use]
    pub const fn new(config: RenameConfig) -> Self {
        Self { config }
    }

    /// Run renaming.
    ///
    /// # Errors
    /// Returns an error if the pattern is invalid or the directory cannot be read.
    /// Failed renames of single files are reported but not returned as errors.
    pub async fn run(&self) -> Result<RunSummary> {
        let substitution = self.config.substitution()?;

        if self.config.verbose && !self.config.quiet {
            println!("{}", self.config);
        }

        let entries = read_entry_names(&self.config.root).await?;
        let plan = RenamePlan::new(&entries, &substitution, self.config.force);

        let executor = Executor::new(
            self.config.root.clone(),
            ExecuteOptions {
                dryrun: self.config.dryrun,
                quiet: self.config.quiet,
                verbose: self.config.verbose,
            },
        );
        let outcomes = executor.execute(&plan, substitution.pattern()).await;

        let summary = RunSummary {
            renamed: outcomes
                .iter()
                .filter(|(_, outcome)| matches!(outcome, RenameOutcome::Renamed | RenameOutcome::DryRun))
                .count(),
            failed: outcomes
                .iter()
                .filter(|(_, outcome)| matches!(outcome, RenameOutcome::Failed(_)))
                .count(),
            skipped_exists: plan.count(Decision::SkipExists),
            skipped_conflict: plan.count(Decision::SkipConflict),
            no_matches: plan.no_matches(),
        };

        if !self.config.quiet && !summary.no_matches {
            self.print_summary(&summary);
        }

        Ok(summary)
    }

    fn print_summary(&self, summary: &RunSummary) {
        let message = format!("{} {}", summary.renamed, crate::file_noun(summary.renamed));
        if self.config.dryrun {
            println!("Dryrun: would have renamed {message}");
        } else if summary.failed > 0 {
            println!("{}", format!("Renamed {message}, {} failed", summary.failed).yellow());
        } else {
            println!("{}", format!("Renamed {message}").green());
        }
    }
}

/// Read the names of all entries in `root` once.
///
/// Names are sorted case-insensitively so that conflict resolution is deterministic.
/// Entries with non UTF-8 names are skipped.
async fn read_entry_names(root: &Path) -> Result<Vec<String>> {
    let mut dir_entries = tokio::fs::read_dir(root)
        .await
        .with_context(|| format!("Failed to read directory: {}", root.display()))?;

    let mut names = Vec::new();
    while let Some(entry) = dir_entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read directory: {}", root.display()))?
    {
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => print_warning!("Skipping non UTF-8 file name: {}", name.to_string_lossy()),
        }
    }

    Ok(names
        .into_iter()
        .sorted_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)))
        .collect())
}
