//! Apply a rename plan to the filesystem.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;

use crate::rename::{Decision, Pattern, PlanEntry, RenamePlan};
use crate::{print_error, print_warning};

/// Result of one planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    Renamed,
    /// Dry run, nothing was touched.
    DryRun,
    /// Rename failed with the given error message.
    Failed(String),
}

/// Output and dry run settings for the executor.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecuteOptions {
    pub dryrun: bool,
    pub quiet: bool,
    pub verbose: bool,
}

/// Performs the approved renames of a plan inside one directory.
#[derive(Debug)]
pub struct Executor {
    root: PathBuf,
    options: ExecuteOptions,
}

impl Executor {
    #[must_use]
    pub const fn new(root: PathBuf, options: ExecuteOptions) -> Self {
        Self { root, options }
    }

    /// Rename every `Apply` entry and report skipped entries.
    ///
    /// Renames run concurrently and a failed rename does not stop the others.
    /// Returns the outcome of each applied entry in plan order.
    ///
    /// Renames are not ordered against each other. With `force`, a chain like
    /// `a -> xa` and `xa -> xxa` can overwrite the original `xa`
    /// if the first rename finishes before the second starts.
    pub async fn execute(&self, plan: &RenamePlan, pattern: &Pattern) -> Vec<(PlanEntry, RenameOutcome)> {
        if plan.no_matches() {
            self.print(&no_matches_message(pattern));
            return Vec::new();
        }

        if self.options.dryrun {
            self.print(&format!("{}\n", "Dry run:".bold()));
        }

        let semaphore = crate::create_semaphore_for_io_bound();
        let mut applied: Vec<PlanEntry> = Vec::new();
        let mut tasks = Vec::new();

        for entry in plan.entries() {
            let old_path = self.root.join(&entry.original);
            let new_path = self.root.join(&entry.new_name);
            let old_str = crate::path_to_string_relative(&old_path);
            let new_str = crate::path_to_string_relative(&new_path);

            if self.options.verbose && self.reports() && entry.decision != Decision::Unchanged {
                crate::show_diff(&entry.original, &entry.new_name);
            }

            match entry.decision {
                Decision::Unchanged => {}
                Decision::SkipConflict | Decision::SkipExists => {
                    if self.reports()
                        && let Some(message) = skip_message(entry.decision, &old_str, &new_str)
                    {
                        print_warning!("{message}");
                    }
                }
                Decision::Apply => {
                    applied.push(entry.clone());
                    if self.options.dryrun {
                        self.print(&rename_message(&old_str, &new_str));
                        continue;
                    }
                    let sem = Arc::clone(&semaphore);
                    let report = self.reports();
                    tasks.push(tokio::spawn(async move {
                        let permit = sem.acquire().await;
                        let outcome = rename_file(&old_path, &new_path).await;
                        drop(permit);
                        match &outcome {
                            RenameOutcome::Failed(message) => print_error!("{message}"),
                            _ if report => println!("{}", rename_message(&old_str, &new_str)),
                            _ => {}
                        }
                        outcome
                    }));
                }
            }
        }

        if self.options.dryrun {
            return applied.into_iter().map(|entry| (entry, RenameOutcome::DryRun)).collect();
        }

        let outcomes = futures::future::join_all(tasks).await.into_iter().map(|res| {
            res.unwrap_or_else(|error| {
                print_error!("Rename task failed: {error}");
                RenameOutcome::Failed(error.to_string())
            })
        });

        applied.into_iter().zip(outcomes).collect()
    }

    /// Quiet mode silences everything except rename failures.
    const fn reports(&self) -> bool {
        !self.options.quiet
    }

    fn print(&self, message: &str) {
        if self.reports() {
            println!("{message}");
        }
    }
}

fn no_matches_message(pattern: &Pattern) -> String {
    format!("No matches for {pattern}")
}

/// Warning for an entry the plan decided not to rename.
fn skip_message(decision: Decision, old: &str, new: &str) -> Option<String> {
    match decision {
        Decision::SkipConflict => Some(format!(
            "Aborting rename of '{old}': another file has already been renamed to '{new}'."
        )),
        Decision::SkipExists => Some(format!(
            "Could not rename '{old}' to '{new}' because a file already exists with that name."
        )),
        Decision::Apply | Decision::Unchanged => None,
    }
}

fn rename_message(old: &str, new: &str) -> String {
    format!("{old} {} {new}", "-->".cyan())
}

async fn rename_file(old_path: &Path, new_path: &Path) -> RenameOutcome {
    match tokio::fs::rename(old_path, new_path).await {
        Ok(()) => RenameOutcome::Renamed,
        Err(error) => RenameOutcome::Failed(format!(
            "Failed to rename '{}' to '{}': {error}",
            old_path.display(),
            new_path.display()
        )),
    }
}
