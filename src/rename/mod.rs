//! Regex rename module for computing and applying new file names.
//!
//! A [`Pattern`] finds matches in each file name, the [`Substitution`] engine
//! builds the new name from the replacement template, [`RenamePlan`] resolves
//! naming conflicts, and the [`Executor`] performs the renames.

mod config;
mod execute;
mod pattern;
mod plan;
mod runner;
mod substitute;
mod template;

pub use config::{RenameConfig, RxRenameConfig};
pub use execute::{ExecuteOptions, Executor, RenameOutcome};
pub use pattern::{Match, MatchScope, Pattern};
pub use plan::{Decision, PlanEntry, RenamePlan};
pub use runner::{RunSummary, RxRename};
pub use substitute::{Substitution, SubstitutionMode};
pub use template::expand;
