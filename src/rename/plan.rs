//! Rename planning with conflict resolution.

use std::collections::HashSet;

use crate::rename::Substitution;

/// What to do with one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Rename the entry.
    Apply,
    /// Target name already exists in the directory.
    SkipExists,
    /// An earlier entry already claimed the target name.
    SkipConflict,
    /// Pattern did not change the name.
    Unchanged,
}

/// Proposed rename for one directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub original: String,
    pub new_name: String,
    pub decision: Decision,
}

/// Decisions for every entry of a directory snapshot.
#[derive(Debug, Clone, Default)]
pub struct RenamePlan {
    entries: Vec<PlanEntry>,
    no_matches: bool,
}

impl RenamePlan {
    /// Plan renames for `entries` in the given order.
    ///
    /// A target claimed by an earlier entry is a conflict even when `force` is set.
    /// Existing names are checked against the original listing only.
    #[must_use]
    pub fn new(entries: &[String], substitution: &Substitution, force: bool) -> Self {
        let existing: HashSet<&str> = entries.iter().map(String::as_str).collect();
        let mut claimed: HashSet<String> = HashSet::new();
        let mut no_matches = true;

        let entries = entries
            .iter()
            .map(|original| {
                let new_name = substitution.transform(original);
                let decision = if new_name == *original {
                    Decision::Unchanged
                } else {
                    no_matches = false;
                    if claimed.contains(&new_name) {
                        Decision::SkipConflict
                    } else if existing.contains(new_name.as_str()) && !force {
                        Decision::SkipExists
                    } else {
                        claimed.insert(new_name.clone());
                        Decision::Apply
                    }
                };
                PlanEntry {
                    original: original.clone(),
                    new_name,
                    decision,
                }
            })
            .collect();

        Self { entries, no_matches }
    }

    #[must_use]
    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    /// True if no entry was changed by the pattern.
    #[must_use]
    pub const fn no_matches(&self) -> bool {
        self.no_matches
    }

    /// Entries that will be renamed.
    pub fn to_apply(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|entry| entry.decision == Decision::Apply)
    }

    #[must_use]
    pub fn count(&self, decision: Decision) -> usize {
        self.entries.iter().filter(|entry| entry.decision == decision).count()
    }
}

#[cfg(test)]
mod plan_tests {
    use super::*;
    use crate::rename::{Pattern, SubstitutionMode};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    fn replace(pattern: &str, template: &str) -> Substitution {
        Substitution::new(
            Pattern::new(pattern, false, false).unwrap(),
            template,
            SubstitutionMode::Replace,
        )
    }

    fn decisions(plan: &RenamePlan) -> Vec<Decision> {
        plan.entries().iter().map(|entry| entry.decision).collect()
    }

    #[test]
    fn unchanged_entries_do_not_count_as_matches() {
        let plan = RenamePlan::new(&names(&["a.txt", "b.txt"]), &replace("zzz", "y"), false);
        assert!(plan.no_matches());
        assert_eq!(decisions(&plan), vec![Decision::Unchanged, Decision::Unchanged]);
        assert_eq!(plan.to_apply().count(), 0);
    }

    #[test]
    fn simple_rename_is_applied() {
        let plan = RenamePlan::new(&names(&["a.txt", "c.log"]), &replace(r"\.txt$", ".md"), false);
        assert!(!plan.no_matches());
        assert_eq!(decisions(&plan), vec![Decision::Apply, Decision::Unchanged]);
        assert_eq!(plan.entries()[0].new_name, "a.md");
    }

    #[test]
    fn existing_target_without_force_is_skipped() {
        let entries = names(&["a.txt", "b.txt"]);
        let plan = RenamePlan::new(&entries, &replace("^a", "b"), false);
        assert_eq!(decisions(&plan), vec![Decision::SkipExists, Decision::Unchanged]);
        assert!(!plan.no_matches());
    }

    #[test]
    fn existing_target_with_force_is_applied() {
        let entries = names(&["a.txt", "b.txt"]);
        let plan = RenamePlan::new(&entries, &replace("^a", "b"), true);
        assert_eq!(decisions(&plan), vec![Decision::Apply, Decision::Unchanged]);
    }

    #[test]
    fn duplicate_target_is_a_conflict_even_with_force() {
        let entries = names(&["a1.txt", "a2.txt"]);
        for force in [false, true] {
            let plan = RenamePlan::new(&entries, &replace(r"\d", ""), force);
            assert_eq!(decisions(&plan), vec![Decision::Apply, Decision::SkipConflict]);
            assert_eq!(plan.count(Decision::SkipConflict), 1);
        }
    }

    #[test]
    fn conflict_checked_before_exists() {
        // "a.txt" exists and is claimed by "a1.txt" first, "a2.txt" then conflicts
        let entries = names(&["a.txt", "a1.txt", "a2.txt"]);
        let plan = RenamePlan::new(&entries, &replace(r"\d", ""), true);
        assert_eq!(
            decisions(&plan),
            vec![Decision::Unchanged, Decision::Apply, Decision::SkipConflict]
        );
    }

    #[test]
    fn exists_check_uses_original_listing() {
        // "xa.txt" is renamed away but "a.txt" still sees it as existing
        let entries = names(&["a.txt", "xa.txt"]);
        let sub = Substitution::new(
            Pattern::new("^", false, false).unwrap(),
            "x",
            SubstitutionMode::InsertBefore,
        );
        let plan = RenamePlan::new(&entries, &sub, false);
        assert_eq!(decisions(&plan), vec![Decision::SkipExists, Decision::Apply]);
        assert_eq!(plan.entries()[1].new_name, "xxa.txt");

        let plan = RenamePlan::new(&entries, &sub, true);
        assert_eq!(decisions(&plan), vec![Decision::Apply, Decision::Apply]);
    }

    #[test]
    fn skipped_entry_does_not_claim_target() {
        let entries = names(&["a.txt", "b.txt", "c.txt"]);
        let sub = Substitution::new(
            Pattern::new("^[ac]", false, false).unwrap(),
            "b",
            SubstitutionMode::Replace,
        );
        let plan = RenamePlan::new(&entries, &sub, false);
        assert_eq!(
            decisions(&plan),
            vec![Decision::SkipExists, Decision::Unchanged, Decision::SkipExists]
        );
    }

    #[test]
    fn replanning_after_no_matches_is_noop() {
        let entries = names(&["x.md", "y.md"]);
        let sub = replace(r"\.txt$", ".md");
        let first = RenamePlan::new(&entries, &sub, false);
        let second = RenamePlan::new(&entries, &sub, false);
        assert!(first.no_matches());
        assert!(second.no_matches());
        assert_eq!(first.entries(), second.entries());
    }

    #[test]
    fn whole_match_template_leaves_everything_unchanged() {
        let entries = names(&["a.txt", "photo 01.jpg", "README"]);
        let plan = RenamePlan::new(&entries, &replace(".+", "$&"), false);
        assert!(plan.no_matches());
        assert_eq!(plan.count(Decision::Unchanged), 3);
    }
}
