//! Replacement template expansion.
//!
//! A template may reference capturing groups with `$1` to `$9` and the whole
//! match with `$&`. A run of `$` characters in front of a selector is read in
//! pairs: every `$$` is a literal `$`, and only a leftover single `$` binds to
//! the selector. So `$$1` is the literal text `$1` and `$$$1` is `$` followed
//! by group 1.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::rename::Match;

/// A run of dollar signs followed by a single group selector.
static RE_GROUP_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\$+)([1-9&])").expect("Failed to create regex pattern for group references"));

/// Expand `template` against one match.
///
/// ```rust
/// use rx_rename::rename::{Pattern, expand};
///
/// let pattern = Pattern::new(r"(\d+)-(\d+)", false, false).unwrap();
/// let found = &pattern.matches("img 01-02.jpg")[0];
/// assert_eq!(expand("$2_$1", found), "02_01");
/// assert_eq!(expand("$$1", found), "$1");
/// ```
#[must_use]
pub fn expand(template: &str, found: &Match) -> String {
    RE_GROUP_REFERENCE
        .replace_all(template, |caps: &Captures| {
            let dollars = caps[1].len();
            let selector = &caps[2];
            let literal = "$".repeat(dollars / 2);
            if dollars % 2 == 0 {
                return format!("{literal}{selector}");
            }
            let index = if selector == "&" {
                0
            } else {
                selector.parse::<usize>().unwrap_or_default()
            };
            format!("{literal}{}", found.group(index).unwrap_or_default())
        })
        .into_owned()
}
