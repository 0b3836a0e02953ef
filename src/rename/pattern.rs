//! Compiled search pattern and match enumeration.

use std::fmt;

use anyhow::{Context, Result};
use regex::{Captures, Regex, RegexBuilder};

/// Which matches to collect from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// Only the leftmost match.
    First,
    /// Every non-overlapping match from left to right.
    All,
}

/// Compiled regular expression with its matching modifiers.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    global: bool,
    ignore_case: bool,
}

/// One located occurrence of a pattern in a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Byte offset where the match starts.
    pub start: usize,
    /// Byte offset one past the end of the match.
    pub end: usize,
    /// Full matched text.
    pub text: String,
    /// Capturing groups 1..=N. `None` if the group did not participate.
    pub groups: Vec<Option<String>>,
}

impl Pattern {
    /// Compile a pattern from user input.
    ///
    /// # Errors
    /// Returns an error if the regular expression is invalid.
    pub fn new(raw: &str, ignore_case: bool, global: bool) -> Result<Self> {
        let regex = RegexBuilder::new(raw)
            .case_insensitive(ignore_case)
            .build()
            .with_context(|| format!("Invalid regex: '{raw}'"))?;

        Ok(Self {
            regex,
            global,
            ignore_case,
        })
    }

    #[must_use]
    pub const fn is_global(&self) -> bool {
        self.global
    }

    #[must_use]
    pub const fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// Matches in `text` using the pattern's own global flag.
    #[must_use]
    pub fn matches(&self, text: &str) -> Vec<Match> {
        let scope = if self.global { MatchScope::All } else { MatchScope::First };
        self.find_matches(text, scope)
    }

    /// Matches in `text` for an explicit scope, ordered by start offset.
    #[must_use]
    pub fn find_matches(&self, text: &str, scope: MatchScope) -> Vec<Match> {
        match scope {
            MatchScope::First => self.regex.captures(text).map(Match::from).into_iter().collect(),
            MatchScope::All => self.find_all(text),
        }
    }

    /// Search again from the end of each match.
    /// An empty match advances the search by one char,
    /// so an empty match right after a previous match is still reported.
    fn find_all(&self, text: &str) -> Vec<Match> {
        let mut matches = Vec::new();
        let mut position = 0;
        while position <= text.len() {
            let Some(captures) = self.regex.captures_at(text, position) else {
                break;
            };
            let found = Match::from(captures);
            position = if found.start == found.end {
                found.end + text[found.end..].chars().next().map_or(1, char::len_utf8)
            } else {
                found.end
            };
            matches.push(found);
        }
        matches
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.regex.as_str())?;
        if self.global {
            write!(f, "g")?;
        }
        if self.ignore_case {
            write!(f, "i")?;
        }
        Ok(())
    }
}

impl Match {
    /// Text of capturing group `index`, where 0 is the full match.
    ///
    /// Returns `None` for groups that do not exist or did not participate.
    #[must_use]
    pub fn group(&self, index: usize) -> Option<&str> {
        if index == 0 {
            return Some(&self.text);
        }
        self.groups.get(index - 1).and_then(Option::as_deref)
    }
}

impl From<Captures<'_>> for Match {
    fn from(captures: Captures<'_>) -> Self {
        // Group 0 always participates in a successful match
        let (start, end, text) = captures
            .get(0)
            .map_or((0, 0, String::new()), |m| (m.start(), m.end(), m.as_str().to_string()));

        let groups = captures
            .iter()
            .skip(1)
            .map(|group| group.map(|m| m.as_str().to_string()))
            .collect();

        Self {
            start,
            end,
            text,
            groups,
        }
    }
}
