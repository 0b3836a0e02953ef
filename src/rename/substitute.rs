//! Substitution engine that builds a new name from the matches in a string.

use std::fmt;

use crate::rename::{Match, MatchScope, Pattern, expand};

/// How template text is combined with the matched text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubstitutionMode {
    /// Replace the first match.
    #[default]
    Replace,
    /// Replace every match.
    ReplaceAll,
    /// Insert the template before every match.
    InsertBefore,
    /// Insert the template after every match.
    InsertAfter,
}

/// Pattern and template together with the substitution mode.
#[derive(Debug, Clone)]
pub struct Substitution {
    pattern: Pattern,
    template: String,
    mode: SubstitutionMode,
}

impl SubstitutionMode {
    /// Pick the mode from CLI flags.
    /// Insert modes take precedence over replace-all.
    #[must_use]
    pub const fn from_flags(replace_all: bool, insert_before: bool, insert_after: bool) -> Self {
        if insert_after {
            Self::InsertAfter
        } else if insert_before {
            Self::InsertBefore
        } else if replace_all {
            Self::ReplaceAll
        } else {
            Self::Replace
        }
    }
}

impl fmt::Display for SubstitutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Replace => "replace",
            Self::ReplaceAll => "replace all",
            Self::InsertBefore => "insert before",
            Self::InsertAfter => "insert after",
        };
        write!(f, "{name}")
    }
}

impl Substitution {
    #[must_use]
    pub fn new(pattern: Pattern, template: impl Into<String>, mode: SubstitutionMode) -> Self {
        Self {
            pattern,
            template: template.into(),
            mode,
        }
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Compute the new string for `text`.
    /// Returns the input unchanged if the pattern does not match.
    #[must_use]
    pub fn transform(&self, text: &str) -> String {
        // Insertion needs every insertion point regardless of the global flag
        let scope = if self.mode == SubstitutionMode::Replace {
            MatchScope::First
        } else {
            MatchScope::All
        };
        let matches = self.pattern.find_matches(text, scope);
        if matches.is_empty() {
            return text.to_string();
        }

        match self.mode {
            SubstitutionMode::Replace | SubstitutionMode::ReplaceAll => self.replace(text, &matches),
            SubstitutionMode::InsertBefore => self.insert_before(text, &matches),
            SubstitutionMode::InsertAfter => self.insert_after(text, &matches),
        }
    }

    fn replace(&self, text: &str, matches: &[Match]) -> String {
        let mut result = String::with_capacity(text.len());
        let mut position = 0;
        for found in matches {
            result.push_str(&text[position..found.start]);
            result.push_str(&expand(&self.template, found));
            position = found.end;
        }
        result.push_str(&text[position..]);
        result
    }

    /// Each chunk runs from the previous match start up to the current match start,
    /// so matched text is carried over in front of the next insertion.
    fn insert_before(&self, text: &str, matches: &[Match]) -> String {
        let mut result = String::with_capacity(text.len());
        let mut position = 0;
        for found in matches {
            result.push_str(&text[position..found.start]);
            result.push_str(&expand(&self.template, found));
            position = found.start;
        }
        result.push_str(&text[position..]);
        result
    }

    fn insert_after(&self, text: &str, matches: &[Match]) -> String {
        let mut result = String::with_capacity(text.len());
        let mut position = 0;
        for found in matches {
            result.push_str(&text[position..found.end]);
            result.push_str(&expand(&self.template, found));
            position = found.end;
        }
        result.push_str(&text[position..]);
        result
    }
}
