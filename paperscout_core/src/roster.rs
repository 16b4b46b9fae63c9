//! The fixed list of known person-names candidates are checked against.

use thiserror::Error;

use crate::normalize::normalize;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("roster line {line} has fewer than two name tokens: {text:?}")]
    MalformedLine { line: usize, text: String },
}

/// One roster member.
///
/// `last` and `first` are already normalized; `display` keeps the raw member
/// line for query construction and rendering. Middle tokens of the member
/// line are discarded on purpose; they are never compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub last: String,
    pub first: String,
    pub display: String,
}

/// An ordered, read-only set of roster entries.
///
/// Built once and passed by reference into every lookup. Duplicate last
/// names are valid; entries are scored independently in roster order. If the
/// member list changes, build a fresh `Roster` and swap it in; entries are
/// never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Build a roster from newline-delimited "First [Middle] Last" text.
    ///
    /// Blank lines are skipped. A line with fewer than two whitespace
    /// separated tokens cannot be meaningfully compared, so construction
    /// fails fast instead of mis-scoring at lookup time.
    pub fn parse(content: &str) -> Result<Self, RosterError> {
        let mut entries = Vec::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() < 2 {
                return Err(RosterError::MalformedLine {
                    line: idx + 1,
                    text: line.to_string(),
                });
            }
            entries.push(RosterEntry {
                last: normalize(tokens[tokens.len() - 1]),
                first: normalize(tokens[0]),
                display: line.to_string(),
            });
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Raw member lines, in roster order.
    pub fn display_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.display.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn first_and_last_token_only() {
        let roster = Roster::parse("John Allen Smith\nMaria Garcia\n").unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.entries()[0].first, "john");
        assert_eq!(roster.entries()[0].last, "smith");
        assert_eq!(roster.entries()[0].display, "John Allen Smith");
        assert_eq!(roster.entries()[1].last, "garcia");
    }

    #[test]
    fn entries_are_normalized() {
        let roster = Roster::parse("José García\n").unwrap();
        assert_eq!(roster.entries()[0].first, "jose");
        assert_eq!(roster.entries()[0].last, "garcia");
    }

    #[test]
    fn blank_lines_skipped() {
        let roster = Roster::parse("\nJohn Smith\n\n").unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn single_token_line_fails_fast() {
        let err = Roster::parse("John Smith\nMadonna\n").unwrap_err();
        match err {
            RosterError::MalformedLine { line, text } => {
                assert_eq!(line, 2);
                assert_eq!(text, "Madonna");
            }
        }
    }

    #[test]
    fn duplicate_last_names_kept_in_order() {
        let roster = Roster::parse("Jane Smith\nJohn Smith\n").unwrap();
        assert_eq!(roster.entries()[0].first, "jane");
        assert_eq!(roster.entries()[1].first, "john");
    }
}
