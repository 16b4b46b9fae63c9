//! Structural parse of a normalized candidate name.

/// A candidate name split into the parts the scoring rules compare.
///
/// Derived from an already-normalized string and only valid for the duration
/// of one lookup. `first_initial` is always a single folded character and
/// `last_name` is never empty; candidates that cannot take this shape do not
/// produce a `ParsedName` at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    /// Everything before the final token, re-joined with single spaces
    /// (`"j a"` for `"J A Smith"`).
    pub first_names: String,
    /// First character of the earliest token.
    pub first_initial: char,
    /// The final token.
    pub last_name: String,
}

impl ParsedName {
    /// Split a normalized name into first part(s) and a last part.
    ///
    /// Tokens are separated by whitespace or periods. Anything without at
    /// least two tokens (a single-word name, an empty string) has no
    /// separable structure and returns `None`, a normal outcome rather
    /// than an error.
    #[must_use]
    pub fn parse(normalized: &str) -> Option<Self> {
        let tokens: Vec<&str> = normalized
            .split(|c: char| c.is_whitespace() || c == '.')
            .filter(|t| !t.is_empty())
            .collect();
        let (&last, firsts) = tokens.split_last()?;
        if firsts.is_empty() {
            return None;
        }
        let first_initial = firsts[0].chars().next()?;
        Some(Self {
            first_names: firsts.join(" "),
            first_initial,
            last_name: last.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn simple_first_last() {
        let parsed = ParsedName::parse("john smith").unwrap();
        assert_eq!(parsed.first_names, "john");
        assert_eq!(parsed.first_initial, 'j');
        assert_eq!(parsed.last_name, "smith");
    }

    #[test]
    fn chained_initials() {
        let parsed = ParsedName::parse("j a smith").unwrap();
        assert_eq!(parsed.first_names, "j a");
        assert_eq!(parsed.first_initial, 'j');
        assert_eq!(parsed.last_name, "smith");
    }

    #[test]
    fn runs_of_separators_collapse() {
        let parsed = ParsedName::parse("j  p  dupont").unwrap();
        assert_eq!(parsed.first_names, "j p");
        assert_eq!(parsed.last_name, "dupont");
    }

    #[test]
    fn single_token_has_no_structure() {
        assert_eq!(ParsedName::parse("smith"), None);
        assert_eq!(ParsedName::parse(""), None);
        assert_eq!(ParsedName::parse("   "), None);
    }
}
