//! Canonical comparable form for person names.
//!
//! Roster entries are normalized once at build time and candidate names once
//! per lookup; everything downstream compares with plain `==` and relies on
//! that symmetry.

use unicode_casefold::UnicodeCaseFold;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Normalize a raw name into its canonical comparable form.
///
/// Every non-word character becomes a single space, the rest is run through
/// full Unicode case folding (so `ß` folds to `ss`, not just lowercased) and
/// compatibility decomposition, accents are dropped, and the result is
/// trimmed. Idempotent, never fails, may return an empty string.
#[must_use]
pub fn normalize(text: &str) -> String {
    let folded: String = text
        .chars()
        .map(|c| if is_word_char(c) { c } else { ' ' })
        .case_fold()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    folded.trim().to_string()
}

/// Remove every token that is a bare initial (`"J."`) and collapse the
/// remaining whitespace to single spaces.
///
/// Only used to compare a fully-spelled first name against an initialed one
/// after the cheaper prefix checks have failed.
#[must_use]
pub fn strip_initials(name: &str) -> String {
    name.split_whitespace()
        .filter(|token| !is_initial_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A single word character followed by a period, nothing else.
fn is_initial_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if is_word_char(c)
    )
}
