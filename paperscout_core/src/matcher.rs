//! Tiered scoring of candidate author names against the roster.
//!
//! The first-name policy is an ordered table of named rules. Each rule has a
//! guard (does this rule speak to the pair at all?) and a grant (does it
//! award a tier?). The first rule whose guard applies settles the entry:
//! a guard that applies with a failing grant ends the chain for that entry
//! with no score, it does not fall through to later rules. The roster scan
//! then moves on to the next entry; the first entry to receive a grant wins
//! and the remaining entries are never evaluated.

use serde::{Deserialize, Serialize};

use crate::name::ParsedName;
use crate::normalize::{is_word_char, normalize, strip_initials};
use crate::roster::{Roster, RosterEntry};

/// Confidence tier of a match.
///
/// Strong means full or unambiguous partial first-name agreement; Weak means
/// surname plus first initial only, a signal callers accept or reject
/// against their own threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Weak,
    Strong,
}

impl Confidence {
    /// Numeric score tier: Weak = 1, Strong = 2 (0 is the absent match).
    #[must_use]
    pub const fn score(self) -> u8 {
        match self {
            Self::Weak => 1,
            Self::Strong => 2,
        }
    }
}

/// A successful lookup: the winning roster entry, the tier, and the name of
/// the rule that granted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameMatch<'a> {
    pub entry: &'a RosterEntry,
    pub confidence: Confidence,
    pub rule: &'static str,
}

struct FirstNameRule {
    name: &'static str,
    applies: fn(&ParsedName, &RosterEntry) -> bool,
    grant: fn(&ParsedName, &RosterEntry) -> Option<Confidence>,
}

/// The first-name policy, in precedence order.
///
/// The substring rules leave initialed candidates to the `initial` rule; a
/// bare initial is a substring of almost any first name sharing its letter
/// and can only ever earn the weak tier.
const FIRST_NAME_RULES: &[FirstNameRule] = &[
    FirstNameRule {
        name: "exact",
        applies: |p, e| p.first_names == e.first,
        grant: |_, _| Some(Confidence::Strong),
    },
    FirstNameRule {
        name: "prefix",
        applies: |p, e| p.first_names.starts_with(e.first.as_str()),
        grant: |_, _| Some(Confidence::Strong),
    },
    // Roster stored as the fuller name, candidate more terse.
    FirstNameRule {
        name: "terse-candidate",
        applies: |p, e| !is_bare_initial(&p.first_names) && e.first.contains(p.first_names.as_str()),
        grant: |p, e| {
            strip_initials(&e.first)
                .starts_with(p.first_names.as_str())
                .then_some(Confidence::Strong)
        },
    },
    // Candidate carries more name parts than the roster does.
    FirstNameRule {
        name: "terse-entry",
        applies: |p, e| !is_bare_initial(&p.first_names) && p.first_names.contains(e.first.as_str()),
        grant: |p, e| {
            strip_initials(&p.first_names)
                .starts_with(e.first.as_str())
                .then_some(Confidence::Strong)
        },
    },
    // Surname plus matching first initial only.
    FirstNameRule {
        name: "initial",
        applies: |p, e| e.first.chars().next() == Some(p.first_initial),
        grant: |p, _| is_bare_initial(&p.first_names).then_some(Confidence::Weak),
    },
];

/// Single word character followed by a period, whitespace, or end of string.
fn is_bare_initial(first_names: &str) -> bool {
    let mut chars = first_names.chars();
    let Some(head) = chars.next() else {
        return false;
    };
    if !is_word_char(head) {
        return false;
    }
    match chars.next() {
        None => true,
        Some(c) => c == '.' || c.is_whitespace(),
    }
}

fn score_first_name(parsed: &ParsedName, entry: &RosterEntry) -> Option<(Confidence, &'static str)> {
    FIRST_NAME_RULES
        .iter()
        .find(|rule| (rule.applies)(parsed, entry))
        .and_then(|rule| (rule.grant)(parsed, entry).map(|confidence| (confidence, rule.name)))
}

/// Match one raw candidate author name against the roster.
///
/// Returns the first roster entry (in roster order) whose last name equals
/// the candidate's and whose first name earns a tier. `None` covers both
/// "no roster member fits" and "the candidate has no parseable first/last
/// structure"; unparseable names are common in bylines and are not an
/// error.
#[must_use]
pub fn lookup<'a>(candidate: &str, roster: &'a Roster) -> Option<NameMatch<'a>> {
    let normalized = normalize(candidate);
    let parsed = ParsedName::parse(&normalized)?;
    roster.entries().iter().find_map(|entry| {
        if parsed.last_name != entry.last {
            return None;
        }
        score_first_name(&parsed, entry).map(|(confidence, rule)| NameMatch {
            entry,
            confidence,
            rule,
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn roster(lines: &str) -> Roster {
        Roster::parse(lines).unwrap()
    }

    fn score_of(candidate: &str, roster: &Roster) -> u8 {
        lookup(candidate, roster).map_or(0, |m| m.confidence.score())
    }

    #[test]
    fn exact_match_is_strong() {
        let r = roster("John Smith");
        let m = lookup("John Smith", &r).unwrap();
        assert_eq!(m.confidence, Confidence::Strong);
        assert_eq!(m.entry.last, "smith");
        assert_eq!(m.rule, "exact");
    }

    #[test]
    fn initial_only_is_weak() {
        let r = roster("John Smith");
        let m = lookup("J. Smith", &r).unwrap();
        assert_eq!(m.confidence, Confidence::Weak);
        assert_eq!(m.rule, "initial");
        assert_eq!(m.confidence.score(), 1);
    }

    #[test]
    fn chained_initials_are_weak() {
        let r = roster("John Smith");
        let m = lookup("J. A. Smith", &r).unwrap();
        assert_eq!(m.confidence, Confidence::Weak);
    }

    #[test]
    fn middle_names_extend_a_prefix_match() {
        let r = roster("John Smith");
        let m = lookup("John Allen Smith", &r).unwrap();
        assert_eq!(m.confidence, Confidence::Strong);
        assert_eq!(m.rule, "prefix");
    }

    #[test]
    fn truncated_first_name_is_strong() {
        // Candidate more terse than the roster spelling.
        let r = roster("Jonathan Smith");
        let m = lookup("Jona Smith", &r).unwrap();
        assert_eq!(m.confidence, Confidence::Strong);
        assert_eq!(m.rule, "terse-candidate");
    }

    #[test]
    fn hyphenated_roster_first_name_matches_partial_candidate() {
        // "Jean-Pierre" normalizes to the two-token first name "jean pierre".
        let r = roster("Jean-Pierre Dupont");
        let m = lookup("Jean P. Dupont", &r).unwrap();
        assert_eq!(m.confidence, Confidence::Strong);
    }

    #[test]
    fn different_first_name_same_initial_is_no_match() {
        let r = roster("John Smith");
        assert_eq!(lookup("Jane Smith", &r), None);
    }

    #[test]
    fn different_last_name_is_no_match() {
        let r = roster("John Smith");
        assert_eq!(lookup("John Doe", &r), None);
    }

    #[test]
    fn different_initial_gets_no_partial_credit() {
        let r = roster("John Smith");
        assert_eq!(lookup("M. Smith", &r), None);
    }

    #[test]
    fn single_token_candidate_is_no_match() {
        let r = roster("John Smith");
        assert_eq!(lookup("Smith", &r), None);
        assert_eq!(lookup("", &r), None);
    }

    #[test]
    fn roster_order_breaks_last_name_ties() {
        let r = roster("Jane Smith\nJohn Smith");
        // Both entries share the last name; only Jane precedes John, and the
        // weak initial tier fires for her first.
        let m = lookup("J. Smith", &r).unwrap();
        assert_eq!(m.entry.first, "jane");
        let m = lookup("John Smith", &r).unwrap();
        assert_eq!(m.entry.first, "john");
    }

    #[test]
    fn diacritics_fold_away() {
        let r = roster("Jose Garcia");
        let m = lookup("José García", &r).unwrap();
        assert_eq!(m.confidence, Confidence::Strong);
    }

    #[test]
    fn guard_without_grant_ends_the_chain_for_that_entry() {
        // "ajohn" contains "john" but does not start with it: the
        // terse-candidate guard applies, its grant fails, and the entry
        // scores nothing.
        let r = roster("Ajohn Smith");
        assert_eq!(lookup("John Smith", &r), None);
    }

    #[test]
    fn bare_initial_shapes() {
        assert!(is_bare_initial("j"));
        assert!(is_bare_initial("j."));
        assert!(is_bare_initial("j a"));
        assert!(!is_bare_initial("jo"));
        assert!(!is_bare_initial(""));
    }

    #[test]
    fn rule_table_order_is_the_audit_trail() {
        let names: Vec<&str> = FIRST_NAME_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["exact", "prefix", "terse-candidate", "terse-entry", "initial"]
        );
    }

    #[test]
    fn terse_entry_rule_strips_initialed_candidates() {
        // Exercised directly: the rule table is auditable per rule. A
        // candidate first-name chain that still carries dotted initials
        // strips down to a string the roster first name must prefix.
        let rule = &FIRST_NAME_RULES[3];
        let parsed = ParsedName {
            first_names: "john q.".to_string(),
            first_initial: 'j',
            last_name: "smith".to_string(),
        };
        let entry = RosterEntry {
            last: "smith".to_string(),
            first: "john".to_string(),
            display: "John Smith".to_string(),
        };
        assert!((rule.applies)(&parsed, &entry));
        assert_eq!((rule.grant)(&parsed, &entry), Some(Confidence::Strong));
    }

    #[test]
    fn score_zero_maps_to_none() {
        let r = roster("John Smith");
        assert_eq!(score_of("Nobody Here", &r), 0);
        assert_eq!(score_of("John Smith", &r), 2);
        assert_eq!(score_of("J. Smith", &r), 1);
    }
}
