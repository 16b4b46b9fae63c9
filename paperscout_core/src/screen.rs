//! Byline screening of retrieved papers against the roster.
//!
//! A paper is accepted when a sufficiently confident roster match sits
//! close enough to the front of the byline.

use serde::{Deserialize, Serialize};

use crate::RetrievedPaper;
use crate::matcher::{Confidence, lookup};
use crate::roster::{Roster, RosterEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenOptions {
    /// How many leading byline positions count toward acceptance.
    #[serde(default = "ScreenOptions::default_byline_window")]
    pub byline_window: usize,
    /// Minimum tier an in-window author must reach.
    #[serde(default = "ScreenOptions::default_min_confidence")]
    pub min_confidence: Confidence,
}

impl ScreenOptions {
    const fn default_byline_window() -> usize {
        3
    }

    const fn default_min_confidence() -> Confidence {
        Confidence::Weak
    }
}

impl Default for ScreenOptions {
    fn default() -> Self {
        Self {
            byline_window: Self::default_byline_window(),
            min_confidence: Self::default_min_confidence(),
        }
    }
}

/// One byline author with the roster entry it resolved to, if any.
/// Unmatched authors are normal; not every author of every retrieved
/// paper is a roster member.
#[derive(Debug, Clone)]
pub struct AuthorMatch {
    pub name: String,
    pub matched: Option<(RosterEntry, Confidence)>,
}

/// An accepted paper with its fully annotated byline.
#[derive(Debug, Clone)]
pub struct ScreenedPaper {
    pub paper: RetrievedPaper,
    pub authors: Vec<AuthorMatch>,
}

/// Annotate every author of a paper and decide acceptance.
///
/// Every author is looked up (the rendered digest marks all of them), but
/// only matches within the leading `byline_window` positions at or above
/// `min_confidence` make the paper acceptable.
#[must_use]
pub fn screen_paper(
    paper: RetrievedPaper,
    roster: &Roster,
    opts: &ScreenOptions,
) -> Option<ScreenedPaper> {
    let authors: Vec<AuthorMatch> = paper
        .authors
        .iter()
        .map(|name| AuthorMatch {
            name: name.clone(),
            matched: lookup(name, roster).map(|m| (m.entry.clone(), m.confidence)),
        })
        .collect();

    let accepted = authors
        .iter()
        .take(opts.byline_window)
        .any(|author| matches!(&author.matched, Some((_, c)) if *c >= opts.min_confidence));

    accepted.then(|| ScreenedPaper { paper, authors })
}

/// Screen a batch of papers in retrieval order, stopping after `cutoff`
/// acceptances.
#[must_use]
pub fn select_papers(
    papers: Vec<RetrievedPaper>,
    roster: &Roster,
    opts: &ScreenOptions,
    cutoff: usize,
) -> Vec<ScreenedPaper> {
    let mut selected = Vec::new();
    for paper in papers {
        if selected.len() >= cutoff {
            break;
        }
        if let Some(screened) = screen_paper(paper, roster, opts) {
            selected.push(screened);
        }
    }
    selected
}
