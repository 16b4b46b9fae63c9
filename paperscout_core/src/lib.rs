#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod matcher;
pub mod name;
pub mod normalize;
pub mod roster;
pub mod screen;

pub use matcher::{Confidence, NameMatch, lookup};
pub use name::ParsedName;
pub use normalize::{normalize, strip_initials};
pub use roster::{Roster, RosterEntry, RosterError};
pub use screen::{AuthorMatch, ScreenOptions, ScreenedPaper, screen_paper, select_papers};

/// One candidate document as produced by a paper source, authors in
/// byline order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedPaper {
    /// Short identifier, e.g. `2408.01234v1`.
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Primary subject classification, e.g. `astro-ph.GA`.
    pub category: String,
    pub authors: Vec<String>,
    pub published: chrono::DateTime<chrono::Utc>,
}

/// A retrieval collaborator that can produce recent candidate papers for a
/// search query. The matching core never fetches anything itself.
#[async_trait]
pub trait PaperSource: Send + Sync {
    async fn recent_papers(
        &self,
        query: &str,
        max_results: usize,
    ) -> anyhow::Result<Vec<RetrievedPaper>>;
}
