//! Atom feed deserialization for arXiv query results.

use chrono::{DateTime, Utc};
use quick_xml::DeError;
use serde::Deserialize;
use thiserror::Error;

use paperscout_core::RetrievedPaper;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("malformed Atom feed: {0}")]
    Xml(#[from] DeError),

    #[error("entry {id} has an invalid timestamp {value:?}")]
    Timestamp {
        id: String,
        value: String,
        source: chrono::ParseError,
    },
}

#[derive(Debug, Deserialize)]
struct Feed {
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Deserialize)]
struct Entry {
    id: String,
    title: String,
    summary: String,
    published: String,
    #[serde(rename = "author", default)]
    authors: Vec<Author>,
    #[serde(rename = "primary_category", alias = "arxiv:primary_category")]
    primary_category: Option<Category>,
}

#[derive(Debug, Deserialize)]
struct Author {
    name: String,
}

#[derive(Debug, Deserialize)]
struct Category {
    #[serde(rename = "@term")]
    term: String,
}

/// Parse an arXiv Atom response into retrieved papers, entry order
/// preserved (the API already sorts by submission date).
pub fn parse_feed(xml: &str) -> Result<Vec<RetrievedPaper>, FeedError> {
    let feed: Feed = quick_xml::de::from_str(xml)?;
    feed.entries.into_iter().map(entry_to_paper).collect()
}

fn entry_to_paper(entry: Entry) -> Result<RetrievedPaper, FeedError> {
    // Entry ids are abs-page URLs; the short id is the last path segment.
    let id = entry
        .id
        .rsplit('/')
        .next()
        .unwrap_or(entry.id.as_str())
        .to_string();
    let published = DateTime::parse_from_rfc3339(&entry.published)
        .map_err(|source| FeedError::Timestamp {
            id: id.clone(),
            value: entry.published.clone(),
            source,
        })?
        .with_timezone(&Utc);
    Ok(RetrievedPaper {
        id,
        title: collapse_whitespace(&entry.title),
        summary: collapse_whitespace(&entry.summary),
        category: entry.primary_category.map_or_else(String::new, |c| c.term),
        authors: entry.authors.into_iter().map(|a| a.name).collect(),
        published,
    })
}

/// Feed text fields wrap across lines with leading indentation.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
