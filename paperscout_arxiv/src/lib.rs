//! Retrieval collaborator for the arXiv export API.
//!
//! Builds the search query, fetches the Atom feed, and hands back
//! [`paperscout_core::RetrievedPaper`] values for screening.

pub mod client;
pub mod feed;
pub mod query;

pub use client::{ArxivClient, ArxivConfig};
pub use feed::{FeedError, parse_feed};
pub use query::build_query;
