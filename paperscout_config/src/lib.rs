mod schema;

pub use schema::{Config, OutputConfig, RosterConfig, SearchConfig};
