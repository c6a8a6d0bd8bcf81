//! Application services built on top of the search use cases

mod search_session;

pub use search_session::{SearchSession, SearchSessionConfig, SearchSnapshot, SearchState};
