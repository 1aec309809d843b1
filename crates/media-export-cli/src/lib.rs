//! Command-line host for the media CSV export.
//!
//! Loads a repository snapshot, applies the administrator's category
//! exclusions and delivers the CSV document to a file or standard output.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod snapshot;
pub mod summary;
pub mod types;
