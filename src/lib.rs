//! daysplit - Study guide splitter
//!
//! Reads a multi-quarter devotional study guide written in a fixed markdown
//! convention and writes one document per day, each carrying the day's
//! wisdom lines, scripture, and the quarter goal it belongs to.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SplitError;
