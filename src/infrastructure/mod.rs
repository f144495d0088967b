//! Infrastructure layer - Configuration and output storage

pub mod config;
pub mod store;

pub use config::{Config, ConfigOverrides};
pub use store::{DayStore, FileSystemStore, MemoryStore};
