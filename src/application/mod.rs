//! Application layer - Use cases and orchestration

pub mod split;

pub use split::{render_in_memory, EmittedDay, SplitOptions, SplitReport, SplitService};
