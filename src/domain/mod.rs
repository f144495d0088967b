//! Domain layer - Study guide parsing and day rendering

pub mod accumulator;
pub mod books;
pub mod line;
pub mod record;
pub mod render;
pub mod source;

pub use accumulator::{DayAccumulator, FallbackPolicy, ScanStats, Step};
pub use line::LineKind;
pub use record::{CompletedDay, DayRecord, QuarterContext};
pub use source::SourceDocument;
