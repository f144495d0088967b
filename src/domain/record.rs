//! Day records and the quarter context they are rendered with

/// Most recently seen quarter header and theme annotation (raw lines).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuarterContext {
    pub quarter: String,
    pub theme: String,
}

impl QuarterContext {
    pub fn new(quarter: impl Into<String>, theme: impl Into<String>) -> Self {
        QuarterContext {
            quarter: quarter.into(),
            theme: theme.into(),
        }
    }
}

/// All fields collected for one day's entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayRecord {
    pub number: u64,
    pub title: String,
    pub action: String,
    pub reason: String,
    pub faith_lines: Vec<String>,
}

impl DayRecord {
    /// Open a fresh record with empty content fields
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        DayRecord {
            number,
            title: title.into(),
            action: String::new(),
            reason: String::new(),
            faith_lines: Vec::new(),
        }
    }
}

/// A flushed record together with the context active when it was flushed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedDay {
    pub record: DayRecord,
    pub context: QuarterContext,
}
