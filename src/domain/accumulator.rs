//! Day accumulator state machine
//!
//! Consumes classified lines one at a time, keeps at most one day record
//! open, and hands back each record exactly once when the next day header
//! (or the end of input) closes it. The quarter context is threaded through
//! every step by value instead of living in shared state.

use crate::domain::line::LineKind;
use crate::domain::record::{CompletedDay, DayRecord, QuarterContext};
use crate::error::{Result, SplitError};
use tracing::{debug, warn};

/// How unclassified text inside an open day is treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Any unclassified non-blank line joins the day's faith block
    #[default]
    Lenient,
    /// Unclassified lines are only accepted inside the faith section
    Strict,
}

/// Counters collected while scanning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub days: usize,
    pub scripture_lines: usize,
    pub fallback_lines: usize,
    pub discarded_lines: usize,
    pub malformed_days: usize,
}

#[derive(Debug)]
enum State {
    Idle,
    Open { record: DayRecord, in_faith: bool },
    /// After a malformed day header; lines are dropped until the next day
    Skipping,
}

/// Result of feeding one line
#[derive(Debug)]
pub struct Step {
    pub context: QuarterContext,
    pub completed: Option<CompletedDay>,
}

impl Step {
    fn carry(context: QuarterContext) -> Self {
        Step {
            context,
            completed: None,
        }
    }
}

/// Holds the currently open day record, if any
#[derive(Debug)]
pub struct DayAccumulator {
    state: State,
    policy: FallbackPolicy,
    stats: ScanStats,
}

impl DayAccumulator {
    pub fn new(policy: FallbackPolicy) -> Self {
        DayAccumulator {
            state: State::Idle,
            policy,
            stats: ScanStats::default(),
        }
    }

    /// Whether a day record is currently open
    pub fn is_open(&self) -> bool {
        matches!(self.state, State::Open { .. })
    }

    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Feed one raw line (1-based `line_number`) and return the updated
    /// context plus any record the line closed.
    ///
    /// # Errors
    ///
    /// Returns `SplitError::UnrecognizedLine` under `FallbackPolicy::Strict`
    /// when free text appears inside a day but outside its faith section.
    pub fn feed(
        &mut self,
        mut context: QuarterContext,
        line_number: usize,
        line: &str,
    ) -> Result<Step> {
        match LineKind::classify(line) {
            LineKind::Quarter(text) => {
                context.quarter = text;
                Ok(Step::carry(context))
            }
            LineKind::Theme(text) => {
                context.theme = text;
                Ok(Step::carry(context))
            }
            LineKind::DayHeader { number, title } => {
                let completed = self.close(&context);
                self.stats.days += 1;
                self.state = State::Open {
                    record: DayRecord::new(number, title),
                    in_faith: false,
                };
                Ok(Step { context, completed })
            }
            LineKind::MalformedDay(text) => {
                warn!(line = line_number, text = %text, "Skipping day with out-of-range number");
                self.stats.malformed_days += 1;
                let completed = self.close(&context);
                self.state = State::Skipping;
                Ok(Step { context, completed })
            }
            LineKind::Blank => Ok(Step::carry(context)),
            kind => {
                self.apply(kind, line_number)?;
                Ok(Step::carry(context))
            }
        }
    }

    /// Flush the open record at end of input, if there is one
    pub fn finish(&mut self, context: &QuarterContext) -> Option<CompletedDay> {
        self.close(context)
    }

    fn close(&mut self, context: &QuarterContext) -> Option<CompletedDay> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Open { record, .. } => Some(CompletedDay {
                record,
                context: context.clone(),
            }),
            State::Idle | State::Skipping => None,
        }
    }

    /// Apply a content line to the open record
    fn apply(&mut self, kind: LineKind, line_number: usize) -> Result<()> {
        let State::Open { record, in_faith } = &mut self.state else {
            debug!(line = line_number, "Discarding line outside of any day");
            self.stats.discarded_lines += 1;
            return Ok(());
        };

        match kind {
            LineKind::Action(text) => record.action = text,
            LineKind::Reason(text) => record.reason = text,
            LineKind::FaithHeader => *in_faith = true,
            LineKind::Scripture(text) => {
                self.stats.scripture_lines += 1;
                record.faith_lines.push(text);
            }
            LineKind::Other(text) => {
                if !*in_faith && self.policy == FallbackPolicy::Strict {
                    return Err(SplitError::UnrecognizedLine {
                        line: line_number,
                        text,
                    });
                }
                if !*in_faith {
                    debug!(
                        line = line_number,
                        day = record.number,
                        "Unclassified line collected into faith block"
                    );
                }
                self.stats.fallback_lines += 1;
                record.faith_lines.push(text);
            }
            // Structural lines are handled by `feed`.
            LineKind::Quarter(_)
            | LineKind::Theme(_)
            | LineKind::DayHeader { .. }
            | LineKind::MalformedDay(_)
            | LineKind::Blank => {}
        }

        Ok(())
    }
}

impl Default for DayAccumulator {
    fn default() -> Self {
        DayAccumulator::new(FallbackPolicy::default())
    }
}
