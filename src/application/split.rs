//! Split use case
//!
//! Drives the source document through the accumulator and writes one
//! document per day through a `DayStore`.

use crate::domain::render::{day_dir_name, day_relative_path, render_day};
use crate::domain::{
    CompletedDay, DayAccumulator, FallbackPolicy, QuarterContext, ScanStats, SourceDocument,
};
use crate::error::Result;
use crate::infrastructure::{DayStore, MemoryStore};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Options for a split run
#[derive(Debug, Clone)]
pub struct SplitOptions {
    pub policy: FallbackPolicy,
    /// Extension of generated files, without the dot
    pub extension: String,
    /// Print a progress line per generated file
    pub progress: bool,
}

impl Default for SplitOptions {
    fn default() -> Self {
        SplitOptions {
            policy: FallbackPolicy::Lenient,
            extension: "md".to_string(),
            progress: false,
        }
    }
}

/// A day document that was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedDay {
    pub number: u64,
    pub path: PathBuf,
}

/// Outcome of a split run
#[derive(Debug, Clone, Default)]
pub struct SplitReport {
    pub days: Vec<EmittedDay>,
    pub stats: ScanStats,
    /// Day numbers seen more than once (later ones overwrote earlier files)
    pub duplicates: Vec<u64>,
}

/// Service for splitting a study guide into day documents
pub struct SplitService<S: DayStore> {
    store: S,
}

impl<S: DayStore> SplitService<S> {
    /// Create new split service writing into `store`
    pub fn new(store: S) -> Self {
        SplitService { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Execute the split
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Strict mode meets an unrecognized line
    /// - Creating a day directory or writing a day file fails
    ///
    /// Either aborts the scan; days already written stay in place.
    pub fn execute(&self, source: &SourceDocument, options: &SplitOptions) -> Result<SplitReport> {
        let mut accumulator = DayAccumulator::new(options.policy);
        let mut context = QuarterContext::default();
        let mut report = SplitReport::default();
        let mut seen = BTreeSet::new();

        for (number, line) in source.lines() {
            let step = accumulator.feed(context, number, line)?;
            context = step.context;
            if let Some(day) = step.completed {
                self.flush(&day, options, &mut report, &mut seen)?;
            }
        }

        if let Some(day) = accumulator.finish(&context) {
            self.flush(&day, options, &mut report, &mut seen)?;
        }

        report.stats = accumulator.stats();
        info!(days = report.days.len(), stats = ?report.stats, "Scan complete");
        Ok(report)
    }

    /// Write one completed day
    fn flush(
        &self,
        day: &CompletedDay,
        options: &SplitOptions,
        report: &mut SplitReport,
        seen: &mut BTreeSet<u64>,
    ) -> Result<()> {
        let number = day.record.number;
        if !seen.insert(number) {
            warn!(day = number, "Day appears more than once; overwriting earlier output");
            report.duplicates.push(number);
        }

        let relative = day_relative_path(number, &options.extension);
        self.store.ensure_dir(Path::new(&day_dir_name(number)))?;
        self.store.write(&relative, &render_day(day))?;

        let path = self.store.location(&relative);
        debug!(day = number, path = %path.display(), "Generated day");
        if options.progress {
            println!("Generated: {}", path.display());
        }

        report.days.push(EmittedDay { number, path });
        Ok(())
    }
}

/// Render every day of `text` without touching storage.
///
/// Keys are day numbers; a repeated day keeps its last rendering.
pub fn render_in_memory(text: &str, policy: FallbackPolicy) -> Result<BTreeMap<u64, String>> {
    let options = SplitOptions {
        policy,
        ..SplitOptions::default()
    };
    let service = SplitService::new(MemoryStore::new());
    let report = service.execute(&SourceDocument::from_text(text), &options)?;
    let mut files = service.into_store().into_files();

    Ok(report
        .days
        .into_iter()
        .filter_map(|day| files.remove(&day.path).map(|content| (day.number, content)))
        .collect())
}
