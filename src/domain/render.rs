//! Rendering of completed days into per-day documents

use crate::domain::record::CompletedDay;
use std::path::PathBuf;

/// Directory name for a day: zero-padded to three digits (e.g. `007`)
pub fn day_dir_name(number: u64) -> String {
    format!("{:03}", number)
}

/// File name for a day, e.g. `devotionFor007.md`
pub fn day_file_name(number: u64, extension: &str) -> String {
    format!("devotionFor{}.{}", day_dir_name(number), extension)
}

/// Path of a day's document relative to the output root
pub fn day_relative_path(number: u64, extension: &str) -> PathBuf {
    PathBuf::from(day_dir_name(number)).join(day_file_name(number, extension))
}

/// Drop blank entries from both ends, keeping interior ones.
pub fn trim_blank_edges(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

/// Render a completed day into its output document
pub fn render_day(day: &CompletedDay) -> String {
    let record = &day.record;
    let faith = trim_blank_edges(&record.faith_lines).join("\n");

    let mut output = String::new();
    output.push_str(&format!("# Day {}: {}\n\n", record.number, record.title));
    output.push_str("## Quarter Goal\n");
    output.push_str(&format!("{}\n", day.context.quarter));
    output.push_str(&format!("{}\n\n", day.context.theme));
    output.push_str("### Day Principle (Wisdom(Action))\n");
    output.push_str(&format!("{}\n\n", record.action));
    output.push_str("### Day Reason (Wisdom(Reason))\n");
    output.push_str(&format!("{}\n\n", record.reason));
    output.push_str("### Day Faith (The Word)\n");
    output.push_str(&format!("{}\n", faith));
    output
}
