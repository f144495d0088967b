//! Output formatting utilities

use crate::application::SplitReport;
use std::path::Path;

/// Format the closing summary of a split run
pub fn format_summary(report: &SplitReport, output_root: &Path) -> String {
    if report.days.is_empty() {
        return "No day headers found; nothing generated".to_string();
    }

    let files = if report.days.len() == 1 { "file" } else { "files" };
    let mut output = format!(
        "Generated {} day {} under {}",
        report.days.len(),
        files,
        output_root.display()
    );

    if !report.duplicates.is_empty() {
        let days: Vec<String> = report.duplicates.iter().map(|d| d.to_string()).collect();
        output.push_str(&format!(
            "\nWarning: repeated day numbers overwrote earlier output: {}",
            days.join(", ")
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::EmittedDay;
    use std::path::PathBuf;

    fn emitted(number: u64) -> EmittedDay {
        EmittedDay {
            number,
            path: PathBuf::from(format!("days/{:03}/devotionFor{:03}.md", number, number)),
        }
    }

    #[test]
    fn test_format_empty_report() {
        let report = SplitReport::default();
        assert_eq!(
            format_summary(&report, Path::new("days")),
            "No day headers found; nothing generated"
        );
    }

    #[test]
    fn test_format_summary() {
        let report = SplitReport {
            days: vec![emitted(1), emitted(2)],
            ..Default::default()
        };
        assert_eq!(
            format_summary(&report, Path::new("days")),
            "Generated 2 day files under days"
        );
    }

    #[test]
    fn test_format_single_day() {
        let report = SplitReport {
            days: vec![emitted(1)],
            ..Default::default()
        };
        assert_eq!(
            format_summary(&report, Path::new("out")),
            "Generated 1 day file under out"
        );
    }

    #[test]
    fn test_format_duplicates() {
        let report = SplitReport {
            days: vec![emitted(4), emitted(4)],
            duplicates: vec![4],
            ..Default::default()
        };
        let output = format_summary(&report, Path::new("days"));
        assert!(output.contains("repeated day numbers overwrote earlier output: 4"));
    }
}
