//! Line classification for the study guide markup

use crate::domain::books::starts_with_book;
use regex::Regex;
use std::sync::OnceLock;

const THEME_PREFIX: &str = "**Theme:";

fn quarter_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^## Quarter \d+: .+").unwrap())
}

fn day_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^### Day (\d+): (.+)$").unwrap())
}

fn action_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\*\*Wisdom \(Action\):\*\* (.*)$").unwrap())
}

fn reason_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\*\*Wisdom \(Reason\):\*\* (.*)$").unwrap())
}

fn faith_header_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\*\*Faith \(The Word\):\*\*").unwrap())
}

/// Structural category of a single source line.
///
/// Variants are listed in matching precedence: the first pattern that
/// matches decides the category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// `## Quarter <n>: <title>`, kept verbatim
    Quarter(String),
    /// `**Theme:` annotation, kept verbatim
    Theme(String),
    /// `### Day <n>: <title>`
    DayHeader { number: u64, title: String },
    /// Day-header shape whose number does not fit a `u64`
    MalformedDay(String),
    /// Text after `**Wisdom (Action):**`
    Action(String),
    /// Text after `**Wisdom (Reason):**`
    Reason(String),
    /// `**Faith (The Word):**`
    FaithHeader,
    /// Line opening with a canonical book name
    Scripture(String),
    Blank,
    /// Anything else
    Other(String),
}

impl LineKind {
    /// Classify one raw line. Surrounding whitespace is ignored.
    pub fn classify(raw: &str) -> LineKind {
        let line = raw.trim();

        if quarter_regex().is_match(line) {
            return LineKind::Quarter(line.to_string());
        }

        if line.starts_with(THEME_PREFIX) {
            return LineKind::Theme(line.to_string());
        }

        if let Some(caps) = day_regex().captures(line) {
            return match caps[1].parse::<u64>() {
                Ok(number) => LineKind::DayHeader {
                    number,
                    title: caps[2].to_string(),
                },
                Err(_) => LineKind::MalformedDay(line.to_string()),
            };
        }

        if let Some(caps) = action_regex().captures(line) {
            return LineKind::Action(caps[1].to_string());
        }

        if let Some(caps) = reason_regex().captures(line) {
            return LineKind::Reason(caps[1].to_string());
        }

        if faith_header_regex().is_match(line) {
            return LineKind::FaithHeader;
        }

        if starts_with_book(line) {
            return LineKind::Scripture(line.to_string());
        }

        if line.is_empty() {
            return LineKind::Blank;
        }

        LineKind::Other(line.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_header_kept_verbatim() {
        assert_eq!(
            LineKind::classify("## Quarter 1: Foundations of Character (The Self)\n"),
            LineKind::Quarter("## Quarter 1: Foundations of Character (The Self)".to_string())
        );
    }

    #[test]
    fn test_quarter_requires_number_and_title() {
        assert_eq!(
            LineKind::classify("## Quarter One: Foundations"),
            LineKind::Other("## Quarter One: Foundations".to_string())
        );
        assert_eq!(
            LineKind::classify("## Quarter 1: "),
            LineKind::Other("## Quarter 1:".to_string())
        );
    }

    #[test]
    fn test_theme_line() {
        assert_eq!(
            LineKind::classify("**Theme:** Internal Mastery, Discipline, and Identity"),
            LineKind::Theme("**Theme:** Internal Mastery, Discipline, and Identity".to_string())
        );
    }

    #[test]
    fn test_day_header() {
        assert_eq!(
            LineKind::classify("### Day 12: Keep Going"),
            LineKind::DayHeader {
                number: 12,
                title: "Keep Going".to_string()
            }
        );
    }

    #[test]
    fn test_day_header_with_leading_zeroes() {
        assert_eq!(
            LineKind::classify("### Day 007: Agent"),
            LineKind::DayHeader {
                number: 7,
                title: "Agent".to_string()
            }
        );
    }

    #[test]
    fn test_day_header_beyond_u32() {
        assert_eq!(
            LineKind::classify("### Day 99999999999: Big"),
            LineKind::DayHeader {
                number: 99_999_999_999,
                title: "Big".to_string()
            }
        );
    }

    #[test]
    fn test_day_header_overflow_is_malformed() {
        let line = "### Day 99999999999999999999: Too Far";
        assert_eq!(
            LineKind::classify(line),
            LineKind::MalformedDay(line.to_string())
        );
    }

    #[test]
    fn test_day_header_without_number_is_other() {
        assert_eq!(
            LineKind::classify("### Day One: Start"),
            LineKind::Other("### Day One: Start".to_string())
        );
    }

    #[test]
    fn test_action_and_reason() {
        assert_eq!(
            LineKind::classify("**Wisdom (Action):** Wake up early."),
            LineKind::Action("Wake up early.".to_string())
        );
        assert_eq!(
            LineKind::classify("**Wisdom (Reason):** Momentum compounds."),
            LineKind::Reason("Momentum compounds.".to_string())
        );
    }

    #[test]
    fn test_action_without_text_is_other() {
        // The pattern needs the separating space after the marker.
        assert_eq!(
            LineKind::classify("**Wisdom (Action):**"),
            LineKind::Other("**Wisdom (Action):**".to_string())
        );
    }

    #[test]
    fn test_faith_header() {
        assert_eq!(
            LineKind::classify("**Faith (The Word):**"),
            LineKind::FaithHeader
        );
        assert_eq!(
            LineKind::classify("**Faith (The Word):** (ASV)"),
            LineKind::FaithHeader
        );
    }

    #[test]
    fn test_scripture_line() {
        assert_eq!(
            LineKind::classify("  Proverbs 16:3 Commit your work to the Lord...  "),
            LineKind::Scripture("Proverbs 16:3 Commit your work to the Lord...".to_string())
        );
    }

    #[test]
    fn test_blank_and_other() {
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(LineKind::classify("   \t"), LineKind::Blank);
        assert_eq!(
            LineKind::classify("Reflect on this today."),
            LineKind::Other("Reflect on this today.".to_string())
        );
    }

    #[test]
    fn test_precedence_quarter_before_scripture() {
        // A quarter header always wins, whatever follows the marker.
        assert!(matches!(
            LineKind::classify("## Quarter 2: John and the Disciples"),
            LineKind::Quarter(_)
        ));
    }
}
