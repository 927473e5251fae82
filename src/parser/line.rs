//! Line classification for benchmark output
//!
//! Each line is tested against the section header, check, and bullet patterns
//! in that order; the first match wins.

use crate::Status;
use regex::Regex;
use std::sync::OnceLock;

/// What a single input line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `[INFO] <digits> - <title>`
    SectionHeader { id: &'a str, title: &'a str },
    /// `[STATUS] <dotted-decimal> - <description>`
    Check {
        status: Status,
        id: &'a str,
        description: &'a str,
    },
    /// `* <text>` with optional leading whitespace; holds the text after the marker
    Bullet(&'a str),
    /// Empty or whitespace-only
    Blank,
    /// Anything else, unmodified
    Text(&'a str),
}

fn section_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[INFO\]\s+(\d+)\s+-\s+(.*)\s*$").expect("section header pattern")
    })
}

fn check_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\[(PASS|WARN|NOTE|INFO)\]\s+(\d+(?:\.\d+)*)\s+-\s+(.*)\s*$")
            .expect("check line pattern")
    })
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern"))
}

/// Split text into lines on `\r\n`, `\r` or `\n`. A trailing terminator
/// yields a final empty line, which classifies as [`Line::Blank`].
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    line_break_re().split(text)
}

fn bullet_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\*\s+(.*)\s*$").expect("bullet pattern"))
}

/// Classify one line (without its line terminator)
pub fn classify(line: &str) -> Line<'_> {
    if let Some(caps) = section_re().captures(line) {
        if let (Some(id), Some(title)) = (caps.get(1), caps.get(2)) {
            return Line::SectionHeader {
                id: id.as_str(),
                title: title.as_str(),
            };
        }
    }

    if let Some(caps) = check_re().captures(line) {
        let status = caps.get(1).and_then(|m| m.as_str().parse::<Status>().ok());
        if let (Some(status), Some(id), Some(description)) = (status, caps.get(2), caps.get(3)) {
            return Line::Check {
                status,
                id: id.as_str(),
                description: description.as_str(),
            };
        }
    }

    if let Some(text) = bullet_re().captures(line).and_then(|caps| caps.get(1)) {
        return Line::Bullet(text.as_str().trim_end());
    }

    if line.trim().is_empty() {
        Line::Blank
    } else {
        Line::Text(line)
    }
}
