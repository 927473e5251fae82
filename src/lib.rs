//! docker-bench-html: interactive HTML reports for Docker Bench for Security
//!
//! This library parses the plaintext output of a container-security benchmark
//! into sections of status-tagged checks and renders it as a self-contained,
//! filterable HTML document.

pub mod config;
pub mod convert;
pub mod counts;
pub mod parser;
pub mod reporter;

pub use counts::StatusCounts;
pub use parser::{parse_report, parse_report_with, ParseOptions};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Title used when neither the CLI nor the config file provides one
pub const DEFAULT_TITLE: &str = "Docker Bench for Security Report";

/// Outcome classification of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Warn,
    Note,
    Info,
}

impl Status {
    /// All statuses in display order
    pub const ALL: [Status; 4] = [Status::Pass, Status::Warn, Status::Note, Status::Info];

    /// Upper-case token as it appears in the benchmark output
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "PASS",
            Status::Warn => "WARN",
            Status::Note => "NOTE",
            Status::Info => "INFO",
        }
    }

    /// Lower-case name used for CSS classes and element ids
    pub fn css_class(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warn => "warn",
            Status::Note => "note",
            Status::Info => "info",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status token is not one of PASS, WARN, NOTE, INFO
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status token: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for Status {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PASS" => Ok(Status::Pass),
            "WARN" => Ok(Status::Warn),
            "NOTE" => Ok(Status::Note),
            "INFO" => Ok(Status::Info),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A single check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Outcome of the check
    pub status: Status,
    /// Dotted-decimal check id (e.g. "1.1.2")
    pub id: String,
    /// Check description from the check line
    pub description: String,
    /// Bullet and continuation lines attached to the check, in file order
    pub details: Vec<String>,
}

impl Item {
    pub fn new(status: Status, id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            status,
            id: id.into(),
            description: description.into(),
            details: Vec::new(),
        }
    }
}

/// A numbered group of checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section number as written in the header (not guaranteed unique)
    pub id: String,
    /// Section title
    pub title: String,
    /// Checks in file order
    pub items: Vec<Item>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Holder for checks that appear before any section header
    pub fn uncategorized() -> Self {
        Self::new("0", "Uncategorized")
    }

    /// Per-status counts for this section
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_items(&self.items)
    }
}

/// Parsed benchmark report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Free text before the first section or check line
    pub preface: Vec<String>,
    /// Sections in file order
    pub sections: Vec<Section>,
}

impl Report {
    /// Per-status counts across all sections
    pub fn counts(&self) -> StatusCounts {
        StatusCounts::from_sections(&self.sections)
    }

    /// Every check in file order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// Total number of checks
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}
