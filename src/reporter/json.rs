//! JSON reporter for machine-readable output

use crate::{Item, Report, StatusCounts, DEFAULT_TITLE};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    title: String,
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            pretty: false,
        }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Report stamped with the current local time
    pub fn report(&self, report: &Report) -> String {
        self.report_at(report, &super::generated_now())
    }

    /// Report with a fixed generation timestamp
    pub fn report_at(&self, report: &Report, generated: &str) -> String {
        let output = JsonOutput {
            title: &self.title,
            generated_at: generated,
            summary: JsonSummary::from(report.counts()),
            preface: &report.preface,
            sections: report
                .sections
                .iter()
                .map(|s| JsonSection {
                    id: &s.id,
                    title: &s.title,
                    summary: JsonSummary::from(s.counts()),
                    items: &s.items,
                })
                .collect(),
        };

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(&output).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    title: &'a str,
    generated_at: &'a str,
    summary: JsonSummary,
    preface: &'a [String],
    sections: Vec<JsonSection<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSection<'a> {
    id: &'a str,
    title: &'a str,
    summary: JsonSummary,
    items: &'a [Item],
}

#[derive(Serialize)]
struct JsonSummary {
    #[serde(flatten)]
    counts: StatusCounts,
    total: usize,
}

impl From<StatusCounts> for JsonSummary {
    fn from(counts: StatusCounts) -> Self {
        Self {
            total: counts.total(),
            counts,
        }
    }
}
