//! Parser module for plaintext benchmark reports

pub mod ansi;
pub mod line;
pub mod report;

pub use ansi::strip_ansi;
pub use line::{classify, split_lines, Line};
pub use report::{parse_report, parse_report_with, ParseOptions, ReportParser};
