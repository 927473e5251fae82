//! Reporter module for output formatting

pub mod console;
pub mod html;
pub mod json;

pub use console::ConsoleReporter;
pub use html::{escape_html, HtmlReporter};
pub use json::JsonReporter;

/// Timestamp format embedded in generated reports (local clock, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted for a report header
pub fn generated_now() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// File format written by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Json,
}

impl OutputFormat {
    /// Extension used when deriving the output path from the input path
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }
}
