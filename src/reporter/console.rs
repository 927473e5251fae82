//! Console reporter with colored output

use crate::{Report, Status, StatusCounts};
use colored::Colorize;

/// Reporter for terminal summaries
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Totals followed by one line per section
    pub fn summary(&self, report: &Report) -> String {
        let counts = report.counts();
        let mut out = String::new();
        out.push_str(&format!("{}\n", "═".repeat(60)));
        out.push_str(&format!("{}\n", self.bold("Summary")));
        out.push_str(&format!("{}\n", "═".repeat(60)));
        out.push_str(&format!(
            "   Sections: {}   Checks: {}\n",
            report.sections.len(),
            counts.total()
        ));
        out.push_str(&format!("   {}\n", self.format_counts(&counts)));

        if !report.sections.is_empty() {
            out.push('\n');
        }
        for section in &report.sections {
            out.push_str(&format!(
                "   {:>3} {:<44} {}\n",
                section.id,
                truncate(&section.title, 44),
                self.format_counts(&section.counts())
            ));
        }
        out
    }

    /// Print the summary to stderr (stdout is reserved for the output path)
    pub fn report(&self, report: &Report) {
        eprint!("{}", self.summary(report));
    }

    fn format_counts(&self, counts: &StatusCounts) -> String {
        counts
            .iter()
            .map(|(status, n)| self.colorize_status(status, &format!("{} {}", status, n)))
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn colorize_status(&self, status: Status, text: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        match status {
            Status::Pass => text.green().to_string(),
            Status::Warn => text.red().bold().to_string(),
            Status::Note => text.yellow().to_string(),
            Status::Info => text.blue().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
