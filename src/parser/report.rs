//! Line-by-line report parser
//!
//! A small state machine over classified lines: before the first section or
//! check everything non-blank goes to the preface; afterwards untagged lines
//! are attached to the open check, or dropped when no check is open.

use super::ansi::strip_ansi;
use super::line::{classify, split_lines, Line};
use crate::{Item, Report, Section};

/// Parser settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Remove ANSI escape sequences before classifying each line
    pub strip_ansi: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// No section header or check seen yet
    BeforeStart,
    /// Inside a section, no check open
    InSection,
    /// The last check of the last section is open for details
    InItem,
}

/// Incremental parser; feed lines in order, then call [`ReportParser::finish`]
#[derive(Debug)]
pub struct ReportParser {
    options: ParseOptions,
    state: State,
    preface: Vec<String>,
    sections: Vec<Section>,
}

impl ReportParser {
    pub fn new() -> Self {
        Self::with_options(ParseOptions::default())
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            state: State::BeforeStart,
            preface: Vec::new(),
            sections: Vec::new(),
        }
    }

    /// Process one line (without its terminator)
    pub fn push_line(&mut self, raw: &str) {
        let line = if self.options.strip_ansi {
            strip_ansi(raw)
        } else {
            raw.into()
        };

        match classify(&line) {
            Line::SectionHeader { id, title } => {
                self.sections.push(Section::new(id, title));
                self.state = State::InSection;
            }
            Line::Check {
                status,
                id,
                description,
            } => {
                if self.sections.is_empty() {
                    self.sections.push(Section::uncategorized());
                }
                if let Some(section) = self.sections.last_mut() {
                    section.items.push(Item::new(status, id, description));
                }
                self.state = State::InItem;
            }
            Line::Bullet(text) if self.state == State::InItem => self.push_detail(text),
            Line::Blank => {}
            Line::Bullet(_) | Line::Text(_) => self.push_untagged(&line),
        }
    }

    fn push_untagged(&mut self, line: &str) {
        match self.state {
            State::BeforeStart => self.preface.push(line.to_string()),
            State::InItem => self.push_detail(line.trim()),
            State::InSection => {}
        }
    }

    fn push_detail(&mut self, text: &str) {
        if let Some(item) = self
            .sections
            .last_mut()
            .and_then(|section| section.items.last_mut())
        {
            item.details.push(text.to_string());
        }
    }

    pub fn finish(self) -> Report {
        Report {
            preface: self.preface,
            sections: self.sections,
        }
    }
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a whole report with default options
pub fn parse_report(text: &str) -> Report {
    parse_report_with(text, ParseOptions::default())
}

/// Parse a whole report
pub fn parse_report_with(text: &str, options: ParseOptions) -> Report {
    let mut parser = ReportParser::with_options(options);
    for line in split_lines(text) {
        parser.push_line(line);
    }
    parser.finish()
}
