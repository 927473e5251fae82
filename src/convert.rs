//! File-to-file conversion: read, parse, render, write

use crate::reporter::{HtmlReporter, JsonReporter, OutputFormat};
use crate::{parse_report_with, ParseOptions, Report, DEFAULT_TITLE};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from reading the benchmark output or writing the report
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// How to render the report
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub title: String,
    pub format: OutputFormat,
    pub show_hint: bool,
    pub parse: ParseOptions,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            format: OutputFormat::Html,
            show_hint: true,
            parse: ParseOptions::default(),
        }
    }
}

/// Result of a successful conversion
#[derive(Debug)]
pub struct Conversion {
    /// Where the report was written
    pub output_path: PathBuf,
    /// Parsed input, for summaries
    pub report: Report,
}

/// Fail with [`ConvertError::InputNotFound`] unless `input` exists
pub fn ensure_input(input: &Path) -> Result<(), ConvertError> {
    if input.exists() {
        Ok(())
    } else {
        Err(ConvertError::InputNotFound(input.to_path_buf()))
    }
}

/// Input path with its extension replaced by the format's extension
pub fn default_output_path(input: &Path, format: OutputFormat) -> PathBuf {
    input.with_extension(format.extension())
}

/// Read a text file, replacing invalid UTF-8 instead of failing
pub fn read_lossy(path: &Path) -> Result<String, ConvertError> {
    let bytes = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Render a parsed report in the requested format, stamped with the current time
pub fn render(report: &Report, options: &ConvertOptions) -> String {
    match options.format {
        OutputFormat::Html => {
            let mut reporter = HtmlReporter::new().with_title(options.title.as_str());
            if !options.show_hint {
                reporter = reporter.without_hint();
            }
            reporter.report(report)
        }
        OutputFormat::Json => JsonReporter::new()
            .pretty()
            .with_title(options.title.as_str())
            .report(report),
    }
}

/// Convert `input` into a report at `output` (or the derived default path).
/// Any existing file at the output path is overwritten.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
) -> Result<Conversion, ConvertError> {
    ensure_input(input)?;

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(input, options.format),
    };

    let text = read_lossy(input)?;
    let report = parse_report_with(&text, options.parse);
    let document = render(&report, options);

    fs::write(&output_path, document).map_err(|source| ConvertError::Write {
        path: output_path.clone(),
        source,
    })?;

    Ok(Conversion {
        output_path,
        report,
    })
}
