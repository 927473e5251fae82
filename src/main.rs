//! docker-bench-html: Docker Bench for Security report converter CLI

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use docker_bench_html::config::{load_config, search_dir};
use docker_bench_html::convert::{convert_file, ensure_input, ConvertOptions};
use docker_bench_html::reporter::{ConsoleReporter, OutputFormat};
use docker_bench_html::ParseOptions;
use std::path::PathBuf;
use std::process::ExitCode;

/// Convert Docker Bench for Security output into an interactive HTML report
#[derive(Parser, Debug)]
#[command(name = "docker-bench-html")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Plaintext benchmark output (e.g. docker-bench-clean.txt)
    input: PathBuf,

    /// Report file to write (default: input path with .html extension)
    output: Option<PathBuf>,

    /// Report title
    #[arg(long)]
    title: Option<String>,

    /// Write the parsed report as JSON instead of HTML
    #[arg(long, short)]
    json: bool,

    /// Path to config file (default: search .docker-bench-html.json next to the input and in parents)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Omit the footer explaining how to open the report off-server
    #[arg(long)]
    no_hint: bool,

    /// Strip ANSI color codes from the input before parsing
    #[arg(long)]
    strip_ansi: bool,

    /// Quiet mode (no warnings or notes)
    #[arg(long, short)]
    quiet: bool,

    /// Print a per-section summary to stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<ExitCode> {
    // Usage errors exit with status 2 from inside clap
    let args = Args::parse();

    // Checked before anything else so a bad path never touches the filesystem
    ensure_input(&args.input)?;

    let loaded = load_config(search_dir(&args.input), args.config.as_deref())?;
    if !args.quiet {
        if let Some(ref e) = loaded.skipped {
            eprintln!("{}: {:#}; using defaults", "Warning".yellow(), e);
        }
        if let Some(ref path) = loaded.source {
            eprintln!("{}: Using config {}", "Info".blue(), path.display());
        }
    }
    let config = loaded
        .config
        .merge_with_cli(args.title.clone(), args.no_hint, args.strip_ansi);

    let options = ConvertOptions {
        title: config.title().to_string(),
        format: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Html
        },
        show_hint: config.show_hint,
        parse: ParseOptions {
            strip_ansi: config.strip_ansi,
        },
    };

    let conversion = convert_file(&args.input, args.output.as_deref(), &options)?;

    if conversion.report.item_count() == 0 && !args.quiet {
        eprintln!(
            "{}: No check lines recognized in {}",
            "Warning".yellow(),
            args.input.display()
        );
    }

    if args.verbose {
        ConsoleReporter::new().report(&conversion.report);
    }

    println!("{}", conversion.output_path.display());
    Ok(ExitCode::SUCCESS)
}
