mod debug_report;

use epiloc::{Audit, Classifier, DEFAULT_CACHE_CAPACITY, Options};
use std::io::{self, BufRead, IsTerminal, Write};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const DEFAULT_SAMPLES: usize = 5;
const LOG_ENV: &str = "EPILOC_LOG";

#[derive(Debug, Error)]
enum CliError {
    #[error("error: {0}")]
    Usage(String),
    #[error("error: failed to read or write: {0}")]
    Io(#[from] io::Error),
    #[error("error: failed to encode record: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Io(_) | CliError::Json(_) => 1,
        }
    }
}

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(err.exit_code());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn run() -> Result<(), CliError> {
    let config = parse_args()?;
    let classifier = Classifier::with_options(&Options { cache_capacity: config.cache_capacity });

    if let Some(input) = &config.input {
        let res = classifier.classify_verbose(input);
        if config.json {
            println!("{}", serde_json::to_string(&res.location)?);
        } else {
            debug_report::print_explain(&res, config.color);
        }
        return Ok(());
    }

    let lines = read_stdin_lines()?;
    if lines.is_empty() {
        return Err(CliError::Usage(format!("no input provided\n\n{}", help_text())));
    }
    tracing::info!(rows = lines.len(), "classifying batch");

    let records = classifier.classify_all(&lines);

    if config.json {
        let stdout = io::stdout();
        let mut out = io::BufWriter::new(stdout.lock());
        for record in &records {
            serde_json::to_writer(&mut out, record)?;
            writeln!(out)?;
        }
        out.flush()?;
    } else {
        let audit = Audit::build(&lines, &records, config.samples);
        debug_report::print_audit(&audit, &classifier.cache_stats(), config.color);
    }

    Ok(())
}

struct CliConfig {
    input: Option<String>,
    json: bool,
    samples: usize,
    cache_capacity: Option<usize>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, CliError> {
    let mut input: Option<String> = None;
    let mut json = false;
    let mut samples = DEFAULT_SAMPLES;
    let mut cache_capacity = Some(DEFAULT_CACHE_CAPACITY);
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("epiloc {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--samples" => {
                let value = args.next().ok_or_else(|| usage("--samples expects a value"))?;
                samples = parse_count("--samples", &value)?;
            }
            "--cache-capacity" => {
                let value = args.next().ok_or_else(|| usage("--cache-capacity expects a value"))?;
                cache_capacity = parse_capacity(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| usage("--input expects a value"))?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--samples=") => {
                samples = parse_count("--samples", arg.trim_start_matches("--samples="))?;
            }
            _ if arg.starts_with("--cache-capacity=") => {
                cache_capacity = parse_capacity(arg.trim_start_matches("--cache-capacity="))?;
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(usage(format!("unknown option '{arg}'")));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    Ok(CliConfig { input, json, samples, cache_capacity, color })
}

fn usage(msg: impl Into<String>) -> CliError {
    CliError::Usage(msg.into())
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), CliError> {
    if slot.is_some() {
        return Err(usage("input provided multiple times"));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_count(flag: &str, value: &str) -> Result<usize, CliError> {
    value.parse::<usize>().map_err(|_| usage(format!("invalid {flag} '{value}' (expected a non-negative integer)")))
}

fn parse_capacity(value: &str) -> Result<Option<usize>, CliError> {
    if value.eq_ignore_ascii_case("unbounded") {
        return Ok(None);
    }
    parse_count("--cache-capacity", value).map(Some)
}

/// One raw location per line. Blank lines are kept: they are empty locations
/// and the output stays index-for-index with the input.
fn read_stdin_lines() -> Result<Vec<String>, CliError> {
    let stdin = io::stdin();
    let lines = stdin.lock().lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "epiloc {version}

Rule-based classifier for free-text earthquake location strings.

Usage:
  epiloc [OPTIONS] [--] <location...>     Explain how one location is classified.
  epiloc [OPTIONS] --input <location>
  epiloc [OPTIONS] < locations.txt         Classify one location per line.

Options:
  -i, --input <text>         Location to explain. Without it (and without
                             positional arguments) locations are read from stdin.
  --json                     Print records as JSON (one line per input) instead
                             of a report.
  --samples <n>              Sample rows per rule in the batch report.
                             Default: {samples}
  --cache-capacity <n>       Memo cache size per cache, or 'unbounded'.
                             0 disables memoization. Default: {capacity}
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}                 Log filter (e.g. 'epiloc=trace'). Default: warn.

Exit codes:
  0  Success.
  1  I/O or encoding error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        samples = DEFAULT_SAMPLES,
        capacity = DEFAULT_CACHE_CAPACITY,
        log_env = LOG_ENV,
    )
}
