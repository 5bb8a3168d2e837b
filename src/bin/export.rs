//! Batch export CLI.
//!
//! Converts JSONL game records into a CSV of bit vectors, one row per
//! position.
//!
//! Usage:
//!   cargo run --release --bin export -- [OPTIONS]
//!
//! Options:
//!   --width W       Piece code width, 4 or 12 (default: 4)
//!   --input FILE    Input JSONL path (default: stdin)
//!   --output FILE   Output CSV path (default: stdout)
//!   --threads N     Number of parallel threads (default: 4)
//!   --batch N       Games per parallel batch (default: 256)
//!   --strict        Abort on the first bad game instead of skipping it
//!   --quiet         Suppress progress output

use std::env;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::process;

use chessmap::codec::CodecKind;
use chessmap::export::{run_export, ExportConfig, ExportError};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = ExportConfig::default();
    let mut input_path: Option<String> = None;
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" => {
                let width = parse_value(&args, &mut i, "--width");
                config.codec = match CodecKind::from_width(width) {
                    Ok(kind) => kind,
                    Err(e) => fail(&e.to_string()),
                };
            }
            "--input" => {
                i += 1;
                input_path = Some(value_at(&args, i, "--input").to_string());
            }
            "--output" => {
                i += 1;
                output_path = Some(value_at(&args, i, "--output").to_string());
            }
            "--threads" => {
                config.threads = parse_value(&args, &mut i, "--threads");
            }
            "--batch" => {
                config.batch_size = parse_value(&args, &mut i, "--batch");
            }
            "--strict" => {
                config.skip_invalid = false;
            }
            "--quiet" => {
                config.quiet = true;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    if !config.quiet {
        eprintln!(
            "Export: {} ({} bits), {} threads, batch {}",
            config.codec.name(),
            config.codec.len(),
            config.threads,
            config.batch_size
        );
    }

    let result = match (input_path, output_path) {
        (input, Some(path)) => File::create(&path)
            .map_err(ExportError::from)
            .and_then(|file| export_from(input, &mut BufWriter::new(file), &config)),
        (input, None) => {
            let stdout = io::stdout();
            export_from(input, &mut BufWriter::new(stdout.lock()), &config)
        }
    };

    match result {
        Ok(summary) => {
            if !config.quiet {
                eprintln!(
                    "Done: {} games, {} rows, {} skipped",
                    summary.games_written, summary.rows_written, summary.games_skipped
                );
            }
        }
        Err(e) => {
            eprintln!("export failed: {}", e);
            process::exit(1);
        }
    }
}

/// Runs the export from the given input path, or stdin when none is set.
fn export_from<W: io::Write>(
    input: Option<String>,
    out: &mut W,
    config: &ExportConfig,
) -> Result<chessmap::export::ExportSummary, ExportError> {
    match input {
        Some(path) => run_export(BufReader::new(File::open(path)?), out, config),
        None => {
            let stdin = io::stdin();
            run_export(stdin.lock(), out, config)
        }
    }
}

fn value_at<'a>(args: &'a [String], i: usize, flag: &str) -> &'a str {
    match args.get(i) {
        Some(v) => v.as_str(),
        None => fail(&format!("missing value for {}", flag)),
    }
}

/// Advances past a flag and parses its value.
fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> T {
    *i += 1;
    let raw = value_at(args, *i, flag);
    match raw.parse() {
        Ok(v) => v,
        Err(_) => fail(&format!("invalid {} value: '{}'", flag, raw)),
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("{}", msg);
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage: export [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --width W        Piece code width, 4 or 12 (default: 4)");
    eprintln!("  --input FILE     Input JSONL path (default: stdin)");
    eprintln!("  --output FILE    Output CSV path (default: stdout)");
    eprintln!("  --threads N      Number of parallel threads (default: 4)");
    eprintln!("  --batch N        Games per parallel batch (default: 256)");
    eprintln!("  --strict         Abort on the first bad game");
    eprintln!("  --quiet          Suppress progress output");
    eprintln!("  --help           Show this help");
}
