//! charset-nose CLI - binary/text and charset detector

use charset_nose::benchmark::read_prefix;
use charset_nose::{EncodingDetector, Match, SampleSize};
use clap::Parser;
use rayon::prelude::*;
use serde::Serialize;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

type BoxError = Box<dyn Error + Send + Sync>;

/// Detect whether files are binary or text, and for text, their most
/// likely character encoding and language.
#[derive(Parser, Debug)]
#[command(name = "charset-nose")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file(s) to examine
    #[arg(required_unless_present = "list_encodings")]
    files: Vec<PathBuf>,

    /// Encoding the files are believed to be in; breaks confidence ties
    #[arg(short = 'e', long)]
    hint: Option<String>,

    /// Strip HTML/XML markup before charset scoring
    #[arg(short = 's', long)]
    strip_tags: bool,

    /// Report every candidate instead of only the best one
    #[arg(short = 'a', long)]
    all: bool,

    /// Read at most this many bytes of each file
    #[arg(short = 'b', long)]
    max_bytes: Option<usize>,

    /// Bytes examined by the statistical scorers (default: 8192)
    #[arg(long)]
    sample_bytes: Option<usize>,

    /// Output format: text (default), json, or csv
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,

    /// Log detection decisions to stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// List every encoding that can be reported and exit
    #[arg(long)]
    list_encodings: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// JSON output record: one line per file.
#[derive(Serialize)]
struct FileReport<'a> {
    file: String,
    matches: &'a [Match],
}

/// CSV output record: one row per candidate.
#[derive(Serialize)]
struct CsvRow<'a> {
    file: &'a str,
    rank: usize,
    #[serde(rename = "type")]
    kind: &'static str,
    encoding: &'static str,
    language: &'static str,
    confidence: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_target(false)
        .init();

    if args.list_encodings {
        return match EncodingDetector::supported_encodings() {
            Ok(names) => {
                for name in names {
                    println!("{name}");
                }
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let detector = match build_detector(&args) {
        Ok(detector) => detector,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Files are examined in parallel; results keep the input order.
    let results: Vec<(&PathBuf, Result<Vec<Match>, BoxError>)> = args
        .files
        .par_iter()
        .map_init(
            || detector.clone(),
            |detector, path| (path, detect_file(detector, path, &args)),
        )
        .collect();

    match print_results(&results, &args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error writing output: {e}");
            ExitCode::FAILURE
        }
    }
}

fn build_detector(args: &Args) -> Result<EncodingDetector, BoxError> {
    let mut detector = EncodingDetector::new()?;
    detector.set_strip_tags(args.strip_tags);

    if let Some(bytes) = args.sample_bytes {
        detector.sample_size(SampleSize::Bytes(bytes))?;
    }
    if let Some(ref hint) = args.hint {
        detector.declared_encoding(hint)?;
    }

    Ok(detector)
}

fn detect_file(detector: &EncodingDetector, path: &Path, args: &Args) -> Result<Vec<Match>, BoxError> {
    let data = read_prefix(path, args.max_bytes)?;
    tracing::debug!(file = %path.display(), bytes = data.len(), "read input");

    let matches = if args.all {
        detector.detect_all(&data, None)?
    } else {
        vec![detector.detect(&data, None)?]
    };
    Ok(matches)
}

/// Print every result in the chosen format. Returns false if any file failed.
fn print_results(
    results: &[(&PathBuf, Result<Vec<Match>, BoxError>)],
    args: &Args,
) -> Result<bool, BoxError> {
    let mut csv_writer = match args.format {
        OutputFormat::Csv => Some(csv::Writer::from_writer(io::stdout())),
        _ => None,
    };
    let mut all_ok = true;

    for (path, result) in results {
        let matches = match result {
            Ok(matches) => matches,
            Err(e) => {
                eprintln!("Error processing {}: {}", path.display(), e);
                all_ok = false;
                continue;
            }
        };

        match args.format {
            OutputFormat::Text => print_text_output(path, matches),
            OutputFormat::Json => print_json_output(path, matches)?,
            OutputFormat::Csv => {
                if let Some(writer) = csv_writer.as_mut() {
                    write_csv_rows(writer, path, matches)?;
                }
            }
        }
    }

    if let Some(mut writer) = csv_writer {
        writer.flush()?;
    }
    Ok(all_ok)
}

fn print_text_output(path: &Path, matches: &[Match]) {
    match matches {
        [] => println!("{}: no candidates", path.display()),
        [best] => println!("{}: {}", path.display(), best),
        _ => {
            println!("File: {}", path.display());
            for (rank, found) in matches.iter().enumerate() {
                println!("  {}. {}", rank + 1, found);
            }
            println!();
        }
    }
}

fn print_json_output(path: &Path, matches: &[Match]) -> Result<(), BoxError> {
    let report = FileReport {
        file: path.display().to_string(),
        matches,
    };
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn write_csv_rows<W: io::Write>(
    writer: &mut csv::Writer<W>,
    path: &Path,
    matches: &[Match],
) -> Result<(), BoxError> {
    let file = path.display().to_string();
    for (rank, found) in matches.iter().enumerate() {
        writer.serialize(CsvRow {
            file: &file,
            rank: rank + 1,
            kind: found.kind().as_str(),
            encoding: found.encoding().unwrap_or(""),
            language: found.language().unwrap_or(""),
            confidence: found.confidence(),
        })?;
    }
    Ok(())
}
