//! Benchmark module for measuring detection accuracy on annotated samples.
//!
//! A data set is a directory of sample files plus a tab-separated annotation
//! file with `file`, `encoding` and optional `language` columns. Binary
//! samples are annotated with the encoding `binary`.

use crate::{EncodingDetector, Match};
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Encoding name used in annotations for binary content.
pub const BINARY: &str = "binary";

/// Expected result from the annotation file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ExpectedEncoding {
    #[serde(rename = "file")]
    pub file_name: String,
    pub encoding: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub language: Option<String>,
}

/// Result of benchmarking a single file.
#[derive(Debug, Clone)]
pub struct FileResult {
    pub file_name: String,
    pub passed: bool,
    pub encoding_match: bool,
    pub language_match: bool,
    pub expected_encoding: String,
    pub detected_encoding: Option<String>,
    pub expected_language: Option<String>,
    pub detected_language: Option<String>,
    pub confidence: u8,
    pub error: Option<String>,
}

impl FileResult {
    fn failed(expected: &ExpectedEncoding, error: String) -> Self {
        Self {
            file_name: expected.file_name.clone(),
            passed: false,
            encoding_match: false,
            language_match: false,
            expected_encoding: expected.encoding.clone(),
            detected_encoding: None,
            expected_language: expected.language.clone(),
            detected_language: None,
            confidence: 0,
            error: Some(error),
        }
    }
}

/// Aggregate benchmark results.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errors: usize,
    pub encoding_matches: usize,
    pub language_matches: usize,
    pub file_results: Vec<FileResult>,
}

impl BenchmarkResult {
    /// Calculate success ratio (passed / total).
    pub fn success_ratio(&self) -> f64 {
        ratio(self.passed, self.total)
    }

    /// Calculate failure ratio (failed / total).
    pub fn failure_ratio(&self) -> f64 {
        ratio(self.failed, self.total)
    }

    /// Calculate error ratio (errors / total).
    pub fn error_ratio(&self) -> f64 {
        ratio(self.errors, self.total)
    }

    /// Share of files without errors whose encoding was detected correctly.
    pub fn encoding_accuracy(&self) -> f64 {
        ratio(self.encoding_matches, self.total - self.errors)
    }

    /// Share of files without errors whose language matched (files with no
    /// expected language always match).
    pub fn language_accuracy(&self) -> f64 {
        ratio(self.language_matches, self.total - self.errors)
    }

    fn record(&mut self, file_result: FileResult) {
        self.total += 1;
        if file_result.error.is_some() {
            self.errors += 1;
        } else {
            if file_result.passed {
                self.passed += 1;
            } else {
                self.failed += 1;
            }
            self.encoding_matches += usize::from(file_result.encoding_match);
            self.language_matches += usize::from(file_result.language_match);
        }
        self.file_results.push(file_result);
    }

    /// Print detailed results to stdout.
    pub fn print_details(&self) {
        println!("\n=== Benchmark Results ===\n");

        for result in &self.file_results {
            let status = if result.error.is_some() {
                "ERROR"
            } else if result.passed {
                "PASS"
            } else {
                "FAIL"
            };

            print!("[{}] {}", status, result.file_name);

            if !result.passed && result.error.is_none() {
                print!(" - ");
                if !result.encoding_match {
                    print!(
                        "encoding: expected {} got {} ",
                        result.expected_encoding,
                        result.detected_encoding.as_deref().unwrap_or("none")
                    );
                }
                if !result.language_match {
                    print!(
                        "language: expected {} got {}",
                        result.expected_language.as_deref().unwrap_or("none"),
                        result.detected_language.as_deref().unwrap_or("none")
                    );
                }
            }

            if let Some(ref err) = result.error {
                print!(" - {err}");
            }

            println!();
        }
    }

    /// Print summary metrics to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Summary ===\n");
        println!("Total files:        {}", self.total);
        println!(
            "Passed:             {} ({:.1}%)",
            self.passed,
            self.success_ratio() * 100.0
        );
        println!(
            "Failed:             {} ({:.1}%)",
            self.failed,
            self.failure_ratio() * 100.0
        );
        println!(
            "Errors:             {} ({:.1}%)",
            self.errors,
            self.error_ratio() * 100.0
        );
        println!();
        println!("Encoding accuracy:  {:.1}%", self.encoding_accuracy() * 100.0);
        println!("Language accuracy:  {:.1}%", self.language_accuracy() * 100.0);
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Parse an annotation file and return a map of file name to expected result.
///
/// Lines starting with `#` are comments. The language column may be empty
/// or missing.
pub fn parse_annotations(path: &Path) -> io::Result<HashMap<String, ExpectedEncoding>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut annotations = HashMap::new();
    for record in reader.deserialize() {
        let mut expected: ExpectedEncoding = record?;
        expected.language = expected.language.filter(|l| !l.is_empty());
        annotations.insert(expected.file_name.clone(), expected);
    }

    Ok(annotations)
}

/// Read at most `limit` bytes from the start of a file (the whole file when
/// `limit` is `None`).
pub fn read_prefix(path: &Path, limit: Option<usize>) -> io::Result<Vec<u8>> {
    let file = fs::File::open(path)?;
    let mut data = Vec::new();
    match limit {
        Some(limit) => {
            file.take(limit as u64).read_to_end(&mut data)?;
        }
        None => {
            io::BufReader::new(file).read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

/// Run benchmark on a directory of sample files.
///
/// Files are checked in parallel, each worker with its own detector session.
pub fn run_benchmark(data_dir: &Path, annotations_path: &Path) -> io::Result<BenchmarkResult> {
    let annotations = parse_annotations(annotations_path)?;
    let detector = EncodingDetector::new().map_err(io::Error::other)?;

    let mut expected: Vec<&ExpectedEncoding> = annotations.values().collect();
    // Sort by file name for consistent output
    expected.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    let file_results: Vec<FileResult> = expected
        .par_iter()
        .map_init(
            || detector.clone(),
            |detector, expected| benchmark_file(detector, &data_dir.join(&expected.file_name), expected),
        )
        .collect();

    let mut result = BenchmarkResult::default();
    for file_result in file_results {
        result.record(file_result);
    }
    tracing::debug!(
        total = result.total,
        passed = result.passed,
        errors = result.errors,
        "benchmark finished"
    );
    Ok(result)
}

/// Benchmark a single file against its expected encoding.
fn benchmark_file(
    detector: &EncodingDetector,
    file_path: &Path,
    expected: &ExpectedEncoding,
) -> FileResult {
    let data = match read_prefix(file_path, None) {
        Ok(data) => data,
        Err(e) => return FileResult::failed(expected, e.to_string()),
    };

    match detector.detect(&data, None) {
        Ok(found) => {
            let (detected_encoding, detected_language) = match &found {
                Match::Binary => (BINARY.to_string(), None),
                Match::Text(text) => (
                    text.encoding.to_string(),
                    text.language.map(str::to_string),
                ),
            };

            let encoding_match = detected_encoding.eq_ignore_ascii_case(&expected.encoding);
            let language_match = match &expected.language {
                Some(language) => detected_language.as_deref() == Some(language.as_str()),
                None => true,
            };

            FileResult {
                file_name: expected.file_name.clone(),
                passed: encoding_match && language_match,
                encoding_match,
                language_match,
                expected_encoding: expected.encoding.clone(),
                detected_encoding: Some(detected_encoding),
                expected_language: expected.language.clone(),
                detected_language,
                confidence: found.confidence(),
                error: None,
            }
        }
        Err(e) => FileResult::failed(expected, e.to_string()),
    }
}

/// Find the annotation file for a data directory.
pub fn find_annotations(data_dir: &Path) -> Option<PathBuf> {
    let dir_name = data_dir.file_name()?.to_str()?;
    let parent = data_dir.parent()?;

    // Try annotations subdirectory
    let annotation_file = parent.join("annotations").join(format!("{dir_name}.tsv"));
    if annotation_file.is_file() {
        return Some(annotation_file);
    }

    // Try direct annotation file in data dir
    let direct_annotation = data_dir.join("annotations.tsv");
    if direct_annotation.is_file() {
        return Some(direct_annotation);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_annotations() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "file\tencoding\tlanguage").unwrap();
        writeln!(file, "# comment line").unwrap();
        writeln!(file, "a.txt\tUTF-8\t").unwrap();
        writeln!(file, "b.txt\tKOI8-R\tru").unwrap();
        writeln!(file, "c.bin\tbinary").unwrap();
        file.flush().unwrap();

        let annotations = parse_annotations(file.path()).unwrap();
        assert_eq!(annotations.len(), 3);
        assert_eq!(annotations["a.txt"].language, None);
        assert_eq!(annotations["b.txt"].encoding, "KOI8-R");
        assert_eq!(annotations["b.txt"].language.as_deref(), Some("ru"));
        assert_eq!(annotations["c.bin"].encoding, BINARY);
    }

    #[test]
    fn test_read_prefix() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();
        file.flush().unwrap();

        assert_eq!(read_prefix(file.path(), Some(4)).unwrap(), b"0123");
        assert_eq!(read_prefix(file.path(), None).unwrap(), b"0123456789");
        assert!(read_prefix(Path::new("/no/such/file"), None).is_err());
    }

    #[test]
    fn test_run_benchmark_on_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("utf8.txt"), "Größenwahn und Übermut, schön.").unwrap();
        fs::write(dir.path().join("elf.bin"), b"\x7fELF\x02\x01\x01\x00\x00\x00").unwrap();
        fs::write(
            dir.path().join("annotations.tsv"),
            "file\tencoding\tlanguage\n\
             utf8.txt\tUTF-8\t\n\
             elf.bin\tbinary\t\n\
             missing.txt\tUTF-8\t\n",
        )
        .unwrap();

        let annotations = find_annotations(dir.path()).unwrap();
        let result = run_benchmark(dir.path(), &annotations).unwrap();
        assert_eq!(result.total, 3);
        assert_eq!(result.passed, 2);
        assert_eq!(result.errors, 1);
        assert_eq!(result.file_results[0].file_name, "elf.bin");
    }

    #[test]
    fn test_benchmark_result_metrics() {
        let result = BenchmarkResult {
            total: 100,
            passed: 80,
            failed: 15,
            errors: 5,
            encoding_matches: 85,
            language_matches: 90,
            file_results: vec![],
        };

        assert!((result.success_ratio() - 0.80).abs() < 0.001);
        assert!((result.failure_ratio() - 0.15).abs() < 0.001);
        assert!((result.error_ratio() - 0.05).abs() < 0.001);
        assert!((result.encoding_accuracy() - 0.894736).abs() < 0.001); // 85/95
        assert!((result.language_accuracy() - 0.947368).abs() < 0.001); // 90/95
    }
}
