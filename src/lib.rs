//! charset-nose: binary/text classification and charset detection
//!
//! Decides whether a byte buffer is binary content or text and, for text,
//! which character encodings (and natural languages) are most likely, each
//! with a confidence from 0 to 100. Useful in front of any pipeline that
//! cannot trust declared encoding metadata.
//!
//! # Quick Start
//!
//! ```
//! use charset_nose::{EncodingDetector, Match};
//!
//! let detector = EncodingDetector::new().unwrap();
//!
//! match detector.detect("Καλημέρα κόσμε, τι κάνεις;".as_bytes(), None).unwrap() {
//!     Match::Binary => println!("binary"),
//!     Match::Text(text) => println!("{} ({}%)", text.encoding, text.confidence),
//! }
//! ```
//!
//! # Configuration
//!
//! Sessions are configured with chained setters and can be cloned freely:
//!
//! ```
//! use charset_nose::{EncodingDetector, SampleSize};
//!
//! let mut detector = EncodingDetector::new().unwrap();
//! detector.set_strip_tags(true).sample_size(SampleSize::All).unwrap();
//! detector.declared_encoding("iso-8859-2").unwrap();
//!
//! let candidates = detector.detect_all(b"<p>Dobr\xfd den</p>", None).unwrap();
//! assert!(!candidates.is_empty());
//! ```
//!
//! # How detection works
//!
//! 1. A signature database labels the raw bytes (executables, archives,
//!    compressed and media formats, otherwise a text sniff). Binary labels
//!    short-circuit to [`Match::Binary`].
//! 2. A byte-order mark, if present, decides the encoding outright.
//! 3. Otherwise markup is optionally stripped and every charset profile
//!    scores the bytes: validity rules for UTF-8/16/32 and the CJK
//!    encodings, escape sequences for ISO-2022, and trigram language models
//!    for the single-byte charsets.
//! 4. Candidates are ranked by confidence, a declared encoding breaking ties,
//!    then by a fixed preference order.

pub mod benchmark;
pub mod binary;
pub mod charset;
mod config;
mod detector;
mod encoding;
mod error;
pub mod filter;
mod matches;

pub use config::{DEFAULT_SAMPLE_BYTES, DetectorConfig, SampleSize};
pub use detector::EncodingDetector;
pub use error::{DetectError, LoadError, Result};
pub use matches::{MAX_CONFIDENCE, Match, MatchKind, TextMatch};

// Re-export for advanced usage
pub use binary::{BinaryCategory, BinaryKind, SignatureDatabase, SignatureEngine};
pub use charset::{CharsetDetector, CharsetProfileSet};
pub use encoding::{Hint, is_utf8, resolve_label};
