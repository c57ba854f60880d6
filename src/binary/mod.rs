//! Binary/text classification.
//!
//! A signature engine labels the buffer; the classifier turns the label into
//! a binary verdict. The built-in engine is a small magic-number database with
//! a text sniffer as its fallback.

pub mod classifier;
pub mod rules;
pub mod signatures;
pub mod text;

pub use classifier::{BinaryCategory, BinaryKind, binary_kind, classify};
pub use signatures::{PatternMatcher, SignatureDatabase, SignatureEngine, SignatureRule};
