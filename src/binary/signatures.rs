//! Signature database: ordered byte-pattern rules mapped to content labels.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::bytes::Regex;

use super::rules::{BUILTIN_RULES, RuleSpec};
use super::text;
use crate::error::LoadError;

/// Anything that can describe a byte buffer with a content label.
///
/// Labels follow libmagic's vocabulary ("ELF executable", "Zip archive data",
/// "ASCII text", ...). The binary classifier only inspects the label text.
pub trait SignatureEngine: fmt::Debug + Send + Sync {
    /// Describe `data`, or return `None` if no verdict can be produced.
    fn describe(&self, data: &[u8]) -> Option<Cow<'static, str>>;
}

/// How a rule recognises its content.
pub enum PatternMatcher {
    /// Fixed bytes at a fixed offset.
    Bytes {
        offset: usize,
        magic: &'static [u8],
    },
    /// A byte-oriented regular expression, usually anchored with `\A`.
    Regex(Regex),
    /// A structural check too involved for a plain pattern.
    Probe(fn(&[u8]) -> bool),
}

impl PatternMatcher {
    pub fn matches(&self, data: &[u8]) -> bool {
        match self {
            PatternMatcher::Bytes { offset, magic } => data
                .get(*offset..)
                .is_some_and(|rest| rest.starts_with(magic)),
            PatternMatcher::Regex(re) => re.is_match(data),
            PatternMatcher::Probe(probe) => probe(data),
        }
    }
}

impl fmt::Debug for PatternMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternMatcher::Bytes { offset, magic } => f
                .debug_struct("Bytes")
                .field("offset", offset)
                .field("magic", magic)
                .finish(),
            PatternMatcher::Regex(re) => f.debug_tuple("Regex").field(&re.as_str()).finish(),
            PatternMatcher::Probe(_) => f.write_str("Probe"),
        }
    }
}

/// A single signature: a matcher and the label it assigns.
#[derive(Debug)]
pub struct SignatureRule {
    matcher: PatternMatcher,
    label: &'static str,
}

impl SignatureRule {
    pub fn new(matcher: PatternMatcher, label: &'static str) -> Self {
        Self { matcher, label }
    }

    /// Rule matching fixed bytes at the start of the buffer.
    pub fn prefix(magic: &'static [u8], label: &'static str) -> Self {
        Self::new(PatternMatcher::Bytes { offset: 0, magic }, label)
    }

    /// Rule matching a byte regex.
    pub fn regex(pattern: &str, label: &'static str) -> Result<Self, LoadError> {
        let re = Regex::new(pattern)
            .map_err(|e| LoadError::new("signature rules", format!("rule {label:?}: {e}")))?;
        Ok(Self::new(PatternMatcher::Regex(re), label))
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        self.matcher.matches(data)
    }
}

/// Ordered rule list; the first matching rule wins. When no rule matches the
/// buffer is sniffed for text and labelled "data" if it is not.
#[derive(Debug)]
pub struct SignatureDatabase {
    rules: Vec<SignatureRule>,
}

impl SignatureDatabase {
    /// Create a database from explicit rules.
    pub fn new(rules: Vec<SignatureRule>) -> Self {
        Self { rules }
    }

    /// Compile the built-in rule table.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_specs(BUILTIN_RULES)
    }

    pub(crate) fn from_specs(specs: &[(RuleSpec, &'static str)]) -> Result<Self, LoadError> {
        let rules = specs
            .iter()
            .map(|&(spec, label)| match spec {
                RuleSpec::Bytes(offset, magic) => Ok(SignatureRule::new(
                    PatternMatcher::Bytes { offset, magic },
                    label,
                )),
                RuleSpec::Regex(pattern) => SignatureRule::regex(pattern, label),
                RuleSpec::Probe(probe) => Ok(SignatureRule::new(PatternMatcher::Probe(probe), label)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        if rules.is_empty() {
            return Err(LoadError::new("signature rules", "rule table is empty"));
        }
        Ok(Self::new(rules))
    }

    /// Shared built-in database, compiled once per process.
    pub fn shared() -> Result<Arc<SignatureDatabase>, LoadError> {
        static BUILTIN: LazyLock<Result<Arc<SignatureDatabase>, LoadError>> =
            LazyLock::new(|| {
                let db = SignatureDatabase::builtin()?;
                tracing::debug!(rules = db.len(), "signature database loaded");
                Ok(Arc::new(db))
            });
        (*BUILTIN).clone()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule matching `data`, if any.
    pub fn find(&self, data: &[u8]) -> Option<&SignatureRule> {
        self.rules.iter().find(|rule| rule.matches(data))
    }
}

impl SignatureEngine for SignatureDatabase {
    fn describe(&self, data: &[u8]) -> Option<Cow<'static, str>> {
        if let Some(rule) = self.find(data) {
            return Some(Cow::Borrowed(rule.label()));
        }
        Some(Cow::Borrowed(text::describe(data).unwrap_or("data")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(data: &[u8]) -> String {
        SignatureDatabase::shared()
            .unwrap()
            .describe(data)
            .unwrap()
            .into_owned()
    }

    #[test]
    fn test_builtin_loads() {
        let db = SignatureDatabase::builtin().unwrap();
        assert!(db.len() > 20);
        assert!(!db.is_empty());
    }

    #[test]
    fn test_shared_is_singleton() {
        let a = SignatureDatabase::shared().unwrap();
        let b = SignatureDatabase::shared().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_offset_matcher() {
        let m = PatternMatcher::Bytes {
            offset: 2,
            magic: b"xy",
        };
        assert!(m.matches(b"abxyz"));
        assert!(!m.matches(b"axy"));
        assert!(!m.matches(b"a"));
    }

    #[test]
    fn test_bad_regex_is_load_error() {
        let err = SignatureRule::regex("(unclosed", "broken").unwrap_err();
        assert_eq!(err.table(), "signature rules");
    }

    #[test]
    fn test_empty_table_is_load_error() {
        assert!(SignatureDatabase::from_specs(&[]).is_err());
    }

    #[test]
    fn test_known_formats() {
        assert!(describe(b"\x7fELF\x02\x01\x01\x00\x00\x00").contains("ELF"));
        assert!(describe(b"PK\x03\x04\x14\x00\x00\x00").contains("Zip archive"));
        assert!(describe(b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR").contains("PNG"));
        assert!(describe(b"!<arch>\nfoo.o/").contains("archive"));
        assert!(describe(b"%PDF-1.7\n").contains("PDF"));
    }

    #[test]
    fn test_shebang_is_text_executable() {
        let label = describe(b"#!/bin/sh\necho hi\n");
        assert!(label.contains("text"));
        assert!(label.contains("executable"));
    }

    #[test]
    fn test_fallback_labels() {
        assert_eq!(describe(b"plain words"), "ASCII text");
        assert_eq!(describe(b"\x00\x01\x02\x03"), "data");
        assert_eq!(describe(b""), "empty");
    }
}
