use std::fmt;

use super::signatures::SignatureEngine;
use crate::error::{DetectError, Result};

/// Why a buffer was classified as binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryKind {
    Library,
    Bundle,
    Archive,
    Executable,
    Data,
}

impl fmt::Display for BinaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryKind::Library => "library",
            BinaryKind::Bundle => "bundle",
            BinaryKind::Archive => "archive",
            BinaryKind::Executable => "executable",
            BinaryKind::Data => "data",
        };
        f.write_str(name)
    }
}

/// A binary verdict together with the signature label that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryCategory {
    pub kind: BinaryKind,
    pub label: String,
}

impl fmt::Display for BinaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.label)
    }
}

/// Map a signature label to a binary kind.
///
/// "executable" only counts when the label does not also say "text", so
/// shell scripts and other text executables stay text.
pub fn binary_kind(label: &str) -> Option<BinaryKind> {
    if label.contains("library") {
        Some(BinaryKind::Library)
    } else if label.contains("bundle") {
        Some(BinaryKind::Bundle)
    } else if label.contains("archive") {
        Some(BinaryKind::Archive)
    } else if !label.contains("text") && label.contains("executable") {
        Some(BinaryKind::Executable)
    } else if label.contains("data") {
        Some(BinaryKind::Data)
    } else {
        None
    }
}

/// Classify `data` as binary (`Some`) or text (`None`).
///
/// An engine that cannot describe the buffer is an error, never "text".
pub fn classify(engine: &dyn SignatureEngine, data: &[u8]) -> Result<Option<BinaryCategory>> {
    let label = engine.describe(data).ok_or_else(|| {
        DetectError::Classification(format!(
            "signature engine produced no verdict for {} bytes",
            data.len()
        ))
    })?;

    let category = binary_kind(&label).map(|kind| BinaryCategory {
        kind,
        label: label.into_owned(),
    });
    tracing::trace!(?category, "binary classification");
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::SignatureDatabase;
    use std::borrow::Cow;

    #[derive(Debug)]
    struct Silent;

    impl SignatureEngine for Silent {
        fn describe(&self, _data: &[u8]) -> Option<Cow<'static, str>> {
            None
        }
    }

    #[test]
    fn test_label_rules() {
        assert_eq!(binary_kind("current ar archive (static library)"), Some(BinaryKind::Library));
        assert_eq!(binary_kind("Mach-O bundle"), Some(BinaryKind::Bundle));
        assert_eq!(binary_kind("Zip archive data"), Some(BinaryKind::Archive));
        assert_eq!(binary_kind("MS-DOS executable"), Some(BinaryKind::Executable));
        assert_eq!(binary_kind("PNG image data"), Some(BinaryKind::Data));
        assert_eq!(binary_kind("script text executable"), None);
        assert_eq!(binary_kind("ASCII text"), None);
        assert_eq!(binary_kind("PDF document"), None);
    }

    #[test]
    fn test_classify_with_builtin() {
        let db = SignatureDatabase::builtin().unwrap();
        let category = classify(&db, b"\x1f\x8b\x08\x00\x00\x00\x00\x00").unwrap().unwrap();
        assert_eq!(category.kind, BinaryKind::Data);
        assert_eq!(category.label, "gzip compressed data");

        assert_eq!(classify(&db, b"just some words").unwrap(), None);
        assert_eq!(classify(&db, b"").unwrap(), None);
    }

    #[test]
    fn test_no_verdict_is_error() {
        let err = classify(&Silent, b"anything").unwrap_err();
        assert!(matches!(err, DetectError::Classification(_)));
    }

    #[test]
    fn test_control_bytes_are_data() {
        let db = SignatureDatabase::builtin().unwrap();
        let category = classify(&db, b"abc\x00\x01\x02def").unwrap().unwrap();
        assert_eq!(category.kind, BinaryKind::Data);
        assert_eq!(category.to_string(), "data: data");
    }
}
