//! Encoding-name handling and UTF-8 helpers shared by the detectors.

use encoding_rs::Encoding;
use simdutf8::basic::from_utf8;

use crate::error::{DetectError, Result};

/// Check if the given bytes are valid UTF-8.
///
/// Uses SIMD-accelerated validation for performance.
pub fn is_utf8(data: &[u8]) -> bool {
    from_utf8(data).is_ok()
}

/// Check if the data starts with a UTF-8 BOM (Byte Order Mark).
///
/// The UTF-8 BOM is the byte sequence: EF BB BF
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.starts_with(&[0xEF, 0xBB, 0xBF])
}

/// Resolve an encoding label to its `encoding_rs` encoding.
///
/// Follows the WHATWG label table, so `latin1` and `iso-8859-1` resolve to
/// windows-1252 and `iso-8859-9` to windows-1254.
pub fn resolve_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label_no_replacement(label.as_bytes())
}

/// A validated declared-encoding hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    label: String,
    encoding: Option<&'static Encoding>,
}

impl Hint {
    /// Validate a caller-supplied encoding name.
    ///
    /// Unknown names are accepted (they simply never match a profile); empty
    /// names or names with whitespace or control characters are rejected.
    pub fn parse(label: &str) -> Result<Self> {
        if label.is_empty() {
            return Err(DetectError::InvalidInput(
                "encoding hint must not be empty".to_string(),
            ));
        }
        if !label.chars().all(|c| c.is_ascii_graphic()) {
            return Err(DetectError::InvalidInput(format!(
                "encoding hint {label:?} must be printable ASCII without spaces"
            )));
        }

        Ok(Self {
            label: label.to_ascii_lowercase(),
            encoding: resolve_label(label),
        })
    }

    /// Lowercased label as given by the caller.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The `encoding_rs` encoding the label resolves to, if any.
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }
}
