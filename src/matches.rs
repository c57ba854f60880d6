use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Confidence reported for binary content and BOM-identified text.
pub const MAX_CONFIDENCE: u8 = 100;

/// Whether a match describes binary content or text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Content is binary; no encoding applies.
    Binary,
    /// Content is text in some encoding.
    Text,
}

impl MatchKind {
    /// Lowercase name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Binary => "binary",
            MatchKind::Text => "text",
        }
    }
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a detection.
///
/// Serializes as a map with `type`, `encoding` (text only), `language` (only
/// when known) and `confidence` keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Match {
    /// The buffer looks binary. Always carries full confidence.
    Binary,
    /// The buffer is text in the given encoding.
    Text(TextMatch),
}

/// A candidate encoding for text content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextMatch {
    /// Encoding name, as listed by `supported_encodings`.
    pub encoding: &'static str,
    /// ISO 639-1 language code, when the matched profile has one.
    pub language: Option<&'static str>,
    /// Confidence, 0..=100.
    pub confidence: u8,
}

impl TextMatch {
    /// Create a new text match. Empty languages are dropped and confidence is clamped.
    pub fn new(encoding: &'static str, language: Option<&'static str>, confidence: u8) -> Self {
        Self {
            encoding,
            language: language.filter(|l| !l.is_empty()),
            confidence: confidence.min(MAX_CONFIDENCE),
        }
    }
}

impl Match {
    /// Shorthand for a text match.
    pub fn text(encoding: &'static str, language: Option<&'static str>, confidence: u8) -> Self {
        Match::Text(TextMatch::new(encoding, language, confidence))
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            Match::Binary => MatchKind::Binary,
            Match::Text(_) => MatchKind::Text,
        }
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Match::Binary)
    }

    /// Encoding name, present only for text.
    pub fn encoding(&self) -> Option<&'static str> {
        match self {
            Match::Binary => None,
            Match::Text(m) => Some(m.encoding),
        }
    }

    /// Language code, present only for text matched by a language-bearing profile.
    pub fn language(&self) -> Option<&'static str> {
        match self {
            Match::Binary => None,
            Match::Text(m) => m.language,
        }
    }

    pub fn confidence(&self) -> u8 {
        match self {
            Match::Binary => MAX_CONFIDENCE,
            Match::Text(m) => m.confidence,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Match::Binary => write!(f, "binary ({MAX_CONFIDENCE}%)"),
            Match::Text(m) => {
                write!(f, "{}", m.encoding)?;
                if let Some(lang) = m.language {
                    write!(f, " [{lang}]")?;
                }
                write!(f, " ({}%)", m.confidence)
            }
        }
    }
}

impl Serialize for Match {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = match self {
            Match::Binary => 2,
            Match::Text(m) => 3 + usize::from(m.language.is_some()),
        };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("type", self.kind().as_str())?;
        if let Match::Text(m) = self {
            map.serialize_entry("encoding", m.encoding)?;
            if let Some(lang) = m.language {
                map.serialize_entry("language", lang)?;
            }
        }
        map.serialize_entry("confidence", &self.confidence())?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_invariants() {
        let m = Match::Binary;
        assert!(m.is_binary());
        assert_eq!(m.kind(), MatchKind::Binary);
        assert_eq!(m.encoding(), None);
        assert_eq!(m.language(), None);
        assert_eq!(m.confidence(), 100);
    }

    #[test]
    fn test_empty_language_is_dropped() {
        let m = Match::text("UTF-8", Some(""), 80);
        assert_eq!(m.language(), None);
        assert_eq!(m.encoding(), Some("UTF-8"));
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(TextMatch::new("UTF-8", None, 250).confidence, 100);
    }

    #[test]
    fn test_serialize_text() {
        let m = Match::text("ISO-8859-1", Some("fr"), 63);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "text", "encoding": "ISO-8859-1", "language": "fr", "confidence": 63})
        );
    }

    #[test]
    fn test_serialize_text_without_language() {
        let json = serde_json::to_value(Match::text("UTF-8", None, 15)).unwrap();
        assert!(json.get("language").is_none());
        assert_eq!(json["type"], "text");
    }

    #[test]
    fn test_serialize_binary() {
        let json = serde_json::to_value(Match::Binary).unwrap();
        assert_eq!(json, serde_json::json!({"type": "binary", "confidence": 100}));
    }

    #[test]
    fn test_display() {
        assert_eq!(Match::text("KOI8-R", Some("ru"), 42).to_string(), "KOI8-R [ru] (42%)");
        assert_eq!(Match::Binary.to_string(), "binary (100%)");
    }
}
