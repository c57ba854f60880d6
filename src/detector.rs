//! Detection session.

use std::sync::Arc;

use crate::binary::{self, BinaryCategory, SignatureDatabase, SignatureEngine};
use crate::charset::{CharsetDetector, CharsetProfileSet};
use crate::config::{DetectorConfig, SampleSize};
use crate::encoding::Hint;
use crate::error::{DetectError, Result};
use crate::matches::Match;

/// Binary/text and charset detector.
///
/// A session holds its own configuration and shares the process-wide
/// reference data, so cloning one is cheap and clones never affect each
/// other.
///
/// # Example
///
/// ```
/// use charset_nose::{EncodingDetector, Match};
///
/// let detector = EncodingDetector::new().unwrap();
/// let found = detector.detect("Grüße aus Köln".as_bytes(), None).unwrap();
/// assert_eq!(found.encoding(), Some("UTF-8"));
///
/// let found = detector.detect(b"\x7fELF\x02\x01\x01\x00", None).unwrap();
/// assert_eq!(found, Match::Binary);
/// ```
#[derive(Debug, Clone)]
pub struct EncodingDetector {
    config: DetectorConfig,
    profiles: &'static CharsetProfileSet,
    signatures: Arc<dyn SignatureEngine>,
}

impl EncodingDetector {
    /// Create a session with default settings and the built-in signature
    /// database.
    ///
    /// Fails with [`DetectError::Load`] if the reference data cannot be built.
    pub fn new() -> Result<Self> {
        let profiles = CharsetProfileSet::shared()?;
        let signatures: Arc<dyn SignatureEngine> = SignatureDatabase::shared()?;
        Ok(Self {
            config: DetectorConfig::new(),
            profiles,
            signatures,
        })
    }

    /// Every encoding name `detect` can report, in preference order.
    pub fn supported_encodings() -> Result<&'static [&'static str]> {
        Ok(CharsetProfileSet::shared()?.names())
    }

    /// Replace the signature engine used for the binary check.
    pub fn with_signatures(&mut self, engine: Arc<dyn SignatureEngine>) -> &mut Self {
        self.signatures = engine;
        self
    }

    /// Whether markup is stripped before charset scoring.
    pub fn strip_tags(&self) -> bool {
        self.config.strip_tags
    }

    /// Enable or disable markup stripping.
    pub fn set_strip_tags(&mut self, enabled: bool) -> &mut Self {
        self.config.strip_tags = enabled;
        self
    }

    /// Set the encoding the caller believes the input to be in. A hint passed
    /// to `detect` takes precedence.
    pub fn declared_encoding(&mut self, encoding: &str) -> Result<&mut Self> {
        let hint = Hint::parse(encoding)?;
        self.config.declared_encoding = Some(hint.label().to_string());
        Ok(self)
    }

    pub fn clear_declared_encoding(&mut self) -> &mut Self {
        self.config.declared_encoding = None;
        self
    }

    /// Set how many bytes the statistical scorers examine.
    pub fn sample_size(&mut self, sample_size: SampleSize) -> Result<&mut Self> {
        if sample_size == SampleSize::Bytes(0) {
            return Err(DetectError::InvalidConfig(
                "sample size must be at least one byte".to_string(),
            ));
        }
        self.config.sample_size = sample_size;
        Ok(self)
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Binary category of `data`, or `None` if it is text.
    pub fn classify(&self, data: &[u8]) -> Result<Option<BinaryCategory>> {
        binary::classify(self.signatures.as_ref(), data)
    }

    /// Most likely interpretation of `data`.
    ///
    /// Binary content short-circuits to [`Match::Binary`]. Text with no viable
    /// encoding, including empty input, is [`DetectError::NoCandidate`].
    pub fn detect(&self, data: &[u8], hint: Option<&str>) -> Result<Match> {
        let hint = self.resolve_hint(hint)?;
        if let Some(category) = self.classify(data)? {
            tracing::debug!(%category, "binary content");
            return Ok(Match::Binary);
        }
        self.charset_detector()
            .detect_best(data, hint.as_ref())
            .ok_or(DetectError::NoCandidate)
    }

    /// Every viable interpretation of `data`, best first.
    ///
    /// Binary content yields `[Match::Binary]`; empty input an empty list.
    pub fn detect_all(&self, data: &[u8], hint: Option<&str>) -> Result<Vec<Match>> {
        let hint = self.resolve_hint(hint)?;
        if let Some(category) = self.classify(data)? {
            tracing::debug!(%category, "binary content");
            return Ok(vec![Match::Binary]);
        }
        Ok(self.charset_detector().detect(data, hint.as_ref()))
    }

    fn resolve_hint(&self, hint: Option<&str>) -> Result<Option<Hint>> {
        hint.or(self.config.declared_encoding.as_deref())
            .map(Hint::parse)
            .transpose()
    }

    fn charset_detector(&self) -> CharsetDetector {
        let mut detector = CharsetDetector::new(self.profiles);
        detector
            .strip_tags(self.config.strip_tags)
            .sample_size(self.config.sample_size);
        detector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[derive(Debug)]
    struct AlwaysArchive;

    impl SignatureEngine for AlwaysArchive {
        fn describe(&self, _data: &[u8]) -> Option<Cow<'static, str>> {
            Some(Cow::Borrowed("test archive data"))
        }
    }

    #[test]
    fn test_builder_setters() {
        let mut detector = EncodingDetector::new().unwrap();
        assert!(!detector.strip_tags());
        detector.set_strip_tags(true);
        assert!(detector.strip_tags());

        detector.declared_encoding("Shift_JIS").unwrap();
        assert_eq!(detector.config().declared_encoding.as_deref(), Some("shift_jis"));
        detector.clear_declared_encoding();
        assert_eq!(detector.config().declared_encoding, None);

        detector.sample_size(SampleSize::All).unwrap();
        assert_eq!(detector.config().sample_size, SampleSize::All);
    }

    #[test]
    fn test_invalid_settings() {
        let mut detector = EncodingDetector::new().unwrap();
        assert!(matches!(
            detector.sample_size(SampleSize::Bytes(0)),
            Err(DetectError::InvalidConfig(_))
        ));
        assert!(matches!(
            detector.declared_encoding("utf 8"),
            Err(DetectError::InvalidInput(_))
        ));
        assert_eq!(detector.config(), &DetectorConfig::new());
    }

    #[test]
    fn test_clones_are_independent() {
        let mut first = EncodingDetector::new().unwrap();
        let second = first.clone();
        first.set_strip_tags(true);
        assert!(first.strip_tags());
        assert!(!second.strip_tags());
    }

    #[test]
    fn test_empty_input() {
        let detector = EncodingDetector::new().unwrap();
        assert_eq!(detector.detect(b"", None), Err(DetectError::NoCandidate));
        assert_eq!(detector.detect_all(b"", None), Ok(Vec::new()));
    }

    #[test]
    fn test_hint_validated_first() {
        let detector = EncodingDetector::new().unwrap();
        let elf = b"\x7fELF\x02\x01\x01\x00";
        assert!(matches!(
            detector.detect(elf, Some("")),
            Err(DetectError::InvalidInput(_))
        ));
        assert!(matches!(
            detector.detect_all(b"text", Some("bad\nhint")),
            Err(DetectError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_custom_engine() {
        let mut detector = EncodingDetector::new().unwrap();
        detector.with_signatures(Arc::new(AlwaysArchive));
        assert_eq!(detector.detect(b"plain words", None), Ok(Match::Binary));
        let category = detector.classify(b"plain words").unwrap().unwrap();
        assert_eq!(category.kind, binary::BinaryKind::Archive);
    }

    #[test]
    fn test_declared_encoding_used_as_hint() {
        let text = b"The history of the world is the story of the people who made it.";
        let mut detector = EncodingDetector::new().unwrap();
        let plain = detector.detect_all(text, None).unwrap();
        let utf8_plain = plain.iter().position(|m| m.encoding() == Some("UTF-8")).unwrap();

        detector.declared_encoding("UTF-8").unwrap();
        let hinted = detector.detect_all(text, None).unwrap();
        let utf8_hinted = hinted.iter().position(|m| m.encoding() == Some("UTF-8")).unwrap();
        assert!(utf8_hinted <= utf8_plain);
        assert_eq!(hinted[utf8_hinted].confidence(), plain[utf8_plain].confidence());
    }

    #[test]
    fn test_supported_encodings_stable() {
        let first = EncodingDetector::supported_encodings().unwrap();
        let second = EncodingDetector::supported_encodings().unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.contains(&"windows-1252"));
        assert!(first.contains(&"ISO-2022-KR"));
    }
}
