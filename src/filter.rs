//! Markup stripping and byte statistics for the statistical scorers.
//!
//! Stripping is quick and dirty: everything from `<` up to the next `>` is
//! dropped. If the input does not look like markup, or looks like nothing but
//! markup, the raw bytes are analysed instead.

use std::borrow::Cow;

use crate::config::SampleSize;

/// Fewer opened tags than this and the input is not treated as markup.
const MIN_OPEN_TAGS: usize = 5;

/// Raw inputs longer than this that strip down to less than
/// [`MIN_STRIPPED_LEN`] bytes are considered all markup.
const MARKUP_ONLY_RAW_LEN: usize = 600;
const MIN_STRIPPED_LEN: usize = 100;

/// Bytes that statistical analysis runs over.
#[derive(Debug, Clone)]
pub struct FilteredInput<'a> {
    bytes: Cow<'a, [u8]>,
    stripped: bool,
}

impl<'a> FilteredInput<'a> {
    /// The analysis buffer.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns true if markup was removed.
    pub fn was_stripped(&self) -> bool {
        self.stripped
    }

    /// Byte statistics over the sample window of the analysis buffer.
    pub fn stats(&self, sample_size: SampleSize) -> ByteStats {
        ByteStats::new(sample_size.window(&self.bytes))
    }
}

/// Apply the tag filter. The input is never modified; when stripping is
/// disabled or abandoned the result borrows it.
pub fn strip(data: &[u8], enabled: bool) -> FilteredInput<'_> {
    let raw = FilteredInput {
        bytes: Cow::Borrowed(data),
        stripped: false,
    };

    if !enabled || bytecount::count(data, b'<') < MIN_OPEN_TAGS {
        return raw;
    }

    let mut out = Vec::with_capacity(data.len());
    let mut in_markup = false;
    let mut open_tags = 0usize;
    let mut bad_tags = 0usize;

    for &b in data {
        if b == b'<' {
            if in_markup {
                bad_tags += 1;
            }
            in_markup = true;
            open_tags += 1;
        }

        if !in_markup {
            out.push(b);
        }

        if b == b'>' {
            in_markup = false;
        }
    }

    let abandon = open_tags < MIN_OPEN_TAGS
        || open_tags / 5 < bad_tags
        || (out.len() < MIN_STRIPPED_LEN && data.len() > MARKUP_ONLY_RAW_LEN)
        || out.is_empty();

    if abandon {
        tracing::trace!(open_tags, bad_tags, "markup stripping abandoned");
        return raw;
    }

    tracing::trace!(
        open_tags,
        bad_tags,
        removed = data.len() - out.len(),
        "markup stripped"
    );
    FilteredInput {
        bytes: Cow::Owned(out),
        stripped: true,
    }
}

/// Byte statistics for a window of the analysis buffer.
#[derive(Debug, Clone)]
pub struct ByteStats {
    c1_bytes: bool,
}

impl ByteStats {
    pub fn new(window: &[u8]) -> Self {
        Self {
            c1_bytes: window.iter().any(|b| (0x80..=0x9F).contains(b)),
        }
    }

    /// Returns true if any byte in 0x80..=0x9F occurs. Those are control
    /// characters in ISO-8859-x but printable in the windows-125x code pages.
    pub fn has_c1_bytes(&self) -> bool {
        self.c1_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &[u8] = b"<html><head><title>Greeting</title></head><body>\
        <p>Hello there, this paragraph holds the readable part of the page.</p>\
        <p>And a second paragraph so the text is long enough to keep.</p></body></html>";

    #[test]
    fn test_disabled_borrows_input() {
        let filtered = strip(MARKUP, false);
        assert!(!filtered.was_stripped());
        assert!(matches!(filtered.bytes, Cow::Borrowed(_)));
        assert_eq!(filtered.bytes(), MARKUP);
    }

    #[test]
    fn test_strips_markup() {
        let filtered = strip(MARKUP, true);
        assert!(filtered.was_stripped());
        let text = std::str::from_utf8(filtered.bytes()).unwrap();
        assert!(!text.contains('<'));
        assert!(!text.contains('>'));
        assert!(text.starts_with("GreetingHello there"));
        assert!(text.ends_with("long enough to keep."));
    }

    #[test]
    fn test_few_tags_abandons() {
        let data = b"<b>bold</b> and <i>italic</i> only";
        let filtered = strip(data, true);
        assert!(!filtered.was_stripped());
        assert_eq!(filtered.bytes(), data);
    }

    #[test]
    fn test_nested_brackets_abandon() {
        // Every '<' after the first opens inside markup.
        let data = b"a <<<<<<<<<< b > c";
        let filtered = strip(data, true);
        assert!(!filtered.was_stripped());
    }

    #[test]
    fn test_markup_only_abandons() {
        let mut data = Vec::new();
        for _ in 0..100 {
            data.extend_from_slice(b"<span class=\"x\">");
        }
        data.extend_from_slice(b"tiny");
        let filtered = strip(&data, true);
        assert!(!filtered.was_stripped());
        assert_eq!(filtered.bytes(), &data[..]);
    }

    #[test]
    fn test_input_untouched() {
        let data = MARKUP.to_vec();
        let _ = strip(&data, true);
        assert_eq!(data, MARKUP);
    }

    #[test]
    fn test_c1_stats() {
        assert!(!ByteStats::new(b"plain ascii").has_c1_bytes());
        assert!(!ByteStats::new(&[0xE9, 0xA0, 0xFF]).has_c1_bytes());
        assert!(ByteStats::new(&[b'a', 0x93, b'b', 0x94]).has_c1_bytes());
        assert!(ByteStats::new(&[0x9F]).has_c1_bytes());
    }

    #[test]
    fn test_stats_respect_sample_window() {
        let mut data = vec![b'a'; 10];
        data.push(0x85);
        let filtered = strip(&data, false);
        assert!(!filtered.stats(SampleSize::Bytes(10)).has_c1_bytes());
        assert!(filtered.stats(SampleSize::All).has_c1_bytes());
    }
}
