//! Trigram language models for single-byte charsets.
//!
//! The buffer is folded through a per-charset byte map (letters to their
//! lowercase form, everything else to a space, runs of spaces collapsed) and
//! every resulting trigram is looked up in each language's table. The share
//! of hits is the confidence.

use encoding_rs::Encoding;

use crate::error::LoadError;

const SPACE: u8 = 0x20;

/// Hit ratio above which a language is considered certain.
const CERTAIN_RATIO: f64 = 0.33;
const CERTAIN_CONFIDENCE: u8 = 98;

/// Trigram table for one language in one charset.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    language: &'static str,
    trigrams: Vec<u32>,
}

impl LanguageModel {
    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn len(&self) -> usize {
        self.trigrams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trigrams.is_empty()
    }

    fn contains(&self, ngram: u32) -> bool {
        self.trigrams.binary_search(&ngram).is_ok()
    }
}

/// Byte map plus the language tables of one single-byte charset.
#[derive(Debug, Clone)]
pub struct NgramModel {
    byte_map: [u8; 256],
    languages: Vec<LanguageModel>,
}

/// Lowercase form of `c` encoded as a single byte of `encoding`.
fn lowercase_byte(encoding: &'static Encoding, c: char) -> Option<u8> {
    let mut lower = c.to_lowercase();
    let lc = match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    };
    let mut buf = [0u8; 4];
    let (bytes, _, had_errors) = encoding.encode(lc.encode_utf8(&mut buf));
    match *bytes {
        [b] if !had_errors => Some(b),
        _ => None,
    }
}

/// Build the folding map for `encoding`: letters map to the byte of their
/// lowercase form, every other byte to a space.
pub fn byte_map(encoding: &'static Encoding) -> [u8; 256] {
    let mut map = [SPACE; 256];
    for (b, slot) in (0..=u8::MAX).zip(map.iter_mut()) {
        let byte = [b];
        let (decoded, had_errors) = encoding.decode_without_bom_handling(&byte);
        if had_errors {
            continue;
        }
        if let Some(c) = decoded.chars().next().filter(|c| c.is_alphabetic()) {
            *slot = lowercase_byte(encoding, c).unwrap_or(b);
        }
    }
    map
}

impl NgramModel {
    /// Encode the readable trigram tables into `encoding`.
    ///
    /// With `visual` set every trigram is reversed, for charsets that store
    /// right-to-left text in display order.
    pub fn build(
        profile: &str,
        encoding: &'static Encoding,
        tables: &[(&'static str, &[&str])],
        visual: bool,
    ) -> Result<Self, LoadError> {
        let byte_map = byte_map(encoding);
        let mut languages = Vec::with_capacity(tables.len());

        for &(language, entries) in tables {
            let table = format!("{profile} trigrams [{language}]");
            let mut trigrams = Vec::with_capacity(entries.len());

            for entry in entries {
                if entry.chars().count() != 3
                    || !entry.chars().all(|c| c == ' ' || c.is_alphabetic())
                {
                    return Err(LoadError::new(&table, format!("malformed trigram {entry:?}")));
                }
                let (bytes, _, had_errors) = encoding.encode(entry);
                if had_errors || bytes.len() != 3 {
                    return Err(LoadError::new(
                        &table,
                        format!("trigram {entry:?} is not encodable in {}", encoding.name()),
                    ));
                }
                if bytes.iter().any(|&b| byte_map[usize::from(b)] != b) {
                    return Err(LoadError::new(
                        &table,
                        format!("trigram {entry:?} is not in folded form"),
                    ));
                }

                let mut packed = [bytes[0], bytes[1], bytes[2]];
                if visual {
                    packed.reverse();
                }
                trigrams.push(u32::from_be_bytes([0, packed[0], packed[1], packed[2]]));
            }

            if trigrams.is_empty() {
                return Err(LoadError::new(&table, "empty trigram table"));
            }
            trigrams.sort_unstable();
            trigrams.dedup();
            languages.push(LanguageModel {
                language,
                trigrams,
            });
        }

        Ok(Self {
            byte_map,
            languages,
        })
    }

    pub fn languages(&self) -> &[LanguageModel] {
        &self.languages
    }

    /// Folded byte for `b`.
    pub fn fold(&self, b: u8) -> u8 {
        self.byte_map[usize::from(b)]
    }

    /// Confidence for every language of this charset, in table order.
    pub fn language_confidences(&self, data: &[u8]) -> Vec<(&'static str, u8)> {
        let mut hits = vec![0usize; self.languages.len()];
        let mut total = 0usize;
        let mut ngram = 0u32;

        let mut add = |b: u8| {
            ngram = ((ngram << 8) | u32::from(b)) & 0x00FF_FFFF;
            total += 1;
            for (count, model) in hits.iter_mut().zip(&self.languages) {
                if model.contains(ngram) {
                    *count += 1;
                }
            }
        };

        let mut ignore_space = false;
        for &b in data {
            let folded = self.fold(b);
            if !(folded == SPACE && ignore_space) {
                add(folded);
            }
            ignore_space = folded == SPACE;
        }
        add(SPACE);

        self.languages
            .iter()
            .zip(hits)
            .map(|(model, hits)| {
                let ratio = hits as f64 / total as f64;
                let confidence = if ratio > CERTAIN_RATIO {
                    CERTAIN_CONFIDENCE
                } else {
                    (ratio * 300.0) as u8
                };
                (model.language, confidence)
            })
            .collect()
    }

    /// Best-scoring language and its confidence. Ties go to the language
    /// listed first.
    pub fn best(&self, data: &[u8]) -> Option<(&'static str, u8)> {
        self.language_confidences(data)
            .into_iter()
            .fold(None, |best, (language, confidence)| match best {
                Some((_, top)) if top >= confidence => best,
                _ => Some((language, confidence)),
            })
    }
}
