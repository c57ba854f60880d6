//! Charset detection.
//!
//! A byte-order mark settles the question outright. Otherwise every profile
//! scores the buffer on its own evidence (validity for the Unicode and CJK
//! encodings, escape sequences for ISO-2022, trigram statistics for the
//! single-byte charsets) and the scores are ranked.

pub mod bom;
pub mod data;
pub mod iso2022;
pub mod mbcs;
pub mod ngram;
pub mod profiles;
pub mod rank;
pub mod unicode;

pub use bom::{BOM_TABLE, sniff_bom};
pub use profiles::{C1Policy, CharsetProfile, CharsetProfileSet, ProfileKind, Recognizer};
pub use rank::{Candidate, rank};

use crate::config::SampleSize;
use crate::encoding::Hint;
use crate::filter;
use crate::matches::{MAX_CONFIDENCE, Match};
use profiles::ScoringInput;

/// Scores a buffer against every charset profile.
#[derive(Debug, Clone)]
pub struct CharsetDetector {
    profiles: &'static CharsetProfileSet,
    strip_tags: bool,
    sample_size: SampleSize,
}

impl CharsetDetector {
    /// Create a detector over `profiles` with tag stripping off and the
    /// default statistics window.
    pub fn new(profiles: &'static CharsetProfileSet) -> Self {
        Self {
            profiles,
            strip_tags: false,
            sample_size: SampleSize::default(),
        }
    }

    /// Strip markup before scoring.
    pub fn strip_tags(&mut self, enabled: bool) -> &mut Self {
        self.strip_tags = enabled;
        self
    }

    /// Set the statistics window.
    pub fn sample_size(&mut self, sample_size: SampleSize) -> &mut Self {
        self.sample_size = sample_size;
        self
    }

    /// All viable candidates for `data`, best first.
    ///
    /// Empty input yields no candidates. A hint only reorders candidates the
    /// bytes already support.
    pub fn detect(&self, data: &[u8], hint: Option<&Hint>) -> Vec<Match> {
        if data.is_empty() {
            return Vec::new();
        }

        if let Some((encoding, _)) = sniff_bom(data) {
            tracing::debug!(encoding, "byte-order mark found");
            return vec![Match::text(encoding, None, MAX_CONFIDENCE)];
        }

        let filtered = filter::strip(data, self.strip_tags);
        let window = self.sample_size.window(filtered.bytes());
        let input = ScoringInput {
            raw: data,
            filtered: filtered.bytes(),
            window,
            stats: filtered.stats(self.sample_size),
        };

        let hinted_positions = hint.map(|h| self.profiles.hinted(h)).unwrap_or_default();
        let is_hinted = |position: usize| hinted_positions.contains(&position);
        let (hinted, others): (Vec<_>, Vec<_>) = self
            .profiles
            .profiles()
            .iter()
            .enumerate()
            .partition(|&(position, _)| is_hinted(position));

        let mut candidates = Vec::with_capacity(self.profiles.len());
        for (preference, profile) in hinted.iter().chain(&others).copied() {
            if !profile.c1_policy().admits(&input.stats) {
                tracing::trace!(profile = profile.name(), "skipped by C1 policy");
                continue;
            }
            let score = profile.score(&input);
            tracing::trace!(
                profile = profile.name(),
                confidence = score.confidence,
                language = score.language,
                "profile scored"
            );
            candidates.push(Candidate {
                encoding: profile.name(),
                language: score.language,
                confidence: score.confidence,
                preference,
                hinted: is_hinted(preference),
            });
        }

        let ranked = rank(candidates);
        tracing::debug!(
            candidates = ranked.len(),
            stripped = filtered.was_stripped(),
            hint = hint.map(Hint::label),
            best = ranked.first().and_then(Match::encoding),
            "charset detection finished"
        );
        ranked
    }

    /// The best candidate, or `None` when no profile admits the input.
    pub fn detect_best(&self, data: &[u8], hint: Option<&Hint>) -> Option<Match> {
        self.detect(data, hint).into_iter().next()
    }
}
