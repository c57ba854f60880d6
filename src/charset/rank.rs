//! Candidate ranking.

use std::cmp::Reverse;

use crate::matches::Match;

/// A scored profile awaiting ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub encoding: &'static str,
    pub language: Option<&'static str>,
    pub confidence: u8,
    /// Position of the profile in the preference order.
    pub preference: usize,
    pub hinted: bool,
}

impl Candidate {
    /// Confidence first; the hint only breaks ties, then preference order.
    fn sort_key(&self) -> (Reverse<u8>, Reverse<bool>, usize) {
        (Reverse(self.confidence), Reverse(self.hinted), self.preference)
    }
}

/// Order candidates best first and turn them into matches.
///
/// Zero-confidence candidates are dropped; an encoding reported twice keeps
/// only its best entry.
pub fn rank(mut candidates: Vec<Candidate>) -> Vec<Match> {
    candidates.retain(|c| c.confidence > 0);
    candidates.sort_by_key(Candidate::sort_key);

    let mut ranked: Vec<Match> = Vec::with_capacity(candidates.len());
    for c in candidates {
        if ranked.iter().any(|m| m.encoding() == Some(c.encoding)) {
            continue;
        }
        ranked.push(Match::text(c.encoding, c.language, c.confidence));
    }
    ranked
}
