//! Scorers for the stateful 7-bit ISO-2022 encodings.

const ESC: u8 = 0x1B;
const SO: u8 = 0x0E;
const SI: u8 = 0x0F;

/// Hits plus shifts below this cost 10 points each.
const MIN_EVIDENCE: i64 = 5;

/// Which ISO-2022 variant, and so which escape sequences count as hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Iso2022Scheme {
    Jp,
    Kr,
    Cn,
}

const JP_ESCAPES: &[&[u8]] = &[
    b"\x1b$(C", // KS X 1001
    b"\x1b$(D", // JIS X 0212
    b"\x1b$@",  // JIS C 6226
    b"\x1b$A",  // GB 2312
    b"\x1b$B",  // JIS X 0208
    b"\x1b(B",  // ASCII
    b"\x1b(I",  // JIS X 0201 katakana
    b"\x1b(J",  // JIS X 0201 roman
    b"\x1b.A",  // ISO-8859-1 upper half
    b"\x1b.F",  // ISO-8859-7 upper half
    b"\x1bN",   // single shift 2
];

const KR_ESCAPES: &[&[u8]] = &[b"\x1b$)C"];

const CN_ESCAPES: &[&[u8]] = &[
    b"\x1b$)A", // GB 2312
    b"\x1b$)G", // CNS 11643 plane 1
    b"\x1b$*H", // CNS 11643 plane 2
    b"\x1b$)E", // ISO-IR-165
    b"\x1b$+I", // CNS 11643 plane 3
    b"\x1b$+J",
    b"\x1b$+K",
    b"\x1b$+L",
    b"\x1b$+M", // CNS 11643 plane 7
    b"\x1bN",
    b"\x1bO",
];

impl Iso2022Scheme {
    pub fn escapes(&self) -> &'static [&'static [u8]] {
        match self {
            Iso2022Scheme::Jp => JP_ESCAPES,
            Iso2022Scheme::Kr => KR_ESCAPES,
            Iso2022Scheme::Cn => CN_ESCAPES,
        }
    }

    /// Score `data` by its escape sequences: recognised escapes are hits,
    /// other ESC bytes are misses, SO/SI count as supporting evidence.
    pub fn confidence(&self, data: &[u8]) -> u8 {
        let escapes = self.escapes();
        let mut hits: i64 = 0;
        let mut misses: i64 = 0;
        let mut shifts: i64 = 0;

        let mut i = 0;
        while i < data.len() {
            match data[i] {
                ESC => match escapes.iter().find(|seq| data[i..].starts_with(seq)) {
                    Some(seq) => {
                        hits += 1;
                        i += seq.len();
                        continue;
                    }
                    None => misses += 1,
                },
                SO | SI => shifts += 1,
                _ => {}
            }
            i += 1;
        }

        if hits == 0 {
            return 0;
        }

        let mut quality = (100 * hits - 100 * misses) / (hits + misses);
        if hits + shifts < MIN_EVIDENCE {
            quality -= (MIN_EVIDENCE - (hits + shifts)) * 10;
        }
        quality.clamp(0, 100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso2022_jp() {
        let data = b"\x1b$B$3$s$K$A$O\x1b(B hello \x1b$BF|K\\\x1b(B \x1b$B8l\x1b(B";
        // Six hits, no misses.
        assert_eq!(Iso2022Scheme::Jp.confidence(data), 100);
        assert_eq!(Iso2022Scheme::Kr.confidence(data), 0);
    }

    #[test]
    fn test_large_input_does_not_overflow() {
        let data = b"\x1b(B".repeat(22_000_000);
        assert_eq!(Iso2022Scheme::Jp.confidence(&data), 100);
    }

    #[test]
    fn test_iso2022_kr_shifts() {
        let data = b"\x1b$)C\x0e\x30\x21\x0f abc \x0e\x33\x5d\x0f";
        // One hit and four shifts.
        assert_eq!(Iso2022Scheme::Kr.confidence(data), 100);
        assert_eq!(Iso2022Scheme::Jp.confidence(data), 0);
    }

    #[test]
    fn test_sparse_evidence_penalised() {
        // Two hits, one unknown escape.
        let data = b"\x1b$B$3\x1b(B and \x1b[0m";
        // hits=2, misses=1: 33, minus 30 for missing evidence.
        assert_eq!(Iso2022Scheme::Jp.confidence(data), 3);
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(Iso2022Scheme::Cn.confidence(b"no escapes here"), 0);
        assert_eq!(Iso2022Scheme::Cn.confidence(b""), 0);
    }
}
