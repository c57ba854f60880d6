//! Multi-byte CJK scorers.
//!
//! Each scheme walks the buffer one character at a time, flagging byte
//! sequences the encoding cannot produce. Confidence comes from the share of
//! well-formed double-byte characters and how many of them are among the
//! most frequent characters of the language.

/// Character structure of a multi-byte encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MbcsScheme {
    ShiftJis,
    /// EUC-JP and EUC-KR share the EUC layout.
    Euc,
    Big5,
    Gb18030,
}

/// One decoded character: its byte value (bytes packed big-endian) and
/// whether the sequence is illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IteratedChar {
    value: u32,
    error: bool,
}

impl IteratedChar {
    fn single(b: u8) -> Self {
        Self {
            value: u32::from(b),
            error: false,
        }
    }

    fn illegal(value: u32) -> Self {
        Self { value, error: true }
    }
}

/// Character iterator over a byte buffer for one scheme.
struct CharIter<'a> {
    scheme: MbcsScheme,
    data: &'a [u8],
    pos: usize,
}

impl<'a> CharIter<'a> {
    fn new(scheme: MbcsScheme, data: &'a [u8]) -> Self {
        Self {
            scheme,
            data,
            pos: 0,
        }
    }

    /// Read the trail byte of a double-byte character. A missing trail byte
    /// makes the character illegal.
    fn double(&mut self, lead: u8, trail_ok: impl Fn(u8) -> bool) -> IteratedChar {
        match self.data.get(self.pos) {
            Some(&trail) => {
                self.pos += 1;
                let value = (u32::from(lead) << 8) | u32::from(trail);
                IteratedChar {
                    value,
                    error: !trail_ok(trail),
                }
            }
            None => IteratedChar::illegal(u32::from(lead)),
        }
    }

    fn next_shift_jis(&mut self, lead: u8) -> IteratedChar {
        match lead {
            0x00..=0x7F | 0xA1..=0xDF => IteratedChar::single(lead),
            0x81..=0x9F | 0xE0..=0xFC => {
                self.double(lead, |t| matches!(t, 0x40..=0x7E | 0x80..=0xFC))
            }
            _ => IteratedChar::illegal(u32::from(lead)),
        }
    }

    fn next_euc(&mut self, lead: u8) -> IteratedChar {
        match lead {
            0x00..=0x8D => IteratedChar::single(lead),
            0xA1..=0xFE | 0x8E => self.double(lead, |t| t >= 0xA1),
            0x8F => {
                // Code set 3: three bytes.
                let first = self.double(lead, |t| t >= 0xA1);
                if first.error {
                    return first;
                }
                match self.data.get(self.pos) {
                    Some(&third) => {
                        self.pos += 1;
                        IteratedChar {
                            value: (first.value << 8) | u32::from(third),
                            error: third < 0xA1,
                        }
                    }
                    None => IteratedChar::illegal(first.value),
                }
            }
            _ => IteratedChar::illegal(u32::from(lead)),
        }
    }

    fn next_big5(&mut self, lead: u8) -> IteratedChar {
        match lead {
            0x00..=0x7F => IteratedChar::single(lead),
            0x81..=0xFE => self.double(lead, |t| t >= 0x40 && t != 0x7F && t != 0xFF),
            _ => IteratedChar::illegal(u32::from(lead)),
        }
    }

    fn next_gb18030(&mut self, lead: u8) -> IteratedChar {
        match lead {
            0x00..=0x80 => IteratedChar::single(lead),
            0x81..=0xFE => {
                let four_byte = matches!(
                    self.data.get(self.pos..self.pos + 3),
                    Some(&[0x30..=0x39, 0x81..=0xFE, 0x30..=0x39])
                );
                if four_byte {
                    let value = self.data[self.pos..self.pos + 3]
                        .iter()
                        .fold(u32::from(lead), |acc, &b| (acc << 8) | u32::from(b));
                    self.pos += 3;
                    return IteratedChar {
                        value,
                        error: false,
                    };
                }
                self.double(lead, |t| matches!(t, 0x40..=0x7E | 0x80..=0xFE))
            }
            _ => IteratedChar::illegal(u32::from(lead)),
        }
    }
}

impl Iterator for CharIter<'_> {
    type Item = IteratedChar;

    fn next(&mut self) -> Option<IteratedChar> {
        let lead = *self.data.get(self.pos)?;
        self.pos += 1;
        Some(match self.scheme {
            MbcsScheme::ShiftJis => self.next_shift_jis(lead),
            MbcsScheme::Euc => self.next_euc(lead),
            MbcsScheme::Big5 => self.next_big5(lead),
            MbcsScheme::Gb18030 => self.next_gb18030(lead),
        })
    }
}

/// A multi-byte encoding model: its scheme and the byte values of its most
/// frequent characters, sorted for binary search.
#[derive(Debug, Clone)]
pub struct MbcsModel {
    scheme: MbcsScheme,
    common_chars: Vec<u32>,
}

impl MbcsModel {
    pub fn new(scheme: MbcsScheme, mut common_chars: Vec<u32>) -> Self {
        common_chars.sort_unstable();
        common_chars.dedup();
        Self {
            scheme,
            common_chars,
        }
    }

    pub fn common_chars(&self) -> &[u32] {
        &self.common_chars
    }

    /// Score `data` against this encoding.
    pub fn confidence(&self, data: &[u8]) -> u8 {
        let mut total = 0usize;
        let mut double = 0usize;
        let mut common = 0usize;
        let mut bad = 0usize;

        for ch in CharIter::new(self.scheme, data) {
            total += 1;
            if ch.error {
                bad += 1;
            } else if ch.value > 0xFF {
                double += 1;
                if self.common_chars.binary_search(&ch.value).is_ok() {
                    common += 1;
                }
            }

            if bad >= 2 && bad * 5 >= double {
                return 0;
            }
        }

        if double <= 10 && bad == 0 {
            // Too little evidence either way: stay in the running at the
            // bottom unless there is almost nothing to go on.
            return if double == 0 && total < 10 { 0 } else { 10 };
        }

        if double < 20 * bad {
            return 0;
        }

        if self.common_chars.is_empty() {
            let confidence = 30 + double as i64 - 20 * bad as i64;
            return confidence.clamp(0, 100) as u8;
        }

        let max_val = (double as f64 / 4.0).ln();
        let scale = 90.0 / max_val;
        let confidence = ((common as f64 + 1.0).ln() * scale + 10.0) as i64;
        confidence.clamp(0, 100) as u8
    }
}
