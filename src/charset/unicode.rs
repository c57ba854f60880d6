//! Validity scorers for the Unicode encoding forms.

use simdutf8::compat::from_utf8;

/// Byte order of a UTF-16 or UTF-32 code unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// Number of leading bytes inspected by the UTF-16 scorers.
const UTF16_PROBE_LEN: usize = 30;

/// Confidence from counts of valid and invalid encoded characters.
///
/// Shared by UTF-8 and UTF-32: plain ASCII (nothing either way) only scores
/// for UTF-8, where it is also valid.
fn validity_confidence(valid: usize, invalid: usize, ascii_score: u8) -> u8 {
    if valid > 3 && invalid == 0 {
        100
    } else if valid > 0 && invalid == 0 {
        80
    } else if valid == 0 && invalid == 0 {
        ascii_score
    } else if valid > invalid * 10 {
        25
    } else {
        0
    }
}

/// Count well-formed and malformed multi-byte UTF-8 sequences.
///
/// A sequence cut off by the end of the buffer counts as neither, so inputs
/// truncated mid-character are not penalised.
pub fn utf8_sequence_counts(data: &[u8]) -> (usize, usize) {
    let lead_bytes = |chunk: &[u8]| chunk.iter().filter(|&&b| b >= 0xC0).count();

    let mut valid = 0;
    let mut invalid = 0;
    let mut rest = data;
    loop {
        match from_utf8(rest) {
            Ok(_) => {
                valid += lead_bytes(rest);
                break;
            }
            Err(err) => {
                let good = err.valid_up_to();
                valid += lead_bytes(&rest[..good]);
                match err.error_len() {
                    Some(len) => {
                        invalid += 1;
                        rest = &rest[good + len..];
                    }
                    None => break,
                }
            }
        }
    }
    (valid, invalid)
}

/// UTF-8 confidence: 100 for more than three valid sequences and no errors,
/// 80 for fewer, 15 for pure ASCII, 25 when valid sequences outnumber errors
/// ten to one.
pub fn utf8_confidence(data: &[u8]) -> u8 {
    let (valid, invalid) = utf8_sequence_counts(data);
    validity_confidence(valid, invalid, 15)
}

/// UTF-16 confidence from the first few code units.
///
/// Each NUL code unit costs 10 points and each Latin-1 range or LF code unit
/// earns 10, starting from 10. Anything else (most CJK) leaves it unchanged.
/// Buffers too short or of odd length score 0.
pub fn utf16_confidence(data: &[u8], endian: Endian) -> u8 {
    if data.len() < 4 || data.len() % 2 != 0 {
        return 0;
    }

    let mut confidence: i32 = 10;
    let probe = &data[..data.len().min(UTF16_PROBE_LEN)];
    for unit in probe.chunks_exact(2) {
        let unit = match endian {
            Endian::Big => u16::from_be_bytes([unit[0], unit[1]]),
            Endian::Little => u16::from_le_bytes([unit[0], unit[1]]),
        };
        if unit == 0 {
            confidence -= 10;
        } else if (0x20..=0xFF).contains(&unit) || unit == 0x0A {
            confidence += 10;
        }
        confidence = confidence.clamp(0, 100);
        if confidence == 0 || confidence == 100 {
            break;
        }
    }
    confidence as u8
}

/// UTF-32 confidence from valid and invalid code points. A length that is not
/// a whole number of code units scores 0.
pub fn utf32_confidence(data: &[u8], endian: Endian) -> u8 {
    if data.len() % 4 != 0 {
        return 0;
    }

    let mut valid = 0;
    let mut invalid = 0;
    for unit in data.chunks_exact(4) {
        let bytes = [unit[0], unit[1], unit[2], unit[3]];
        let code_point = match endian {
            Endian::Big => u32::from_be_bytes(bytes),
            Endian::Little => u32::from_le_bytes(bytes),
        };
        if char::from_u32(code_point).is_some() {
            valid += 1;
        } else {
            invalid += 1;
        }
    }
    validity_confidence(valid, invalid, 0)
}
