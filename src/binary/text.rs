//! Text sniffing used when no magic rule matches.
//!
//! Bytes are sorted into the classes libmagic uses: never seen in text,
//! plain ASCII text, ISO-8859 text and non-ISO extended ASCII (Mac, IBM PC,
//! windows code pages). Anything that fits none of the text shapes is "data".

use simdutf8::compat::from_utf8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    /// Never appears in text.
    Never,
    /// Appears in plain ASCII text.
    Ascii,
    /// Appears in ISO-8859 text.
    Iso,
    /// Appears in non-ISO extended ASCII.
    Extended,
}

const fn build_text_chars() -> [CharClass; 256] {
    let mut table = [CharClass::Never; 256];
    let mut b = 0usize;
    while b < 256 {
        table[b] = match b {
            // BEL BS HT LF VT FF CR, SO SI (ISO-2022 shifts), ESC
            0x07..=0x0F | 0x1B => CharClass::Ascii,
            0x20..=0x7E => CharClass::Ascii,
            0x85 => CharClass::Ascii,
            0x80..=0x9F => CharClass::Extended,
            0xA0..=0xFF => CharClass::Iso,
            _ => CharClass::Never,
        };
        b += 1;
    }
    table
}

static TEXT_CHARS: [CharClass; 256] = build_text_chars();

fn class(b: u8) -> CharClass {
    TEXT_CHARS[b as usize]
}

fn looks_ascii(data: &[u8]) -> bool {
    data.iter().all(|&b| class(b) == CharClass::Ascii)
}

fn looks_latin1(data: &[u8]) -> bool {
    data.iter()
        .all(|&b| matches!(class(b), CharClass::Ascii | CharClass::Iso))
}

fn looks_extended(data: &[u8]) -> bool {
    data.iter().all(|&b| class(b) != CharClass::Never)
}

/// Valid UTF-8 whose ASCII bytes are all text characters. A sequence cut off
/// by the end of the buffer is tolerated.
fn looks_utf8(data: &[u8]) -> bool {
    let valid = match from_utf8(data) {
        Ok(_) => data,
        Err(e) if e.error_len().is_none() => &data[..e.valid_up_to()],
        Err(_) => return false,
    };
    valid
        .iter()
        .all(|&b| b >= 0x80 || class(b) == CharClass::Ascii)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Endian {
    Little,
    Big,
}

fn looks_ucs16(data: &[u8]) -> Option<Endian> {
    let endian = match data {
        [0xFF, 0xFE, ..] => Endian::Little,
        [0xFE, 0xFF, ..] => Endian::Big,
        _ => return None,
    };

    for unit in data[2..].chunks_exact(2) {
        let uc = match endian {
            Endian::Little => u16::from_le_bytes([unit[0], unit[1]]),
            Endian::Big => u16::from_be_bytes([unit[0], unit[1]]),
        };
        if uc == 0xFFFE || uc == 0xFFFF {
            return None;
        }
        if uc < 0x80 && class(uc as u8) != CharClass::Ascii {
            return None;
        }
    }
    Some(endian)
}

fn looks_ucs32(data: &[u8]) -> Option<Endian> {
    let endian = match data {
        [0xFF, 0xFE, 0x00, 0x00, ..] => Endian::Little,
        [0x00, 0x00, 0xFE, 0xFF, ..] => Endian::Big,
        _ => return None,
    };

    for unit in data[4..].chunks_exact(4) {
        let bytes = [unit[0], unit[1], unit[2], unit[3]];
        let uc = match endian {
            Endian::Little => u32::from_le_bytes(bytes),
            Endian::Big => u32::from_be_bytes(bytes),
        };
        if uc > 0x10FFFF || uc == 0xFFFE || uc == 0xFFFF {
            return None;
        }
        if uc < 0x80 && class(uc as u8) != CharClass::Ascii {
            return None;
        }
    }
    Some(endian)
}

/// Describe `data` as some kind of text, or `None` if it is not text.
pub fn describe(data: &[u8]) -> Option<&'static str> {
    if data.is_empty() {
        return Some("empty");
    }
    // A NUL rules out every byte-oriented text shape; only the wide Unicode
    // forms can still apply.
    let has_nul = bytecount::count(data, 0) > 0;

    if !has_nul {
        if looks_ascii(data) {
            return Some("ASCII text");
        }
        if looks_utf8(data) {
            if crate::encoding::has_utf8_bom(data) {
                return Some("UTF-8 Unicode (with BOM) text");
            }
            return Some("UTF-8 Unicode text");
        }
    }
    if let Some(endian) = looks_ucs32(data) {
        return Some(match endian {
            Endian::Little => "Little-endian UTF-32 Unicode text",
            Endian::Big => "Big-endian UTF-32 Unicode text",
        });
    }
    if let Some(endian) = looks_ucs16(data) {
        return Some(match endian {
            Endian::Little => "Little-endian UTF-16 Unicode text",
            Endian::Big => "Big-endian UTF-16 Unicode text",
        });
    }
    if has_nul {
        return None;
    }
    if looks_latin1(data) {
        return Some("ISO-8859 text");
    }
    if looks_extended(data) {
        return Some("Non-ISO extended-ASCII text");
    }
    None
}
