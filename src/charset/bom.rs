//! Byte-order marks.

/// Known BOMs and the encoding each one identifies.
///
/// UTF-32LE must be tested before UTF-16LE: `FF FE 00 00` starts with the
/// UTF-16LE mark.
pub const BOM_TABLE: &[(&[u8], &str)] = &[
    (&[0xFF, 0xFE, 0x00, 0x00], "UTF-32LE"),
    (&[0x00, 0x00, 0xFE, 0xFF], "UTF-32BE"),
    (&[0xEF, 0xBB, 0xBF], "UTF-8"),
    (&[0xFF, 0xFE], "UTF-16LE"),
    (&[0xFE, 0xFF], "UTF-16BE"),
];

/// Encoding named by a BOM at the start of `data`, with the BOM length.
pub fn sniff_bom(data: &[u8]) -> Option<(&'static str, usize)> {
    BOM_TABLE
        .iter()
        .find(|(bom, _)| data.starts_with(bom))
        .map(|(bom, name)| (*name, bom.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_bom() {
        assert_eq!(sniff_bom(b"\xEF\xBB\xBFabc"), Some(("UTF-8", 3)));
        assert_eq!(sniff_bom(b"\xFF\xFEa\x00"), Some(("UTF-16LE", 2)));
        assert_eq!(sniff_bom(b"\xFE\xFF\x00a"), Some(("UTF-16BE", 2)));
        assert_eq!(sniff_bom(b"\xFF\xFE\x00\x00a\x00\x00\x00"), Some(("UTF-32LE", 4)));
        assert_eq!(sniff_bom(b"\x00\x00\xFE\xFF"), Some(("UTF-32BE", 4)));
    }

    #[test]
    fn test_no_bom() {
        assert_eq!(sniff_bom(b"plain"), None);
        assert_eq!(sniff_bom(b""), None);
        assert_eq!(sniff_bom(b"\xEF\xBB"), None);
    }
}
