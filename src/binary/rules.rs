//! Built-in signature table.
//!
//! Order matters: the first matching rule wins, so more specific signatures
//! (Debian packages) come before the generic ones they share a prefix with
//! (`ar` archives).

/// Declarative form of a rule, compiled into a `PatternMatcher` at load time.
#[derive(Debug, Clone, Copy)]
pub enum RuleSpec {
    /// Fixed bytes at an offset.
    Bytes(usize, &'static [u8]),
    /// Byte regex source.
    Regex(&'static str),
    /// Structural probe.
    Probe(fn(&[u8]) -> bool),
}

pub const BUILTIN_RULES: &[(RuleSpec, &str)] = &[
    // Executables and libraries
    (RuleSpec::Bytes(0, b"\x7fELF"), "ELF executable or shared library"),
    (RuleSpec::Probe(is_pe), "PE32 executable for MS Windows"),
    (RuleSpec::Probe(is_mz), "MS-DOS executable"),
    (RuleSpec::Probe(is_macho_executable), "Mach-O executable"),
    (RuleSpec::Probe(is_macho_dylib), "Mach-O dynamically linked shared library"),
    (RuleSpec::Probe(is_macho_bundle), "Mach-O bundle"),
    (RuleSpec::Probe(is_macho), "Mach-O object data"),
    (
        RuleSpec::Bytes(0, b"\xca\xfe\xba\xbe"),
        "Mach-O universal binary or compiled Java class data",
    ),
    (RuleSpec::Bytes(0, b"\x00asm"), "WebAssembly (wasm) binary module data"),
    (RuleSpec::Regex(r"(?-u)\Adex\n[0-9]{3}\x00"), "Dalvik dex file data"),
    (RuleSpec::Bytes(0, b"BC\xc0\xde"), "LLVM IR bitcode data"),
    // Archives and packages
    (
        RuleSpec::Bytes(0, b"!<arch>\ndebian-binary"),
        "Debian binary package (ar archive)",
    ),
    (RuleSpec::Bytes(0, b"!<arch>\n"), "current ar archive (static library)"),
    (RuleSpec::Bytes(0, b"\xed\xab\xee\xdb"), "RPM package archive data"),
    (RuleSpec::Bytes(0, b"PK\x03\x04"), "Zip archive data"),
    (RuleSpec::Bytes(0, b"PK\x05\x06"), "Zip archive data (empty)"),
    (RuleSpec::Bytes(0, b"PK\x07\x08"), "Zip archive data (spanned)"),
    (RuleSpec::Bytes(257, b"ustar"), "POSIX tar archive"),
    (RuleSpec::Regex(r"(?-u)\A07070[12][0-9A-Fa-f]{8}"), "ASCII cpio archive (SVR4)"),
    (RuleSpec::Regex(r"(?-u)\A070707[0-7]{6}"), "ASCII cpio archive (pre-SVR4)"),
    (RuleSpec::Bytes(0, b"MSCF\x00\x00\x00\x00"), "Microsoft Cabinet archive data"),
    (RuleSpec::Bytes(0, b"7z\xbc\xaf\x27\x1c"), "7-zip archive data"),
    (RuleSpec::Bytes(0, b"Rar!\x1a\x07"), "RAR archive data"),
    // Compressed streams
    (RuleSpec::Bytes(0, b"\x1f\x8b\x08"), "gzip compressed data"),
    (
        RuleSpec::Regex(r"(?-u)\ABZh[1-9](?:1AY&SY|\x17rE8P\x90)"),
        "bzip2 compressed data",
    ),
    (RuleSpec::Bytes(0, b"\xfd7zXZ\x00"), "XZ compressed data"),
    (RuleSpec::Bytes(0, b"\x28\xb5\x2f\xfd"), "Zstandard compressed data"),
    // Images and media
    (RuleSpec::Bytes(0, b"\x89PNG\r\n\x1a\n"), "PNG image data"),
    (RuleSpec::Bytes(0, b"\xff\xd8\xff"), "JPEG image data"),
    (RuleSpec::Bytes(0, b"GIF87a"), "GIF image data, version 87a"),
    (RuleSpec::Bytes(0, b"GIF89a"), "GIF image data, version 89a"),
    (RuleSpec::Bytes(0, b"II*\x00"), "TIFF image data, little-endian"),
    (RuleSpec::Bytes(0, b"MM\x00*"), "TIFF image data, big-endian"),
    (RuleSpec::Bytes(0, b"RIFF"), "RIFF (little-endian) data"),
    (RuleSpec::Bytes(0, b"OggS"), "Ogg data"),
    (RuleSpec::Bytes(0, b"fLaC"), "FLAC audio bitstream data"),
    (RuleSpec::Bytes(4, b"ftyp"), "ISO Media data"),
    (RuleSpec::Regex(r"(?-u)\AID3[\x02-\x04]\x00"), "Audio file with ID3 version 2 data"),
    // Databases
    (RuleSpec::Bytes(0, b"SQLite format 3\x00"), "SQLite 3.x database data"),
    // Documents that are still scanned for a charset
    (RuleSpec::Bytes(0, b"%PDF-"), "PDF document"),
    (RuleSpec::Bytes(0, b"%!PS"), "PostScript document text"),
    (RuleSpec::Regex(r"(?-u)\A#![ \t]?/[^\s]+"), "script text executable"),
];

/// Minimum size of an MS-DOS header.
const MZ_HEADER_LEN: usize = 0x40;

/// `MZ` followed by a header holding at least one NUL. Text that happens to
/// start with "MZ" has no NULs.
fn is_mz(data: &[u8]) -> bool {
    data.len() >= MZ_HEADER_LEN
        && data.starts_with(b"MZ")
        && data[..MZ_HEADER_LEN].contains(&0)
}

/// MS-DOS stub whose `e_lfanew` points at a `PE\0\0` signature.
fn is_pe(data: &[u8]) -> bool {
    if !is_mz(data) {
        return false;
    }
    let lfanew = u32::from_le_bytes([data[0x3C], data[0x3D], data[0x3E], data[0x3F]]) as usize;
    data.get(lfanew..)
        .is_some_and(|rest| rest.starts_with(b"PE\x00\x00"))
}

/// Mach-O `filetype` field, or `None` if `data` is not a thin Mach-O file.
fn macho_filetype(data: &[u8]) -> Option<u32> {
    let header = data.get(..16)?;
    let field = [header[12], header[13], header[14], header[15]];
    match header[..4] {
        [0xFE, 0xED, 0xFA, 0xCE] | [0xFE, 0xED, 0xFA, 0xCF] => Some(u32::from_be_bytes(field)),
        [0xCE, 0xFA, 0xED, 0xFE] | [0xCF, 0xFA, 0xED, 0xFE] => Some(u32::from_le_bytes(field)),
        _ => None,
    }
}

const MH_EXECUTE: u32 = 0x2;
const MH_DYLIB: u32 = 0x6;
const MH_BUNDLE: u32 = 0x8;

fn is_macho_executable(data: &[u8]) -> bool {
    macho_filetype(data) == Some(MH_EXECUTE)
}

fn is_macho_dylib(data: &[u8]) -> bool {
    macho_filetype(data) == Some(MH_DYLIB)
}

fn is_macho_bundle(data: &[u8]) -> bool {
    macho_filetype(data) == Some(MH_BUNDLE)
}

fn is_macho(data: &[u8]) -> bool {
    macho_filetype(data).is_some()
}
