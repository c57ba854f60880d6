//! The charset profile set: one entry per detectable encoding, built once per
//! process and shared read-only.

use std::sync::LazyLock;

use encoding_rs::Encoding;
use foldhash::{HashMap, HashMapExt};

use super::data;
use super::iso2022::Iso2022Scheme;
use super::mbcs::{MbcsModel, MbcsScheme};
use super::ngram::NgramModel;
use super::unicode::{self, Endian};
use crate::encoding::{Hint, resolve_label};
use crate::error::LoadError;
use crate::filter::ByteStats;

/// Broad family of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Unicode,
    MultiByte,
    SingleByte,
}

/// Whether a single-byte profile is considered given the C1 bytes
/// (0x80..=0x9F) in the statistics window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum C1Policy {
    /// Always scored.
    Any,
    /// ISO-8859 variants, where C1 bytes are control characters.
    WithoutC1,
    /// windows-125x variants, which put printable characters there.
    WithC1,
}

impl C1Policy {
    pub fn admits(&self, stats: &ByteStats) -> bool {
        match self {
            C1Policy::Any => true,
            C1Policy::WithoutC1 => !stats.has_c1_bytes(),
            C1Policy::WithC1 => stats.has_c1_bytes(),
        }
    }
}

/// How a profile scores a buffer.
#[derive(Debug, Clone)]
pub enum Recognizer {
    Utf8,
    Utf16(Endian),
    Utf32(Endian),
    Iso2022(Iso2022Scheme),
    Mbcs(MbcsModel),
    Ngram(NgramModel),
}

/// The buffers a profile may look at.
#[derive(Debug)]
pub struct ScoringInput<'a> {
    /// Input exactly as given.
    pub raw: &'a [u8],
    /// Input after optional markup stripping.
    pub filtered: &'a [u8],
    /// Leading statistics window of `filtered`.
    pub window: &'a [u8],
    /// Byte statistics of `window`.
    pub stats: ByteStats,
}

/// Outcome of scoring one profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub confidence: u8,
    pub language: Option<&'static str>,
}

/// One detectable encoding.
#[derive(Debug, Clone)]
pub struct CharsetProfile {
    name: &'static str,
    kind: ProfileKind,
    languages: Vec<&'static str>,
    encoding: Option<&'static Encoding>,
    c1_policy: C1Policy,
    recognizer: Recognizer,
}

impl CharsetProfile {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    /// Languages this profile can report. Empty for the Unicode family.
    pub fn languages(&self) -> &[&'static str] {
        &self.languages
    }

    /// The matching `encoding_rs` encoding, if it has one.
    pub fn encoding(&self) -> Option<&'static Encoding> {
        self.encoding
    }

    pub fn c1_policy(&self) -> C1Policy {
        self.c1_policy
    }

    pub fn recognizer(&self) -> &Recognizer {
        &self.recognizer
    }

    /// Score the input. Validity checks run over the whole filtered buffer
    /// (UTF-16/32 over the raw bytes, since stripping breaks their
    /// alignment); frequency statistics only over the window.
    pub fn score(&self, input: &ScoringInput<'_>) -> Score {
        let language = self.languages.first().copied();
        let (confidence, language) = match &self.recognizer {
            Recognizer::Utf8 => (unicode::utf8_confidence(input.filtered), None),
            Recognizer::Utf16(endian) => (unicode::utf16_confidence(input.raw, *endian), None),
            Recognizer::Utf32(endian) => (unicode::utf32_confidence(input.raw, *endian), None),
            Recognizer::Iso2022(scheme) => (scheme.confidence(input.window), language),
            Recognizer::Mbcs(model) => (model.confidence(input.filtered), language),
            Recognizer::Ngram(model) => match model.best(input.window) {
                Some((language, confidence)) => (confidence, Some(language)),
                None => (0, None),
            },
        };
        Score {
            confidence,
            language,
        }
    }
}

/// Languages and their trigram tables, per single-byte family.
type TrigramTables = &'static [(&'static str, &'static [&'static str])];

const WESTERN: TrigramTables = &[
    ("en", data::EN),
    ("da", data::DA),
    ("de", data::DE),
    ("es", data::ES),
    ("fr", data::FR),
    ("it", data::IT),
    ("nl", data::NL),
    ("no", data::NO),
    ("pt", data::PT),
    ("sv", data::SV),
];
const CENTRAL_EUROPEAN: TrigramTables = &[
    ("cs", data::CS),
    ("hu", data::HU),
    ("pl", data::PL),
    ("ro", data::RO),
];
const CYRILLIC: TrigramTables = &[("ru", data::RU)];
const ARABIC: TrigramTables = &[("ar", data::AR)];
const GREEK: TrigramTables = &[("el", data::EL)];
const HEBREW: TrigramTables = &[("he", data::HE)];
const TURKISH: TrigramTables = &[("tr", data::TR)];

struct SingleByteSpec {
    name: &'static str,
    label: &'static str,
    c1_policy: C1Policy,
    tables: TrigramTables,
    visual: bool,
}

const fn single_byte(
    name: &'static str,
    label: &'static str,
    c1_policy: C1Policy,
    tables: TrigramTables,
) -> SingleByteSpec {
    SingleByteSpec {
        name,
        label,
        c1_policy,
        tables,
        visual: false,
    }
}

/// Single-byte profiles in preference order: each ISO-8859 part before its
/// windows counterpart.
const SINGLE_BYTE_PROFILES: &[SingleByteSpec] = &[
    single_byte("ISO-8859-1", "iso-8859-1", C1Policy::WithoutC1, WESTERN),
    single_byte("windows-1252", "windows-1252", C1Policy::WithC1, WESTERN),
    single_byte("ISO-8859-2", "iso-8859-2", C1Policy::WithoutC1, CENTRAL_EUROPEAN),
    single_byte("windows-1250", "windows-1250", C1Policy::WithC1, CENTRAL_EUROPEAN),
    single_byte("ISO-8859-5", "iso-8859-5", C1Policy::Any, CYRILLIC),
    single_byte("ISO-8859-6", "iso-8859-6", C1Policy::Any, ARABIC),
    single_byte("ISO-8859-7", "iso-8859-7", C1Policy::WithoutC1, GREEK),
    single_byte("windows-1253", "windows-1253", C1Policy::WithC1, GREEK),
    single_byte("ISO-8859-8-I", "iso-8859-8-i", C1Policy::WithoutC1, HEBREW),
    SingleByteSpec {
        visual: true,
        ..single_byte("ISO-8859-8", "iso-8859-8", C1Policy::WithoutC1, HEBREW)
    },
    single_byte("windows-1255", "windows-1255", C1Policy::WithC1, HEBREW),
    single_byte("ISO-8859-9", "iso-8859-9", C1Policy::WithoutC1, TURKISH),
    single_byte("windows-1254", "windows-1254", C1Policy::WithC1, TURKISH),
    single_byte("windows-1251", "windows-1251", C1Policy::Any, CYRILLIC),
    single_byte("windows-1256", "windows-1256", C1Policy::Any, ARABIC),
    single_byte("KOI8-R", "koi8-r", C1Policy::Any, CYRILLIC),
];

struct MbcsSpec {
    name: &'static str,
    label: &'static str,
    scheme: MbcsScheme,
    language: &'static str,
    common_chars: &'static str,
}

const MULTI_BYTE_PROFILES: &[MbcsSpec] = &[
    MbcsSpec {
        name: "Shift_JIS",
        label: "shift_jis",
        scheme: MbcsScheme::ShiftJis,
        language: "ja",
        common_chars: data::JA_COMMON,
    },
    MbcsSpec {
        name: "EUC-JP",
        label: "euc-jp",
        scheme: MbcsScheme::Euc,
        language: "ja",
        common_chars: data::JA_COMMON,
    },
    MbcsSpec {
        name: "EUC-KR",
        label: "euc-kr",
        scheme: MbcsScheme::Euc,
        language: "ko",
        common_chars: data::KO_COMMON,
    },
    MbcsSpec {
        name: "Big5",
        label: "big5",
        scheme: MbcsScheme::Big5,
        language: "zh",
        common_chars: data::ZH_HANT_COMMON,
    },
    MbcsSpec {
        name: "GB18030",
        label: "gb18030",
        scheme: MbcsScheme::Gb18030,
        language: "zh",
        common_chars: data::ZH_HANS_COMMON,
    },
];

fn encoding_for(name: &str, label: &str) -> Result<&'static Encoding, LoadError> {
    resolve_label(label)
        .ok_or_else(|| LoadError::new(name, format!("unknown encoding label {label:?}")))
}

/// Encode each common character and pack its bytes into a lookup value.
fn common_char_values(spec: &MbcsSpec, encoding: &'static Encoding) -> Result<Vec<u32>, LoadError> {
    let table = format!("{} common characters", spec.name);
    let mut buf = [0u8; 4];
    spec.common_chars
        .chars()
        .map(|c| {
            let (bytes, _, had_errors) = encoding.encode(c.encode_utf8(&mut buf));
            if had_errors || !(2..=4).contains(&bytes.len()) {
                return Err(LoadError::new(
                    &table,
                    format!("{c:?} has no multi-byte form in {}", encoding.name()),
                ));
            }
            Ok(bytes.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
        })
        .collect()
}

fn unicode_profile(
    name: &'static str,
    encoding: Option<&'static Encoding>,
    recognizer: Recognizer,
) -> CharsetProfile {
    CharsetProfile {
        name,
        kind: ProfileKind::Unicode,
        languages: Vec::new(),
        encoding,
        c1_policy: C1Policy::Any,
        recognizer,
    }
}

fn iso2022_profile(
    name: &'static str,
    scheme: Iso2022Scheme,
    language: &'static str,
) -> CharsetProfile {
    CharsetProfile {
        name,
        kind: ProfileKind::MultiByte,
        languages: vec![language],
        encoding: resolve_label(name),
        c1_policy: C1Policy::Any,
        recognizer: Recognizer::Iso2022(scheme),
    }
}

/// Every detectable encoding, in preference order.
#[derive(Debug)]
pub struct CharsetProfileSet {
    profiles: Vec<CharsetProfile>,
    names: Vec<&'static str>,
    /// Lowercased profile name to position.
    index: HashMap<String, usize>,
    /// `encoding_rs` encoding name to the positions of profiles using it.
    by_encoding: HashMap<&'static str, Vec<usize>>,
}

static SHARED: LazyLock<Result<CharsetProfileSet, LoadError>> =
    LazyLock::new(CharsetProfileSet::build);

impl CharsetProfileSet {
    /// The process-wide profile set, built on first use.
    pub fn shared() -> Result<&'static CharsetProfileSet, LoadError> {
        SHARED.as_ref().map_err(Clone::clone)
    }

    /// Build the profile set from the reference tables.
    pub fn build() -> Result<Self, LoadError> {
        let mut profiles = vec![
            unicode_profile("UTF-8", Some(encoding_rs::UTF_8), Recognizer::Utf8),
            unicode_profile(
                "UTF-16BE",
                Some(encoding_rs::UTF_16BE),
                Recognizer::Utf16(Endian::Big),
            ),
            unicode_profile(
                "UTF-16LE",
                Some(encoding_rs::UTF_16LE),
                Recognizer::Utf16(Endian::Little),
            ),
            unicode_profile("UTF-32BE", None, Recognizer::Utf32(Endian::Big)),
            unicode_profile("UTF-32LE", None, Recognizer::Utf32(Endian::Little)),
            iso2022_profile("ISO-2022-JP", Iso2022Scheme::Jp, "ja"),
            iso2022_profile("ISO-2022-KR", Iso2022Scheme::Kr, "ko"),
            iso2022_profile("ISO-2022-CN", Iso2022Scheme::Cn, "zh"),
        ];

        for spec in MULTI_BYTE_PROFILES {
            let encoding = encoding_for(spec.name, spec.label)?;
            let common = common_char_values(spec, encoding)?;
            profiles.push(CharsetProfile {
                name: spec.name,
                kind: ProfileKind::MultiByte,
                languages: vec![spec.language],
                encoding: Some(encoding),
                c1_policy: C1Policy::Any,
                recognizer: Recognizer::Mbcs(MbcsModel::new(spec.scheme, common)),
            });
        }

        for spec in SINGLE_BYTE_PROFILES {
            let encoding = encoding_for(spec.name, spec.label)?;
            let model = NgramModel::build(spec.name, encoding, spec.tables, spec.visual)?;
            profiles.push(CharsetProfile {
                name: spec.name,
                kind: ProfileKind::SingleByte,
                languages: spec.tables.iter().map(|&(language, _)| language).collect(),
                encoding: Some(encoding),
                c1_policy: spec.c1_policy,
                recognizer: Recognizer::Ngram(model),
            });
        }

        Self::from_profiles(profiles)
    }

    fn from_profiles(profiles: Vec<CharsetProfile>) -> Result<Self, LoadError> {
        let mut index = HashMap::with_capacity(profiles.len());
        let mut by_encoding: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (i, profile) in profiles.iter().enumerate() {
            if index.insert(profile.name.to_ascii_lowercase(), i).is_some() {
                return Err(LoadError::new(
                    "charset profiles",
                    format!("duplicate profile {}", profile.name),
                ));
            }
            if let Some(encoding) = profile.encoding {
                by_encoding.entry(encoding.name()).or_default().push(i);
            }
        }
        let names = profiles.iter().map(|p| p.name).collect();
        tracing::debug!(profiles = profiles.len(), "charset profile set built");
        Ok(Self {
            profiles,
            names,
            index,
            by_encoding,
        })
    }

    pub fn profiles(&self) -> &[CharsetProfile] {
        &self.profiles
    }

    /// Names of every profile, in preference order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Positions of the profiles `hint` names, in preference order.
    ///
    /// A hint names the profile whose name it spells (ignoring case) and
    /// every profile sharing the `encoding_rs` encoding its label resolves
    /// to, so `latin1` names both ISO-8859-1 and windows-1252.
    pub fn hinted(&self, hint: &Hint) -> Vec<usize> {
        let mut found: Vec<usize> = self.index.get(hint.label()).copied().into_iter().collect();
        if let Some(aliases) = hint.encoding().and_then(|e| self.by_encoding.get(e.name())) {
            found.extend(aliases);
        }
        found.sort_unstable();
        found.dedup();
        found
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
