//! Integration tests for charset-nose

use charset_nose::benchmark::read_prefix;
use charset_nose::{
    BinaryKind, DetectError, EncodingDetector, Match, MatchKind, SampleSize, SignatureEngine,
};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

const ENGLISH: &[u8] = b"The history of the world is the story of the people who made it. \
Every generation learns from the one before and builds something new for the next.";

const HTML: &[u8] = b"<html><head><title>Report</title></head><body>\
<p title=\"caf\xe9 cr\xe8me\">The quarterly report shows that the numbers have grown again, \
and we expect them to keep growing over the next year.</p>\
<p>Please send any comments to the team before we publish it.</p></body></html>";

fn detector() -> EncodingDetector {
    EncodingDetector::new().unwrap()
}

fn encodings(matches: &[Match]) -> Vec<&'static str> {
    matches.iter().filter_map(Match::encoding).collect()
}

fn position(matches: &[Match], encoding: &str) -> Option<usize> {
    matches.iter().position(|m| m.encoding() == Some(encoding))
}

#[test]
fn test_elf_is_binary() {
    let data = b"\x7fELF\x02\x01\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00\x02\x00\x3e\x00";
    let detector = detector();

    assert_eq!(detector.detect(data, None), Ok(Match::Binary));
    assert_eq!(detector.detect_all(data, None), Ok(vec![Match::Binary]));

    let category = detector.classify(data).unwrap().unwrap();
    assert_eq!(category.kind, BinaryKind::Library);
}

#[test]
fn test_zip_is_binary() {
    let data = b"PK\x03\x04\x14\x00\x00\x00\x08\x00readme.txt";
    let found = detector().detect(data, None).unwrap();

    assert!(found.is_binary());
    assert_eq!(found.kind(), MatchKind::Binary);
    assert_eq!(found.encoding(), None);
    assert_eq!(found.language(), None);
    assert_eq!(found.confidence(), 100);
}

#[test]
fn test_utf8_bom_decides() {
    let data = b"\xEF\xBB\xBFplain words after a byte-order mark";
    let matches = detector().detect_all(data, None).unwrap();

    assert_eq!(matches, vec![Match::text("UTF-8", None, 100)]);
}

#[test]
fn test_ascii_is_ambiguous() {
    let matches = detector().detect_all(ENGLISH, None).unwrap();
    let found = encodings(&matches);

    assert!(found.len() > 3);
    assert!(found.contains(&"UTF-8"));
    assert!(found.contains(&"ISO-8859-1"));
    assert!(matches.iter().all(|m| m.confidence() > 0));
    assert!(matches.windows(2).all(|w| w[0].confidence() >= w[1].confidence()));
}

#[test]
fn test_utf8_japanese() {
    let text = "日本語のテキストです。これはテストの文章で、エンコーディングの検出に使います。";
    let found = detector().detect(text.as_bytes(), None).unwrap();

    assert_eq!(found.encoding(), Some("UTF-8"));
    assert_eq!(found.confidence(), 100);
}

#[test]
fn test_legacy_encodings() {
    let russian = "Это был обычный день. Он пришёл домой, сел за стол и начал читать письмо, \
                   которое получил от своего старого друга.";
    let (koi8, _, _) = encoding_rs::KOI8_R.encode(russian);
    let found = detector().detect(&koi8, None).unwrap();
    assert_eq!(found.encoding(), Some("KOI8-R"));
    assert_eq!(found.language(), Some("ru"));

    let japanese = "日本語のテキストです。これはテストの文章で、エンコーディングの検出に使います。\
                    私たちは毎日新しいことを学んでいます。";
    let (sjis, _, _) = encoding_rs::SHIFT_JIS.encode(japanese);
    let found = detector().detect(&sjis, None).unwrap();
    assert_eq!(found.encoding(), Some("Shift_JIS"));
    assert_eq!(found.language(), Some("ja"));

    let korean = "안녕하세요. 이것은 인코딩 검출을 위한 한국어 문장입니다. \
                  우리는 매일 새로운 것을 배우고 있습니다.";
    let (euc_kr, _, _) = encoding_rs::EUC_KR.encode(korean);
    let found = detector().detect(&euc_kr, None).unwrap();
    assert_eq!(found.encoding(), Some("EUC-KR"));
    assert_eq!(found.language(), Some("ko"));
}

#[test]
fn test_detection_is_idempotent() {
    let detector = detector();
    for data in [ENGLISH, HTML, "Grüße aus Köln".as_bytes()] {
        assert_eq!(detector.detect_all(data, None), detector.detect_all(data, None));
        assert_eq!(detector.detect(data, None), detector.detect(data, None));
    }
}

#[test]
fn test_hint_never_lowers_rank() {
    let detector = detector();
    let plain = detector.detect_all(ENGLISH, None).unwrap();
    let plain_set: BTreeSet<_> = encodings(&plain).into_iter().collect();

    for &name in EncodingDetector::supported_encodings().unwrap() {
        let hinted = detector.detect_all(ENGLISH, Some(name)).unwrap();
        let hinted_set: BTreeSet<_> = encodings(&hinted).into_iter().collect();
        assert_eq!(plain_set, hinted_set, "hint {name} changed the candidates");

        match (position(&plain, name), position(&hinted, name)) {
            (Some(before), Some(after)) => {
                assert!(after <= before, "hint {name} moved it from {before} to {after}");
                assert_eq!(plain[before].confidence(), hinted[after].confidence());
            }
            (None, None) => {}
            other => panic!("hint {name} changed presence: {other:?}"),
        }
    }
}

#[test]
fn test_hinted_lists_stay_in_confidence_order() {
    let russian = "Это был обычный день. Он пришёл домой, сел за стол и начал читать письмо, \
                   которое получил от своего старого друга.";
    let (koi8, _, _) = encoding_rs::KOI8_R.encode(russian);
    let detector = detector();

    for data in [ENGLISH, &koi8[..]] {
        for &name in EncodingDetector::supported_encodings().unwrap() {
            let hinted = detector.detect_all(data, Some(name)).unwrap();
            assert!(
                hinted.windows(2).all(|w| w[0].confidence() >= w[1].confidence()),
                "hint {name} broke confidence order: {hinted:?}"
            );
        }
    }

    // A weak hinted candidate stays below stronger ones.
    let hinted = detector.detect_all(&koi8, Some("Shift_JIS")).unwrap();
    assert_eq!(hinted[0].encoding(), Some("KOI8-R"));
    let sjis = position(&hinted, "Shift_JIS").unwrap();
    assert!(hinted[..sjis].iter().all(|m| m.confidence() >= hinted[sjis].confidence()));
}

#[test]
fn test_ascii_odd_length_has_no_wide_candidates() {
    let matches = detector().detect_all(b"hello world", None).unwrap();
    let found = encodings(&matches);
    assert!(!found.is_empty());
    assert!(!found.iter().any(|e| e.starts_with("UTF-16") || e.starts_with("UTF-32")));
}

#[test]
fn test_strip_tags_changes_candidates() {
    let mut detector = detector();
    let raw = detector.detect_all(HTML, None).unwrap();
    assert_eq!(position(&raw, "UTF-8"), None);

    detector.set_strip_tags(true);
    let stripped = detector.detect_all(HTML, None).unwrap();
    assert!(position(&stripped, "UTF-8").is_some());
    assert_ne!(raw, stripped);
}

#[test]
fn test_reported_encodings_are_supported() {
    let supported = EncodingDetector::supported_encodings().unwrap();
    let detector = detector();

    let (greek, _, _) = encoding_rs::ISO_8859_7.encode("Η γλώσσα είναι το σημαντικότερο εργαλείο.");
    for data in [ENGLISH, HTML, &greek[..], "Grüße aus Köln".as_bytes()] {
        for found in detector.detect_all(data, None).unwrap() {
            let encoding = found.encoding().unwrap();
            assert!(supported.contains(&encoding), "{encoding} is not supported");
        }
    }
}

#[test]
fn test_invalid_hint_rejected() {
    let detector = detector();
    assert!(matches!(
        detector.detect(ENGLISH, Some("")),
        Err(DetectError::InvalidInput(_))
    ));
    assert!(matches!(
        detector.detect_all(ENGLISH, Some("iso 8859-1")),
        Err(DetectError::InvalidInput(_))
    ));
    // Unknown names are valid; they just match nothing.
    assert!(detector.detect(ENGLISH, Some("x-no-such-charset")).is_ok());
}

#[test]
fn test_engine_without_verdict() {
    #[derive(Debug)]
    struct Silent;

    impl SignatureEngine for Silent {
        fn describe(&self, _data: &[u8]) -> Option<Cow<'static, str>> {
            None
        }
    }

    let mut detector = detector();
    detector.with_signatures(Arc::new(Silent));
    assert!(matches!(
        detector.detect(ENGLISH, None),
        Err(DetectError::Classification(_))
    ));
    assert!(matches!(
        detector.detect_all(ENGLISH, None),
        Err(DetectError::Classification(_))
    ));
}

#[test]
fn test_sample_size_all() {
    let mut detector = detector();
    detector.sample_size(SampleSize::All).unwrap();

    let mut text = ENGLISH.repeat(80);
    text.extend_from_slice(b" \x93closing quote\x94");
    let found = detector.detect_all(&text, None).unwrap();
    assert_eq!(found[0].encoding(), Some("windows-1252"));

    // The default window never reaches the C1 bytes at the end.
    let found = EncodingDetector::new().unwrap().detect_all(&text, None).unwrap();
    assert_eq!(position(&found, "windows-1252"), None);
}

#[test]
fn test_detect_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    let (latin1, _, _) = encoding_rs::WINDOWS_1252.encode(
        "Die deutsche Sprache gehört zu den westgermanischen Sprachen. Sie wird von etwa \
         hundert Millionen Menschen als Muttersprache gesprochen und ist die größte Sprache \
         in der Europäischen Union.",
    );
    file.write_all(&latin1).unwrap();
    file.flush().unwrap();

    let data = read_prefix(file.path(), None).unwrap();
    let found = detector().detect(&data, None).unwrap();
    assert_eq!(found.encoding(), Some("ISO-8859-1"));
    assert_eq!(found.language(), Some("de"));

    let prefix = read_prefix(file.path(), Some(16)).unwrap();
    assert_eq!(prefix.len(), 16);
}

#[test]
fn test_json_output_shape() {
    let found = detector()
        .detect("Grüße aus Köln, schöne Größe".as_bytes(), None)
        .unwrap();
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["type"], "text");
    assert_eq!(json["encoding"], "UTF-8");
    assert_eq!(json["confidence"], 100);
    assert!(json.get("language").is_none());

    // Three multi-byte sequences are not enough for full confidence.
    let found = detector().detect("Grüße aus Köln".as_bytes(), None).unwrap();
    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["encoding"], "UTF-8");
    assert_eq!(json["confidence"], found.confidence());
    assert_eq!(found.confidence(), 80);

    let json = serde_json::to_value(Match::Binary).unwrap();
    assert_eq!(json["type"], "binary");
    assert_eq!(json["confidence"], 100);
    assert!(json.get("encoding").is_none());
}
