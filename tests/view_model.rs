//! 顯示模型組裝與檔案提供端的整合測試。
use huangli_almanac::almanac::record::{fallback_record, AlmanacRecord};
use huangli_almanac::almanac::{build_view_model, LabeledItem};
use huangli_almanac::i18n::Language;
use huangli_almanac::provider::{DataProvider, FileProvider, ProviderError};

fn sample_record() -> AlmanacRecord {
    AlmanacRecord {
        date_iso: Some("2026-08-25".to_string()),
        lunar_cn: Some("七月十三".to_string()),
        zodiac_cn: Some("馬".to_string()),
        solar_term_cn: Some("處暑".to_string()),
        yi: vec![LabeledItem {
            zh: Some("散步".to_string()),
            en: Some("Take a walk".to_string()),
            fi: Some("Käy kävelyllä".to_string()),
        }],
        ji: vec![LabeledItem {
            zh: Some("熬夜".to_string()),
            en: Some("Staying up late".to_string()),
            fi: None,
        }],
        note_zh: None,
        note_en: Some("A calm day.".to_string()),
        note_fi: None,
    }
}

#[test]
fn builds_chinese_view() {
    let view = build_view_model(&sample_record(), Language::Zh);
    assert_eq!(view.month_title, "2026年 8月");
    assert_eq!(view.big_day, 25);
    assert_eq!(view.weekday, "週二");
    assert_eq!(view.date_iso, "2026-08-25");
    // 中文顯示原始農曆字串，不經解析
    assert_eq!(view.lunar_line, "七月十三");
    assert_eq!(view.zodiac_line, "馬年");
    assert_eq!(view.solar_term_line, "節氣：處暑");
    assert_eq!(view.favorable, vec!["散步".to_string()]);
    // note_en 在 zh 的後備鏈上
    assert_eq!(view.note, "A calm day.");
}

#[test]
fn builds_english_and_finnish_views() {
    let record = sample_record();
    let en = build_view_model(&record, Language::En);
    assert_eq!(en.month_title, "August 2026");
    assert_eq!(en.weekday, "Tuesday");
    assert_eq!(en.lunar_line, "Lunar month 7, day 13");
    assert_eq!(en.zodiac_line, "Year of the Horse");
    assert_eq!(en.solar_term_line, "Solar term: End of Heat");

    let fi = build_view_model(&record, Language::Fi);
    assert_eq!(fi.month_title, "elokuuta 2026");
    assert_eq!(fi.weekday, "Tiistai");
    assert_eq!(fi.lunar_line, "Kuukalenterin kuukausi 7, päivä 13");
    assert_eq!(fi.zodiac_line, "Vuoden eläin: Hevonen");
    // ji 的 fi 缺 → en
    assert_eq!(fi.unfavorable, vec!["Staying up late".to_string()]);
}

#[test]
fn build_is_idempotent() {
    let record = sample_record();
    let first = build_view_model(&record, Language::Fi);
    let second = build_view_model(&record, Language::Fi);
    assert_eq!(first, second);
}

#[test]
fn empty_lists_render_exactly_one_placeholder_entry() {
    let record = AlmanacRecord {
        date_iso: Some("2026-08-25".to_string()),
        ..AlmanacRecord::default()
    };
    let view = build_view_model(&record, Language::Zh);
    assert_eq!(view.favorable, vec!["今日無特別事項".to_string()]);
    assert_eq!(view.unfavorable.len(), 1);
}

#[test]
fn fallback_record_always_renders() {
    let record = fallback_record("2026-08-25");
    for lang in [Language::Zh, Language::En, Language::Fi] {
        let view = build_view_model(&record, lang);
        assert_eq!(view.date_iso, "2026-08-25");
        assert!(!view.lunar_line.is_empty());
        assert_eq!(view.favorable.len(), 1);
    }
    let en = build_view_model(&record, Language::En);
    assert_eq!(en.note, "Failed to load today's almanac.");
    assert_eq!(en.solar_term_line, "Solar term: None");
}

#[test]
fn file_provider_reads_and_signals_not_found() {
    let dir = std::env::temp_dir().join("huangli_provider_test");
    std::fs::create_dir_all(&dir).unwrap();
    let json = serde_json::to_string(&sample_record()).unwrap();
    std::fs::write(dir.join("2026-08-25.json"), json).unwrap();

    let provider = FileProvider::new(&dir);
    let record = provider.get("2026-08-25").unwrap();
    assert_eq!(record.lunar_cn.as_deref(), Some("七月十三"));

    match provider.get("1999-01-01") {
        Err(ProviderError::NotFound(iso)) => assert_eq!(iso, "1999-01-01"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = std::env::temp_dir().join("huangli_provider_bad_json");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("2026-01-01.json"), "{not json").unwrap();

    let provider = FileProvider::new(&dir);
    assert!(matches!(
        provider.get("2026-01-01"),
        Err(ProviderError::Parse(_))
    ));
}
