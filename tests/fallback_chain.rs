//! 多語欄位後備鏈與固定詞彙表的回歸測試。
use std::collections::HashSet;

use huangli_almanac::almanac::labels;
use huangli_almanac::almanac::record::AlmanacRecord;
use huangli_almanac::almanac::view::{resolve_item_text, resolve_note};
use huangli_almanac::almanac::LabeledItem;
use huangli_almanac::i18n::Language;

const ALL_LANGS: [Language; 3] = [Language::Zh, Language::En, Language::Fi];

#[test]
fn item_chain_reaches_zh_when_en_missing() {
    let item = LabeledItem {
        zh: Some("甲".to_string()),
        ..LabeledItem::default()
    };
    // 要求 en：en 缺 → 鏈上下一站是 zh，不直接跳佔位語
    assert_eq!(resolve_item_text(&item, Language::En), "甲");
}

#[test]
fn item_chain_prefers_exact_language() {
    let item = LabeledItem {
        zh: Some("整理書桌".to_string()),
        en: Some("Tidy your desk".to_string()),
        fi: Some("Siivoa työpöytäsi".to_string()),
    };
    assert_eq!(resolve_item_text(&item, Language::Fi), "Siivoa työpöytäsi");
    assert_eq!(resolve_item_text(&item, Language::Zh), "整理書桌");
}

#[test]
fn fi_falls_back_to_en_before_zh() {
    let item = LabeledItem {
        zh: Some("甲".to_string()),
        en: Some("alpha".to_string()),
        fi: None,
    };
    assert_eq!(resolve_item_text(&item, Language::Fi), "alpha");
}

#[test]
fn empty_item_yields_language_placeholder() {
    for lang in ALL_LANGS {
        let text = resolve_item_text(&LabeledItem::default(), lang);
        assert_eq!(text, labels::no_data(lang));
        assert!(!text.is_empty());
    }
}

#[test]
fn note_defaults_to_disclaimer_not_empty() {
    let record = AlmanacRecord::default();
    for lang in ALL_LANGS {
        assert_eq!(resolve_note(&record, lang), labels::disclaimer(lang));
    }
}

#[test]
fn note_follows_same_chain_as_items() {
    let record = AlmanacRecord {
        note_zh: Some("早點休息。".to_string()),
        ..AlmanacRecord::default()
    };
    assert_eq!(resolve_note(&record, Language::En), "早點休息。");
}

#[test]
fn month_tables_are_bijective_per_language() {
    for lang in ALL_LANGS {
        let names: Vec<&str> = (0..12).map(|i| labels::month_label(i, lang)).collect();
        assert!(names.iter().all(|n| !n.is_empty()));
        let unique: HashSet<&&str> = names.iter().collect();
        assert_eq!(unique.len(), 12, "duplicate month name in {lang:?}");
    }
    // 語言間名稱不可混同
    assert_ne!(
        labels::month_label(0, Language::En),
        labels::month_label(0, Language::Fi)
    );
}

#[test]
fn weekday_tables_cover_sunday_first_week() {
    assert_eq!(labels::weekday_label(0, Language::Zh), "週日");
    assert_eq!(labels::weekday_label(0, Language::En), "Sunday");
    assert_eq!(labels::weekday_label(6, Language::Fi), "Lauantai");
}

#[test]
fn zodiac_translates_and_passes_unknown_through() {
    assert_eq!(labels::zodiac_label("龍", Language::Fi), "Lohikäärme");
    assert_eq!(labels::zodiac_label("龍", Language::En), "Dragon");
    assert_eq!(labels::zodiac_label("龍", Language::Zh), "龍");
    assert_eq!(labels::zodiac_label("?", Language::En), "?");
}

#[test]
fn solar_term_unknown_maps_to_none_marker() {
    for lang in ALL_LANGS {
        assert_eq!(labels::solar_term_label("—", lang), labels::no_term(lang));
        assert_eq!(labels::solar_term_label("無此節氣", lang), labels::no_term(lang));
    }
    assert_eq!(labels::solar_term_label("霜降", Language::En), "Frost's Descent");
}
