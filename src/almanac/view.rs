//! 由一筆記錄與一個語言組出完整的顯示模型。純函式，無 I/O、無隱藏狀態。

use chrono::{Datelike, NaiveDate};

use crate::almanac::labels;
use crate::almanac::lunar;
use crate::almanac::record::{AlmanacRecord, LabeledItem};
use crate::i18n::Language;

/// 單一語言、已完成後備解析的顯示模型。所有欄位皆為最終字串。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub lang: Language,
    pub month_title: String,
    pub big_day: u32,
    pub weekday: String,
    pub date_iso: String,
    pub lunar_line: String,
    pub zodiac_line: String,
    pub solar_term_line: String,
    pub favorable: Vec<String>,
    pub unfavorable: Vec<String>,
    pub note: String,
}

/// 多語欄位後備鏈：指定語言 → en → zh → fi，全缺時回語言別佔位語。
/// 絕不回傳空字串。
pub fn resolve_item_text(item: &LabeledItem, lang: Language) -> String {
    for candidate in lang.fallback_chain() {
        if let Some(text) = item.text(candidate) {
            return text.to_string();
        }
    }
    labels::no_data(lang).to_string()
}

/// 今日小語的後備鏈與條目相同，但全缺時改用通用免責說明。
pub fn resolve_note(record: &AlmanacRecord, lang: Language) -> String {
    for candidate in lang.fallback_chain() {
        if let Some(text) = record.note(candidate) {
            return text.to_string();
        }
    }
    labels::disclaimer(lang).to_string()
}

/// 組出完整顯示模型。全函式：缺漏欄位以既定佔位語補齊，不會失敗。
pub fn build_view_model(record: &AlmanacRecord, lang: Language) -> ViewModel {
    let date = record
        .date_iso
        .as_deref()
        .and_then(|iso| NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d").ok())
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let year = date.year();
    let month0 = date.month0();
    let weekday = date.weekday().num_days_from_sunday();

    let month_title = match lang {
        Language::Zh => format!("{year}年 {}月", month0 + 1),
        Language::En | Language::Fi => {
            format!("{} {year}", labels::month_label(month0, lang))
        }
    };

    ViewModel {
        lang,
        month_title,
        big_day: date.day(),
        weekday: labels::weekday_label(weekday, lang).to_string(),
        date_iso: date.format("%Y-%m-%d").to_string(),
        lunar_line: lunar_line(record, lang),
        zodiac_line: zodiac_line(record, lang),
        solar_term_line: solar_term_line(record, lang),
        favorable: resolve_items(&record.yi, lang),
        unfavorable: resolve_items(&record.ji, lang),
        note: resolve_note(record, lang),
    }
}

/// 中文直接顯示原始農曆字串；其他語言顯示解析後的數字模板。
fn lunar_line(record: &AlmanacRecord, lang: Language) -> String {
    let text = record
        .lunar_cn
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let Some(text) = text else {
        return labels::no_data(lang).to_string();
    };
    match lang {
        Language::Zh => text.to_string(),
        Language::En => {
            let d = lunar::parse_lunar_date(text);
            format!("Lunar month {}, day {}", d.month, d.day)
        }
        Language::Fi => {
            let d = lunar::parse_lunar_date(text);
            format!("Kuukalenterin kuukausi {}, päivä {}", d.month, d.day)
        }
    }
}

fn zodiac_line(record: &AlmanacRecord, lang: Language) -> String {
    let glyph = record
        .zodiac_cn
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());
    let Some(glyph) = glyph else {
        return labels::no_data(lang).to_string();
    };
    let name = labels::zodiac_label(glyph, lang);
    match lang {
        Language::Zh => format!("{name}年"),
        Language::En => format!("Year of the {name}"),
        Language::Fi => format!("Vuoden eläin: {name}"),
    }
}

fn solar_term_line(record: &AlmanacRecord, lang: Language) -> String {
    let glyph = record.solar_term_cn.as_deref().map(str::trim).unwrap_or("—");
    let name = labels::solar_term_label(glyph, lang);
    match lang {
        Language::Zh => format!("節氣：{name}"),
        Language::En => format!("Solar term: {name}"),
        Language::Fi => format!("Vuodenaikajakso: {name}"),
    }
}

/// 空清單固定渲染一條「今日無特別事項」，不渲染零條。
fn resolve_items(items: &[LabeledItem], lang: Language) -> Vec<String> {
    if items.is_empty() {
        return vec![labels::nothing_today(lang).to_string()];
    }
    items
        .iter()
        .map(|item| resolve_item_text(item, lang))
        .collect()
}
