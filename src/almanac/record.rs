use serde::{Deserialize, Serialize};

use crate::almanac::labels;
use crate::i18n::Language;

/// 多語條目：同一個「宜／忌」項目的各語言文字，允許缺漏。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fi: Option<String>,
}

impl LabeledItem {
    /// 取出指定語言的文字。空白字串視同缺漏。
    pub fn text(&self, lang: Language) -> Option<&str> {
        let raw = match lang {
            Language::Zh => self.zh.as_deref(),
            Language::En => self.en.as_deref(),
            Language::Fi => self.fi.as_deref(),
        };
        raw.map(str::trim).filter(|s| !s.is_empty())
    }
}

/// 一天份的黃曆記錄，對應 data/YYYY-MM-DD.json 的持久化格式。
/// 產生端多出的欄位（weekday_en 等）一律忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlmanacRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_iso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunar_cn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac_cn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_term_cn: Option<String>,
    #[serde(default)]
    pub yi: Vec<LabeledItem>,
    #[serde(default)]
    pub ji: Vec<LabeledItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_zh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_fi: Option<String>,
}

impl AlmanacRecord {
    /// 取出指定語言的今日小語。空白字串視同缺漏。
    pub fn note(&self, lang: Language) -> Option<&str> {
        let raw = match lang {
            Language::Zh => self.note_zh.as_deref(),
            Language::En => self.note_en.as_deref(),
            Language::Fi => self.note_fi.as_deref(),
        };
        raw.map(str::trim).filter(|s| !s.is_empty())
    }
}

/// 載入失敗時替代用的內建記錄：空清單、無農曆文字、「—」節氣，
/// 三種語言的小語欄位都填入載入失敗訊息，確保畫面一定能完成。
pub fn fallback_record(iso: &str) -> AlmanacRecord {
    AlmanacRecord {
        date_iso: Some(iso.to_string()),
        lunar_cn: None,
        zodiac_cn: None,
        solar_term_cn: Some("—".to_string()),
        yi: Vec::new(),
        ji: Vec::new(),
        note_zh: Some(labels::load_failed(Language::Zh).to_string()),
        note_en: Some(labels::load_failed(Language::En).to_string()),
        note_fi: Some(labels::load_failed(Language::Fi).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_generator_output() {
        let json = r#"{
            "date_iso": "2026-08-25",
            "weekday_en": "Tuesday",
            "lunar_cn": "七月十三",
            "zodiac_cn": "馬",
            "solar_term_cn": "—",
            "yi": [{"zh": "整理書桌", "en": "Tidy your desk", "fi": "Siivoa työpöytäsi"}],
            "ji": [{"zh": "熬夜", "en": "Staying up late"}],
            "note_en": "A calm day for small tasks.",
            "note_fi": "Rauhallinen päivä pienille askareille."
        }"#;
        let record: AlmanacRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date_iso.as_deref(), Some("2026-08-25"));
        assert_eq!(record.yi.len(), 1);
        assert_eq!(record.ji[0].text(Language::Fi), None);
        assert!(record.note(Language::Zh).is_none());
    }

    #[test]
    fn blank_text_counts_as_missing() {
        let item = LabeledItem {
            en: Some("   ".to_string()),
            ..LabeledItem::default()
        };
        assert_eq!(item.text(Language::En), None);
    }
}
