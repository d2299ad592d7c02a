//! 固定詞彙表：星期、月份、生肖、節氣，以及各語言的佔位文字。

use crate::i18n::Language;

const WEEKDAYS_ZH: [&str; 7] = ["週日", "週一", "週二", "週三", "週四", "週五", "週六"];
const WEEKDAYS_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const WEEKDAYS_FI: [&str; 7] = [
    "Sunnuntai",
    "Maanantai",
    "Tiistai",
    "Keskiviikko",
    "Torstai",
    "Perjantai",
    "Lauantai",
];

const MONTHS_ZH: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
// 芬蘭語日期慣用 partitive 形（25. elokuuta 2026）。
const MONTHS_FI: [&str; 12] = [
    "tammikuuta",
    "helmikuuta",
    "maaliskuuta",
    "huhtikuuta",
    "toukokuuta",
    "kesäkuuta",
    "heinäkuuta",
    "elokuuta",
    "syyskuuta",
    "lokakuuta",
    "marraskuuta",
    "joulukuuta",
];

const ZODIAC_GLYPHS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龍", "蛇", "馬", "羊", "猴", "雞", "狗", "豬",
];
const ZODIAC_EN: [&str; 12] = [
    "Rat", "Ox", "Tiger", "Rabbit", "Dragon", "Snake", "Horse", "Goat", "Monkey", "Rooster",
    "Dog", "Pig",
];
const ZODIAC_FI: [&str; 12] = [
    "Rotta",
    "Härkä",
    "Tiikeri",
    "Kani",
    "Lohikäärme",
    "Käärme",
    "Hevonen",
    "Vuohi",
    "Apina",
    "Kukko",
    "Koira",
    "Sika",
];

const SOLAR_TERMS_ZH: [&str; 24] = [
    "立春", "雨水", "驚蟄", "春分", "清明", "穀雨", "立夏", "小滿", "芒種", "夏至", "小暑",
    "大暑", "立秋", "處暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
    "小寒", "大寒",
];
const SOLAR_TERMS_EN: [&str; 24] = [
    "Start of Spring",
    "Rain Water",
    "Awakening of Insects",
    "Spring Equinox",
    "Clear and Bright",
    "Grain Rain",
    "Start of Summer",
    "Grain Full",
    "Grain in Ear",
    "Summer Solstice",
    "Minor Heat",
    "Major Heat",
    "Start of Autumn",
    "End of Heat",
    "White Dew",
    "Autumn Equinox",
    "Cold Dew",
    "Frost's Descent",
    "Start of Winter",
    "Minor Snow",
    "Major Snow",
    "Winter Solstice",
    "Minor Cold",
    "Major Cold",
];
const SOLAR_TERMS_FI: [&str; 24] = [
    "Kevään alku",
    "Sadevesi",
    "Hyönteisten herääminen",
    "Kevätpäiväntasaus",
    "Kirkas ja valoisa",
    "Viljasade",
    "Kesän alku",
    "Vilja täyttyy",
    "Vilja tähkällä",
    "Kesäpäivänseisaus",
    "Pieni helle",
    "Suuri helle",
    "Syksyn alku",
    "Helteen loppu",
    "Valkoinen kaste",
    "Syyspäiväntasaus",
    "Kylmä kaste",
    "Kuuran tulo",
    "Talven alku",
    "Pieni lumi",
    "Suuri lumi",
    "Talvipäivänseisaus",
    "Pieni pakkanen",
    "Suuri pakkanen",
];

/// 星期名稱。序號 0 為週日，超界時取週期餘數。
pub fn weekday_label(ordinal: u32, lang: Language) -> &'static str {
    let idx = ordinal.rem_euclid(7) as usize;
    match lang {
        Language::Zh => WEEKDAYS_ZH[idx],
        Language::En => WEEKDAYS_EN[idx],
        Language::Fi => WEEKDAYS_FI[idx],
    }
}

/// 月份名稱。序號 0 為一月，超界時取週期餘數。
pub fn month_label(index: u32, lang: Language) -> &'static str {
    let idx = index.rem_euclid(12) as usize;
    match lang {
        Language::Zh => MONTHS_ZH[idx],
        Language::En => MONTHS_EN[idx],
        Language::Fi => MONTHS_FI[idx],
    }
}

/// 生肖字轉為語言別名稱。不在十二生肖集合內的輸入原樣回傳。
pub fn zodiac_label<'a>(glyph: &'a str, lang: Language) -> &'a str {
    match ZODIAC_GLYPHS.iter().position(|g| *g == glyph) {
        Some(idx) => match lang {
            Language::Zh => ZODIAC_GLYPHS[idx],
            Language::En => ZODIAC_EN[idx],
            Language::Fi => ZODIAC_FI[idx],
        },
        None => glyph,
    }
}

/// 節氣名轉為語言別名稱。「—」哨兵值或不在二十四節氣集合內的輸入
/// 回傳語言別的「無節氣」標記，而非翻譯。
pub fn solar_term_label(glyph: &str, lang: Language) -> &'static str {
    match SOLAR_TERMS_ZH.iter().position(|g| *g == glyph) {
        Some(idx) => match lang {
            Language::Zh => SOLAR_TERMS_ZH[idx],
            Language::En => SOLAR_TERMS_EN[idx],
            Language::Fi => SOLAR_TERMS_FI[idx],
        },
        None => no_term(lang),
    }
}

/// 欄位完全沒有文字時的佔位語。
pub fn no_data(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "（無資料）",
        Language::En => "(no data)",
        Language::Fi => "(ei tietoja)",
    }
}

/// 宜／忌清單為空時的唯一顯示條目。
pub fn nothing_today(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "今日無特別事項",
        Language::En => "Nothing in particular today",
        Language::Fi => "Ei mitään erityistä tänään",
    }
}

/// 記錄完全沒有小語時的通用免責說明。
pub fn disclaimer(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "內容僅供文化參考。",
        Language::En => "For cultural reference only.",
        Language::Fi => "Vain kulttuuriseksi viitteeksi.",
    }
}

/// 內建替代記錄使用的載入失敗小語。
pub fn load_failed(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "今日資料載入失敗。",
        Language::En => "Failed to load today's almanac.",
        Language::Fi => "Päivän tietojen lataus epäonnistui.",
    }
}

/// 今日無節氣（或節氣值無法辨識）時的標記。
pub fn no_term(lang: Language) -> &'static str {
    match lang {
        Language::Zh => "無",
        Language::En => "None",
        Language::Fi => "Ei ole",
    }
}
