use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 介面字串鍵的命名空間。
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MENU_LANG_ZH: &str = "menu.lang_zh";
    pub const MENU_LANG_EN: &str = "menu.lang_en";
    pub const MENU_LANG_FI: &str = "menu.lang_fi";
    pub const MENU_RELOAD: &str = "menu.reload";
    pub const MENU_EXIT: &str = "menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";

    pub const HEADING_FAVORABLE: &str = "view.heading_favorable";
    pub const HEADING_UNFAVORABLE: &str = "view.heading_unfavorable";
    pub const HEADING_NOTE: &str = "view.heading_note";
    pub const LANG_ACTIVE: &str = "view.lang_active";

    pub const WARN_LOAD_FAILED: &str = "warn.load_failed";
    pub const INFO_RELOADED: &str = "info.reloaded";
}

/// 支援的顯示語言。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Zh,
    En,
    Fi,
}

/// 語言代碼不在支援集合內。屬於呼叫方契約違反，必須及早失敗。
#[derive(Debug)]
pub struct UnsupportedLanguage(pub String);

impl std::fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "不支援的語言代碼: {} (可用: zh / en / fi)", self.0)
    }
}

impl std::error::Error for UnsupportedLanguage {}

impl Language {
    /// 解析語言代碼。zh/en/fi 之外的代碼一律視為錯誤，不做靜默預設。
    pub fn from_code(code: &str) -> Result<Self, UnsupportedLanguage> {
        let c = code.trim().to_lowercase();
        match c.split(['-', '_', '.']).next().unwrap_or_default() {
            "zh" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            "fi" => Ok(Language::Fi),
            _ => Err(UnsupportedLanguage(code.to_string())),
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Fi => "fi",
        }
    }

    /// 查詢用的語言鏈：先指定語言，其餘依 en → zh → fi 順位補上。
    pub fn fallback_chain(&self) -> [Language; 3] {
        match self {
            Language::Zh => [Language::Zh, Language::En, Language::Fi],
            Language::En => [Language::En, Language::Zh, Language::Fi],
            Language::Fi => [Language::Fi, Language::En, Language::Zh],
        }
    }
}

/// 提供介面字串的執行期語言包。
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    pub fn new(lang: Language) -> Self {
        Self {
            lang,
            overrides: None,
        }
    }

    /// 語言 + 語言包目錄（locales/ 等）建立翻譯器。
    /// 目錄或檔案不存在時只用內建字串。
    pub fn new_with_pack(lang: Language, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang.as_code()))
            .or_else(|| load_overrides("locales", lang.as_code()));
        Self { lang, overrides }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 取得介面字串。查詢順位與內容欄位相同：指定語言 → en → zh → fi。
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        for lang in self.lang.fallback_chain() {
            let hit = match lang {
                Language::Zh => zh(key),
                Language::En => en(key),
                Language::Fi => fi(key),
            };
            if let Some(s) = hit {
                return s;
            }
        }
        "[missing translation]"
    }
}

/// 依 CLI 旗標 → 設定檔 → 系統地區設定的順位決定語言。
/// 全部缺席時回到 zh（原始產品的預設語言）。
pub fn resolve_language(
    cli_arg: &str,
    config_lang: Option<&str>,
) -> Result<Language, UnsupportedLanguage> {
    let trimmed = cli_arg.trim();
    if !trimmed.is_empty() && trimmed != "auto" {
        return Language::from_code(trimmed);
    }
    if let Some(code) = config_lang {
        let code = code.trim();
        if !code.is_empty() && code != "auto" {
            return Language::from_code(code);
        }
    }
    Ok(detect_system_language().unwrap_or(Language::Zh))
}

/// 從系統地區設定推測語言。推測失敗不是錯誤，回傳 None。
pub fn detect_system_language() -> Option<Language> {
    if let Some(loc) = get_locale() {
        if let Ok(lang) = Language::from_code(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(loc) = std::env::var(var) {
            if let Ok(lang) = Language::from_code(&loc) {
                return Some(lang);
            }
        }
    }
    None
}

/// 載入 TOML 語言包。格式為 key = "value" 的平面表，允許巢狀表展開為點記法。
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn zh(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "錯誤",
        APP_EXIT => "結束程式。",
        MENU_LANG_ZH => "1) 中文",
        MENU_LANG_EN => "2) English",
        MENU_LANG_FI => "3) Suomi",
        MENU_RELOAD => "r) 重新載入",
        MENU_EXIT => "0) 離開",
        PROMPT_MENU_SELECT => "選擇語言或指令: ",
        INVALID_SELECTION_RETRY => "無效的輸入，請重新選擇。",
        HEADING_FAVORABLE => "宜",
        HEADING_UNFAVORABLE => "忌",
        HEADING_NOTE => "今日小語",
        LANG_ACTIVE => "目前語言",
        WARN_LOAD_FAILED => "今日資料載入失敗，改用內建預設內容。",
        INFO_RELOADED => "已重新載入今日資料。",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MENU_LANG_ZH => "1) 中文",
        MENU_LANG_EN => "2) English",
        MENU_LANG_FI => "3) Suomi",
        MENU_RELOAD => "r) Reload",
        MENU_EXIT => "0) Quit",
        PROMPT_MENU_SELECT => "Select language or command: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        HEADING_FAVORABLE => "Favorable",
        HEADING_UNFAVORABLE => "Avoid",
        HEADING_NOTE => "Note of the day",
        LANG_ACTIVE => "Active language",
        WARN_LOAD_FAILED => "Failed to load today's record; using the built-in fallback.",
        INFO_RELOADED => "Reloaded today's record.",
        _ => return None,
    })
}

fn fi(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Virhe",
        APP_EXIT => "Lopetetaan.",
        MENU_LANG_ZH => "1) 中文",
        MENU_LANG_EN => "2) English",
        MENU_LANG_FI => "3) Suomi",
        MENU_RELOAD => "r) Lataa uudelleen",
        MENU_EXIT => "0) Lopeta",
        PROMPT_MENU_SELECT => "Valitse kieli tai komento: ",
        INVALID_SELECTION_RETRY => "Virheellinen syöte, yritä uudelleen.",
        HEADING_FAVORABLE => "Suotuisaa",
        HEADING_UNFAVORABLE => "Vältettävää",
        HEADING_NOTE => "Päivän ajatus",
        LANG_ACTIVE => "Valittu kieli",
        WARN_LOAD_FAILED => "Päivän tietojen lataus epäonnistui; käytetään varasisältöä.",
        INFO_RELOADED => "Päivän tiedot ladattiin uudelleen.",
        _ => return None,
    })
}
