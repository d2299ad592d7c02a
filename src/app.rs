use crate::almanac::{self, build_view_model, AlmanacRecord};
use crate::config::Config;
use crate::i18n::{self, Language, Translator, UnsupportedLanguage};
use crate::provider::{DataProvider, FileProvider};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 應用程式執行中可能的失敗。提供端錯誤不在此列：
/// 載入失敗一律就地以內建替代記錄回復，不往外傳。
#[derive(Debug)]
pub enum AppError {
    /// 標準輸入輸出錯誤
    Io(std::io::Error),
    /// 設定載入／儲存錯誤
    Config(crate::config::ConfigError),
    /// 語言代碼契約違反
    Language(UnsupportedLanguage),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "入出力錯誤: {e}"),
            AppError::Config(e) => write!(f, "設定錯誤: {e}"),
            AppError::Language(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<UnsupportedLanguage> for AppError {
    fn from(value: UnsupportedLanguage) -> Self {
        AppError::Language(value)
    }
}

/// 單次執行的參數。
pub struct RunOptions {
    /// 要顯示的日期（ISO），預設今天
    pub date_iso: String,
    /// 渲染一次後直接結束，不進入互動選單
    pub once: bool,
}

/// 主流程：載入一次記錄，之後語言切換只從持有的記錄同步重算，
/// 重新載入才會整筆替換記錄。渲染保證完成。
pub fn run(cfg: &mut Config, lang: Language, opts: &RunOptions) -> Result<(), AppError> {
    let mut lang = lang;
    let mut tr = Translator::new_with_pack(lang, cfg.locales_dir.as_deref());
    let provider = FileProvider::new(&cfg.data_dir);
    let mut current = load_or_fallback(&provider, &opts.date_iso, &tr);

    loop {
        let view = build_view_model(&current, lang);
        ui_cli::render(&view, &tr);
        if opts.once {
            break;
        }
        match ui_cli::menu(&tr)? {
            MenuChoice::Switch(new_lang) => {
                lang = new_lang;
                tr = Translator::new_with_pack(lang, cfg.locales_dir.as_deref());
            }
            MenuChoice::Reload => {
                current = load_or_fallback(&provider, &opts.date_iso, &tr);
                println!("{}", tr.t(i18n::keys::INFO_RELOADED));
            }
            MenuChoice::Exit => {
                cfg.language = Some(lang.as_code().to_string());
                cfg.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 載入失敗只回報一次，改用內建替代記錄，不重試也不中斷。
fn load_or_fallback(
    provider: &dyn DataProvider,
    iso: &str,
    tr: &Translator,
) -> AlmanacRecord {
    match provider.get(iso) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            eprintln!("{}", tr.t(i18n::keys::WARN_LOAD_FAILED));
            almanac::record::fallback_record(iso)
        }
    }
}
