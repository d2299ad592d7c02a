//! 終端渲染層：把顯示模型填進固定的輸出欄位，並處理語言切換選單。

use std::io::{self, Write};

use crate::almanac::ViewModel;
use crate::app::AppError;
use crate::i18n::{keys, Language, Translator};

/// 選單選項。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Switch(Language),
    Reload,
    Exit,
}

/// 把顯示模型寫進各欄位。模型內的字串都已完成語言解析，
/// 這裡只負責版面。
pub fn render(view: &ViewModel, tr: &Translator) {
    println!();
    println!("==========================================");
    println!("  {}", view.month_title);
    println!("  {}  {}  ({})", view.big_day, view.weekday, view.date_iso);
    println!("------------------------------------------");
    println!("  {}", view.lunar_line);
    println!("  {}", view.zodiac_line);
    println!("  {}", view.solar_term_line);
    println!("------------------------------------------");
    println!("  {}:", tr.t(keys::HEADING_FAVORABLE));
    for item in &view.favorable {
        println!("   - {item}");
    }
    println!("  {}:", tr.t(keys::HEADING_UNFAVORABLE));
    for item in &view.unfavorable {
        println!("   - {item}");
    }
    println!("------------------------------------------");
    println!("  {}: {}", tr.t(keys::HEADING_NOTE), view.note);
    println!("  {}: {}", tr.t(keys::LANG_ACTIVE), view.lang.as_code());
    println!("==========================================");
}

/// 顯示選單並回傳選擇。無效輸入原地重問。
pub fn menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!();
    println!("{}", tr.t(keys::MENU_LANG_ZH));
    println!("{}", tr.t(keys::MENU_LANG_EN));
    println!("{}", tr.t(keys::MENU_LANG_FI));
    println!("{}", tr.t(keys::MENU_RELOAD));
    println!("{}", tr.t(keys::MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Switch(Language::Zh)),
            "2" => return Ok(MenuChoice::Switch(Language::En)),
            "3" => return Ok(MenuChoice::Switch(Language::Fi)),
            "r" | "R" => return Ok(MenuChoice::Reload),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}
