use clap::Parser;

use huangli_almanac::{almanac, app, config, i18n};

/// 多語黃曆日檢視器：載入一天份的記錄並以 zh / en / fi 渲染。
#[derive(Debug, Parser)]
#[command(name = "huangli", version)]
struct Cli {
    /// 顯示語言（zh / en / fi / auto）
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 要顯示的日期（YYYY-MM-DD），預設今天
    #[arg(long)]
    date: Option<String>,
    /// 記錄檔目錄，覆寫設定檔
    #[arg(long)]
    data_dir: Option<String>,
    /// 介面語言包目錄，覆寫設定檔
    #[arg(long)]
    locales_dir: Option<String>,
    /// 渲染一次後結束，不進入互動選單
    #[arg(long)]
    once: bool,
}

/// 程式進入點：載入設定後執行 CLI 應用。
fn main() {
    if let Err(err) = try_run() {
        eprintln!("錯誤: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    if let Some(dir) = cli.data_dir {
        cfg.data_dir = dir;
    }
    if let Some(dir) = cli.locales_dir {
        cfg.locales_dir = Some(dir);
    }
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref())?;
    let opts = app::RunOptions {
        date_iso: cli.date.unwrap_or_else(almanac::today_iso),
        once: cli.once,
    };
    app::run(&mut cfg, lang, &opts)?;
    Ok(())
}
