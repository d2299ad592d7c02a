use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 應用程式設定。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 顯示語言（zh / en / fi / auto），缺席時依系統地區設定推測。
    pub language: Option<String>,
    /// 記錄檔所在目錄
    pub data_dir: String,
    /// 選用的介面語言包目錄
    pub locales_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            data_dir: "data".to_string(),
            locales_dir: None,
        }
    }
}

/// 設定載入／儲存時可能的失敗。
#[derive(Debug)]
pub enum ConfigError {
    /// 檔案入出力錯誤
    Io(std::io::Error),
    /// TOML 解析錯誤
    Serde(toml::de::Error),
    /// TOML 序列化錯誤
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "設定檔入出力錯誤: {e}"),
            ConfigError::Serde(e) => write!(f, "設定檔解析錯誤: {e}"),
            ConfigError::Serialize(e) => write!(f, "設定檔序列化錯誤: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// 載入 config.toml，不存在時建立並寫出預設設定。
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 把目前設定寫回 config.toml。
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
