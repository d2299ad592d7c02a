//! 資料提供端：依 ISO 日期取得一筆黃曆記錄。

use std::fs;
use std::path::{Path, PathBuf};

use crate::almanac::AlmanacRecord;

/// 取得記錄時可能的失敗。NotFound 表示該日期沒有資料檔，
/// 與傳輸／格式錯誤區分，呼叫端一律以內建替代記錄回復。
#[derive(Debug)]
pub enum ProviderError {
    /// 該日期查無記錄
    NotFound(String),
    /// 檔案入出力錯誤
    Io(std::io::Error),
    /// JSON 解析錯誤
    Parse(serde_json::Error),
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderError::NotFound(iso) => write!(f, "查無 {iso} 的記錄"),
            ProviderError::Io(e) => write!(f, "檔案入出力錯誤: {e}"),
            ProviderError::Parse(e) => write!(f, "記錄解析錯誤: {e}"),
        }
    }
}

impl std::error::Error for ProviderError {}

impl From<std::io::Error> for ProviderError {
    fn from(value: std::io::Error) -> Self {
        ProviderError::Io(value)
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(value: serde_json::Error) -> Self {
        ProviderError::Parse(value)
    }
}

/// 依日期取得記錄的唯一查詢介面。不支援範圍查詢或搜尋。
pub trait DataProvider {
    fn get(&self, iso: &str) -> Result<AlmanacRecord, ProviderError>;
}

/// 從資料目錄讀取 `<dir>/<iso>.json` 的檔案提供端。
#[derive(Debug, Clone)]
pub struct FileProvider {
    data_dir: PathBuf,
}

impl FileProvider {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }
}

impl DataProvider for FileProvider {
    fn get(&self, iso: &str) -> Result<AlmanacRecord, ProviderError> {
        let path = self.data_dir.join(format!("{iso}.json"));
        if !path.exists() {
            return Err(ProviderError::NotFound(iso.to_string()));
        }
        let content = fs::read_to_string(path)?;
        let record: AlmanacRecord = serde_json::from_str(&content)?;
        Ok(record)
    }
}
