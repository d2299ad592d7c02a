//! 黃曆資料模型與翻譯核心。

pub mod labels;
pub mod lunar;
pub mod record;
pub mod view;

pub use record::{AlmanacRecord, LabeledItem};
pub use view::{build_view_model, ViewModel};

/// 取得本地時區的今天，ISO（YYYY-MM-DD）形式。
pub fn today_iso() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
