//! 黃曆核心邏輯獨立為函式庫，CLI 之外日後也可供其他前端使用。

pub mod almanac;
pub mod app;
pub mod config;
pub mod i18n;
pub mod provider;
pub mod ui_cli;
