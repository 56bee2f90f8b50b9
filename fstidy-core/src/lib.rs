use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod cleaner;
pub mod error;
pub mod scanner;
pub mod stats;

pub use cleaner::{
    CleanConfig, DirectoryCleaner, ExclusionSet, delete, delete_all, delete_all_except_ignored,
};
pub use error::{FsError, Result};
pub use scanner::{ScanConfig, ScanProgress, StatsScanner, count_files_and_folders};
pub use stats::DirectoryStats;

/// 清理结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleanResult {
    /// 已删除（dry run 时为将被删除）的条目
    pub removed: Vec<PathBuf>,
    /// 因名称在保留集合中而跳过的条目
    pub kept: Vec<PathBuf>,
    pub duration_ms: u64,
}

impl Default for CleanResult {
    fn default() -> Self {
        Self::new()
    }
}

impl CleanResult {
    pub fn new() -> Self {
        Self {
            removed: Vec::new(),
            kept: Vec::new(),
            duration_ms: 0,
        }
    }

    pub fn add_removed(&mut self, path: PathBuf) {
        self.removed.push(path);
    }

    pub fn add_kept(&mut self, path: PathBuf) {
        self.kept.push(path);
    }
}

/// 格式化字节大小为人类可读格式
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}
