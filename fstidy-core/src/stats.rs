use serde::{Deserialize, Serialize};

const KIB: f64 = 1024.0;

/// 一次统计的汇总结果
///
/// 只在统计过程中累加，返回给调用方的是不可再修改的快照
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    file_count: u64,
    directory_count: u64,
    total_size: u64,
}

impl DirectoryStats {
    /// 由已知数值构造统计结果
    pub fn new(file_count: u64, directory_count: u64, total_size: u64) -> Self {
        Self {
            file_count,
            directory_count,
            total_size,
        }
    }

    pub(crate) fn record_file(&mut self, size: u64) {
        self.file_count += 1;
        self.total_size = self.total_size.saturating_add(size);
    }

    pub(crate) fn record_directory(&mut self) {
        self.directory_count += 1;
    }

    /// 深度范围内的非目录条目数
    pub fn file_count(&self) -> u64 {
        self.file_count
    }

    /// 深度范围内的目录数
    pub fn directory_count(&self) -> u64 {
        self.directory_count
    }

    /// 已计数文件的总字节数
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn total_size_bytes(&self) -> f64 {
        self.total_size as f64
    }

    pub fn total_size_kb(&self) -> f64 {
        self.total_size_bytes() / KIB
    }

    pub fn total_size_mb(&self) -> f64 {
        self.total_size_bytes() / KIB.powi(2)
    }

    pub fn total_size_gb(&self) -> f64 {
        self.total_size_bytes() / KIB.powi(3)
    }

    pub fn total_size_tb(&self) -> f64 {
        self.total_size_bytes() / KIB.powi(4)
    }

    /// 人类可读的总大小
    pub fn formatted_size(&self) -> String {
        crate::format_bytes(self.total_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let stats = DirectoryStats::default();
        assert_eq!(stats.file_count(), 0);
        assert_eq!(stats.directory_count(), 0);
        assert_eq!(stats.total_size(), 0);
        assert_eq!(stats.total_size_kb(), 0.0);
    }

    #[test]
    fn test_record_accumulates() {
        let mut stats = DirectoryStats::default();
        stats.record_file(5);
        stats.record_file(5);
        stats.record_directory();

        assert_eq!(stats, DirectoryStats::new(2, 1, 10));
    }

    #[test]
    fn test_unit_views() {
        let stats = DirectoryStats::new(1, 0, 3 * 1024 * 1024 * 1024);

        assert_eq!(stats.total_size_bytes(), 3_221_225_472.0);
        assert_eq!(stats.total_size_kb(), stats.total_size_bytes() / 1024.0);
        assert_eq!(stats.total_size_mb(), stats.total_size_kb() / 1024.0);
        assert_eq!(stats.total_size_gb(), 3.0);
        assert_eq!(stats.total_size_tb(), stats.total_size_bytes() / 1024f64.powi(4));
    }

    #[test]
    fn test_unit_views_are_not_rounded() {
        let stats = DirectoryStats::new(1, 0, 1536);
        assert_eq!(stats.total_size_kb(), 1.5);
        assert_eq!(stats.total_size_mb(), 1536.0 / 1_048_576.0);
    }

    #[test]
    fn test_formatted_size() {
        assert_eq!(DirectoryStats::new(2, 1, 10).formatted_size(), "10 B");
        assert_eq!(DirectoryStats::new(1, 0, 1536).formatted_size(), "1.50 KB");
    }

    #[test]
    fn test_serialize_stats() {
        let json = serde_json::to_string(&DirectoryStats::new(3, 1, 14)).unwrap();
        assert_eq!(
            json,
            r#"{"file_count":3,"directory_count":1,"total_size":14}"#
        );
    }
}
