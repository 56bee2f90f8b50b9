use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::error::{FsError, Result};
use crate::stats::DirectoryStats;

/// 统计扫描配置
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// 最大深度：0 只统计根目录的直接子项，1 再多统计一层，以此类推
    pub max_depth: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: 10, // 默认最大深度10层
        }
    }
}

/// 扫描进度信息
#[derive(Debug, Clone)]
pub struct ScanProgress<'a> {
    pub current_dir: &'a Path,
    pub depth: usize,
    pub stats: &'a DirectoryStats,
}

/// 目录统计扫描器
pub struct StatsScanner {
    config: ScanConfig,
}

impl StatsScanner {
    /// 创建新的扫描器
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// 统计指定目录下的文件数、目录数和总大小
    pub fn scan<P: AsRef<Path>>(&self, root: P) -> Result<DirectoryStats> {
        self.scan_with_progress(root, |_| {})
    }

    /// 统计指定目录（带进度回调，每列出一个目录回调一次）
    pub fn scan_with_progress<P, F>(
        &self,
        root: P,
        mut progress_callback: F,
    ) -> Result<DirectoryStats>
    where
        P: AsRef<Path>,
        F: FnMut(&ScanProgress<'_>),
    {
        let root = root.as_ref();
        let max_depth = self.config.max_depth;
        let start_time = Instant::now();
        info!("开始统计路径: {:?} (最大深度 {})", root, max_depth);

        let mut stats = DirectoryStats::default();
        let mut pending: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

        while let Some((dir, depth)) = pending.pop() {
            // 超出深度的目录本身已由上一层计数，这里不再列出其内容
            if depth > max_depth {
                continue;
            }

            let children = match Self::list_directory(&dir, &mut stats) {
                Ok(children) => children,
                Err(e) => {
                    warn!("统计中止: {}", e);
                    return Err(e);
                }
            };

            debug!(
                "已列出目录 {:?} (深度 {}，子目录 {} 个)",
                dir,
                depth,
                children.len()
            );

            progress_callback(&ScanProgress {
                current_dir: &dir,
                depth,
                stats: &stats,
            });

            let next_depth = depth.saturating_add(1);
            pending.extend(children.into_iter().rev().map(|child| (child, next_depth)));
        }

        info!(
            "统计完成: {} 个文件，{} 个目录，共 {}，耗时 {}ms",
            stats.file_count(),
            stats.directory_count(),
            stats.formatted_size(),
            start_time.elapsed().as_millis()
        );

        Ok(stats)
    }

    /// 列出单个目录：计数其直接子项，返回需要继续下钻的子目录
    fn list_directory(dir: &Path, stats: &mut DirectoryStats) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(dir).map_err(|e| FsError::listing(dir, e))?;
        let mut subdirs = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| FsError::listing(dir, e))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .map_err(|e| FsError::listing(&path, e))?;

            if file_type.is_dir() {
                stats.record_directory();
                subdirs.push(path);
            } else {
                let size = entry
                    .metadata()
                    .map_err(|e| FsError::listing(&path, e))?
                    .len();
                stats.record_file(size);
            }
        }

        Ok(subdirs)
    }
}

impl Default for StatsScanner {
    fn default() -> Self {
        Self::new(ScanConfig::default())
    }
}

/// 统计 `root` 下的文件数、目录数和文件总大小，最多向下 `max_depth` 层
///
/// 恰好位于深度上限的目录会被计数，但不会列出其内容；因此 `max_depth`
/// 达到或超过目录树实际深度后结果不再变化。出错时不返回部分结果。
pub fn count_files_and_folders<P: AsRef<Path>>(
    root: P,
    max_depth: usize,
) -> Result<DirectoryStats> {
    StatsScanner::new(ScanConfig { max_depth }).scan(root)
}
