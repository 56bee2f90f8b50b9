use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::CleanResult;
use crate::error::{FsError, Result};

/// 清理时保留的条目名称集合（按文件名精确匹配，不是路径也不是通配符）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionSet {
    names: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// 判断条目名称是否在保留集合中
    pub fn contains(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.names.contains(name))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ExclusionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}

/// 清理器配置
#[derive(Debug, Clone, Default)]
pub struct CleanConfig {
    /// 不删除的直接子项名称
    pub exclusions: ExclusionSet,
    /// 只列出将被删除的条目，不实际删除
    pub dry_run: bool,
}

/// 目录清理器：删除目录下的直接子项（子目录连同其内容一起删除），目录本身保留
pub struct DirectoryCleaner {
    config: CleanConfig,
}

impl DirectoryCleaner {
    /// 创建新的清理器
    pub fn new(config: CleanConfig) -> Self {
        Self { config }
    }

    /// 清理目录
    ///
    /// 按目录列出的顺序逐个处理子项，遇到第一个错误立即返回；
    /// 之前已删除的条目不会恢复，之后的条目不再处理。
    pub fn clean<P: AsRef<Path>>(&self, directory: P) -> Result<CleanResult> {
        let directory = directory.as_ref();
        let start_time = Instant::now();
        let mut result = CleanResult::new();

        if self.config.dry_run {
            info!("DRY RUN: 预览清理目录 {:?}", directory);
        } else {
            info!(
                "开始清理目录: {:?} (保留 {} 个名称)",
                directory,
                self.config.exclusions.len()
            );
        }

        let entries = fs::read_dir(directory).map_err(|e| {
            warn!("无法读取目录 {:?}: {}", directory, e);
            FsError::listing(directory, e)
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| FsError::listing(directory, e))?;
            let path = entry.path();

            if self.config.exclusions.contains(&entry.file_name()) {
                debug!("保留: {:?}", path);
                result.add_kept(path);
                continue;
            }

            if !self.config.dry_run {
                let file_type = entry
                    .file_type()
                    .map_err(|e| FsError::listing(&path, e))?;
                remove_entry(&path, file_type.is_dir())?;
            } else {
                debug!("将删除: {:?}", path);
            }

            result.add_removed(path);
        }

        result.duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "清理完成: 删除 {} 项，保留 {} 项，耗时 {}ms",
            result.removed.len(),
            result.kept.len(),
            result.duration_ms
        );

        Ok(result)
    }

    /// 预览清理操作（dry run）
    pub fn preview<P: AsRef<Path>>(&self, directory: P) -> Result<CleanResult> {
        let mut config = self.config.clone();
        config.dry_run = true;

        let cleaner = DirectoryCleaner::new(config);
        cleaner.clean(directory)
    }
}

impl Default for DirectoryCleaner {
    fn default() -> Self {
        Self::new(CleanConfig::default())
    }
}

/// 删除目录下名称不在 `exclusions` 中的所有直接子项，子目录连同其内容一起删除；
/// 被保留的条目及其整棵子树不受影响
pub fn delete_all_except_ignored<P: AsRef<Path>>(
    directory: P,
    exclusions: &ExclusionSet,
) -> Result<()> {
    let cleaner = DirectoryCleaner::new(CleanConfig {
        exclusions: exclusions.clone(),
        dry_run: false,
    });
    cleaner.clean(directory).map(|_| ())
}

/// 删除目录下的所有直接子项
pub fn delete_all<P: AsRef<Path>>(directory: P) -> Result<()> {
    DirectoryCleaner::default().clean(directory).map(|_| ())
}

/// 删除单个文件或整棵目录树，路径不存在视为已删除
pub fn delete<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("路径不存在，跳过: {:?}", path);
            return Ok(());
        }
        Err(e) => return Err(FsError::deletion(path, e)),
    };

    remove_entry(path, metadata.is_dir())
}

/// 删除单个条目（目录递归删除，符号链接只删除链接本身）；
/// 列出之后已被其他进程删除的条目视为删除成功
fn remove_entry(path: &Path, is_dir: bool) -> Result<()> {
    let removed = if is_dir {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match removed {
        Ok(()) => {
            debug!("删除: {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("已不存在，跳过: {:?}", path);
            Ok(())
        }
        Err(e) => {
            warn!("删除失败 {:?}: {}", path, e);
            Err(FsError::deletion(path, e))
        }
    }
}
