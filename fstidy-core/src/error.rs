use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 清理与统计操作的结果类型
pub type Result<T> = std::result::Result<T, FsError>;

/// 清理与统计错误
///
/// 每个变体都带有出错的路径，便于定位是哪个条目失败
#[derive(Error, Debug)]
pub enum FsError {
    /// 无法列出目录，或列出时无法读取某个条目的类型/元数据
    #[error("failed to list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 删除单个条目失败
    #[error("failed to delete {}: {source}", path.display())]
    Deletion {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    pub(crate) fn listing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Listing {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn deletion(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Deletion {
            path: path.into(),
            source,
        }
    }

    /// 出错的路径
    pub fn path(&self) -> &Path {
        match self {
            Self::Listing { path, .. } | Self::Deletion { path, .. } => path,
        }
    }

    /// 底层 I/O 错误类型
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Listing { source, .. } | Self::Deletion { source, .. } => source.kind(),
        }
    }
}
