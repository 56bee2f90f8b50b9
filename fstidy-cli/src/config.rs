use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 命令行配置文件（TOML）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// `stats` 的默认最大深度
    pub max_depth: usize,
    /// `clean` 时总是保留的名称
    pub keep: Vec<String>,
    /// 删除前是否需要确认
    pub confirm: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_depth: 10,
            keep: Vec::new(),
            confirm: true,
        }
    }
}

impl CliConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fstidy").join("config.toml"))
    }

    /// 加载配置：显式指定的文件必须存在，默认位置的文件缺失时使用默认配置
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => {
                tracing::debug!("使用默认配置");
                Ok(Self::default())
            }
        }
    }

    /// 从文件加载配置
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        let config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))?;
        tracing::info!("已加载配置文件: {:?}", path);
        Ok(config)
    }
}
