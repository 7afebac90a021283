//! 配置服务
//!
//! 配置文件为只读：程序从不把用户输入写回磁盘。

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use print_url_core::{Environment, Mode};
use serde::Deserialize;

use crate::view::theme::Theme;

/// 配置目录名
const CONFIG_DIR: &str = "print-url";
/// 配置文件名
const CONFIG_FILE: &str = "config.json";
/// “已复制”提示的默认显示时长
const DEFAULT_COPIED_TIMEOUT_MS: u64 = 2500;

/// 应用配置
///
/// 所有字段均可省略，缺省值见 `Default`。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 启动及清空时的环境
    pub environment: Environment,
    /// 启动及清空时的模式
    pub mode: Mode,
    /// “已复制”提示的显示时长（毫秒）
    pub copied_timeout_ms: u64,
    /// 界面语言（BCP 47）
    pub language: String,
    pub theme: Theme,
}

impl AppConfig {
    pub fn copied_timeout(&self) -> Duration {
        Duration::from_millis(self.copied_timeout_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            mode: Mode::default(),
            copied_timeout_ms: DEFAULT_COPIED_TIMEOUT_MS,
            language: "en-US".to_string(),
            theme: Theme::Dark,
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务，读取 `<config_dir>/print-url/config.json`
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE)),
        }
    }

    /// 指定配置文件路径
    #[cfg(test)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let Some(path) = self.path.as_ref().filter(|path| path.exists()) else {
            debug!("No config file found, using defaults");
            return Ok(AppConfig::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
