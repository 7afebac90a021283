//! 统一错误类型定义

use serde::Serialize;
use thiserror::Error;

/// URL 构建器错误类型
///
/// 载荷转换本身从不失败，只有选择项名称的解析（配置文件、命令行输入）会返回错误。
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum PrintUrlError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// URL 构建器 Result 类型别名
pub type PrintUrlResult<T> = std::result::Result<T, PrintUrlError>;
