//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     - terminal.rs   终端的初始化和恢复
//!     - logging.rs    文件日志
//!
//! 注意：无论程序是正常退出还是发生错误，都必须调用 `restore_terminal`，
//!       否则终端会保持在原始模式，用户输入不会正常显示。
//!
//! 日志不能写到 stdout/stderr：两者都在备用屏幕里，会把界面打乱。
//! 因此日志通过 tracing-appender 写入 `<cache_dir>/print-url/print-url.log`，
//! 过滤级别由 `RUST_LOG` 控制，默认 info。

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
