//!
//! src/backend/mod.rs
//! Backend 层：与外部世界打交道的服务
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod clipboard_service;   // 系统剪贴板（arboard）
//!         mod config_service;      // 只读配置文件（config.json）
//!
//! 两个服务都以 trait 暴露，Update 层只依赖 trait，
//! 测试中可以替换为内存实现而无需真实的剪贴板或配置目录。
//!
//! URL 构建不在这里：它是纯函数，直接调用 `print-url-core`。

mod clipboard_service;
mod config_service;

pub use clipboard_service::{ClipboardService, SystemClipboard};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};

#[cfg(test)]
pub use clipboard_service::MemoryClipboard;
