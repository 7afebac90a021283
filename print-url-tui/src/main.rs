//! Print URL TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 表单状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与剪贴板 (`backend/`)
//!
//! URL 的拼接全部交给 `print-url-core`，本 crate 只负责持有三项输入状态
//! （环境、模式、载荷文本），在每次变更后重新取得 URL 并展示。
//!
//!
//! main.rs 的执行顺序：
//!
//!     init_logging()          // 日志写入缓存目录下的文件，stdout 留给终端界面
//!     load config             // 读取 config.json，失败时回退到默认值
//!     init_terminal()         // 原始模式 + 备用屏幕 + 括号粘贴
//!     model::App::new()       // 创建表单状态
//!     app::run()              // 运行主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use log::{info, warn};

use backend::{ConfigService, LocalConfigService, SystemClipboard};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（guard 需存活到程序结束，以便刷新缓冲）
    let _log_guard = init_logging();

    // 2. 加载配置
    let config = LocalConfigService::new().load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e:#}");
        backend::AppConfig::default()
    });
    view::theme::set_theme(config.theme);
    i18n::set_language(i18n::Language::from_code(&config.language).unwrap_or_default());
    info!(
        "Starting print-url TUI (environment: {}, mode: {})",
        config.environment, config.mode
    );

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例
    let mut app = model::App::new(&config, Box::new(SystemClipboard::new()));

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    result
}
