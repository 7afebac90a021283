//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态，是唯一可以修改 Model 的地方。
//!
//!     pub fn update(app: &mut App, msg: AppMessage) {
//!         match msg {
//!             AppMessage::Quit => app.should_quit = true,
//!             AppMessage::Form(form_msg) => form::update(app, form_msg),
//!             AppMessage::Copy => ...,      // 调用 Backend 层的剪贴板服务
//!             ...
//!         }
//!     }
//!
//! 使用 match 进行穷举，每个 Message 变体都对应一个状态变更。
//! 表单子消息委托给 form.rs。
//!
//! Update 完成后，控制权返回主循环（app.rs），
//! 下一轮循环时 View 层会读取更新后的 Model 来重新渲染。

mod form;

use std::time::Instant;

use log::{info, warn};

use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::NextField => {
            app.focus = app.focus.next();
        }

        AppMessage::PrevField => {
            app.focus = app.focus.prev();
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Copy => {
            handle_copy(app, Instant::now());
        }

        AppMessage::Clear => {
            app.form.reset(app.default_environment, app.default_mode);
            app.copy.reset();
            app.set_status(t().status.cleared);
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
        }

        AppMessage::Tick => {
            app.copy.tick(Instant::now());
        }

        AppMessage::Noop => {}
    }
}

/// 复制当前 URL，成功时点亮“已复制”提示
fn handle_copy(app: &mut App, now: Instant) {
    match app.clipboard.copy(&app.form.url) {
        Ok(()) => {
            info!("Copied URL to clipboard");
            app.copy.mark(now);
            app.clear_status();
        }
        Err(e) => {
            warn!("Failed to copy to clipboard: {e:#}");
            app.copy.reset();
            app.set_status(format!("{}: {e}", t().status.copy_failed));
        }
    }
}
