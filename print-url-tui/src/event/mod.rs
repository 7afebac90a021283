//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/粘贴等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Paste(String)                // 括号粘贴，整段文本一次送达
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，重绘终端
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断：
//!                 - 帮助弹窗打开时，只响应关闭与退出
//!                 - 全局快捷键，就地处理
//!                 - 焦点位于单选组，调用 handle_radio_keys 处理
//!                 - 焦点位于载荷框，调用 handle_payload_keys 处理
//!
//!     载荷框会吞掉普通字符，所以全局快捷键都带 Alt 或 Ctrl 修饰；
//!     `?` 与 `q` 只在焦点不在载荷框时生效。
//!

mod handler;
pub mod keymap;

pub use handler::{handle_event, poll_event};
