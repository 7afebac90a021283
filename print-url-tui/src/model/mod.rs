//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod copy;           // “已复制”提示的计时
//!         mod focus;          // 当前焦点表单项
//!         mod form;           // 表单输入与当前 URL
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,              // 退出标志
//!             pub focus: FormField,               // 当前焦点
//!             pub form: FormState,                // 表单
//!             pub copy: CopyIndicator,            // “已复制”提示
//!             pub show_help: bool,                // 帮助弹窗
//!             pub status_message: Option<String>, // 状态栏消息（可选）
//!             ...
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、表单状态（FormState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     数据流：
//!         用户在载荷框中输入
//!             ↓
//!         event/handler.rs 返回 Form(Input(c))
//!             ↓
//!         update/form.rs 调用 app.form.push_char(c)
//!             ↓
//!         FormState 调用 build_url_from_payload 重建 url
//!             ↓
//!         view/pages/form.rs 显示新的 url
//!
//!     切换环境/模式时不重建，而是在当前 url 上替换第一次出现的旧片段。
//!

mod app;
mod copy;
mod focus;
mod form;

pub use app::App;
pub use copy::CopyIndicator;
pub use focus::FormField;
pub use form::FormState;
