//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod components;     // 状态栏、帮助弹窗等通用组件
//!         mod layout;         // 主布局
//!         mod pages;          // 表单页面
//!         pub mod theme;      // 主题与样式
//!
//!
//!     布局（自上而下）：
//!         ┌──────────────────────────────────────────┐
//!         │ 标题栏                                    │
//!         ├──────────────────────────────────────────┤
//!         │ URL（只读）                               │
//!         │ [ Copy ]  [ Clear ]                       │
//!         │ 环境：(•) Remote  ( ) Local               │
//!         │ 模式：(•) Standalone  ( ) Integrated      │
//!         │ 载荷输入框                                │
//!         ├──────────────────────────────────────────┤
//!         │ 状态栏                                    │
//!         └──────────────────────────────────────────┘
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
