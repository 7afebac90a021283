//！┌──────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                            │
//！│                                                                      │
//！│   ┌─────────┐          ┌───────────┐          ┌──────────┐           │
//！│   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │           │
//！│   │   层    │   翻译    │    层     │   消费    │    层    │           │
//！│   └─────────┘          │ AppMessage│          └────┬─────┘           │
//！│        ▲               │ FormMsg   │               │ 修改            │
//！│        │               └───────────┘               ▼                 │
//！│   ┌─────────┐                                 ┌──────────┐           │
//！│   │  View   │ ◀──────────── 读取 ──────────── │  Model   │           │
//！│   │   层    │                                 │    层    │           │
//！│   └─────────┘                                 └────┬─────┘           │
//！│                                                    │ 纯函数调用      │
//！│                                                    ▼                 │
//！│                                          ┌───────────────────┐       │
//！│                                          │  print-url-core   │       │
//！│                                          └───────────────────┘       │
//！└──────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event —→ Update 之间的桥梁，
//! 将形形色色的按键与粘贴事件翻译成 Update 能够看懂的 Messages。
//!
//!     app::AppMessage     主消息（退出、焦点、复制、清空、帮助、计时）
//!     form::FormMessage   表单子消息（切换单选、编辑载荷）

mod app;
mod form;

pub use app::AppMessage;
pub use form::FormMessage;
