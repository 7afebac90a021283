//! 应用主消息枚举

use super::FormMessage;

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个表单项
    NextField,

    /// 焦点移到上一个表单项
    PrevField,

    /// 表单相关消息
    Form(FormMessage),

    /// 复制 URL 到剪贴板
    Copy,

    /// 清空表单
    Clear,

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 计时（事件轮询超时）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
