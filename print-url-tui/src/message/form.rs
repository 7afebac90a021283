//! 表单消息

/// 表单消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    // ========== 单选组 ==========
    /// 切换环境（remote ↔ local）
    ToggleEnvironment,
    /// 切换模式（standalone ↔ integrated）
    ToggleMode,

    // ========== 载荷编辑 ==========
    /// 输入字符
    Input(char),
    /// 换行
    NewLine,
    /// 删除最后一个字符
    Backspace,
    /// 粘贴文本
    Paste(String),
}
