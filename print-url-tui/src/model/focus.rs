//! 焦点状态定义

/// 当前获得焦点的表单项，按 Tab 顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// 环境单选组
    Environment,
    /// 模式单选组
    Mode,
    /// 载荷输入框
    #[default]
    Payload,
}

impl FormField {
    /// 下一个表单项（循环）
    pub fn next(self) -> Self {
        match self {
            FormField::Environment => FormField::Mode,
            FormField::Mode => FormField::Payload,
            FormField::Payload => FormField::Environment,
        }
    }

    /// 上一个表单项（循环）
    pub fn prev(self) -> Self {
        match self {
            FormField::Environment => FormField::Payload,
            FormField::Mode => FormField::Environment,
            FormField::Payload => FormField::Mode,
        }
    }

    /// 是否是载荷输入框
    pub fn is_payload(self) -> bool {
        matches!(self, FormField::Payload)
    }
}
