//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **表单内容归 `form.*`**：URL 框、单选组、载荷输入框
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 表单文本
    pub form: FormTexts,
    /// 键盘提示（动作词）
    pub hints: HintTexts,
    /// 状态栏消息
    pub status: StatusTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub copy: &'static str,
    pub copied: &'static str,
    pub clear: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 表单
// ============================================================================

/// 表单文本
pub struct FormTexts {
    pub url: &'static str,
    pub environment: &'static str,
    pub remote: &'static str,
    pub local: &'static str,
    pub mode: &'static str,
    pub standalone: &'static str,
    pub integrated: &'static str,
    pub payload: &'static str,
    /// 载荷输入框上方的说明
    pub payload_hint: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示中的动作词
pub struct HintTexts {
    pub switch_field: &'static str,
    pub toggle: &'static str,
    pub new_line: &'static str,
}

// ============================================================================
// 状态栏
// ============================================================================

/// 状态栏消息
pub struct StatusTexts {
    pub copy_failed: &'static str,
    pub cleared: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

/// 帮助弹窗文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub form: &'static str,
    pub close_hint: &'static str,
}
