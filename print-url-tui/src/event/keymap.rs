//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const CLOSE: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 操作
    pub const COPY: KeyBinding = KeyBinding::alt(KeyCode::Char('c'));
    pub const COPY_ALT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('y'));
    pub const CLEAR: KeyBinding = KeyBinding::alt(KeyCode::Char('x'));

    // 焦点切换
    pub const NEXT_FIELD: KeyBinding = KeyBinding::key(KeyCode::Tab);
}

/// 快捷键在帮助与状态栏中的显示文本
pub mod labels {
    pub const QUIT: &str = "Alt+q";
    pub const HELP: &str = "Alt+h";
    pub const COPY: &str = "Alt+c";
    pub const CLEAR: &str = "Alt+x";
    pub const NEXT_FIELD: &str = "Tab";
    pub const CYCLE_FIELD: &str = "Tab/S-Tab";
    pub const TOGGLE: &str = "←/→";
    pub const NEW_LINE: &str = "Enter";
}
