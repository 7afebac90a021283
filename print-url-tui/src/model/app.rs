//! 应用主状态结构

use print_url_core::{Environment, Mode};

use super::{CopyIndicator, FormField, FormState};
use crate::backend::{AppConfig, ClipboardService};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点表单项
    pub focus: FormField,

    /// 表单状态
    pub form: FormState,

    /// “已复制”提示
    pub copy: CopyIndicator,

    /// 是否显示帮助弹窗
    pub show_help: bool,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 清空时恢复的环境
    pub default_environment: Environment,
    /// 清空时恢复的模式
    pub default_mode: Mode,

    /// 剪贴板
    pub clipboard: Box<dyn ClipboardService>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig, clipboard: Box<dyn ClipboardService>) -> Self {
        Self {
            should_quit: false,
            focus: FormField::default(),
            form: FormState::new(config.environment, config.mode),
            copy: CopyIndicator::new(config.copied_timeout()),
            show_help: false,
            status_message: None,
            default_environment: config.environment,
            default_mode: config.mode,
            clipboard,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
