//! 表单状态
//!
//! 持有环境、模式、载荷三项输入以及当前显示的 URL。
//! 载荷每次变化都用 `build_url_from_payload` 重新生成 URL；
//! 切换环境或模式时只替换当前 URL 中第一次出现的旧片段。

use print_url_core::{
    build_default_url, build_url_from_payload, switch_environment, switch_mode, Environment, Mode,
};

/// 表单状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub environment: Environment,
    pub mode: Mode,
    /// 原始载荷文本
    pub payload: String,
    /// 当前显示的 URL（只读）
    pub url: String,
}

impl FormState {
    pub fn new(environment: Environment, mode: Mode) -> Self {
        Self {
            environment,
            mode,
            payload: String::new(),
            url: build_default_url(environment, mode),
        }
    }

    /// 选择环境
    pub fn select_environment(&mut self, environment: Environment) {
        if environment == self.environment {
            return;
        }
        self.url = switch_environment(&self.url, self.environment, environment);
        self.environment = environment;
    }

    /// 选择模式
    pub fn select_mode(&mut self, mode: Mode) {
        if mode == self.mode {
            return;
        }
        self.url = switch_mode(&self.url, self.mode, mode);
        self.mode = mode;
    }

    /// 追加一个字符
    pub fn push_char(&mut self, c: char) {
        self.payload.push(c);
        self.rebuild_url();
    }

    /// 追加一段文本（粘贴）
    pub fn push_str(&mut self, text: &str) {
        self.payload.push_str(text);
        self.rebuild_url();
    }

    /// 删除最后一个字符
    pub fn pop_char(&mut self) {
        if self.payload.pop().is_some() {
            self.rebuild_url();
        }
    }

    /// 恢复初始状态
    pub fn reset(&mut self, environment: Environment, mode: Mode) {
        *self = Self::new(environment, mode);
    }

    fn rebuild_url(&mut self) {
        self.url = build_url_from_payload(self.environment, self.mode, &self.payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_shows_default_url() {
        let form = FormState::new(Environment::Local, Mode::Integrated);
        assert_eq!(form.url, "http://localhost:4200/i/print/dvr/:zoneId/:containerId?");
        assert!(form.payload.is_empty());
    }

    #[test]
    fn test_typing_rebuilds_url() {
        let mut form = FormState::new(Environment::Remote, Mode::Standalone);
        form.push_str("zoneId: SZ0\ncontainerId: c1\nlang: e");
        form.push_char('n');

        assert_eq!(form.url, "https://localhost:9002/s/print/dvr/SZ0/c1?lang=en");
    }

    #[test]
    fn test_deleting_everything_restores_default_url() {
        let mut form = FormState::new(Environment::Local, Mode::Standalone);
        form.push_char('x');
        form.pop_char();

        assert_eq!(form.url, build_default_url(Environment::Local, Mode::Standalone));
    }

    #[test]
    fn test_pop_on_empty_payload_keeps_url() {
        let mut form = FormState::new(Environment::Remote, Mode::Standalone);
        form.select_mode(Mode::Integrated);
        let url = form.url.clone();
        form.pop_char();

        assert_eq!(form.url, url);
    }

    #[test]
    fn test_selection_switches_displayed_url() {
        let mut form = FormState::new(Environment::Remote, Mode::Standalone);
        form.push_str("zoneId: SZ0\ncontainerId: c1");
        form.select_environment(Environment::Local);
        form.select_mode(Mode::Integrated);

        assert_eq!(form.url, "http://localhost:4200/i/print/dvr/SZ0/c1?");
        assert_eq!(form.environment, Environment::Local);
        assert_eq!(form.mode, Mode::Integrated);
    }

    #[test]
    fn test_selecting_current_value_is_noop() {
        let mut form = FormState::new(Environment::Remote, Mode::Standalone);
        let before = form.clone();
        form.select_environment(Environment::Remote);
        form.select_mode(Mode::Standalone);

        assert_eq!(form, before);
    }

    #[test]
    fn test_reset() {
        let mut form = FormState::new(Environment::Remote, Mode::Standalone);
        form.select_environment(Environment::Local);
        form.push_str("zoneId: SZ0");
        form.reset(Environment::Remote, Mode::Standalone);

        assert_eq!(form, FormState::new(Environment::Remote, Mode::Standalone));
    }
}
