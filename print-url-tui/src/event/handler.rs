//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage};
use crate::model::{App, FormField};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Paste(text) => handle_paste(text, app),             // 括号粘贴
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理粘贴：只有载荷框接受文本
fn handle_paste(text: String, app: &App) -> AppMessage {
    if app.show_help || !app.focus.is_payload() {
        return AppMessage::Noop;
    }
    AppMessage::Form(FormMessage::Paste(text))
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 帮助弹窗打开时，优先处理弹窗输入
    if app.show_help {
        return handle_help_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::COPY.matches(&key) || DefaultKeymap::COPY_ALT.matches(&key) {
        return AppMessage::Copy;
    }
    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::Clear;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }

    // Tab / Shift+Tab: 切换焦点
    if DefaultKeymap::NEXT_FIELD.matches(&key) {
        return AppMessage::NextField;
    }
    if key.code == KeyCode::BackTab {
        return AppMessage::PrevField;
    }

    // 根据焦点位置处理按键
    match app.focus {
        FormField::Environment => handle_radio_keys(key, FormMessage::ToggleEnvironment),
        FormField::Mode => handle_radio_keys(key, FormMessage::ToggleMode),
        FormField::Payload => handle_payload_keys(key),
    }
}

/// 处理帮助弹窗中的按键
fn handle_help_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLOSE.matches(&key)
        || DefaultKeymap::HELP.matches(&key)
        || (is_plain(&key) && matches!(key.code, KeyCode::Char('q' | '?')))
    {
        return AppMessage::CloseHelp;
    }
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    AppMessage::Noop
}

/// 处理单选组的按键：两个选项之间切换
fn handle_radio_keys(key: KeyEvent, toggle: FormMessage) -> AppMessage {
    if !is_plain(&key) {
        return AppMessage::Noop;
    }
    match key.code {
        // ← → 或 h l 或 空格: 切换选项
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Up
        | KeyCode::Down
        | KeyCode::Char(' ' | 'h' | 'l') => AppMessage::Form(toggle),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        KeyCode::Char('q') => AppMessage::Quit,
        _ => AppMessage::Noop,
    }
}

/// 处理载荷框的按键
fn handle_payload_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Char(c) if is_plain(&key) => AppMessage::Form(FormMessage::Input(c)),
        KeyCode::Enter => AppMessage::Form(FormMessage::NewLine),
        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),
        _ => AppMessage::Noop,
    }
}

/// 无修饰键，或只按了 Shift（大写字母与部分符号）
fn is_plain(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{AppConfig, MemoryClipboard};

    fn test_app() -> App {
        App::new(&AppConfig::default(), Box::new(MemoryClipboard::default()))
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_payload_receives_plain_characters() {
        let app = test_app();
        assert_eq!(
            handle_event(press(KeyCode::Char('q'), KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::Input('q'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('Z'), KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::Input('Z'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::NewLine)
        );
        assert_eq!(
            handle_event(press(KeyCode::Backspace, KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::Backspace)
        );
    }

    #[test]
    fn test_global_shortcuts() {
        let app = test_app();
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::ALT), &app),
            AppMessage::Copy
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('y'), KeyModifiers::CONTROL), &app),
            AppMessage::Copy
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('x'), KeyModifiers::ALT), &app),
            AppMessage::Clear
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('h'), KeyModifiers::ALT), &app),
            AppMessage::ShowHelp
        );
        assert_eq!(
            handle_event(press(KeyCode::Tab, KeyModifiers::NONE), &app),
            AppMessage::NextField
        );
        assert_eq!(
            handle_event(press(KeyCode::BackTab, KeyModifiers::SHIFT), &app),
            AppMessage::PrevField
        );
    }

    #[test]
    fn test_radio_keys_toggle() {
        let mut app = test_app();
        app.focus = FormField::Environment;
        assert_eq!(
            handle_event(press(KeyCode::Right, KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::ToggleEnvironment)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('?'), KeyModifiers::NONE), &app),
            AppMessage::ShowHelp
        );

        app.focus = FormField::Mode;
        assert_eq!(
            handle_event(press(KeyCode::Char(' '), KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::ToggleMode)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('a'), KeyModifiers::NONE), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn test_help_swallows_input() {
        let mut app = test_app();
        app.show_help = true;
        assert_eq!(
            handle_event(press(KeyCode::Char('a'), KeyModifiers::NONE), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::CloseHelp
        );
        assert_eq!(
            handle_event(Event::Paste("zoneId: SZ0".to_string()), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn test_paste_only_into_payload() {
        let mut app = test_app();
        assert_eq!(
            handle_event(Event::Paste("zoneId: SZ0".to_string()), &app),
            AppMessage::Form(FormMessage::Paste("zoneId: SZ0".to_string()))
        );

        app.focus = FormField::Mode;
        assert_eq!(
            handle_event(Event::Paste("zoneId: SZ0".to_string()), &app),
            AppMessage::Noop
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let app = test_app();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }
}
