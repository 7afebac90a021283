//! 表单更新逻辑

use crate::message::FormMessage;
use crate::model::App;

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    app.clear_status();

    match msg {
        // ========== 单选组 ==========
        FormMessage::ToggleEnvironment => {
            let next = app.form.environment.toggle();
            app.form.select_environment(next);
        }
        FormMessage::ToggleMode => {
            let next = app.form.mode.toggle();
            app.form.select_mode(next);
        }

        // ========== 载荷编辑 ==========
        FormMessage::Input(c) => {
            app.form.push_char(c);
        }
        FormMessage::NewLine => {
            app.form.push_char('\n');
        }
        FormMessage::Backspace => {
            app.form.pop_char();
        }
        FormMessage::Paste(text) => {
            app.form.push_str(&normalize_line_endings(&text));
        }
    }
}

/// 终端粘贴的换行可能是 `\r\n` 或单独的 `\r`，统一为 `\n`
fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize_line_endings("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }
}
