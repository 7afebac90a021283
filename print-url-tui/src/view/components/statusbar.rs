//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::keymap::labels;
use crate::i18n::t;
use crate::model::{App, FormField};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在最后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前焦点生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = vec![(labels::NEXT_FIELD, texts.hints.switch_field)];

    match app.focus {
        FormField::Environment | FormField::Mode => {
            hints.push((labels::TOGGLE, texts.hints.toggle));
        }
        FormField::Payload => {
            hints.push((labels::NEW_LINE, texts.hints.new_line));
        }
    }

    hints.push((labels::COPY, texts.common.copy));
    hints.push((labels::CLEAR, texts.common.clear));
    hints.push((labels::HELP, texts.common.help));
    hints.push((labels::QUIT, texts.common.quit));

    hints
}
