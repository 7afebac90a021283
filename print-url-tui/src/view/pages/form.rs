//! 表单页面视图
//!
//! URL 框、复制/清空按钮、环境与模式单选组、载荷输入框。

use print_url_core::{Environment, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::event::keymap::labels;
use crate::i18n::t;
use crate::model::{App, FormField};
use crate::view::theme::{colors, Styles};

/// 载荷为空时显示的示例
const PAYLOAD_PLACEHOLDER: &str = "chartPage: 0
containerId: \"1c61a4f0-6328-4367-a5da-08aa22c4f326\"
endTime: \"2020-12-10T02:40:24.559Z\"
isRealTime: true
lang: \"en\"
metricsTime: \"2020-12-10T02:40:12Z\"
positionSide: \"right\"
startTime: \"2020-12-10T02:35:42Z\"
zoneId: \"SZ0\"";

/// 渲染表单页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let form = &app.form;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // URL
            Constraint::Length(1), // 按钮
            Constraint::Length(3), // 环境
            Constraint::Length(3), // 模式
            Constraint::Min(4),    // 载荷
        ])
        .split(area);

    render_url(app, frame, rows[0]);
    render_actions(app, frame, rows[1]);

    let environment = form.environment;
    render_radio_group(
        frame,
        rows[2],
        texts.form.environment,
        [
            (texts.form.remote, environment == Environment::Remote),
            (texts.form.local, environment == Environment::Local),
        ],
        app.focus == FormField::Environment,
    );

    let mode = form.mode;
    render_radio_group(
        frame,
        rows[3],
        texts.form.mode,
        [
            (texts.form.standalone, mode == Mode::Standalone),
            (texts.form.integrated, mode == Mode::Integrated),
        ],
        app.focus == FormField::Mode,
    );

    render_payload(app, frame, rows[4]);
}

/// 只读 URL 框，长 URL 自动换行
fn render_url(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", t().form.url))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(c.border_style(false));

    let paragraph = Paragraph::new(app.form.url.as_str())
        .style(Style::default().fg(c.fg))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// 复制 / 清空按钮行
fn render_actions(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    let (copy_label, copy_style) = if app.copy.is_copied() {
        (
            texts.common.copied,
            Style::default().fg(c.success).add_modifier(Modifier::BOLD),
        )
    } else {
        (texts.common.copy, Style::default().fg(c.fg))
    };

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("[ {copy_label} ]"), copy_style),
        Span::styled(format!(" {} ", labels::COPY), Style::default().fg(c.muted)),
        Span::raw("  "),
        Span::styled(format!("[ {} ]", texts.common.clear), Style::default().fg(c.fg)),
        Span::styled(format!(" {} ", labels::CLEAR), Style::default().fg(c.muted)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// 单选组：一行两个选项
fn render_radio_group(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    options: [(&str, bool); 2],
    focused: bool,
) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(c.border_style(focused));

    let mut spans = Vec::new();
    for (label, selected) in options {
        let (marker, style) = if selected {
            (
                "(•)",
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            )
        } else {
            ("( )", Style::default().fg(c.muted))
        };
        spans.push(Span::styled(format!(" {marker} {label}  "), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// 载荷输入框：为空时显示示例，有焦点时光标停在末尾
fn render_payload(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let focused = app.focus.is_payload();

    let block = Block::default()
        .title(format!(" {} ", texts.form.payload))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(c.border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(texts.form.payload_hint).style(Style::default().fg(c.muted)),
        sections[0],
    );

    let text_area = sections[1];
    let payload = app.form.payload.as_str();

    if payload.is_empty() {
        frame.render_widget(
            Paragraph::new(PAYLOAD_PLACEHOLDER).style(Style::default().fg(c.muted)),
            text_area,
        );
        if focused {
            frame.set_cursor_position((text_area.x, text_area.y));
        }
        return;
    }

    let (cursor_row, cursor_col) = cursor_offset(payload);
    let scroll = (
        scroll_to_fit(cursor_row, text_area.height),
        scroll_to_fit(cursor_col, text_area.width),
    );

    frame.render_widget(
        Paragraph::new(payload)
            .style(Style::default().fg(c.fg))
            .scroll(scroll),
        text_area,
    );

    if focused {
        frame.set_cursor_position((
            text_area.x + cursor_col - scroll.1,
            text_area.y + cursor_row - scroll.0,
        ));
    }
}

/// 文本末尾所在的行号与显示列宽
fn cursor_offset(text: &str) -> (u16, u16) {
    let row = text.matches('\n').count();
    let last_line = text.rsplit('\n').next().unwrap_or_default();
    (clamp_u16(row), clamp_u16(last_line.width()))
}

/// 让 `position` 落在可见范围内所需的最小滚动量
fn scroll_to_fit(position: u16, visible: u16) -> u16 {
    if visible == 0 {
        return position;
    }
    position.saturating_sub(visible - 1)
}

fn clamp_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_offset() {
        assert_eq!(cursor_offset("zoneId: SZ0"), (0, 11));
        assert_eq!(cursor_offset("zoneId: SZ0\n"), (1, 0));
        assert_eq!(cursor_offset("a\nlang: 中文"), (1, 10));
    }

    #[test]
    fn test_scroll_to_fit() {
        assert_eq!(scroll_to_fit(3, 10), 0);
        assert_eq!(scroll_to_fit(9, 10), 0);
        assert_eq!(scroll_to_fit(10, 10), 1);
        assert_eq!(scroll_to_fit(25, 10), 16);
    }
}
