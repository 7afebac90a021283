//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::event::keymap::labels;
use crate::i18n::t;

/// 计算居中的矩形区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn shortcut_line(key: &str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {key:<11}"), Style::default().fg(Color::Yellow)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

/// 渲染帮助弹窗
pub fn render(frame: &mut Frame) {
    let texts = t();
    let area = centered_rect(50, 18, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let section = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled(texts.help.global, section),
        Line::from(""),
        shortcut_line(labels::COPY, texts.common.copy),
        shortcut_line(labels::CLEAR, texts.common.clear),
        shortcut_line(labels::HELP, texts.common.help),
        shortcut_line(labels::QUIT, texts.common.quit),
        Line::from(""),
        Line::styled(texts.help.form, section),
        Line::from(""),
        shortcut_line(labels::CYCLE_FIELD, texts.hints.switch_field),
        shortcut_line(labels::TOGGLE, texts.hints.toggle),
        shortcut_line(labels::NEW_LINE, texts.hints.new_line),
        Line::from(""),
        Line::styled(texts.help.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
