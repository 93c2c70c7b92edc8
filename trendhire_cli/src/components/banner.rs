/// Inline info/warning/error banners for a render pass
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use trendhire_core::types::{Notice, NoticeLevel};

pub fn level_color(level: NoticeLevel, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    match level {
        NoticeLevel::Info => Color::Rgb(96, 165, 250),
        NoticeLevel::Warning => Color::Rgb(251, 146, 60), // Orange
        NoticeLevel::Error => Color::Red,
    }
}

pub fn level_symbol(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "ℹ",
        NoticeLevel::Warning => "⚠",
        NoticeLevel::Error => "✗",
    }
}

pub struct NoticeList<'a> {
    notices: &'a [Notice],
    theme: Theme,
}

impl<'a> NoticeList<'a> {
    pub fn new(notices: &'a [Notice], theme: Theme) -> Self {
        Self { notices, theme }
    }
}

impl<'a> Widget for NoticeList<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .notices
            .iter()
            .map(|notice| {
                let color = level_color(notice.level, self.theme.high_contrast);
                Line::from(vec![
                    Span::styled(
                        format!(" {} ", level_symbol(notice.level)),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(notice.message.as_str(), Style::default().fg(color)),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
