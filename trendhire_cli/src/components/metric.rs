/// Metric tiles: a label, a headline value and an optional delta
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use trendhire_core::types::Metric;

/// Height a tile needs: borders plus value and delta lines
pub const TILE_HEIGHT: u16 = 4;

pub struct MetricTile<'a> {
    metric: &'a Metric,
    theme: Theme,
}

impl<'a> MetricTile<'a> {
    pub fn new(metric: &'a Metric, theme: Theme) -> Self {
        Self { metric, theme }
    }
}

fn delta_color(delta: &str, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    if delta.starts_with('+') {
        Color::Green
    } else if delta.starts_with('-') {
        Color::Red
    } else {
        Color::Gray
    }
}

impl<'a> Widget for MetricTile<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(
                format!(" {} ", self.metric.label),
                self.theme.dim(),
            ));

        let inner = block.inner(area);
        Widget::render(block, area, buf);

        let mut lines = vec![Line::from(Span::styled(
            self.metric.value.as_str(),
            Style::default()
                .fg(self.theme.accent())
                .add_modifier(Modifier::BOLD),
        ))];

        if let Some(delta) = &self.metric.delta {
            let arrow = if delta.starts_with('+') {
                "↑ "
            } else if delta.starts_with('-') {
                "↓ "
            } else {
                ""
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", arrow, delta),
                Style::default().fg(delta_color(delta, self.theme.high_contrast)),
            )));
        }

        Widget::render(Paragraph::new(lines), inner, buf);
    }
}

/// Equal-width row of tiles
pub struct MetricRow<'a> {
    metrics: &'a [Metric],
    theme: Theme,
}

impl<'a> MetricRow<'a> {
    pub fn new(metrics: &'a [Metric], theme: Theme) -> Self {
        Self { metrics, theme }
    }
}

impl<'a> Widget for MetricRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.metrics.is_empty() {
            return;
        }

        let count = self.metrics.len() as u32;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(self.metrics.iter().map(|_| Constraint::Ratio(1, count)))
            .split(area);

        for (metric, chunk) in self.metrics.iter().zip(chunks.iter()) {
            MetricTile::new(metric, self.theme).render(*chunk, buf);
        }
    }
}
