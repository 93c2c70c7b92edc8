/// Collapsible sections, each expanding to a row of metric tiles
use crate::components::metric::{MetricRow, TILE_HEIGHT};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use std::collections::HashSet;
use trendhire_core::types::Metric;

#[derive(Debug, Clone)]
pub struct ExpanderState {
    pub selected: usize,
    pub expanded: HashSet<usize>,
    pub len: usize,
}

impl ExpanderState {
    pub fn new(len: usize) -> Self {
        Self {
            selected: 0,
            expanded: HashSet::new(),
            len,
        }
    }

    pub fn move_down(&mut self) {
        if self.selected < self.len.saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn toggle_selected(&mut self) {
        if self.len == 0 {
            return;
        }
        if !self.expanded.remove(&self.selected) {
            self.expanded.insert(self.selected);
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.contains(&index)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.len()
    }
}

impl Default for ExpanderState {
    fn default() -> Self {
        Self::new(0)
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub metrics: Vec<Metric>,
}

pub struct ExpanderList<'a> {
    sections: &'a [Section],
    state: &'a ExpanderState,
    theme: Theme,
}

impl<'a> ExpanderList<'a> {
    pub fn new(sections: &'a [Section], state: &'a ExpanderState, theme: Theme) -> Self {
        Self {
            sections,
            state,
            theme,
        }
    }
}

impl<'a> Widget for ExpanderList<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut constraints = Vec::new();
        for (idx, _) in self.sections.iter().enumerate() {
            constraints.push(Constraint::Length(1));
            if self.state.is_expanded(idx) {
                constraints.push(Constraint::Length(TILE_HEIGHT));
            }
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let mut slot = 0;
        for (idx, section) in self.sections.iter().enumerate() {
            let expanded = self.state.is_expanded(idx);
            let arrow = if expanded { "▼" } else { "▶" };
            let style = if idx == self.state.selected {
                Style::default()
                    .fg(self.theme.accent())
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let header = Paragraph::new(Line::from(Span::styled(
                format!(" {} {}", arrow, section.title),
                style,
            )));
            header.render(chunks[slot], buf);
            slot += 1;

            if expanded {
                MetricRow::new(&section.metrics, self.theme).render(chunks[slot], buf);
                slot += 1;
            }
        }
    }
}
