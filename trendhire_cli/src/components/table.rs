/// Titled data table used by the page views

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Row, Table, Widget},
};

#[derive(Clone, Debug)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub style: Style,
}

pub struct TableWidget<'a> {
    headers: Vec<&'a str>,
    rows: Vec<TableRow>,
    widths: Vec<Constraint>,
    title: &'a str,
    theme: Theme,
}

impl<'a> TableWidget<'a> {
    pub fn new(title: &'a str, headers: Vec<&'a str>, widths: Vec<Constraint>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
            widths,
            title,
            theme: Theme::default(),
        }
    }

    pub fn rows(mut self, rows: Vec<TableRow>) -> Self {
        self.rows = rows;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl<'a> Widget for TableWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(self.title, self.theme.title_style()));

        let header_cells = self
            .headers
            .iter()
            .map(|h| Span::styled(*h, self.theme.title_style()));
        let header = Row::new(header_cells).height(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|row| Row::new(row.cells.iter().map(|c| c.as_str())).style(row.style))
            .collect();

        let table = Table::new(rows, self.widths.iter().copied())
            .header(header)
            .block(block);

        Widget::render(table, area, buf);
    }
}

/// Helper to create styled rows
pub fn create_row(cells: Vec<String>, color: Color) -> TableRow {
    TableRow {
        cells,
        style: Style::default().fg(color),
    }
}
