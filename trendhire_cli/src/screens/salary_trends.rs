/// Salary Trends page - monthly average salary line plus headline metrics
use crate::components::{metric::TILE_HEIGHT, MetricRow};
use crate::router::{Page, PageView, RenderPass};
use crate::screens::format_usd_short;
use crate::session::SalaryForm;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};
use serde::Serialize;
use trendhire_core::catalog;
use trendhire_core::types::{Metric, SalaryPoint};

pub const HEADER: &str = "Salary Trends & Insights";
pub const ACTION: &str = "Analyze Salary Trends";

/// Vertical padding around the series so the line never sits on an edge
const Y_PADDING: f64 = 5_000.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryTrendsView {
    pub title: String,
    pub job_title: String,
    pub location: String,
    pub series: Vec<SalaryPoint>,
    pub metrics: Vec<Metric>,
}

/// A blank job title gates the action: the pass comes back empty. A
/// whitespace-only title counts as blank rather than producing "   Salary Trend".
pub fn run(form: &SalaryForm) -> RenderPass {
    let mut pass = RenderPass::new(Page::SalaryTrends);
    let job_title = form.job_title.value.as_str();
    let location = form.location.value();

    if job_title.trim().is_empty() {
        log::debug!("Salary trends skipped: no job title entered");
        return pass;
    }

    pass.view = Some(PageView::SalaryTrends(SalaryTrendsView {
        title: format!("{} Salary Trend - {}", job_title, location),
        job_title: job_title.to_string(),
        location: location.to_string(),
        series: catalog::salary_series(job_title, location),
        metrics: catalog::salary_metrics(),
    }));
    pass
}

pub struct SalaryTrendsScreen<'a> {
    view: &'a SalaryTrendsView,
    theme: Theme,
}

impl<'a> SalaryTrendsScreen<'a> {
    pub fn new(view: &'a SalaryTrendsView, theme: Theme) -> Self {
        Self { view, theme }
    }

    fn render_chart(&self, area: Rect, buf: &mut Buffer) {
        let series = &self.view.series;
        let points: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.salary as f64))
            .collect();

        let low = series.iter().map(|p| p.salary).min().unwrap_or(0) as f64 - Y_PADDING;
        let high = series.iter().map(|p| p.salary).max().unwrap_or(0) as f64 + Y_PADDING;
        let low = low.max(0.0);
        let mid = (low + high) / 2.0;

        let x_labels: Vec<Span> = series
            .iter()
            .map(|p| Span::styled(p.month.clone(), self.theme.dim()))
            .collect();
        let y_labels: Vec<Span> = [low, mid, high]
            .iter()
            .map(|v| Span::styled(format_usd_short(*v as u64), self.theme.dim()))
            .collect();

        let dataset = Dataset::default()
            .name("Average Salary")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(self.theme.series()))
            .data(&points);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(
                format!(" {} ", self.view.title),
                self.theme.title_style(),
            ));

        Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Month")
                    .style(self.theme.dim())
                    .bounds([0.0, (points.len().max(2) - 1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .title("Average Salary ($)")
                    .style(self.theme.dim())
                    .bounds([low, high])
                    .labels(y_labels),
            )
            .render(area, buf);
    }
}

impl<'a> Widget for SalaryTrendsScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(TILE_HEIGHT)])
            .split(area);

        self.render_chart(chunks[0], buf);
        MetricRow::new(&self.view.metrics, self.theme).render(chunks[1], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_blank_title_is_noop() {
        let mut session = Session::new();
        session.salary.job_title.set("");
        assert!(run(&session.salary).is_noop());

        session.salary.job_title.set("   ");
        assert!(run(&session.salary).is_noop());
    }

    #[test]
    fn test_title_combines_inputs() {
        let mut session = Session::new();
        session.salary.job_title.set("Data Engineer");
        session.salary.location.select_value("London");

        let view = match run(&session.salary).view {
            Some(PageView::SalaryTrends(view)) => view,
            other => panic!("unexpected view: {:?}", other),
        };
        assert_eq!(view.title, "Data Engineer Salary Trend - London");
        assert_eq!(view.series.len(), 5);
        assert_eq!(view.series[4].salary, 158000);
        assert_eq!(view.metrics.len(), 3);
    }
}
