/// Trending Jobs page - growth bar chart plus the detailed metrics table
use crate::components::{create_row, TableWidget};
use crate::router::{Page, PageContext, PageView, RenderPass};
use crate::screens::format_usd;
use crate::session::TrendingForm;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};
use serde::Serialize;
use trendhire_core::catalog;
use trendhire_core::types::{Demand, TrendingJob};

pub const HEADER: &str = "Trending Job Roles";
pub const ACTION: &str = "Analyze Trends";
pub const CHART_TITLE: &str = "Job Role Growth Rate (%)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendingJobsView {
    pub location: String,
    pub industry: String,
    pub jobs: Vec<TrendingJob>,
}

pub fn run(form: &TrendingForm, ctx: &PageContext) -> RenderPass {
    let mut pass = RenderPass::new(Page::TrendingJobs);
    let location = form.location.value();
    let industry = form.industry.value();

    let jobs = match ctx.api() {
        Some(client) => client.fetch_trending_jobs(&mut pass.notices),
        None => Some(catalog::trending_jobs(location, industry)),
    };

    pass.view = jobs.map(|jobs| {
        PageView::TrendingJobs(TrendingJobsView {
            location: location.to_string(),
            industry: industry.to_string(),
            jobs,
        })
    });
    pass
}

fn demand_color(demand: Demand, high_contrast: bool) -> Color {
    if high_contrast {
        return Color::White;
    }
    match demand {
        Demand::VeryHigh => Color::Rgb(45, 212, 191),
        Demand::High => Color::Green,
        Demand::Medium => Color::Yellow,
        Demand::Low => Color::Gray,
    }
}

pub struct TrendingJobsScreen<'a> {
    view: &'a TrendingJobsView,
    theme: Theme,
}

impl<'a> TrendingJobsScreen<'a> {
    pub fn new(view: &'a TrendingJobsView, theme: Theme) -> Self {
        Self { view, theme }
    }
}

impl<'a> Widget for TrendingJobsScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Min(0)])
            .split(area);

        self.render_growth_chart(chunks[0], buf);
        self.render_table(chunks[1], buf);
    }
}

impl<'a> TrendingJobsScreen<'a> {
    fn render_growth_chart(&self, area: Rect, buf: &mut Buffer) {
        let jobs = &self.view.jobs;
        let min = jobs.iter().map(|j| j.growth).min().unwrap_or(0) as f64;
        let max = jobs.iter().map(|j| j.growth).max().unwrap_or(0);

        // Horizontal bars keep long role titles readable
        let bars: Vec<Bar> = jobs
            .iter()
            .map(|job| {
                let color = self.theme.scale(job.growth as f64, min, max as f64);
                Bar::default()
                    .value(job.growth as u64)
                    .label(Line::from(job.title.clone()))
                    .text_value(format!("{}%", job.growth))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(Color::Black).bg(color))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(format!(" {} ", CHART_TITLE), self.theme.title_style()));

        let chart = BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(1)
            .max(max as u64)
            .data(BarGroup::default().bars(&bars));

        chart.render(area, buf);
    }

    fn render_table(&self, area: Rect, buf: &mut Buffer) {
        let rows = self
            .view
            .jobs
            .iter()
            .map(|job| {
                create_row(
                    vec![
                        job.title.clone(),
                        job.growth.to_string(),
                        format_usd(job.avg_salary),
                        job.demand.to_string(),
                    ],
                    demand_color(job.demand, self.theme.high_contrast),
                )
            })
            .collect();

        let table = TableWidget::new(
            " Detailed Metrics ",
            vec!["Title", "Growth (%)", "Avg Salary", "Demand"],
            vec![
                Constraint::Percentage(45),
                Constraint::Length(12),
                Constraint::Length(12),
                Constraint::Length(10),
            ],
        )
        .rows(rows)
        .theme(self.theme);

        table.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use trendhire_core::{ApiClient, Config, DataSource, MockTransport};

    #[test]
    fn test_mock_run_ignores_inputs() {
        let mut session = Session::new();
        let first = run(&session.trending, &PageContext::mock());

        session.trending.location.select_value("Berlin");
        session.trending.industry.select_value("Finance");
        let second = run(&session.trending, &PageContext::mock());

        let jobs = |pass: &RenderPass| match pass.view.as_ref() {
            Some(PageView::TrendingJobs(view)) => view.jobs.clone(),
            _ => panic!("expected trending view"),
        };
        assert_eq!(jobs(&first), jobs(&second));
        assert_eq!(jobs(&first).len(), 5);
    }

    #[test]
    fn test_api_failure_leaves_no_chart() {
        let config = Config::default();
        let client = ApiClient::with_transport(&config, Box::new(MockTransport::respond(500, "")));
        let ctx = PageContext {
            data_source: DataSource::Api,
            client: Some(&client),
        };

        let pass = run(&Session::new().trending, &ctx);
        assert!(pass.view.is_none());
        assert_eq!(pass.notices.len(), 1);
        assert!(pass.notices[0].message.contains("500"));
    }
}
