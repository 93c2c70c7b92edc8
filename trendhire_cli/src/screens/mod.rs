/// Screen module exports plus the shared sidebar and page frame
pub mod learning_paths;
pub mod salary_trends;
pub mod skill_analysis;
pub mod trending_jobs;

pub use learning_paths::{LearningPathScreen, LearningPathView};
pub use salary_trends::{SalaryTrendsScreen, SalaryTrendsView};
pub use skill_analysis::{SkillAnalysisScreen, SkillAnalysisView};
pub use trending_jobs::{TrendingJobsScreen, TrendingJobsView};

use crate::components::{ExpanderState, NoticeList};
use crate::router::{Page, PageView, RenderPass};
use crate::session::Session;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use trendhire_core::DataSource;

/// `185000` -> `$185,000`
pub fn format_usd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    format!("${}", out)
}

/// `145000` -> `$145k`
pub fn format_usd_short(amount: u64) -> String {
    format!("${}k", (amount + 500) / 1000)
}

pub fn page_header(page: Page) -> &'static str {
    match page {
        Page::TrendingJobs => trending_jobs::HEADER,
        Page::SkillAnalysis => skill_analysis::HEADER,
        Page::LearningPaths => learning_paths::HEADER,
        Page::SalaryTrends => salary_trends::HEADER,
    }
}

/// Navigation selector, the page's inputs and its action button
pub struct Sidebar<'a> {
    session: &'a Session,
    data_source: DataSource,
    theme: Theme,
}

impl<'a> Sidebar<'a> {
    pub fn new(session: &'a Session, data_source: DataSource, theme: Theme) -> Self {
        Self {
            session,
            data_source,
            theme,
        }
    }
}

impl<'a> Widget for Sidebar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(" TrendHire ", self.theme.title_style()));

        let mut lines = vec![
            Line::from(Span::styled("AI Career Intelligence", self.theme.dim())),
            Line::from(""),
            Line::from(Span::styled("Navigation", self.theme.dim())),
        ];

        let nav_focused = self.session.focus == 0;
        for page in Page::ALL {
            let selected = page == self.session.page;
            let marker = if selected { "● " } else { "○ " };
            let style = match (selected, nav_focused) {
                (true, true) => Style::default()
                    .fg(self.theme.accent())
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                (true, false) => Style::default()
                    .fg(self.theme.accent())
                    .add_modifier(Modifier::BOLD),
                _ => Style::default().fg(Color::White),
            };
            lines.push(Line::from(Span::styled(
                format!(" {}{}", marker, page.label()),
                style,
            )));
        }

        lines.push(Line::from(""));
        for (i, field) in self.session.fields().iter().enumerate() {
            lines.extend(field.lines(self.session.focus == i + 1, self.theme));
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            format!(" [Enter] {} ", self.session.page.action_label()),
            Style::default()
                .fg(Color::Black)
                .bg(self.theme.accent())
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        let source = match self.data_source {
            DataSource::Mock => "Data: sample",
            DataSource::Api => "Data: live API",
        };
        lines.push(Line::from(Span::styled(source, self.theme.dim())));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

/// Main area: page header, then the current pass (or a prompt) and banners
pub struct PageFrame<'a> {
    page: Page,
    pass: Option<&'a RenderPass>,
    expander: &'a ExpanderState,
    theme: Theme,
}

impl<'a> PageFrame<'a> {
    pub fn new(
        page: Page,
        pass: Option<&'a RenderPass>,
        expander: &'a ExpanderState,
        theme: Theme,
    ) -> Self {
        Self {
            page,
            pass,
            expander,
            theme,
        }
    }

    fn notices_title(&self) -> &'static str {
        match self.page {
            Page::SkillAnalysis => skill_analysis::RECOMMENDATIONS_TITLE,
            _ => "Notices",
        }
    }
}

impl<'a> Widget for PageFrame<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let notice_count = self.pass.map(|p| p.notices.len()).unwrap_or(0) as u16;
        let notice_height = if notice_count > 0 { notice_count + 2 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(notice_height),
            ])
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", page_header(self.page)),
            self.theme.title_style(),
        )))
        .render(chunks[0], buf);

        match self.pass.and_then(|p| p.view.as_ref()) {
            Some(PageView::TrendingJobs(view)) => {
                TrendingJobsScreen::new(view, self.theme).render(chunks[1], buf)
            }
            Some(PageView::SkillAnalysis(view)) => {
                SkillAnalysisScreen::new(view, self.theme).render(chunks[1], buf)
            }
            Some(PageView::LearningPaths(view)) => {
                LearningPathScreen::new(view, self.expander, self.theme).render(chunks[1], buf)
            }
            Some(PageView::SalaryTrends(view)) => {
                SalaryTrendsScreen::new(view, self.theme).render(chunks[1], buf)
            }
            None if self.pass.is_none() => {
                Paragraph::new(Line::from(Span::styled(
                    format!(" Press Enter to {}", self.page.action_label()),
                    self.theme.dim(),
                )))
                .render(chunks[1], buf);
            }
            None => {}
        }

        if let Some(pass) = self.pass.filter(|p| !p.notices.is_empty()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border_style())
                .title(Span::styled(
                    format!(" {} ", self.notices_title()),
                    self.theme.title_style(),
                ));
            let inner = block.inner(chunks[2]);
            block.render(chunks[2], buf);
            NoticeList::new(&pass.notices, self.theme).render(inner, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(185000), "$185,000");
        assert_eq!(format_usd(1234567), "$1,234,567");
        assert_eq!(format_usd(999), "$999");
        assert_eq!(format_usd(0), "$0");
    }

    #[test]
    fn test_format_usd_short() {
        assert_eq!(format_usd_short(145000), "$145k");
        assert_eq!(format_usd_short(152600), "$153k");
    }
}
