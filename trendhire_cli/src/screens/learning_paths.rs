/// Learning Paths page - ordered course steps as collapsible sections
use crate::components::{ExpanderList, ExpanderState, Section};
use crate::router::{Page, PageView, RenderPass};
use crate::session::LearningForm;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use serde::Serialize;
use trendhire_core::catalog;
use trendhire_core::types::{CourseStep, Metric, Notice};

pub const HEADER: &str = "Personalized Learning Paths";
pub const ACTION: &str = "Generate Learning Path";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningPathView {
    pub role: String,
    pub steps: Vec<CourseStep>,
}

impl LearningPathView {
    pub fn heading(&self) -> String {
        format!("Learning Path for {}", self.role)
    }

    /// One section per step, numbered from 1
    pub fn sections(&self) -> Vec<Section> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| Section {
                title: format!("Step {}: {}", i + 1, step.course),
                metrics: vec![
                    Metric::new("Provider", step.provider.as_str()),
                    Metric::new("Duration", step.duration.as_str()),
                    Metric::new("Rating", format!("{:.1}", step.rating)),
                    Metric::new("Price", step.price.as_str()),
                ],
            })
            .collect()
    }
}

pub fn run(form: &LearningForm) -> RenderPass {
    let mut pass = RenderPass::new(Page::LearningPaths);
    let role = form.target_role.value();

    match catalog::learning_path(role) {
        Ok(steps) => {
            pass.view = Some(PageView::LearningPaths(LearningPathView {
                role: role.to_string(),
                steps,
            }));
        }
        Err(e) => {
            log::warn!("{}", e);
            pass.notices.push(Notice::error(e.to_string()));
        }
    }
    pass
}

pub struct LearningPathScreen<'a> {
    view: &'a LearningPathView,
    state: &'a ExpanderState,
    theme: Theme,
}

impl<'a> LearningPathScreen<'a> {
    pub fn new(view: &'a LearningPathView, state: &'a ExpanderState, theme: Theme) -> Self {
        Self { view, state, theme }
    }
}

impl<'a> Widget for LearningPathScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(Span::styled(
                format!(" {} ", self.view.heading()),
                self.theme.title_style(),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let sections = self.view.sections();
        ExpanderList::new(&sections, self.state, self.theme).render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(
            " [↑/↓] Select step  [Space] Expand/collapse",
            self.theme.dim(),
        )))
        .render(chunks[1], buf);
    }
}
