/// Skill Analysis page - radar of market demand plus gap recommendations
use crate::components::{create_row, RadarChart, TableWidget};
use crate::router::{Page, PageContext, PageView, RenderPass};
use crate::session::SkillForm;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    widgets::Widget,
};
use serde::Serialize;
use trendhire_core::analysis::{self, HIGH_PRIORITY_THRESHOLD};
use trendhire_core::types::{Notice, SkillProfile};

pub const HEADER: &str = "Skills Gap Analysis";
pub const ACTION: &str = "Analyze Skills Gap";
pub const CHART_TITLE: &str = "Your Skill Profile vs Market Demand";
pub const RECOMMENDATIONS_TITLE: &str = "Skill Gap Recommendations";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillAnalysisView {
    pub profile: SkillProfile,
}

/// Blank input gates the action: the pass comes back empty. Whitespace-only
/// input counts as blank, so "   " never reaches the API or the chart.
pub fn run(form: &SkillForm, ctx: &PageContext) -> RenderPass {
    let mut pass = RenderPass::new(Page::SkillAnalysis);
    let input = form.skills.value.as_str();

    if input.trim().is_empty() {
        log::debug!("Skill analysis skipped: no skills entered");
        return pass;
    }

    let (profile, server_advice) = match ctx.api() {
        Some(client) => match client.fetch_skill_analysis(input, &mut pass.notices) {
            Some(analysis) => (analysis.profile, analysis.recommendations),
            None => return pass,
        },
        None => match analysis::build_skill_profile(input) {
            Some(profile) => (profile, Vec::new()),
            None => return pass,
        },
    };

    pass.notices.extend(analysis::recommendations(&profile));
    pass.notices.extend(server_advice.into_iter().map(Notice::info));
    pass.view = Some(PageView::SkillAnalysis(SkillAnalysisView { profile }));
    pass
}

pub struct SkillAnalysisScreen<'a> {
    view: &'a SkillAnalysisView,
    theme: Theme,
}

impl<'a> SkillAnalysisScreen<'a> {
    pub fn new(view: &'a SkillAnalysisView, theme: Theme) -> Self {
        Self { view, theme }
    }
}

impl<'a> Widget for SkillAnalysisScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(area);

        let axes: Vec<(String, f64)> = self
            .view
            .profile
            .skill_scores
            .iter()
            .map(|s| (s.skill.clone(), s.score as f64))
            .collect();

        RadarChart::new(CHART_TITLE, &axes, 100.0)
            .theme(self.theme)
            .render(chunks[0], buf);

        let profile = &self.view.profile;
        let rows = profile
            .skill_scores
            .iter()
            .map(|s| {
                let color = if self.theme.high_contrast {
                    Color::White
                } else if s.score < HIGH_PRIORITY_THRESHOLD {
                    Color::Rgb(251, 146, 60)
                } else {
                    Color::Green
                };
                let yours = if profile.current_skills.iter().any(|c| c == &s.skill) {
                    "✓"
                } else {
                    ""
                };
                create_row(
                    vec![s.skill.clone(), format!("{}%", s.score), yours.to_string()],
                    color,
                )
            })
            .collect();

        TableWidget::new(
            " Market Demand ",
            vec!["Skill", "Demand", "Yours"],
            vec![
                Constraint::Min(12),
                Constraint::Length(7),
                Constraint::Length(5),
            ],
        )
        .rows(rows)
        .theme(self.theme)
        .render(chunks[1], buf);
    }
}
