//! Page routing: the navigation selector picks exactly one page per pass

use crate::screens::{learning_paths, salary_trends, skill_analysis, trending_jobs};
use crate::session::Session;
use serde::Serialize;
use trendhire_core::types::Notice;
use trendhire_core::{ApiClient, DataSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    TrendingJobs,
    SkillAnalysis,
    LearningPaths,
    SalaryTrends,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::TrendingJobs,
        Page::SkillAnalysis,
        Page::LearningPaths,
        Page::SalaryTrends,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::TrendingJobs => "Trending Jobs",
            Page::SkillAnalysis => "Skill Analysis",
            Page::LearningPaths => "Learning Paths",
            Page::SalaryTrends => "Salary Trends",
        }
    }

    pub fn from_label(label: &str) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.label() == label)
    }

    pub fn index(&self) -> usize {
        match self {
            Page::TrendingJobs => 0,
            Page::SkillAnalysis => 1,
            Page::LearningPaths => 2,
            Page::SalaryTrends => 3,
        }
    }

    pub fn next(self) -> Self {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    /// Label of the page's primary action button
    pub fn action_label(&self) -> &'static str {
        match self {
            Page::TrendingJobs => trending_jobs::ACTION,
            Page::SkillAnalysis => skill_analysis::ACTION,
            Page::LearningPaths => learning_paths::ACTION,
            Page::SalaryTrends => salary_trends::ACTION,
        }
    }

    /// Whether the primary action goes over the network for `source`
    pub fn uses_api(&self, source: DataSource) -> bool {
        source == DataSource::Api && matches!(self, Page::TrendingJobs | Page::SkillAnalysis)
    }
}

/// What a page needs from the outside world to run its action
pub struct PageContext<'a> {
    pub data_source: DataSource,
    pub client: Option<&'a ApiClient>,
}

impl<'a> PageContext<'a> {
    pub fn mock() -> Self {
        Self {
            data_source: DataSource::Mock,
            client: None,
        }
    }

    /// Client to use, if the API is the configured source
    pub fn api(&self) -> Option<&'a ApiClient> {
        match self.data_source {
            DataSource::Api => self.client,
            DataSource::Mock => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageView {
    TrendingJobs(trending_jobs::TrendingJobsView),
    SkillAnalysis(skill_analysis::SkillAnalysisView),
    LearningPaths(learning_paths::LearningPathView),
    SalaryTrends(salary_trends::SalaryTrendsView),
}

/// Outcome of one primary action: the view to draw, if any, and its banners
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPass {
    pub page: Page,
    pub view: Option<PageView>,
    pub notices: Vec<Notice>,
}

impl RenderPass {
    pub fn new(page: Page) -> Self {
        Self {
            page,
            view: None,
            notices: Vec::new(),
        }
    }

    /// Nothing to show: the action was gated by an empty required input
    pub fn is_noop(&self) -> bool {
        self.view.is_none() && self.notices.is_empty()
    }
}

/// Run the selected page's primary action against the session's inputs
pub fn render_pass(session: &Session, ctx: &PageContext) -> RenderPass {
    log::info!("Render pass: {}", session.page.label());

    match session.page {
        Page::TrendingJobs => trending_jobs::run(&session.trending, ctx),
        Page::SkillAnalysis => skill_analysis::run(&session.skills, ctx),
        Page::LearningPaths => learning_paths::run(&session.learning),
        Page::SalaryTrends => salary_trends::run(&session.salary),
    }
}
