//! Per-user UI session: the selected page plus every form's values.
//!
//! The event loop owns one `Session` and hands it by reference to the
//! router; nothing about the current page lives anywhere else.

use crate::components::{FieldMut, FieldRef, SelectField, TextField};
use crate::router::Page;
use trendhire_core::catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingForm {
    pub location: SelectField,
    pub industry: SelectField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillForm {
    pub skills: TextField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearningForm {
    pub target_role: SelectField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryForm {
    pub job_title: TextField,
    pub location: SelectField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub page: Page,
    pub trending: TrendingForm,
    pub skills: SkillForm,
    pub learning: LearningForm,
    pub salary: SalaryForm,
    /// 0 is the navigation selector, 1.. index the page's fields
    pub focus: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            page: Page::TrendingJobs,
            trending: TrendingForm {
                location: SelectField::new("Location", &catalog::TRENDING_LOCATIONS),
                industry: SelectField::new("Industry", &catalog::INDUSTRIES),
            },
            skills: SkillForm {
                skills: TextField::new(
                    "Enter your current skills (comma-separated)",
                    "Python, React, SQL, Machine Learning",
                ),
            },
            learning: LearningForm {
                target_role: SelectField::new("Target Role", &catalog::TARGET_ROLES),
            },
            salary: SalaryForm {
                job_title: TextField::new("Job Title", "AI Engineer"),
                location: SelectField::new("Location", &catalog::SALARY_LOCATIONS),
            },
            focus: 0,
        }
    }

    /// Switch page; returns whether the page changed
    pub fn select_page(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        self.page = page;
        self.focus = 0;
        true
    }

    pub fn fields(&self) -> Vec<FieldRef<'_>> {
        match self.page {
            Page::TrendingJobs => vec![
                FieldRef::Select(&self.trending.location),
                FieldRef::Select(&self.trending.industry),
            ],
            Page::SkillAnalysis => vec![FieldRef::Text(&self.skills.skills)],
            Page::LearningPaths => vec![FieldRef::Select(&self.learning.target_role)],
            Page::SalaryTrends => vec![
                FieldRef::Text(&self.salary.job_title),
                FieldRef::Select(&self.salary.location),
            ],
        }
    }

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        let field = match (self.page, index) {
            (Page::TrendingJobs, 0) => FieldMut::Select(&mut self.trending.location),
            (Page::TrendingJobs, 1) => FieldMut::Select(&mut self.trending.industry),
            (Page::SkillAnalysis, 0) => FieldMut::Text(&mut self.skills.skills),
            (Page::LearningPaths, 0) => FieldMut::Select(&mut self.learning.target_role),
            (Page::SalaryTrends, 0) => FieldMut::Text(&mut self.salary.job_title),
            (Page::SalaryTrends, 1) => FieldMut::Select(&mut self.salary.location),
            _ => return None,
        };
        Some(field)
    }

    fn control_count(&self) -> usize {
        self.fields().len() + 1
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.control_count();
    }

    pub fn focus_prev(&mut self) {
        let count = self.control_count();
        self.focus = (self.focus + count - 1) % count;
    }

    pub fn focused_field(&self) -> Option<FieldRef<'_>> {
        if self.focus == 0 {
            return None;
        }
        self.fields().get(self.focus - 1).copied()
    }

    pub fn focus_is_text(&self) -> bool {
        self.focused_field().is_some_and(|f| f.is_text())
    }

    /// ←/→ on the focused control. Returns whether any value changed.
    pub fn cycle(&mut self, forward: bool) -> bool {
        if self.focus == 0 {
            let page = if forward { self.page.next() } else { self.page.prev() };
            return self.select_page(page);
        }

        match self.field_mut(self.focus - 1) {
            Some(FieldMut::Select(field)) => {
                if forward {
                    field.next();
                } else {
                    field.prev();
                }
                field.options.len() > 1
            }
            _ => false,
        }
    }

    /// Type into the focused text field. Returns whether it was consumed.
    pub fn type_char(&mut self, c: char) -> bool {
        if self.focus == 0 {
            return false;
        }
        match self.field_mut(self.focus - 1) {
            Some(FieldMut::Text(field)) => {
                field.push(c);
                true
            }
            _ => false,
        }
    }

    pub fn backspace(&mut self) -> bool {
        if self.focus == 0 {
            return false;
        }
        match self.field_mut(self.focus - 1) {
            Some(FieldMut::Text(field)) => field.pop(),
            _ => false,
        }
    }
}
