use serde::{Deserialize, Serialize};
use std::fmt;

/// Hiring demand bucket attached to a trending role
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Demand {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Demand {
    pub fn label(&self) -> &'static str {
        match self {
            Demand::Low => "Low",
            Demand::Medium => "Medium",
            Demand::High => "High",
            Demand::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Demand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingJob {
    pub title: String,
    /// Year-over-year growth of postings, in percent
    pub growth: u32,
    pub avg_salary: u64,
    pub demand: Demand,
}

impl TrendingJob {
    pub fn new(title: &str, growth: u32, avg_salary: u64, demand: Demand) -> Self {
        Self {
            title: title.to_string(),
            growth,
            avg_salary,
            demand,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillScore {
    pub skill: String,
    /// Market demand score, 0-100
    pub score: u8,
}

/// A user's skills set against the market. `skill_scores` keeps insertion
/// order so charts list skills the way the score table declares them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub current_skills: Vec<String>,
    pub trending_skills: Vec<String>,
    pub skill_scores: Vec<SkillScore>,
}

impl SkillProfile {
    /// Score for `skill`, 0 when the skill is not scored
    pub fn score_of(&self, skill: &str) -> u8 {
        self.skill_scores
            .iter()
            .find(|s| s.skill == skill)
            .map(|s| s.score)
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseStep {
    pub course: String,
    pub provider: String,
    pub duration: String,
    pub rating: f32,
    pub price: String,
}

impl CourseStep {
    pub fn new(course: &str, provider: &str, duration: &str, rating: f32, price: &str) -> Self {
        Self {
            course: course.to_string(),
            provider: provider.to_string(),
            duration: duration.to_string(),
            rating,
            price: price.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryPoint {
    pub month: String,
    pub salary: u64,
}

/// A single metric tile: label, headline value and optional delta
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

impl Metric {
    pub fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
            delta: None,
        }
    }

    pub fn with_delta(mut self, delta: &str) -> Self {
        self.delta = Some(delta.to_string());
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Inline banner raised during a render pass
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demand_serializes_with_display_labels() {
        let json = serde_json::to_string(&Demand::VeryHigh).unwrap();
        assert_eq!(json, "\"Very High\"");

        let parsed: Demand = serde_json::from_str("\"Medium\"").unwrap();
        assert_eq!(parsed, Demand::Medium);
    }

    #[test]
    fn test_score_of_defaults_to_zero() {
        let profile = SkillProfile {
            current_skills: vec!["Go".to_string()],
            trending_skills: vec![],
            skill_scores: vec![SkillScore {
                skill: "Rust".to_string(),
                score: 10,
            }],
        };

        assert_eq!(profile.score_of("Rust"), 10);
        assert_eq!(profile.score_of("Go"), 0);
    }

    #[test]
    fn test_metric_builder() {
        let metric = Metric::new("Job Postings", "2,847").with_delta("+34%");
        assert_eq!(metric.delta.as_deref(), Some("+34%"));
    }
}
