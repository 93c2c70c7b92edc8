//! Literal dashboard data and the fixed option sets behind each form
//!
//! Every accessor builds fresh records; nothing here is shared between
//! render passes. The form inputs never change what is returned.

use crate::error::CatalogError;
use crate::types::{CourseStep, Demand, Metric, SalaryPoint, SkillScore, TrendingJob};

pub const TRENDING_LOCATIONS: [&str; 5] = ["Remote", "San Francisco", "New York", "London", "Berlin"];

pub const INDUSTRIES: [&str; 5] = ["Technology", "Finance", "Healthcare", "Marketing", "All"];

pub const TARGET_ROLES: [&str; 5] = [
    "AI Engineer",
    "Data Scientist",
    "Full Stack Developer",
    "DevOps Engineer",
    "Product Manager",
];

pub const SALARY_LOCATIONS: [&str; 4] = ["San Francisco", "New York", "Remote", "London"];

pub const TRENDING_SKILLS: [&str; 5] = ["LangChain", "Vector Databases", "MLOps", "Kubernetes", "Rust"];

const SKILL_SCORES: [(&str, u8); 9] = [
    ("Python", 95),
    ("React", 85),
    ("SQL", 80),
    ("Machine Learning", 90),
    ("LangChain", 20),
    ("Vector Databases", 15),
    ("MLOps", 30),
    ("Kubernetes", 45),
    ("Rust", 10),
];

pub const SALARY_MONTHS: [&str; 5] = ["Jan", "Feb", "Mar", "Apr", "May"];

const SALARY_VALUES: [u64; 5] = [145000, 148000, 152000, 155000, 158000];

/// Trending roles; `location` and `industry` do not filter the result
pub fn trending_jobs(_location: &str, _industry: &str) -> Vec<TrendingJob> {
    vec![
        TrendingJob::new("AI Safety Engineer", 340, 185000, Demand::VeryHigh),
        TrendingJob::new("Prompt Engineer", 280, 145000, Demand::High),
        TrendingJob::new("MLOps Engineer", 220, 155000, Demand::High),
        TrendingJob::new("Climate Data Scientist", 190, 135000, Demand::Medium),
        TrendingJob::new("Quantum Software Developer", 150, 165000, Demand::Medium),
    ]
}

pub fn trending_skills() -> Vec<String> {
    TRENDING_SKILLS.iter().map(|s| s.to_string()).collect()
}

/// Demand score table in declaration order
pub fn skill_scores() -> Vec<SkillScore> {
    SKILL_SCORES
        .iter()
        .map(|(skill, score)| SkillScore {
            skill: skill.to_string(),
            score: *score,
        })
        .collect()
}

/// Ordered course steps for `role`.
///
/// Only "AI Engineer" has a curated path; every other role is reported as
/// `RoleNotSupported` so callers can show it instead of failing the pass.
pub fn learning_path(role: &str) -> Result<Vec<CourseStep>, CatalogError> {
    match role {
        "AI Engineer" => Ok(vec![
            CourseStep::new("Advanced LangChain Development", "DeepLearning.AI", "6 weeks", 4.8, "$49"),
            CourseStep::new("Vector Database Mastery", "Pinecone Academy", "4 weeks", 4.7, "$39"),
            CourseStep::new("MLOps with Kubernetes", "Coursera", "8 weeks", 4.6, "$59"),
            CourseStep::new("AI Safety & Ethics", "Stanford Online", "3 weeks", 4.9, "Free"),
        ]),
        other => Err(CatalogError::RoleNotSupported(other.to_string())),
    }
}

/// Monthly average salary series; independent of title and location
pub fn salary_series(_job_title: &str, _location: &str) -> Vec<SalaryPoint> {
    SALARY_MONTHS
        .iter()
        .zip(SALARY_VALUES.iter())
        .map(|(month, salary)| SalaryPoint {
            month: month.to_string(),
            salary: *salary,
        })
        .collect()
}

pub fn salary_metrics() -> Vec<Metric> {
    vec![
        Metric::new("Current Average", "$158,000").with_delta("+8.9%"),
        Metric::new("Market Growth", "+12.5%").with_delta("vs last year"),
        Metric::new("Job Postings", "2,847").with_delta("+34%"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_jobs_ignore_inputs() {
        let a = trending_jobs("Remote", "Technology");
        let b = trending_jobs("Berlin", "All");
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
        assert_eq!(a[0].title, "AI Safety Engineer");
        assert_eq!(a[0].demand, Demand::VeryHigh);
    }

    #[test]
    fn test_skill_scores_order() {
        let scores = skill_scores();
        let names: Vec<_> = scores.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names[0], "Python");
        assert_eq!(names[8], "Rust");
        assert!(scores.iter().all(|s| s.score <= 100));
    }

    #[test]
    fn test_learning_path_for_ai_engineer() {
        let steps = learning_path("AI Engineer").unwrap();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[0].course, "Advanced LangChain Development");
        assert_eq!(steps[3].price, "Free");
    }

    #[test]
    fn test_learning_path_other_roles_not_supported() {
        for role in TARGET_ROLES.iter().filter(|r| **r != "AI Engineer") {
            let err = learning_path(role).unwrap_err();
            assert_eq!(err, CatalogError::RoleNotSupported(role.to_string()));
        }
    }

    #[test]
    fn test_salary_series_fixed() {
        for location in SALARY_LOCATIONS {
            let series = salary_series("Anything", location);
            let salaries: Vec<u64> = series.iter().map(|p| p.salary).collect();
            let months: Vec<&str> = series.iter().map(|p| p.month.as_str()).collect();
            assert_eq!(salaries, vec![145000, 148000, 152000, 155000, 158000]);
            assert_eq!(months, vec!["Jan", "Feb", "Mar", "Apr", "May"]);
        }
    }

    #[test]
    fn test_salary_metrics() {
        let metrics = salary_metrics();
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics[0].value, "$158,000");
        assert_eq!(metrics[2].delta.as_deref(), Some("+34%"));
    }
}
