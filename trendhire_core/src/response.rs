//! Conversion of raw API JSON into typed records
//!
//! Shape problems are reported as `ApiError::Malformed` at parse time
//! rather than surfacing later as missing fields during rendering.

use crate::catalog;
use crate::error::ApiError;
use crate::types::{SkillProfile, SkillScore, TrendingJob};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct TrendingJobsBody {
    trending_jobs: Vec<TrendingJob>,
}

#[derive(Debug, Deserialize)]
struct SkillsAnalysisBody {
    current_skills: Vec<String>,
    trending_skills: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
    #[serde(default)]
    skill_scores: Option<serde_json::Map<String, Value>>,
}

/// Skill analysis as served by the API
#[derive(Debug, Clone, PartialEq)]
pub struct SkillAnalysis {
    pub profile: SkillProfile,
    /// Free-form advice strings from the server, shown as-is
    pub recommendations: Vec<String>,
}

pub fn parse_trending_jobs(value: Value) -> Result<Vec<TrendingJob>, ApiError> {
    let body: TrendingJobsBody =
        serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))?;
    Ok(body.trending_jobs)
}

/// Parse a skills-analysis body. Responses without `skill_scores` are
/// scored against the literal demand table.
pub fn parse_skill_analysis(value: Value) -> Result<SkillAnalysis, ApiError> {
    let body: SkillsAnalysisBody =
        serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))?;

    let skill_scores = match body.skill_scores {
        Some(map) => map
            .into_iter()
            .map(|(skill, score)| parse_score(&skill, &score).map(|score| SkillScore { skill, score }))
            .collect::<Result<Vec<_>, _>>()?,
        None => catalog::skill_scores(),
    };

    Ok(SkillAnalysis {
        profile: SkillProfile {
            current_skills: body.current_skills,
            trending_skills: body.trending_skills,
            skill_scores,
        },
        recommendations: body.recommendations,
    })
}

fn parse_score(skill: &str, value: &Value) -> Result<u8, ApiError> {
    match value.as_u64() {
        Some(score) if score <= 100 => Ok(score as u8),
        _ => Err(ApiError::Malformed(format!(
            "score for '{}' must be an integer between 0 and 100, got {}",
            skill, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Demand;
    use serde_json::json;

    #[test]
    fn test_parse_trending_jobs() {
        let value = json!({
            "trending_jobs": [
                {"title": "Prompt Engineer", "growth": 280, "avg_salary": 145000, "demand": "High"},
                {"title": "AI Safety Engineer", "growth": 340, "avg_salary": 185000, "demand": "Very High"}
            ]
        });

        let jobs = parse_trending_jobs(value).unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[1].demand, Demand::VeryHigh);
    }

    #[test]
    fn test_parse_trending_jobs_malformed() {
        let err = parse_trending_jobs(json!({"jobs": []})).unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
        assert!(err.to_string().starts_with("Malformed response"));

        let err = parse_trending_jobs(json!({
            "trending_jobs": [{"title": "X", "growth": "fast", "avg_salary": 1, "demand": "High"}]
        }))
        .unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn test_parse_skill_analysis_falls_back_to_literal_scores() {
        let value = json!({
            "current_skills": ["Python", "React"],
            "trending_skills": ["LangChain", "MLOps"],
            "recommendations": ["Learn LangChain to increase marketability"]
        });

        let analysis = parse_skill_analysis(value).unwrap();
        assert_eq!(analysis.profile.current_skills, vec!["Python", "React"]);
        assert_eq!(analysis.profile.skill_scores, catalog::skill_scores());
        assert_eq!(analysis.recommendations.len(), 1);
    }

    #[test]
    fn test_parse_skill_analysis_with_scores() {
        let value = json!({
            "current_skills": ["Go"],
            "trending_skills": ["Rust"],
            "skill_scores": {"Go": 70, "Rust": 12}
        });

        let analysis = parse_skill_analysis(value).unwrap();
        assert_eq!(analysis.profile.score_of("Rust"), 12);
        assert!(analysis.recommendations.is_empty());
    }

    #[test]
    fn test_server_scores_keep_body_order() {
        let body = r#"{
            "current_skills": [],
            "trending_skills": [],
            "skill_scores": {"Python": 80, "MLOps": 30, "AI/ML": 40}
        }"#;
        let value: Value = serde_json::from_str(body).unwrap();

        let analysis = parse_skill_analysis(value).unwrap();
        let order: Vec<&str> = analysis
            .profile
            .skill_scores
            .iter()
            .map(|s| s.skill.as_str())
            .collect();
        assert_eq!(order, vec!["Python", "MLOps", "AI/ML"]);
    }

    #[test]
    fn test_parse_skill_analysis_rejects_out_of_range_score() {
        let value = json!({
            "current_skills": [],
            "trending_skills": [],
            "skill_scores": {"Rust": 140}
        });

        let err = parse_skill_analysis(value).unwrap_err();
        assert!(err.to_string().contains("Rust"));
    }
}
