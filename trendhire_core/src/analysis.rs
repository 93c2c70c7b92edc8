//! Skill-gap analysis over the literal demand table

use crate::catalog;
use crate::types::{Notice, SkillProfile};

/// Trending skills scoring below this are flagged as high priority
pub const HIGH_PRIORITY_THRESHOLD: u8 = 60;

/// Split comma-separated input into trimmed skill names.
/// Order and duplicates are kept as typed.
pub fn parse_skills(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// Profile for the user's input, or `None` when the input is blank
pub fn build_skill_profile(input: &str) -> Option<SkillProfile> {
    if input.trim().is_empty() {
        return None;
    }

    Some(SkillProfile {
        current_skills: parse_skills(input),
        trending_skills: catalog::trending_skills(),
        skill_scores: catalog::skill_scores(),
    })
}

/// One warning per trending skill whose score is under the threshold
pub fn recommendations(profile: &SkillProfile) -> Vec<Notice> {
    profile
        .trending_skills
        .iter()
        .filter_map(|skill| {
            let score = profile.score_of(skill);
            if score < HIGH_PRIORITY_THRESHOLD {
                Some(Notice::warning(format!(
                    "{}: Current level {}% - High priority for learning",
                    skill, score
                )))
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NoticeLevel, SkillScore};

    #[test]
    fn test_parse_skills_trims_and_keeps_order() {
        assert_eq!(parse_skills("Python, React"), vec!["Python", "React"]);
        assert_eq!(
            parse_skills(" SQL ,Python,  SQL"),
            vec!["SQL", "Python", "SQL"]
        );
    }

    #[test]
    fn test_blank_input_is_noop() {
        assert!(build_skill_profile("").is_none());
        assert!(build_skill_profile("   ").is_none());
    }

    #[test]
    fn test_profile_merges_literal_scores() {
        let profile = build_skill_profile("Go").unwrap();
        assert_eq!(profile.current_skills, vec!["Go"]);
        assert_eq!(profile.trending_skills.len(), 5);
        assert_eq!(profile.skill_scores.len(), 9);
        assert_eq!(profile.score_of("Kubernetes"), 45);
    }

    #[test]
    fn test_all_trending_skills_flagged() {
        let profile = build_skill_profile("Python, React").unwrap();
        let notices = recommendations(&profile);

        assert_eq!(notices.len(), 5);
        assert!(notices.iter().all(|n| n.level == NoticeLevel::Warning));
        assert_eq!(
            notices[0].message,
            "LangChain: Current level 20% - High priority for learning"
        );
        assert!(notices[4].message.starts_with("Rust: Current level 10%"));
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let profile = SkillProfile {
            current_skills: vec![],
            trending_skills: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            skill_scores: vec![
                SkillScore { skill: "A".to_string(), score: 60 },
                SkillScore { skill: "B".to_string(), score: 59 },
            ],
        };

        let notices = recommendations(&profile);
        // A sits on the threshold, C is unscored and counts as 0
        assert_eq!(notices.len(), 2);
        assert!(notices[0].message.starts_with("B:"));
        assert!(notices[1].message.starts_with("C: Current level 0%"));
    }
}
