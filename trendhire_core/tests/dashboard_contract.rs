/// End-to-end checks of the data contract the dashboard pages rely on

use trendhire_core::analysis::{build_skill_profile, recommendations};
use trendhire_core::catalog::{self, TARGET_ROLES};
use trendhire_core::types::NoticeLevel;
use trendhire_core::{ApiClient, CatalogError, Config, MockTransport};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mock_client(transport: MockTransport) -> ApiClient {
    let config = Config::default()
        .with_base_url("http://localhost:8080")
        .unwrap();
    ApiClient::with_transport(&config, Box::new(transport))
}

#[test]
fn test_skill_gap_flow() {
    let profile = build_skill_profile("Python, React").unwrap();
    assert_eq!(profile.current_skills, vec!["Python", "React"]);

    let scores: Vec<u8> = profile
        .trending_skills
        .iter()
        .map(|s| profile.score_of(s))
        .collect();
    assert_eq!(scores, vec![20, 15, 30, 45, 10]);

    let warnings = recommendations(&profile);
    assert_eq!(warnings.len(), 5);
    assert!(warnings.iter().all(|w| w.message.contains("High priority")));
}

#[test]
fn test_learning_path_lookup_per_role() {
    for role in TARGET_ROLES {
        match catalog::learning_path(role) {
            Ok(steps) => {
                assert_eq!(role, "AI Engineer");
                assert_eq!(steps.len(), 4);
            }
            Err(CatalogError::RoleNotSupported(name)) => assert_eq!(name, role),
        }
    }
}

#[test]
fn test_api_404_surfaces_status() {
    init_logging();
    let client = mock_client(MockTransport::respond(404, ""));

    let mut notices = Vec::new();
    assert!(client.call_api("trending-jobs", None, &mut notices).is_none());
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Error);
    assert!(notices[0].message.contains("404"));
}

#[test]
fn test_api_connection_failure_surfaces_message() {
    init_logging();
    let client = mock_client(MockTransport::fail("dns error: no such host"));

    let mut notices = Vec::new();
    assert!(client.call_api("health", None, &mut notices).is_none());
    assert!(notices[0].message.contains("dns error: no such host"));
}

#[test]
fn test_api_trending_jobs_round_trip_from_catalog() {
    let body = serde_json::json!({
        "trending_jobs": catalog::trending_jobs("Remote", "All")
    })
    .to_string();
    let client = mock_client(MockTransport::respond(200, &body));

    let mut notices = Vec::new();
    let jobs = client.fetch_trending_jobs(&mut notices).unwrap();
    assert_eq!(jobs, catalog::trending_jobs("London", "Finance"));
    assert!(notices.is_empty());
}
