//! Pages driven through the API client with a scripted transport

use trendhire_cli::{render_pass, write_report, Page, PageContext, PageView, ReportFormat, Session};
use trendhire_core::types::NoticeLevel;
use trendhire_core::{ApiClient, Config, DataSource, MockTransport};

fn api_client(transport: MockTransport) -> ApiClient {
    let config = Config::default()
        .with_base_url("http://localhost:8080")
        .unwrap()
        .with_data_source(DataSource::Api);
    ApiClient::with_transport(&config, Box::new(transport))
}

fn api_ctx(client: &ApiClient) -> PageContext<'_> {
    PageContext {
        data_source: DataSource::Api,
        client: Some(client),
    }
}

#[test]
fn test_trending_jobs_from_api() {
    let body = r#"{"trending_jobs": [
        {"title": "AI Safety Engineer", "growth": 340, "avg_salary": 185000, "demand": "Very High"}
    ]}"#;
    let transport = MockTransport::respond(200, body);
    let client = api_client(transport.clone());

    let pass = render_pass(&Session::new(), &api_ctx(&client));
    match pass.view {
        Some(PageView::TrendingJobs(view)) => assert_eq!(view.jobs.len(), 1),
        other => panic!("unexpected view: {:?}", other),
    }
    assert_eq!(transport.requests(), vec!["http://localhost:8080/trending-jobs"]);
}

#[test]
fn test_skill_endpoint_carries_trimmed_input() {
    let body = r#"{"current_skills": ["Python"], "trending_skills": ["MLOps"], "recommendations": []}"#;
    let transport = MockTransport::respond(200, body);
    let client = api_client(transport.clone());

    let mut session = Session::new();
    session.select_page(Page::SkillAnalysis);
    session.skills.skills.set("  Python  ");
    let pass = render_pass(&session, &api_ctx(&client));

    assert_eq!(
        transport.requests(),
        vec!["http://localhost:8080/skills-analysis/Python"]
    );
    // MLOps scores 30 in the fallback table
    assert_eq!(pass.notices.len(), 1);
    assert_eq!(pass.notices[0].level, NoticeLevel::Warning);
}

#[test]
fn test_connection_failure_surfaces_banner() {
    let client = api_client(MockTransport::fail("connection refused"));
    let pass = render_pass(&Session::new(), &api_ctx(&client));

    assert!(pass.view.is_none());
    assert_eq!(pass.notices[0].message, "Connection Error: connection refused");

    let mut out = Vec::new();
    write_report(&mut out, &pass, ReportFormat::Text).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("[ERROR] Connection Error: connection refused"));
}

#[test]
fn test_pages_not_served_by_api_stay_local() {
    let transport = MockTransport::respond(500, "");
    let client = api_client(transport.clone());

    let mut session = Session::new();
    session.select_page(Page::LearningPaths);
    let pass = render_pass(&session, &api_ctx(&client));

    assert!(pass.view.is_some());
    assert!(transport.requests().is_empty());
}
