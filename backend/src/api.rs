//! Web API Module
//!
//! Exposes the dashboard's data as JSON over GET endpoints.
//! No authentication; every body is built from the shared catalog.

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;
use trendhire_core::types::TrendingJob;
use trendhire_core::{analysis, catalog};

/// Skills the server always advises learning
const RECOMMENDED_SKILLS: [&str; 2] = ["LangChain", "MLOps"];

// ============================================================
// APPLICATION STATE
// ============================================================

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Whether a scraping provider key is present in the environment
    pub bright_data_configured: bool,
}

impl AppState {
    pub fn from_env() -> Self {
        Self {
            bright_data_configured: std::env::var("BRIGHT_DATA_API_KEY")
                .map(|key| !key.is_empty())
                .unwrap_or(false),
        }
    }
}

// ============================================================
// RESPONSE TYPES
// ============================================================

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub bright_data_configured: bool,
}

#[derive(Serialize)]
pub struct TrendingJobsResponse {
    pub trending_jobs: Vec<TrendingJob>,
}

#[derive(Serialize)]
pub struct SkillsAnalysisResponse {
    pub current_skills: Vec<String>,
    pub trending_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

// ============================================================
// API HANDLERS
// ============================================================

async fn root() -> impl Responder {
    HttpResponse::Ok().json(RootResponse {
        message: "TrendHire API is running!",
        status: "success",
    })
}

/// Health check endpoint
async fn health_check(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        bright_data_configured: data.bright_data_configured,
    })
}

async fn trending_jobs() -> impl Responder {
    log::info!("Serving trending jobs");

    // The API has no filters; the dashboard's inputs never reach it
    HttpResponse::Ok().json(TrendingJobsResponse {
        trending_jobs: catalog::trending_jobs("", ""),
    })
}

async fn skills_analysis(path: web::Path<String>) -> impl Responder {
    let skills = path.into_inner();
    log::info!("Analyzing skills: {}", skills);

    HttpResponse::Ok().json(SkillsAnalysisResponse {
        current_skills: analysis::parse_skills(&skills),
        trending_skills: catalog::trending_skills(),
        recommendations: RECOMMENDED_SKILLS
            .iter()
            .map(|skill| format!("Learn {} to increase marketability", skill))
            .collect(),
    })
}

// ============================================================
// SERVER CONFIGURATION
// ============================================================

/// Register every route; shared by the server and the tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root))
        .route("/health", web::get().to(health_check))
        .route("/trending-jobs", web::get().to(trending_jobs))
        .route("/skills-analysis/{skills}", web::get().to(skills_analysis));
}

/// Configure and run the API server
pub async fn run_server(host: &str, port: u16, state: AppState) -> std::io::Result<()> {
    log::info!("TrendHire API starting at http://{}:{}", host, port);
    log::info!(
        "Bright Data configured: {}",
        state.bright_data_configured
    );
    log::info!("Endpoints: GET /, /health, /trending-jobs, /skills-analysis/{{skills}}");

    let state = web::Data::new(state);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((host, port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::Value;

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_rt::test]
    async fn test_root() {
        let (status, body) = get_json(AppState::default(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "TrendHire API is running!");
        assert_eq!(body["status"], "success");
    }

    #[actix_rt::test]
    async fn test_health_reports_key_presence() {
        let (_, body) = get_json(AppState::default(), "/health").await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["bright_data_configured"], false);

        let state = AppState {
            bright_data_configured: true,
        };
        let (_, body) = get_json(state, "/health").await;
        assert_eq!(body["bright_data_configured"], true);
    }

    #[actix_rt::test]
    async fn test_trending_jobs_body() {
        let (status, body) = get_json(AppState::default(), "/trending-jobs").await;
        assert_eq!(status, StatusCode::OK);

        let jobs = body["trending_jobs"].as_array().unwrap();
        assert_eq!(jobs.len(), 5);
        assert_eq!(jobs[0]["title"], "AI Safety Engineer");
        assert_eq!(jobs[0]["growth"], 340);
        assert_eq!(jobs[0]["demand"], "Very High");
    }

    #[actix_rt::test]
    async fn test_skills_analysis_body() {
        let (status, body) =
            get_json(AppState::default(), "/skills-analysis/Python,React").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_skills"], serde_json::json!(["Python", "React"]));
        assert_eq!(body["trending_skills"].as_array().unwrap().len(), 5);
        assert_eq!(
            body["recommendations"],
            serde_json::json!([
                "Learn LangChain to increase marketability",
                "Learn MLOps to increase marketability"
            ])
        );
    }

    #[actix_rt::test]
    async fn test_skills_analysis_decodes_encoded_segment() {
        let (status, body) = get_json(
            AppState::default(),
            "/skills-analysis/C%23%2C%20CI%2FCD",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_skills"], serde_json::json!(["C#", "CI/CD"]));
    }

    #[actix_rt::test]
    async fn test_bodies_parse_on_the_client_side() {
        let (_, body) = get_json(AppState::default(), "/trending-jobs").await;
        let jobs = trendhire_core::response::parse_trending_jobs(body).unwrap();
        assert_eq!(jobs, catalog::trending_jobs("", ""));

        let (_, body) = get_json(AppState::default(), "/skills-analysis/Rust").await;
        let analysis = trendhire_core::response::parse_skill_analysis(body).unwrap();
        assert_eq!(analysis.profile.current_skills, vec!["Rust"]);
        assert_eq!(analysis.profile.skill_scores, catalog::skill_scores());
        assert_eq!(analysis.recommendations.len(), 2);
    }
}
