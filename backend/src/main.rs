//! TrendHire API - Main Entry Point
//!
//! Starts the mock data server the dashboard's live mode talks to.

use trendhire_api::api::{run_server, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()
        .unwrap_or(8080);

    let state = AppState::from_env();
    run_server(&host, port, state).await
}
