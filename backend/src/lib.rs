//! TrendHire API
//!
//! Serves the dashboard's mock data over HTTP:
//! - Service banner and health check
//! - Trending job roles
//! - Skills analysis for a comma-separated skill list

pub mod api;

pub use api::*;
