// Core data, analysis and API access for the TrendHire career dashboard.

pub mod types;
pub mod error;
pub mod config;
pub mod catalog;
pub mod analysis;
pub mod response;
pub mod api_client;

pub use api_client::{ApiClient, HttpResponse, HttpTransport, MockTransport, ReqwestTransport};
pub use config::{Config, DataSource};
pub use error::{ApiError, CatalogError, ConfigError};
