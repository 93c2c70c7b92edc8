/// Error kinds surfaced by the core crate

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("API Error: {0}")]
    Status(u16),

    #[error("Connection Error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No learning path available for role '{0}' yet")]
    RoleNotSupported(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),

    #[error("Invalid data source '{0}': expected 'mock' or 'api'")]
    InvalidDataSource(String),

    #[error("Invalid API base URL '{0}'")]
    InvalidBaseUrl(String),
}
