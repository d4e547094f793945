// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Configuration validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("api_token must not be empty")]
    MissingApiToken,
    #[error("zone_id must not be empty")]
    MissingZoneId,
    #[error("domain must not be empty")]
    MissingDomain,
}
