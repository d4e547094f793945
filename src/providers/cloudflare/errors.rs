// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

/// Custom error type for Cloudflare operations.
#[derive(Debug, Error)]
pub enum CloudflareError {
    #[error("API token is not set for zone '{0}'")]
    InvalidApiToken(String),

    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP client error: {0}")]
    HttpClientBuild(reqwest::Error),

    #[error("Network error talking to Cloudflare: {0}")]
    Network(reqwest::Error),

    #[error("Failed to list DNS records for zone '{zone}': HTTP {status} - {body}")]
    ListFailed {
        zone: String,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to create DNS record for '{domain}': {message}")]
    CreateFailed { domain: String, message: String },

    #[error("Failed to update DNS record for '{domain}': {message}")]
    UpdateFailed { domain: String, message: String },
}
