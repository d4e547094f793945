// 3rd party crates
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpResolverError {
    #[error("Network error from trace endpoint: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Trace response has no 'ip' field")]
    MissingIpField,
}
