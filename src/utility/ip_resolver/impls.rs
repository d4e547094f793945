// Standard library
use std::time::Duration;

// 3rd party crates
use reqwest::Client;
use tracing::debug;

// Current module imports
use super::constants::{REQUEST_TIMEOUT_SECS, TRACE_ENDPOINT};
use super::errors::IpResolverError;
use super::functions::parse_trace_ip;
use super::types::IpResolver;

impl IpResolver {
    pub fn new() -> Result<Self, IpResolverError> {
        let client: Client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self { client })
    }

    /// Resolves the current public IPv4 address from the trace endpoint.
    pub async fn resolve(&self) -> Result<String, IpResolverError> {
        debug!(url = TRACE_ENDPOINT, "Querying trace endpoint");

        let body: String = self
            .client
            .get(TRACE_ENDPOINT)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        parse_trace_ip(&body)
    }
}
