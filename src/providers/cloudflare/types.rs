// Standard library
use std::fmt;

// 3rd party crates
use reqwest::Client;

/// Represents a client for interacting with the Cloudflare API.
#[derive(Debug, Clone)]
pub struct Cloudflare {
    pub config: CfConfig,
    pub client: Client,
}

/// Reconciliation target for one zone/domain pair.
#[derive(Clone)]
pub struct CfConfig {
    pub api_token: String,
    pub zone_id: String,
    pub domain: String,
    pub proxied: bool,
}

// The API token stays out of Debug output.
impl fmt::Debug for CfConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CfConfig")
            .field("api_token", &"<REDACTED>")
            .field("zone_id", &self.zone_id)
            .field("domain", &self.domain)
            .field("proxied", &self.proxied)
            .finish()
    }
}
