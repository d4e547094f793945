// Standard library
use std::fmt;

// 3rd party crates
use serde::Deserialize;

/// Application settings, deserialized from the JSON configuration file.
///
/// All fields are required; a missing field fails the load.
#[derive(Deserialize, Clone)]
pub struct Settings {
    /// Cloudflare API token with DNS edit permissions for the zone.
    pub api_token: String,
    /// Identifier of the zone that holds the managed record.
    pub zone_id: String,
    /// Fully-qualified name of the record to keep in sync.
    pub domain: String,
    /// Whether traffic for the record is routed through Cloudflare's edge.
    pub proxied: bool,
    /// Minutes between passes. `0` runs a single pass and exits.
    pub update_interval_mins: u64,
}

// The API token stays out of Debug output.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_token", &"<REDACTED>")
            .field("zone_id", &self.zone_id)
            .field("domain", &self.domain)
            .field("proxied", &self.proxied)
            .field("update_interval_mins", &self.update_interval_mins)
            .finish()
    }
}
