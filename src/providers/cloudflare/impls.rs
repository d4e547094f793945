// 3rd party crates
use async_trait::async_trait;

// Project imports
use crate::providers::{DnsProvider, ReconcileOutcome};
use crate::settings::types::Settings;

// Current module imports
use super::errors::CloudflareError;
use super::functions::{create_reqwest_client, reconcile_record};
use super::types::{CfConfig, Cloudflare};

impl From<&Settings> for CfConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            api_token: settings.api_token.clone(),
            zone_id: settings.zone_id.clone(),
            domain: settings.domain.clone(),
            proxied: settings.proxied,
        }
    }
}

#[async_trait]
impl DnsProvider for Cloudflare {
    type Config = CfConfig;
    type Error = CloudflareError;

    fn new(config: Self::Config) -> Result<Self, Self::Error> {
        let client = create_reqwest_client(&config)?;
        Ok(Self { config, client })
    }

    async fn reconcile(&self, ipv4_addr: &str) -> Result<ReconcileOutcome, Self::Error> {
        reconcile_record(self, ipv4_addr).await
    }

    fn get_name(&self) -> &str {
        "cloudflare"
    }
}
