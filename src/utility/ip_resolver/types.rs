// 3rd party crates
use reqwest::Client;

/// Resolves the caller's current public IPv4 address.
#[derive(Debug, Clone)]
pub struct IpResolver {
    pub client: Client,
}
