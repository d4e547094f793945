// 3rd party crates
use serde::Deserialize;

/// A single DNS record as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecord {
    pub id: String,
    pub name: String,
    pub content: String,
    pub proxied: bool,
}

/// Envelope for the record listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Vec<DnsRecord>,
}

/// Envelope for record create and update calls.
#[derive(Debug, Deserialize)]
pub struct WriteResponse {
    pub success: bool,
    pub result: Option<DnsRecord>,
}
