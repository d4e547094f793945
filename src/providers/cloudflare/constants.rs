/// Base URL for the Cloudflare v4 API.
pub const CLOUDFLARE_API_BASE: &str = "https://api.cloudflare.com/client/v4";

/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
