/// Trace endpoint used to learn the caller's public address.
pub const TRACE_ENDPOINT: &str = "https://1.1.1.1/cdn-cgi/trace";

/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
