//! Public IPv4 address resolution.
//!
//! Asks Cloudflare's trace endpoint for the caller's externally visible
//! address. The endpoint answers with newline-delimited `key=value` pairs;
//! only the `ip` key is of interest here.
//!
//! Resolution is deliberately stateless: the address is re-derived on every
//! pass and never cached, since detecting change is the whole point. One
//! outbound request per call, no retries; transient failures propagate to
//! the caller, which skips the pass and tries again on the next cycle.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;
