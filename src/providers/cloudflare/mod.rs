//! Cloudflare DNS reconciliation.
//!
//! One pass lists the zone's A records, scans them for the target domain,
//! and performs the minimal converging action: create the record if it is
//! absent, update it if its content or proxied flag diverges, otherwise
//! skip without writing.
//!
//! A failed listing aborts the pass before any write is attempted; without
//! knowing current state there is no safe write decision. A failed write is
//! logged and reported without aborting, since the divergence persists and
//! the next pass retries naturally.

pub mod constants;
pub mod errors;
pub mod functions;
pub mod impls;
pub mod models;
pub mod types;
