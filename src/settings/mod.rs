//! Configuration loading and validation.
//!
//! Settings come from a single JSON file whose path is given on the command
//! line. The file is loaded once at startup, validated, and then passed
//! around by value; there is no process-wide mutable configuration.

pub mod errors;
pub mod impls;
pub mod types;
