//! HTTP protocol layer module
//!
//! MIME detection and response builders, decoupled from the asset tree and
//! the fallback policy.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{build_405_response, build_500_response, build_options_response};
