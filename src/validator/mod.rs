//! Validation module

pub mod host;
pub mod structure;

pub use host::{ensure_supported_host, current_host};
pub use structure::validate_platform;
