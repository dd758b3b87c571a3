//! Core data models for extension conversion

pub mod manifest;
pub mod platform;
pub mod layout;
pub mod conversion;

pub use manifest::*;
pub use platform::*;
pub use layout::*;
pub use conversion::*;
