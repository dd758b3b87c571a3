//! Host operating system guard
//!
//! `xcrun` and the Safari converter only exist on macOS, so the check runs
//! before any file is touched.

use crate::error::ConvertError;

pub const REQUIRED_HOST: &str = "macos";

/// Operating system the binary is running on (`std::env::consts::OS`)
pub fn current_host() -> &'static str {
    std::env::consts::OS
}

pub fn ensure_supported_host(os: &str) -> Result<(), ConvertError> {
    if os == REQUIRED_HOST {
        Ok(())
    } else {
        Err(ConvertError::UnsupportedHost { os: os.to_string() })
    }
}
