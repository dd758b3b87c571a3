//! Typed failures callers may want to match on
//!
//! Everything else travels as `anyhow::Error` with file context attached.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("This tool can only be run on macOS (current host: {os})")]
    UnsupportedHost { os: String },

    #[error("`{command}` failed ({status}): {stderr}")]
    Generator {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Version '{0}' is not usable as an Xcode build number; expected dot-separated integers")]
    InvalidVersion(String),

    #[error("Key '{key}' is missing or has the wrong type in {}", .path.display())]
    MissingKey { key: String, path: PathBuf },

    #[error("Validation failed for {}: {message}", .path.display())]
    Validation { path: PathBuf, message: String },
}
