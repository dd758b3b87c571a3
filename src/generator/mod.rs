//! Project generation behind a narrow interface
//!
//! The converter only needs two things from Xcode: a freshly generated Safari
//! extension project and a way to stamp version numbers into it. Keeping both
//! behind [`ProjectGenerator`] lets the patch steps run against a fake tree.

pub mod xcrun;

pub use xcrun::XcrunGenerator;

use crate::error::ConvertError;
use crate::models::Platform;
use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Path, PathBuf};

lazy_static! {
    // agvtool only accepts dot-separated integers
    static ref XCODE_VERSION: Regex = Regex::new(r"^\d+(\.\d+)*$").unwrap();
}

#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub source_dir: PathBuf,
    /// Passed as `--project-location`; the project lands in `<location>/<app_name>`
    pub location: PathBuf,
    pub app_name: String,
    pub bundle_identifier: String,
    pub platform: Platform,
}

impl GenerateRequest {
    pub fn project_dir(&self) -> PathBuf {
        self.location.join(&self.app_name)
    }
}

pub trait ProjectGenerator {
    /// Generate (overwriting) a Safari extension project, returning its directory
    fn generate(&self, request: &GenerateRequest) -> Result<PathBuf>;

    /// Set both the build number and the marketing version of a project
    fn set_version(&self, project_dir: &Path, version: &str) -> Result<()>;
}

impl<G: ProjectGenerator + ?Sized> ProjectGenerator for &G {
    fn generate(&self, request: &GenerateRequest) -> Result<PathBuf> {
        (**self).generate(request)
    }

    fn set_version(&self, project_dir: &Path, version: &str) -> Result<()> {
        (**self).set_version(project_dir, version)
    }
}

/// Reject versions Xcode would refuse before anything is shelled out
pub fn check_version(version: &str) -> Result<(), ConvertError> {
    if XCODE_VERSION.is_match(version) {
        Ok(())
    } else {
        Err(ConvertError::InvalidVersion(version.to_string()))
    }
}
