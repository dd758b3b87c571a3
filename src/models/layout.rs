//! Paths inside a project generated by `safari-web-extension-converter`
//!
//! For platform `P` and app name `A` the generator produces:
//!
//! ```text
//! <root>/<P>/<A>/                  project directory (agvtool runs here)
//! <root>/<P>/<A>/<A>/              app target
//! <root>/<P>/<A>/<A> Extension/    extension target
//! ```

use super::Platform;
use std::path::{Path, PathBuf};

/// Placeholder for the app name in configured relative paths
pub const APP_PLACEHOLDER: &str = "{app}";

#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    app_name: String,
    platform: Platform,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, app_name: impl Into<String>, platform: Platform) -> Self {
        Self {
            root: root.into(),
            app_name: app_name.into(),
            platform,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Directory handed to the generator as `--project-location`
    pub fn location(&self) -> PathBuf {
        self.root.join(self.platform.dir_name())
    }

    pub fn project_dir(&self) -> PathBuf {
        self.location().join(&self.app_name)
    }

    pub fn extension_dir(&self) -> PathBuf {
        self.project_dir().join(format!("{} Extension", self.app_name))
    }

    pub fn resources_dir(&self) -> PathBuf {
        self.extension_dir().join("Resources")
    }

    pub fn info_plist(&self) -> PathBuf {
        self.extension_dir().join("Info.plist")
    }

    pub fn manifest(&self) -> PathBuf {
        self.resources_dir().join("manifest.json")
    }

    /// Resolve a path relative to the project directory, expanding `{app}`
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        let expanded = relative
            .as_ref()
            .to_string_lossy()
            .replace(APP_PLACEHOLDER, &self.app_name);
        self.project_dir().join(expanded)
    }

    /// Resolve a path relative to the root the platform folders live in
    pub fn resolve_from_root(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
