//! Converter configuration
//!
//! Defaults reproduce the RECAP build. A json5 file can override any field;
//! fields it leaves out keep their defaults.

use crate::models::Platform;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PERMISSIONS: &[&str] = &[
    "*://*.uscourts.gov/",
    "notifications",
    "storage",
    "unlimitedStorage",
    "activeTab",
    "cookies",
];

pub const DEFAULT_ALLOWED_DOMAINS: &[&str] = &["ecf.*", "ecf-train.*", "pacer.*", "*.uscourts.gov"];

pub const CHROME_DETECTION: &str = "navigator.userAgent.indexOf('Chrome') < 0";
pub const SAFARI_AWARE_DETECTION: &str =
    "(navigator.userAgent.indexOf('Safari') + navigator.userAgent.indexOf('Chrome')) < 0";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Chrome extension sources (must contain manifest.json)
    pub source_dir: PathBuf,
    /// Directory the `macOS/` and `iOS/` projects are generated into
    pub project_root: PathBuf,
    pub app_name: String,
    pub bundle_identifier: String,
    pub platforms: Vec<Platform>,
    pub permissions: Vec<String>,
    pub allowed_domains: Vec<String>,
    pub page_access_level: String,
    pub bump_version: bool,
    /// File name of the bundled script wrapped in a run-once guard
    pub bootstrap_script: Option<String>,
    /// Directory searched for `bootstrap_script`, relative to the platform
    /// project directory. Subdirectories are not searched.
    pub bootstrap_dir: PathBuf,
    pub assets: Vec<AssetRule>,
    pub substitutions: Vec<SubstitutionRule>,
}

/// Static asset adjustment. `to` is relative to the platform project
/// directory; `from` is relative to it for renames and to `project_root`
/// for copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum AssetRule {
    Rename {
        platforms: Vec<Platform>,
        from: PathBuf,
        to: PathBuf,
    },
    Copy {
        platforms: Vec<Platform>,
        from: PathBuf,
        to: PathBuf,
    },
}

impl AssetRule {
    pub fn applies_to(&self, platform: Platform) -> bool {
        match self {
            AssetRule::Rename { platforms, .. } | AssetRule::Copy { platforms, .. } => {
                platforms.contains(&platform)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub platforms: Vec<Platform>,
    /// Relative to the platform project directory, `{app}` expands to the app name
    pub file: PathBuf,
    pub pattern: Pattern,
    pub replacement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    Literal(String),
    Regex(String),
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("../src"),
            project_root: PathBuf::from("."),
            app_name: "Recap!".to_string(),
            bundle_identifier: "free.law.recap".to_string(),
            platforms: Platform::ALL.to_vec(),
            permissions: DEFAULT_PERMISSIONS.iter().map(|p| p.to_string()).collect(),
            allowed_domains: DEFAULT_ALLOWED_DOMAINS.iter().map(|d| d.to_string()).collect(),
            page_access_level: "Some".to_string(),
            bump_version: true,
            bootstrap_script: Some("bootstrap.bundle.js".to_string()),
            bootstrap_dir: PathBuf::from("{app} Extension/Resources/assets/js"),
            assets: default_assets(),
            substitutions: default_substitutions(),
        }
    }
}

fn default_assets() -> Vec<AssetRule> {
    vec![
        AssetRule::Rename {
            platforms: vec![Platform::Ios],
            from: PathBuf::from("{app} Extension/Resources/assets/css/style-ios.css"),
            to: PathBuf::from("{app} Extension/Resources/assets/css/style.css"),
        },
        AssetRule::Copy {
            platforms: vec![Platform::MacOs],
            from: PathBuf::from("resources/recap-macOS.html"),
            to: PathBuf::from("{app}/Base.lproj/Main.html"),
        },
    ]
}

fn default_substitutions() -> Vec<SubstitutionRule> {
    vec![SubstitutionRule {
        platforms: Platform::ALL.to_vec(),
        file: PathBuf::from("{app} Extension/Resources/content_delegate.js"),
        pattern: Pattern::Literal(CHROME_DETECTION.to_string()),
        replacement: SAFARI_AWARE_DETECTION.to_string(),
    }]
}

impl ConverterConfig {
    /// Parse a json5 configuration document
    pub fn parse(content: &str) -> Result<Self> {
        let config: ConverterConfig = json5::from_str(content)
            .context("Failed to parse converter configuration")?;
        config.check()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.source_dir.join("manifest.json")
    }

    pub fn check(&self) -> Result<()> {
        if self.app_name.trim().is_empty() {
            anyhow::bail!("app_name must not be empty");
        }
        if self.bundle_identifier.trim().is_empty() {
            anyhow::bail!("bundle_identifier must not be empty");
        }
        if self.platforms.is_empty() {
            anyhow::bail!("At least one platform must be configured");
        }
        for rule in &self.substitutions {
            if let Pattern::Regex(pattern) = &rule.pattern {
                regex::Regex::new(pattern)
                    .with_context(|| format!("Invalid substitution pattern for {}", rule.file.display()))?;
            }
        }
        Ok(())
    }
}
