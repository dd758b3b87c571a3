//! Chrome to Safari Extension Converter
//!
//! Drives Apple's `safari-web-extension-converter` for macOS and iOS, then
//! patches the generated projects (manifest, Info.plist, stylesheets and
//! scripts) for the differences between Chrome's and Safari's extension APIs.

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod generator;
pub mod transformer;
pub mod validator;
pub mod report;

pub use config::ConverterConfig;
pub use error::ConvertError;
pub use generator::{GenerateRequest, ProjectGenerator, XcrunGenerator};
pub use models::{ConversionReport, Manifest, Platform, PlatformReport};
pub use transformer::transform_project;

use anyhow::Result;

/// Main entry point: refuse to run off macOS, then convert every configured platform
pub fn convert_extension<G: ProjectGenerator>(config: &ConverterConfig, generator: G) -> Result<ConversionReport> {
    convert_extension_on_host(validator::current_host(), config, generator)
}

/// Same as [`convert_extension`] with the host operating system given explicitly
pub fn convert_extension_on_host<G: ProjectGenerator>(
    host_os: &str,
    config: &ConverterConfig,
    generator: G,
) -> Result<ConversionReport> {
    validator::ensure_supported_host(host_os)?;
    Converter::new(config.clone(), generator)?.run()
}

/// One conversion run: the shared manifest is read once and reused per platform
pub struct Converter<G> {
    config: ConverterConfig,
    generator: G,
    manifest: Manifest,
}

impl<G: ProjectGenerator> Converter<G> {
    pub fn new(config: ConverterConfig, generator: G) -> Result<Self> {
        config.check()?;
        let manifest = parser::parse_manifest_from_file(config.manifest_path())?;
        Ok(Self {
            config,
            generator,
            manifest,
        })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Generate, patch and validate a single platform
    pub fn convert_platform(&self, platform: Platform) -> Result<PlatformReport> {
        let report = transform_project(platform, &self.config, &self.manifest, &self.generator)?;
        let layout = models::ProjectLayout::new(&self.config.project_root, &self.config.app_name, platform);
        validator::validate_platform(&layout, &self.config)?;
        Ok(report)
    }

    /// Convert every configured platform, strictly one after another
    pub fn run(&self) -> Result<ConversionReport> {
        let mut report = self.empty_report();
        for &platform in &self.config.platforms {
            report.platforms.push(self.convert_platform(platform)?);
        }
        Ok(report)
    }

    pub fn empty_report(&self) -> ConversionReport {
        ConversionReport {
            extension_name: self.manifest.name().unwrap_or_default().to_string(),
            extension_version: self.manifest.version().unwrap_or_default().to_string(),
            platforms: Vec::new(),
        }
    }
}
