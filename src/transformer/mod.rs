//! Patches applied to a freshly generated Safari project

pub mod manifest;
pub mod property_list;
pub mod assets;
pub mod bootstrap;
pub mod substitution;

pub use manifest::ManifestTransformer;
pub use property_list::PlistTransformer;

use crate::config::ConverterConfig;
use crate::generator::{GenerateRequest, ProjectGenerator};
use crate::models::{ChangeKind, Manifest, Platform, PlatformReport, ProjectLayout};
use crate::parser::{read_plist, write_manifest, write_plist};
use anyhow::{Context, Result};

/// Generate the project for one platform and apply every patch, in order:
/// plist, manifest (with version bump), assets, bootstrap guard, substitutions.
pub fn transform_project<G: ProjectGenerator>(
    platform: Platform,
    config: &ConverterConfig,
    manifest: &Manifest,
    generator: &G,
) -> Result<PlatformReport> {
    let layout = ProjectLayout::new(&config.project_root, &config.app_name, platform);

    // 1. Generate (always forced, the previous tree is replaced)
    let request = GenerateRequest {
        source_dir: config.source_dir.clone(),
        location: layout.location(),
        app_name: config.app_name.clone(),
        bundle_identifier: config.bundle_identifier.clone(),
        platform,
    };
    let project_dir = generator
        .generate(&request)
        .with_context(|| format!("Failed to generate the {} project", platform))?;
    let mut report = PlatformReport::new(platform, project_dir.clone());

    // 2. Allowed domains
    let plist_path = layout.info_plist();
    let mut plist = read_plist(&plist_path)?;
    PlistTransformer::new(&config.page_access_level, &config.allowed_domains)
        .transform(&mut plist, &plist_path)?;
    write_plist(&plist, &plist_path)?;
    report.record(&plist_path, ChangeKind::Modified, "SFSafariPageProperties overwritten");

    // 3. Manifest and app version
    if config.bump_version {
        let version = manifest.version().unwrap_or_default();
        generator.set_version(&project_dir, version)?;
        report.version = Some(version.to_string());
    }
    let transformer = ManifestTransformer::new(platform, &config.permissions);
    let patched = transformer.transform(manifest);
    let manifest_path = layout.manifest();
    write_manifest(&patched, &manifest_path)?;
    report.record(&manifest_path, ChangeKind::Modified, transformer.describe(manifest).join("; "));

    // 4. Stylesheets and HTML
    assets::apply_assets(&config.assets, &layout, &mut report)?;

    // 5. Run-once guard
    if let Some(script) = &config.bootstrap_script {
        bootstrap::guard_scripts(&layout.resolve(&config.bootstrap_dir), script, &mut report)?;
    }

    // 6. Text substitutions
    substitution::apply_rules(&config.substitutions, &layout, &mut report)?;

    log::info!(
        "{} project patched: {} change(s), {} skipped",
        platform,
        report.applied_count(),
        report.skipped_count()
    );

    Ok(report)
}
