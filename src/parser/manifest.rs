//! Manifest parsing functionality

use crate::models::Manifest;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse manifest.json from bytes
pub fn parse_manifest(content: &[u8]) -> Result<Manifest> {
    let content_str = std::str::from_utf8(content)
        .context("Invalid UTF-8 in manifest.json")?;

    // json5 tolerates the comments some extension manifests carry
    let manifest: Manifest = json5::from_str(content_str)
        .context("Failed to parse manifest.json")?;

    match manifest.manifest_version() {
        Some(2) | Some(3) => {}
        Some(other) => anyhow::bail!("Unsupported manifest version: {}", other),
        None => anyhow::bail!("manifest_version is required"),
    }

    if manifest.name().is_none() {
        anyhow::bail!("Manifest name is required");
    }

    if manifest.version().map_or(true, |v| v.trim().is_empty()) {
        anyhow::bail!("Manifest version is required");
    }

    Ok(manifest)
}

/// Parse manifest.json from file path
pub fn parse_manifest_from_file(path: impl AsRef<Path>) -> Result<Manifest> {
    let path = path.as_ref();
    let content = std::fs::read(path)
        .with_context(|| format!("Failed to read manifest file {}", path.display()))?;
    parse_manifest(&content)
        .with_context(|| format!("Invalid manifest {}", path.display()))
}

/// Parse manifest.json from string
pub fn parse_manifest_from_str(content: &str) -> Result<Manifest> {
    parse_manifest(content.as_bytes())
}

/// Write a manifest with two-space indentation, creating parent folders
pub fn write_manifest(manifest: &Manifest, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = manifest.to_pretty_json()?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write manifest {}", path.display()))
}
