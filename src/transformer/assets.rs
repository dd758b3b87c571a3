//! Stylesheet and HTML template adjustments

use crate::config::AssetRule;
use crate::models::{ChangeKind, PlatformReport, ProjectLayout};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn apply_assets(rules: &[AssetRule], layout: &ProjectLayout, report: &mut PlatformReport) -> Result<()> {
    for rule in rules.iter().filter(|r| r.applies_to(layout.platform())) {
        match rule {
            AssetRule::Rename { from, to, .. } => {
                let from = layout.resolve(from);
                let to = layout.resolve(to);
                ensure_parent(&to)?;
                fs::rename(&from, &to).with_context(|| {
                    format!("Failed to rename {} to {}", from.display(), to.display())
                })?;
                report.record(&to, ChangeKind::Renamed, format!("from {}", from.display()));
            }
            AssetRule::Copy { from, to, .. } => {
                let from = layout.resolve_from_root(from);
                let to = layout.resolve(to);
                ensure_parent(&to)?;
                fs::copy(&from, &to).with_context(|| {
                    format!("Failed to copy {} to {}", from.display(), to.display())
                })?;
                report.record(&to, ChangeKind::Created, format!("copied from {}", from.display()));
            }
        }
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}
