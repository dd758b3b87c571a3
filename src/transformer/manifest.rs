//! Manifest transformation for Safari

use crate::models::{Manifest, Platform};

pub struct ManifestTransformer {
    platform: Platform,
    permissions: Vec<String>,
}

impl ManifestTransformer {
    pub fn new(platform: Platform, permissions: &[String]) -> Self {
        Self {
            platform,
            permissions: permissions.to_vec(),
        }
    }

    pub fn transform(&self, manifest: &Manifest) -> Manifest {
        let mut result = manifest.clone();

        // Safari rejects several Chrome permissions; use the fixed set instead
        result.set_permissions(&self.permissions);

        // iOS cannot keep a persistent background page alive
        if self.platform == Platform::Ios {
            result.set_persistent(false);
        }

        result
    }

    /// Human readable summary of what `transform` changed
    pub fn describe(&self, before: &Manifest) -> Vec<String> {
        let mut changes = vec![format!("permissions set to [{}]", self.permissions.join(", "))];
        if self.platform == Platform::Ios && before.is_persistent() != Some(false) {
            changes.push("background.persistent set to false".to_string());
        }
        changes
    }
}
