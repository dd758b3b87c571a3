//! Extension Info.plist patching
//!
//! Safari only injects content scripts on pages the extension declares in
//! `NSExtension.SFSafariPageProperties`. The converter does not emit this key.

use crate::error::ConvertError;
use anyhow::Result;
use plist::{Dictionary, Value};
use std::path::Path;

pub const PAGE_PROPERTIES_KEY: &str = "SFSafariPageProperties";
pub const ALLOWED_DOMAINS_KEY: &str = "Allowed Domains";
pub const LEVEL_KEY: &str = "Level";

pub struct PlistTransformer {
    level: String,
    allowed_domains: Vec<String>,
}

impl PlistTransformer {
    pub fn new(level: impl Into<String>, allowed_domains: &[String]) -> Self {
        Self {
            level: level.into(),
            allowed_domains: allowed_domains.to_vec(),
        }
    }

    /// Overwrite the page properties; `path` is only used in error messages
    pub fn transform(&self, plist: &mut Value, path: &Path) -> Result<()> {
        let extension = extension_dict_mut(plist).ok_or_else(|| ConvertError::MissingKey {
            key: "NSExtension".to_string(),
            path: path.to_path_buf(),
        })?;

        let mut properties = Dictionary::new();
        properties.insert(LEVEL_KEY.to_string(), Value::String(self.level.clone()));
        properties.insert(
            ALLOWED_DOMAINS_KEY.to_string(),
            Value::Array(
                self.allowed_domains
                    .iter()
                    .map(|d| Value::String(d.clone()))
                    .collect(),
            ),
        );

        extension.insert(PAGE_PROPERTIES_KEY.to_string(), Value::Dictionary(properties));
        Ok(())
    }
}

fn extension_dict_mut(plist: &mut Value) -> Option<&mut Dictionary> {
    plist
        .as_dictionary_mut()?
        .get_mut("NSExtension")?
        .as_dictionary_mut()
}

/// Allowed domains currently declared, if any
pub fn allowed_domains(plist: &Value) -> Option<Vec<String>> {
    plist
        .as_dictionary()?
        .get("NSExtension")?
        .as_dictionary()?
        .get(PAGE_PROPERTIES_KEY)?
        .as_dictionary()?
        .get(ALLOWED_DOMAINS_KEY)?
        .as_array()?
        .iter()
        .map(|v| v.as_string().map(str::to_string))
        .collect()
}
