//! Structural validation of a patched project

use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::models::{Platform, ProjectLayout};
use crate::parser::{parse_manifest_from_file, read_plist};
use crate::transformer::property_list::allowed_domains;
use anyhow::Result;

/// Re-read the written manifest and plist and check the patches landed
pub fn validate_platform(layout: &ProjectLayout, config: &ConverterConfig) -> Result<()> {
    validate_manifest(layout, config)?;
    validate_plist(layout, config)?;
    Ok(())
}

fn validate_manifest(layout: &ProjectLayout, config: &ConverterConfig) -> Result<()> {
    let path = layout.manifest();
    let manifest = parse_manifest_from_file(&path)?;

    let permissions = manifest.permissions();
    if permissions != config.permissions {
        return Err(ConvertError::Validation {
            path,
            message: format!("unexpected permissions [{}]", permissions.join(", ")),
        }
        .into());
    }

    if layout.platform() == Platform::Ios && manifest.is_persistent() != Some(false) {
        return Err(ConvertError::Validation {
            path,
            message: "background page must not be persistent on iOS".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_plist(layout: &ProjectLayout, config: &ConverterConfig) -> Result<()> {
    let path = layout.info_plist();
    let plist = read_plist(&path)?;

    match allowed_domains(&plist) {
        Some(domains) if domains == config.allowed_domains => Ok(()),
        Some(domains) => Err(ConvertError::Validation {
            path,
            message: format!("unexpected allowed domains [{}]", domains.join(", ")),
        }
        .into()),
        None => Err(ConvertError::Validation {
            path,
            message: "SFSafariPageProperties.Allowed Domains is missing".to_string(),
        }
        .into()),
    }
}
