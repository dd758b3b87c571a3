//! Property list reading and writing

use anyhow::{Context, Result};
use plist::Value;
use std::path::Path;

pub fn read_plist(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    Value::from_file(path)
        .with_context(|| format!("Failed to read property list {}", path.display()))
}

/// Write as an XML property list, which is what Xcode generates
pub fn write_plist(value: &Value, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    value
        .to_file_xml(path)
        .with_context(|| format!("Failed to write property list {}", path.display()))
}
