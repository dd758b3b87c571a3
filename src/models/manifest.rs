//! Manifest document shared between the Chrome and Safari builds
//!
//! The whole document is kept as an ordered JSON object so the Safari manifest
//! is a faithful copy of the Chrome one, key order included. The few keys the
//! converter touches are read and patched in place through accessors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    document: Map<String, Value>,
}

impl Manifest {
    /// `manifest_version` as an integer. json5 may hand integral numbers over
    /// as floats, those are accepted too.
    pub fn manifest_version(&self) -> Option<u64> {
        match self.document.get("manifest_version")? {
            Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
            _ => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.document.get("name").and_then(Value::as_str)
    }

    pub fn version(&self) -> Option<&str> {
        self.document.get("version").and_then(Value::as_str)
    }

    /// String entries of `permissions`; empty when the key is absent
    pub fn permissions(&self) -> Vec<String> {
        self.document
            .get("permissions")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).map(String::from).collect())
            .unwrap_or_default()
    }

    /// Replace `permissions`, keeping its position when already present
    pub fn set_permissions(&mut self, permissions: &[String]) {
        let items = permissions.iter().cloned().map(Value::String).collect();
        self.document.insert("permissions".to_string(), Value::Array(items));
    }

    fn background(&self) -> Option<&Map<String, Value>> {
        self.document.get("background").and_then(Value::as_object)
    }

    /// Whether the background page is declared persistent
    pub fn is_persistent(&self) -> Option<bool> {
        self.background()?.get("persistent").and_then(Value::as_bool)
    }

    /// Set `background.persistent`, adding a `background` object when the
    /// manifest has none
    pub fn set_persistent(&mut self, persistent: bool) {
        let background = self
            .document
            .entry("background")
            .or_insert_with(|| Value::Object(Map::new()));
        if !background.is_object() {
            *background = Value::Object(Map::new());
        }
        if let Value::Object(map) = background {
            map.insert("persistent".to_string(), Value::Bool(persistent));
        }
    }

    pub fn background_scripts(&self) -> Vec<String> {
        self.background()
            .and_then(|b| b.get("scripts"))
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).map(String::from).collect())
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.document.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.document.keys().map(String::as_str)
    }

    /// Serialize the way the Safari project expects it: pretty, two-space indent
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.document)
    }
}
