//! Target platforms supported by Apple's Safari extension converter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serialized as its directory name; deserialized through `FromStr`, so config
/// files accept the same case-insensitive names as the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Platform {
    MacOs,
    Ios,
}

impl Platform {
    /// Both platforms, in the order they are converted
    pub const ALL: [Platform; 2] = [Platform::MacOs, Platform::Ios];

    /// Directory name the generated project is placed under
    pub fn dir_name(self) -> &'static str {
        match self {
            Platform::MacOs => "macOS",
            Platform::Ios => "iOS",
        }
    }

    /// Flag restricting `safari-web-extension-converter` to this platform
    pub fn converter_flag(self) -> &'static str {
        match self {
            Platform::MacOs => "--macos-only",
            Platform::Ios => "--ios-only",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "macos" | "mac" => Ok(Platform::MacOs),
            "ios" => Ok(Platform::Ios),
            other => anyhow::bail!("Unknown platform '{}'. Expected macOS or iOS", other),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.dir_name().to_string()
    }
}
