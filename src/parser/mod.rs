//! Parsers for the documents the converter reads

pub mod manifest;
pub mod property_list;

pub use manifest::{parse_manifest, parse_manifest_from_file, parse_manifest_from_str, write_manifest};
pub use property_list::{read_plist, write_plist};
