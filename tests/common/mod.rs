//! Shared fixtures: a Chrome extension source tree and a generator that
//! lays out what `safari-web-extension-converter --copy-resources` produces.

#![allow(dead_code)]

use anyhow::Result;
use chrome2safari::{ConverterConfig, GenerateRequest, Platform, ProjectGenerator};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const MANIFEST: &str = r#"{
  "manifest_version": 2,
  "name": "RECAP",
  "version": "2.7.1",
  "description": "Pay less for PACER",
  "permissions": ["tabs", "downloads", "<all_urls>"],
  "background": { "scripts": ["background.js"], "persistent": true },
  "content_scripts": [{ "matches": ["*://*.uscourts.gov/*"], "js": ["content_delegate.js"] }]
}"#;

pub const CONTENT_DELEGATE: &str = "ContentDelegate.prototype.onDocumentViewSubmit = function () {\n  const browserSpecificFetch = (navigator.userAgent.indexOf('Chrome') < 0) ? content.fetch : window.fetch;\n};\n";

pub const BOOTSTRAP: &str = "/*! Bootstrap v4 */\nlet Tooltip = class {};\n";

pub const INFO_PLIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>NSExtension</key>
    <dict>
        <key>NSExtensionPointIdentifier</key>
        <string>com.apple.Safari.web-extension</string>
        <key>NSExtensionPrincipalClass</key>
        <string>$(PRODUCT_MODULE_NAME).SafariWebExtensionHandler</string>
    </dict>
</dict>
</plist>
"#;

/// Write a Chrome extension into `<root>/src` and the macOS HTML template into
/// `<root>/safari/resources`, returning a config rooted at `<root>/safari`.
pub fn fixture(root: &Path) -> ConverterConfig {
    let src = root.join("src");
    fs::create_dir_all(src.join("assets/js")).unwrap();
    fs::create_dir_all(src.join("assets/css")).unwrap();
    fs::write(src.join("manifest.json"), MANIFEST).unwrap();
    fs::write(src.join("content_delegate.js"), CONTENT_DELEGATE).unwrap();
    fs::write(src.join("assets/js/bootstrap.bundle.js"), BOOTSTRAP).unwrap();
    fs::write(src.join("assets/css/style.css"), "body { width: 400px; }").unwrap();
    fs::write(src.join("assets/css/style-ios.css"), "body { width: 100%; }").unwrap();

    let safari = root.join("safari");
    fs::create_dir_all(safari.join("resources")).unwrap();
    fs::write(safari.join("resources/recap-macOS.html"), "<html><body>RECAP for Safari</body></html>").unwrap();

    ConverterConfig {
        source_dir: src,
        project_root: safari,
        ..ConverterConfig::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Generate(Platform, PathBuf),
    SetVersion(PathBuf, String),
}

/// Fake converter. With `regenerate` set, every call wipes and rebuilds the
/// project like `--force` does; otherwise an existing tree is left alone.
#[derive(Default)]
pub struct FakeGenerator {
    pub calls: RefCell<Vec<Call>>,
    pub regenerate: bool,
    pub fail_on: Option<Platform>,
}

impl FakeGenerator {
    pub fn new() -> Self {
        Self {
            regenerate: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl ProjectGenerator for FakeGenerator {
    fn generate(&self, request: &GenerateRequest) -> Result<PathBuf> {
        self.calls
            .borrow_mut()
            .push(Call::Generate(request.platform, request.location.clone()));

        if self.fail_on == Some(request.platform) {
            anyhow::bail!("safari-web-extension-converter exited with status 1");
        }

        let project = request.project_dir();
        if project.exists() {
            if !self.regenerate {
                return Ok(project);
            }
            fs::remove_dir_all(&project)?;
        }

        let extension = project.join(format!("{} Extension", request.app_name));
        let resources = extension.join("Resources");
        fs::create_dir_all(&resources)?;
        fs::write(extension.join("Info.plist"), INFO_PLIST)?;

        for entry in WalkDir::new(&request.source_dir).into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() {
                let relative = entry.path().strip_prefix(&request.source_dir)?;
                let dest = resources.join(relative);
                fs::create_dir_all(dest.parent().unwrap())?;
                fs::copy(entry.path(), dest)?;
            }
        }

        let base = project.join(&request.app_name).join("Base.lproj");
        fs::create_dir_all(&base)?;
        fs::write(base.join("Main.html"), "<html>generated</html>")?;

        Ok(project)
    }

    fn set_version(&self, project_dir: &Path, version: &str) -> Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::SetVersion(project_dir.to_path_buf(), version.to_string()));
        Ok(())
    }
}
