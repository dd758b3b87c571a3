//! Run-once guard for bundled scripts
//!
//! Safari may inject the same script several times into a page, which makes
//! top-level `let`/`class` declarations throw on the second run. Wrapping the
//! bundle in a check on a global keeps the body from executing twice.

use crate::models::{ChangeKind, PlatformReport};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const GUARD_OPEN: &str = "if (typeof injectedYet === 'undefined') { \n";
pub const GUARD_COMMENT: &str = "// the script has not been injected, so we can run it  \n";
pub const GUARD_DECLARE: &str = "var injectedYet = 1; \n\n";
pub const GUARD_CLOSE: &str = "\n}";

/// Wrap `content` in the guard. Returns `None` when it is already wrapped.
pub fn wrap_run_once(content: &str) -> Option<String> {
    if is_wrapped(content) {
        return None;
    }

    let mut out = String::with_capacity(
        GUARD_OPEN.len() + GUARD_COMMENT.len() + GUARD_DECLARE.len() + content.len() + GUARD_CLOSE.len(),
    );
    out.push_str(GUARD_OPEN);
    out.push_str(GUARD_COMMENT);
    out.push_str(GUARD_DECLARE);
    out.push_str(content);
    out.push_str(GUARD_CLOSE);
    Some(out)
}

pub fn is_wrapped(content: &str) -> bool {
    content.starts_with(GUARD_OPEN)
}

/// Every file called `file_name` directly in `dir`, sorted for stable output
pub fn find_scripts(dir: &Path, file_name: &str) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && e.file_name().to_str() == Some(file_name))
        .map(|e| e.into_path())
        .collect();
    found.sort();
    found
}

/// Guard every matching script in `script_dir`
pub fn guard_scripts(script_dir: &Path, file_name: &str, report: &mut PlatformReport) -> Result<()> {
    let scripts = find_scripts(script_dir, file_name);
    if scripts.is_empty() {
        report.add_warning(format!("No {} found in {}", file_name, script_dir.display()));
        return Ok(());
    }

    for path in scripts {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        match wrap_run_once(&content) {
            Some(wrapped) => {
                fs::write(&path, wrapped)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                report.record(&path, ChangeKind::Modified, "wrapped in run-once guard");
            }
            None => report.record(&path, ChangeKind::Skipped, "run-once guard already present"),
        }
    }

    Ok(())
}
