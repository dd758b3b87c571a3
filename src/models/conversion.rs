//! Conversion results and per-platform change records

use super::Platform;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileChange {
    pub path: PathBuf,
    pub kind: ChangeKind,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Modified,
    Created,
    Renamed,
    Skipped,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChangeKind::Modified => "modified",
            ChangeKind::Created => "created",
            ChangeKind::Renamed => "renamed",
            ChangeKind::Skipped => "skipped",
        };
        f.write_str(label)
    }
}

/// Everything that happened while converting one platform
#[derive(Debug, Clone)]
pub struct PlatformReport {
    pub platform: Platform,
    pub project_dir: PathBuf,
    pub version: Option<String>,
    pub changes: Vec<FileChange>,
    pub warnings: Vec<String>,
}

impl PlatformReport {
    pub fn new(platform: Platform, project_dir: PathBuf) -> Self {
        Self {
            platform,
            project_dir,
            version: None,
            changes: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn record(&mut self, path: impl Into<PathBuf>, kind: ChangeKind, description: impl Into<String>) {
        let change = FileChange {
            path: path.into(),
            kind,
            description: description.into(),
        };
        log::debug!("[{}] {} {}: {}", self.platform, change.kind, change.path.display(), change.description);
        self.changes.push(change);
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("[{}] {}", self.platform, message);
        self.warnings.push(message);
    }

    /// Number of changes that actually touched the file system
    pub fn applied_count(&self) -> usize {
        self.changes
            .iter()
            .filter(|c| c.kind != ChangeKind::Skipped)
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.changes.len() - self.applied_count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConversionReport {
    pub extension_name: String,
    pub extension_version: String,
    pub platforms: Vec<PlatformReport>,
}

impl ConversionReport {
    pub fn total_changes(&self) -> usize {
        self.platforms.iter().map(|p| p.applied_count()).sum()
    }

    pub fn warnings(&self) -> impl Iterator<Item = (Platform, &str)> {
        self.platforms
            .iter()
            .flat_map(|p| p.warnings.iter().map(move |w| (p.platform, w.as_str())))
    }
}
