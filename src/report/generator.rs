//! Report generation

use crate::models::{ChangeKind, ConversionReport};
use anyhow::Result;

pub fn generate_markdown_report(report: &ConversionReport) -> Result<String> {
    let mut out = String::new();

    out.push_str("# Chrome to Safari Extension Conversion Report\n\n");

    // Summary
    out.push_str("## Summary\n\n");
    out.push_str(&format!("- **Extension**: {} v{}\n",
        report.extension_name,
        report.extension_version));
    out.push_str(&format!("- **Platforms**: {}\n",
        report.platforms.iter().map(|p| p.platform.to_string()).collect::<Vec<_>>().join(", ")));
    out.push_str(&format!("- **Total Changes**: {}\n\n", report.total_changes()));

    for platform in &report.platforms {
        out.push_str(&format!("## {}\n\n", platform.platform));
        out.push_str(&format!("- **Project**: `{}`\n", platform.project_dir.display()));
        if let Some(version) = &platform.version {
            out.push_str(&format!("- **App Version**: {}\n", version));
        }
        out.push('\n');

        let applied: Vec<_> = platform.changes.iter().filter(|c| c.kind != ChangeKind::Skipped).collect();
        if !applied.is_empty() {
            out.push_str("### Changes\n\n");
            for change in applied {
                out.push_str(&format!("- `{}` ({}): {}\n", change.path.display(), change.kind, change.description));
            }
            out.push('\n');
        }

        let skipped: Vec<_> = platform.changes.iter().filter(|c| c.kind == ChangeKind::Skipped).collect();
        if !skipped.is_empty() {
            out.push_str("### Skipped\n\n");
            for change in skipped {
                out.push_str(&format!("- `{}`: {}\n", change.path.display(), change.description));
            }
            out.push('\n');
        }

        if !platform.warnings.is_empty() {
            out.push_str("### ℹ️ Warnings\n\n");
            for warning in &platform.warnings {
                out.push_str(&format!("- {}\n", warning));
            }
            out.push('\n');
        }
    }

    // Next Steps
    out.push_str("## Next Steps\n\n");
    out.push_str("1. Open each generated project in Xcode\n");
    out.push_str("2. Build and enable the extension in Safari\n");
    out.push_str("3. Check any warnings listed above\n");

    Ok(out)
}
