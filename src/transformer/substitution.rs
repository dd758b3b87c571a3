//! Declarative text substitutions
//!
//! Each rule names a file, a pattern, and the text that replaces it. Matches
//! that sit inside an existing copy of the replacement text are left alone, so
//! rerunning the converter on a patched tree does not wrap an expression twice
//! while sites that are still unpatched get replaced.

use crate::config::{Pattern, SubstitutionRule};
use crate::models::{ChangeKind, PlatformReport, ProjectLayout};
use anyhow::{Context, Result};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied(usize),
    AlreadyApplied,
    NoMatch,
}

/// Byte ranges of every existing copy of `replacement`
fn patched_spans(content: &str, replacement: &str) -> Vec<Range<usize>> {
    if replacement.is_empty() {
        return Vec::new();
    }
    content
        .match_indices(replacement)
        .map(|(start, text)| start..start + text.len())
        .collect()
}

fn within(spans: &[Range<usize>], range: &Range<usize>) -> bool {
    spans.iter().any(|s| s.start <= range.start && range.end <= s.end)
}

/// Apply one pattern to `content`
pub fn substitute<'a>(content: &'a str, pattern: &Pattern, replacement: &str) -> Result<(Cow<'a, str>, Outcome)> {
    let spans = patched_spans(content, replacement);
    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    let mut count = 0;

    match pattern {
        Pattern::Literal(search) => {
            if !search.is_empty() {
                for (start, text) in content.match_indices(search.as_str()) {
                    let range = start..start + text.len();
                    if within(&spans, &range) {
                        continue;
                    }
                    out.push_str(&content[last..range.start]);
                    out.push_str(replacement);
                    last = range.end;
                    count += 1;
                }
            }
        }
        Pattern::Regex(source) => {
            let regex = Regex::new(source)
                .with_context(|| format!("Invalid substitution pattern '{}'", source))?;
            for caps in regex.captures_iter(content) {
                let Some(found) = caps.get(0) else { continue };
                if within(&spans, &found.range()) {
                    continue;
                }
                out.push_str(&content[last..found.start()]);
                caps.expand(replacement, &mut out);
                last = found.end();
                count += 1;
            }
        }
    }

    if count > 0 {
        out.push_str(&content[last..]);
        Ok((Cow::Owned(out), Outcome::Applied(count)))
    } else if !spans.is_empty() {
        Ok((Cow::Borrowed(content), Outcome::AlreadyApplied))
    } else {
        Ok((Cow::Borrowed(content), Outcome::NoMatch))
    }
}

/// Apply every rule for the layout's platform, in table order
pub fn apply_rules(rules: &[SubstitutionRule], layout: &ProjectLayout, report: &mut PlatformReport) -> Result<()> {
    for rule in rules.iter().filter(|r| r.platforms.contains(&layout.platform())) {
        let path = layout.resolve(&rule.file);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let (patched, outcome) = substitute(&content, &rule.pattern, &rule.replacement)
            .with_context(|| format!("Failed to patch {}", path.display()))?;

        match outcome {
            Outcome::Applied(count) => {
                fs::write(&path, patched.as_ref())
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                report.record(&path, ChangeKind::Modified, format!("{} occurrence(s) replaced", count));
            }
            Outcome::AlreadyApplied => {
                report.record(&path, ChangeKind::Skipped, "substitution already applied");
            }
            Outcome::NoMatch => {
                report.add_warning(format!("Pattern not found in {}", path.display()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CHROME_DETECTION, SAFARI_AWARE_DETECTION};

    const DELEGATE: &str = "const browserSpecificFetch = (navigator.userAgent.indexOf('Chrome') < 0) ? content.fetch : window.fetch;\n";

    fn detection() -> Pattern {
        Pattern::Literal(CHROME_DETECTION.to_string())
    }

    #[test]
    fn test_content_delegate_recognizes_safari() {
        let (out, outcome) = substitute(DELEGATE, &detection(), SAFARI_AWARE_DETECTION).unwrap();
        assert_eq!(outcome, Outcome::Applied(1));
        assert_eq!(
            out,
            "const browserSpecificFetch = ((navigator.userAgent.indexOf('Safari') + navigator.userAgent.indexOf('Chrome')) < 0) ? content.fetch : window.fetch;\n"
        );
    }

    #[test]
    fn test_second_application_is_noop() {
        let (once, _) = substitute(DELEGATE, &detection(), SAFARI_AWARE_DETECTION).unwrap();
        let once = once.into_owned();
        let (twice, outcome) = substitute(&once, &detection(), SAFARI_AWARE_DETECTION).unwrap();
        assert_eq!(outcome, Outcome::AlreadyApplied);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_replacement_containing_pattern_not_rewrapped() {
        // The replacement embeds the search text, so an unguarded replace would nest it
        let pattern = Pattern::Literal("indexOf('Chrome')".to_string());
        let replacement = "(indexOf('Safari') + indexOf('Chrome'))";
        let (once, _) = substitute("x = indexOf('Chrome');", &pattern, replacement).unwrap();
        let once = once.into_owned();
        let (twice, _) = substitute(&once, &pattern, replacement).unwrap();
        assert_eq!(twice, "x = (indexOf('Safari') + indexOf('Chrome'));");
    }

    #[test]
    fn test_regex_rule_counts_matches() {
        let css = ".popup { width: 400px; }\n.options { width: 600px; }\n";
        let (out, outcome) = substitute(css, &Pattern::Regex(r"width:\s*\d+px".to_string()), "width: 100%").unwrap();
        assert_eq!(outcome, Outcome::Applied(2));
        assert!(!out.contains("px"));
    }

    #[test]
    fn test_no_match_leaves_content() {
        let (out, outcome) = substitute("console.log(1);", &detection(), SAFARI_AWARE_DETECTION).unwrap();
        assert_eq!(outcome, Outcome::NoMatch);
        assert_eq!(out, "console.log(1);");
    }

    #[test]
    fn test_mixed_file_patches_remaining_sites() {
        let content = format!(
            "a = ({}) ? content.fetch : window.fetch;\nb = ({}) ? content.fetch : window.fetch;\n",
            SAFARI_AWARE_DETECTION, CHROME_DETECTION
        );
        let (out, outcome) = substitute(&content, &detection(), SAFARI_AWARE_DETECTION).unwrap();
        assert_eq!(outcome, Outcome::Applied(1));
        assert!(!out.contains(CHROME_DETECTION));
        assert_eq!(out.matches(SAFARI_AWARE_DETECTION).count(), 2);
    }

    #[test]
    fn test_nested_replacement_patches_only_bare_sites() {
        let pattern = Pattern::Literal("indexOf('Chrome')".to_string());
        let replacement = "(indexOf('Safari') + indexOf('Chrome'))";
        let content = "x = (indexOf('Safari') + indexOf('Chrome'));\ny = indexOf('Chrome');";
        let (out, outcome) = substitute(content, &pattern, replacement).unwrap();
        assert_eq!(outcome, Outcome::Applied(1));
        assert_eq!(
            out,
            "x = (indexOf('Safari') + indexOf('Chrome'));\ny = (indexOf('Safari') + indexOf('Chrome'));"
        );
    }

    #[test]
    fn test_regex_rule_not_disabled_by_existing_replacement() {
        let css = ".popup { width: 100%; }\n.options { width: 600px; }\n";
        let (out, outcome) = substitute(css, &Pattern::Regex(r"width:\s*\d+px".to_string()), "width: 100%").unwrap();
        assert_eq!(outcome, Outcome::Applied(1));
        assert_eq!(out, ".popup { width: 100%; }\n.options { width: 100%; }\n");
    }

    #[test]
    fn test_regex_replacement_expands_groups() {
        let (out, _) = substitute("margin: 4px;", &Pattern::Regex(r"(\d+)px".to_string()), "${1}pt").unwrap();
        assert_eq!(out, "margin: 4pt;");
    }
}
