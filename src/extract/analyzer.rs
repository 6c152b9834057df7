//! Pure text analysis of a component entry file.
//!
//! The scans here are deliberately syntactic: regular expressions over the raw
//! source, not semantic resolution. Re-exports, export lists, and computed
//! identifiers are known blind spots and stay that way.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/").expect("invalid regex"));

// Matches `import <clause> from '<module>'` with either quote style. The
// clause class excludes quotes and semicolons so multi-line import lists still
// match, while bare side-effect imports (`import './x.css'`) do not.
static IMPORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\s+[^'";]+?\s+from\s+['"]([^'"]+)['"]"#).expect("invalid regex"));

static EXPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*export\s+(?:(?:const|interface|type|function)\s+([A-Za-z_$][\w$]*)|default\s+(?:function\s+)?([A-Za-z_$][\w$]*))")
        .expect("invalid regex")
});

/// What the text scan recovers from a single entry file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct EntryAnalysis {
    pub description: String,
    pub dependencies: Vec<String>,
    pub exports: Vec<String>,
}

pub(crate) fn analyze(source: &str) -> EntryAnalysis {
    EntryAnalysis {
        description: extract_description(source),
        dependencies: extract_dependencies(source),
        exports: extract_exports(source),
    }
}

/// First `/** ... */` comment with `*` continuation markers stripped from each
/// line and surrounding whitespace trimmed. Empty when no such comment exists.
fn extract_description(source: &str) -> String {
    let Some(cap) = BLOCK_COMMENT.captures(source) else {
        return String::new();
    };

    let lines: Vec<&str> = cap[1]
        .lines()
        .map(|line| line.trim_start().trim_start_matches('*').trim())
        .collect();

    lines.join("\n").trim().to_string()
}

/// External module specifiers in first-use order, duplicates collapsed.
/// Anything starting with a relative-path marker is excluded.
fn extract_dependencies(source: &str) -> Vec<String> {
    let mut dependencies: Vec<String> = Vec::new();

    for cap in IMPORT.captures_iter(source) {
        let module = &cap[1];
        if module.starts_with('.') {
            continue;
        }
        if !dependencies.iter().any(|d| d == module) {
            dependencies.push(module.to_string());
        }
    }

    dependencies
}

/// Identifiers introduced by top-level export declarations, in source order.
fn extract_exports(source: &str) -> Vec<String> {
    EXPORT
        .captures_iter(source)
        .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}
