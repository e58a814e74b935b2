use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Top-level selectors only: a class must start its line at column zero.
// Nested, indented, and compound selectors are deliberately not enumerated.
static CLASS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\.[a-z][a-z0-9-]*").unwrap());

/// Extract component class names from stylesheet text.
///
/// Each match keeps its leading period and stops at the first character
/// outside `[a-z0-9-]`, so `.btn:hover` yields `.btn`. The result is
/// deduplicated and sorted ascending.
pub fn extract_classes(content: &str) -> Vec<String> {
    CLASS_REGEX
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
