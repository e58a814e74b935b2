use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Not line-anchored: matches declarations and var() references alike.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--([a-z][a-z0-9-]*)").unwrap());

/// Extract design tokens (CSS custom properties) from stylesheet text.
///
/// Every match is normalised to exactly two leading hyphens. The result is
/// deduplicated and sorted ascending.
pub fn extract_tokens(content: &str) -> Vec<String> {
    TOKEN_REGEX
        .captures_iter(content)
        .map(|caps| format!("--{}", &caps[1]))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Fixed taxonomy of design token categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    Colors,
    Backgrounds,
    Spacing,
    Radii,
    Borders,
    Effects,
    Typography,
    ZIndex,
    Animation,
    Other,
}

/// Prefix convention, in output order. `Other` is the fallback.
const PREFIX_TABLE: [(&str, TokenCategory); 9] = [
    ("c", TokenCategory::Colors),
    ("bg", TokenCategory::Backgrounds),
    ("s", TokenCategory::Spacing),
    ("r", TokenCategory::Radii),
    ("b", TokenCategory::Borders),
    ("x", TokenCategory::Effects),
    ("t", TokenCategory::Typography),
    ("z", TokenCategory::ZIndex),
    ("a", TokenCategory::Animation),
];

impl TokenCategory {
    /// All categories in output order
    pub const ALL: [TokenCategory; 10] = [
        TokenCategory::Colors,
        TokenCategory::Backgrounds,
        TokenCategory::Spacing,
        TokenCategory::Radii,
        TokenCategory::Borders,
        TokenCategory::Effects,
        TokenCategory::Typography,
        TokenCategory::ZIndex,
        TokenCategory::Animation,
        TokenCategory::Other,
    ];

    /// Classify a token by the segment between its leading `--` and the next
    /// hyphen. The segment must be followed by a hyphen to count, so `--c`
    /// and `--colorx-foo` both land in `Other`.
    pub fn of(token: &str) -> Self {
        let prefix = token
            .strip_prefix("--")
            .and_then(|rest| rest.split_once('-'))
            .map(|(prefix, _)| prefix);

        match prefix {
            Some(prefix) => PREFIX_TABLE
                .iter()
                .find(|(p, _)| *p == prefix)
                .map(|(_, category)| *category)
                .unwrap_or(TokenCategory::Other),
            None => TokenCategory::Other,
        }
    }

    /// Name used as the JSON key
    pub fn key(&self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Backgrounds => "backgrounds",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Radii => "radii",
            TokenCategory::Borders => "borders",
            TokenCategory::Effects => "effects",
            TokenCategory::Typography => "typography",
            TokenCategory::ZIndex => "zIndex",
            TokenCategory::Animation => "animation",
            TokenCategory::Other => "other",
        }
    }

    /// Heading used in human-readable output
    pub fn label(&self) -> &'static str {
        match self {
            TokenCategory::Colors => "🌈 Colors",
            TokenCategory::Backgrounds => "📄 Backgrounds",
            TokenCategory::Spacing => "📏 Spacing",
            TokenCategory::Radii => "⭕ Radii",
            TokenCategory::Borders => "🔲 Borders",
            TokenCategory::Effects => "✨ Effects",
            TokenCategory::Typography => "📝 Typography",
            TokenCategory::ZIndex => "📚 Z-Index",
            TokenCategory::Animation => "🎬 Animation",
            TokenCategory::Other => "📦 Other",
        }
    }
}

/// Tokens partitioned into category buckets.
///
/// Every category is present, in [`TokenCategory::ALL`] order, even when its
/// bucket is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorizedTokens(IndexMap<TokenCategory, Vec<String>>);

impl CategorizedTokens {
    fn empty() -> Self {
        Self(
            TokenCategory::ALL
                .iter()
                .map(|category| (*category, Vec::new()))
                .collect(),
        )
    }

    /// Tokens in one category
    pub fn get(&self, category: TokenCategory) -> &[String] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate buckets in category order
    pub fn iter(&self) -> impl Iterator<Item = (TokenCategory, &[String])> {
        self.0.iter().map(|(category, tokens)| (*category, tokens.as_slice()))
    }

    /// Total number of categorised tokens
    pub fn token_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

/// Partition tokens into category buckets, preserving input order within
/// each bucket.
pub fn categorize_tokens<S: AsRef<str>>(tokens: &[S]) -> CategorizedTokens {
    let mut buckets = CategorizedTokens::empty();
    for token in tokens {
        let token = token.as_ref();
        buckets
            .0
            .entry(TokenCategory::of(token))
            .or_default()
            .push(token.to_string());
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME: &str = ":root{--c-primary:#000;--s-sm:4px;--bg-page:#fff;--weird-one:1}";

    #[test]
    fn test_extract_tokens_from_root_block() {
        assert_eq!(
            extract_tokens(THEME),
            vec!["--bg-page", "--c-primary", "--s-sm", "--weird-one"]
        );
    }

    #[test]
    fn test_declarations_and_references_collapse() {
        let css = ":root { --c-ink: #111; }\n.btn { color: var(--c-ink); border-color: var(--c-ink); }";
        assert_eq!(extract_tokens(css), vec!["--c-ink"]);
    }

    #[test]
    fn test_extra_hyphens_are_normalised() {
        assert_eq!(extract_tokens("---c-odd: 1;"), vec!["--c-odd"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_tokens("").is_empty());
    }

    #[test]
    fn test_categorize_fixture() {
        let tokens = extract_tokens(THEME);
        let buckets = categorize_tokens(&tokens);

        assert_eq!(buckets.get(TokenCategory::Colors), ["--c-primary"]);
        assert_eq!(buckets.get(TokenCategory::Spacing), ["--s-sm"]);
        assert_eq!(buckets.get(TokenCategory::Backgrounds), ["--bg-page"]);
        assert_eq!(buckets.get(TokenCategory::Other), ["--weird-one"]);
        assert!(buckets.get(TokenCategory::Radii).is_empty());
        assert_eq!(buckets.token_count(), 4);
    }

    #[test]
    fn test_every_prefix() {
        let cases = [
            ("--c-ink", TokenCategory::Colors),
            ("--bg-page", TokenCategory::Backgrounds),
            ("--s-md", TokenCategory::Spacing),
            ("--r-lg", TokenCategory::Radii),
            ("--b-thin", TokenCategory::Borders),
            ("--x-shadow", TokenCategory::Effects),
            ("--t-body", TokenCategory::Typography),
            ("--z-modal", TokenCategory::ZIndex),
            ("--a-fast", TokenCategory::Animation),
        ];
        for (token, expected) in cases {
            assert_eq!(TokenCategory::of(token), expected, "token {}", token);
        }
    }

    #[test]
    fn test_prefix_requires_trailing_hyphen() {
        assert_eq!(TokenCategory::of("--colorx-foo"), TokenCategory::Other);
        assert_eq!(TokenCategory::of("--bgx-foo"), TokenCategory::Other);
        assert_eq!(TokenCategory::of("--c"), TokenCategory::Other);
        assert_eq!(TokenCategory::of("--b"), TokenCategory::Other);
    }

    #[test]
    fn test_buckets_keep_input_order_and_category_order() {
        let tokens = vec!["--z-top", "--c-b", "--c-a", "--misc"];
        let buckets = categorize_tokens(&tokens);

        assert_eq!(buckets.get(TokenCategory::Colors), ["--c-b", "--c-a"]);
        let order: Vec<_> = buckets.iter().map(|(category, _)| category).collect();
        assert_eq!(order, TokenCategory::ALL.to_vec());
    }

    #[test]
    fn test_serialized_keys() {
        let buckets = categorize_tokens(&["--z-top"]);
        let json = serde_json::to_value(&buckets).unwrap();
        assert_eq!(json["zIndex"], serde_json::json!(["--z-top"]));
        assert_eq!(json["other"], serde_json::json!([]));
        for category in TokenCategory::ALL {
            assert!(json.get(category.key()).is_some(), "missing {}", category.key());
        }
    }
}
