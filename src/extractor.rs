use crate::classes::extract_classes;
use crate::errors::{ExtractorError, Result};
use crate::tokens::{categorize_tokens, extract_tokens, CategorizedTokens};
use serde::{Deserialize, Serialize};

/// Theme reported when the caller does not name one
pub const DEFAULT_THEME: &str = "high-fidelity";

/// Inputs to [`extract_design_data`]
#[derive(Debug, Clone)]
pub struct ExtractOptions<'a> {
    /// Opaque identifier echoed into the result
    pub css_file: Option<&'a str>,
    /// Full stylesheet text (required)
    pub css_content: Option<&'a str>,
    /// Also extract tokens from `theme_content`
    pub include_tokens: bool,
    /// Theme identifier echoed into the result when tokens are extracted
    pub theme: &'a str,
    /// Full theme stylesheet text
    pub theme_content: Option<&'a str>,
}

impl Default for ExtractOptions<'_> {
    fn default() -> Self {
        Self {
            css_file: None,
            css_content: None,
            include_tokens: false,
            theme: DEFAULT_THEME,
            theme_content: None,
        }
    }
}

impl<'a> ExtractOptions<'a> {
    pub fn new(css_content: &'a str) -> Self {
        Self {
            css_content: Some(css_content),
            ..Self::default()
        }
    }

    pub fn with_css_file(mut self, css_file: &'a str) -> Self {
        self.css_file = Some(css_file);
        self
    }

    pub fn with_tokens(mut self, theme: &'a str, theme_content: Option<&'a str>) -> Self {
        self.include_tokens = true;
        self.theme = theme;
        self.theme_content = theme_content;
        self
    }
}

/// Token fields of an extraction, present together or not at all
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenReport {
    pub tokens: Vec<String>,
    pub token_count: usize,
    pub tokens_by_category: CategorizedTokens,
    pub theme: String,
}

/// Design data extracted from one stylesheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_file: Option<String>,
    pub classes: Vec<String>,
    pub class_count: usize,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<TokenReport>,
}

/// Extract classes, and optionally categorised tokens, from raw stylesheet
/// text.
///
/// Missing or empty `css_content` is the only error. Requesting tokens
/// without theme content is not an error; the token fields are left out.
pub fn extract_design_data(options: &ExtractOptions<'_>) -> Result<ExtractionResult> {
    let css_content = match options.css_content {
        Some(content) if !content.is_empty() => content,
        _ => return Err(ExtractorError::MissingCssContent),
    };

    let classes = extract_classes(css_content);

    let tokens = match options.theme_content {
        Some(theme_content) if options.include_tokens && !theme_content.is_empty() => {
            let tokens = extract_tokens(theme_content);
            Some(TokenReport {
                token_count: tokens.len(),
                tokens_by_category: categorize_tokens(&tokens),
                tokens,
                theme: options.theme.to_string(),
            })
        }
        _ => None,
    };

    Ok(ExtractionResult {
        css_file: options.css_file.map(str::to_string),
        class_count: classes.len(),
        classes,
        tokens,
    })
}
