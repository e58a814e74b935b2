pub mod args;
pub mod classes;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod install;
pub mod report;
pub mod tokens;

pub use args::{Cli, Commands, InstallArgs, ListArgs, OutputFormat};
pub use classes::extract_classes;
pub use config::{ElementaryConfig, LimitsConfig};
pub use errors::{ExtractorError, Result};
pub use extractor::{extract_design_data, ExtractOptions, ExtractionResult, TokenReport};
pub use install::{copy_assets, prepare_installation, InstallationPaths};
pub use report::{format_human, format_json, install_hint};
pub use tokens::{categorize_tokens, extract_tokens, CategorizedTokens, TokenCategory};

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Output of the list command
#[derive(Debug, Clone)]
pub struct ListReport {
    /// Formatted text for stdout
    pub output: String,
    /// Extraction itself failed; the caller should exit non-zero
    pub failed: bool,
}

/// Read a stylesheet, enforcing the configured size limit
pub fn read_stylesheet(path: &Path, limits: &LimitsConfig) -> Result<String> {
    if !path.is_file() {
        return Err(ExtractorError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let metadata = fs::metadata(path).map_err(|e| {
        ExtractorError::InputError(format!("Cannot read file metadata for '{}': {}", path.display(), e))
    })?;

    if metadata.len() > limits.max_file_size {
        return Err(ExtractorError::FileTooLarge {
            path: path.display().to_string(),
            size: metadata.len(),
            limit: limits.max_file_size,
        });
    }

    fs::read_to_string(path)
        .map_err(|e| ExtractorError::InputError(format!("Failed to read {}: {}", path.display(), e)))
}

/// Run the list command: read the stylesheet (and theme), extract, format
pub fn list(args: &ListArgs) -> Result<ListReport> {
    args.validate().map_err(ExtractorError::InvalidInput)?;

    let config = ElementaryConfig::for_list(args)?;
    let css_file = args
        .css_file
        .as_deref()
        .ok_or_else(|| ExtractorError::InvalidInput("A CSS file must be provided".to_string()))?;

    let skill_root = config.skill_root();
    let css_path = skill_root.join(css_file);
    debug!(path = %css_path.display(), "reading stylesheet");
    let css_content = read_stylesheet(&css_path, &config.limits)?;

    let theme_content = if config.include_tokens {
        let theme_path = config.theme_path();
        debug!(path = %theme_path.display(), theme = %config.theme, "reading theme");
        match read_stylesheet(&theme_path, &config.limits) {
            Ok(content) => Some(content),
            Err(e) => {
                warn!("Could not read theme file, skipping token extraction: {}", e);
                None
            }
        }
    } else {
        None
    };

    let css_file = css_file.to_string_lossy();
    let options = ExtractOptions {
        css_file: Some(&*css_file),
        css_content: Some(css_content.as_str()),
        include_tokens: config.include_tokens,
        theme: &config.theme,
        theme_content: theme_content.as_deref(),
    };
    let outcome = extract_design_data(&options);

    if let Ok(result) = &outcome {
        debug!(
            classes = result.class_count,
            tokens = result.tokens.as_ref().map_or(0, |t| t.token_count),
            "extraction complete"
        );
    }

    let output = match config.format {
        OutputFormat::Human => format_human(&outcome),
        OutputFormat::Json => format_json(&outcome)?,
    };

    Ok(ListReport {
        output,
        failed: outcome.is_err(),
    })
}

/// Run the install command: copy the skill's assets into the target directory
pub fn install(args: &InstallArgs) -> Result<InstallationPaths> {
    args.validate().map_err(ExtractorError::InvalidInput)?;

    let config = ElementaryConfig::for_install(args)?;
    let target = if args.target_dir.is_absolute() {
        args.target_dir.clone()
    } else {
        std::env::current_dir()?.join(&args.target_dir)
    };

    let paths = prepare_installation(config.skill_root(), &target);
    debug!(from = %paths.from.display(), to = %paths.to.display(), "installing assets");

    let copied = copy_assets(&paths)?;
    debug!(files = copied, "assets installed");

    Ok(paths)
}
