use crate::args::{InstallArgs, ListArgs, OutputFormat};
use crate::errors::{ExtractorError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Theme the CLI lists tokens from when none is named
pub const DEFAULT_CLI_THEME: &str = "polished";

/// Elementary configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementaryConfig {
    /// Directory containing `assets/elementary`
    pub skill_root: Option<PathBuf>,

    /// Theme used for token extraction
    pub theme: String,

    /// Extract tokens without `--include-tokens`
    pub include_tokens: bool,

    /// Output format for the list command
    pub format: OutputFormat,

    /// Input limits
    pub limits: LimitsConfig,
}

impl Default for ElementaryConfig {
    fn default() -> Self {
        Self {
            skill_root: None,
            theme: DEFAULT_CLI_THEME.to_string(),
            include_tokens: false,
            format: OutputFormat::Human,
            limits: LimitsConfig::default(),
        }
    }
}

/// Limits applied when reading stylesheets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum stylesheet size in bytes (default: 10MB)
    pub max_file_size: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl ElementaryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtractorError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_yaml::from_str(&content)
            .map_err(|e| ExtractorError::ConfigError {
                message: format!("Failed to parse YAML config: {}", e),
            })
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ExtractorError::ConfigError {
                message: format!("Failed to read config file {}: {}", path.display(), e),
            })?;

        serde_json::from_str(&content)
            .map_err(|e| ExtractorError::ConfigError {
                message: format!("Failed to parse JSON config: {}", e),
            })
    }

    /// Load configuration from a file (auto-detect format)
    pub fn from_file(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(ExtractorError::ConfigError {
                message: format!(
                    "Unsupported config file format: {}. Use .yaml, .yml, or .json",
                    path.display()
                ),
            }),
        }
    }

    /// Load the file named by `path`, or defaults when there is none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the configuration for a list invocation. Flags win over the file.
    pub fn for_list(args: &ListArgs) -> Result<Self> {
        let mut config = Self::load(args.config.as_deref())?;
        if let Some(skill_root) = &args.skill_root {
            config.skill_root = Some(skill_root.clone());
        }
        if let Some(theme) = &args.theme {
            config.theme = theme.clone();
        }
        if let Some(format) = args.format {
            config.format = format;
        }
        config.include_tokens |= args.include_tokens;
        config.validate()?;
        Ok(config)
    }

    /// Check settings that end up in filesystem paths
    pub fn validate(&self) -> Result<()> {
        let theme = self.theme.as_str();
        if theme.trim().is_empty() {
            return Err(ExtractorError::ConfigError {
                message: "Theme name must not be empty".to_string(),
            });
        }
        if theme.contains('/') || theme.contains('\\') || theme == "." || theme == ".." {
            return Err(ExtractorError::ConfigError {
                message: format!("Theme name must be a file stem, not a path: {}", theme),
            });
        }
        if self.limits.max_file_size == 0 {
            return Err(ExtractorError::ConfigError {
                message: "limits.max_file_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve the configuration for an install invocation
    pub fn for_install(args: &InstallArgs) -> Result<Self> {
        let mut config = Self::load(args.config.as_deref())?;
        if let Some(skill_root) = &args.skill_root {
            config.skill_root = Some(skill_root.clone());
        }
        Ok(config)
    }

    /// Skill root, falling back to the current directory
    pub fn skill_root(&self) -> PathBuf {
        self.skill_root
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Theme stylesheet for the configured theme
    pub fn theme_path(&self) -> PathBuf {
        self.skill_root()
            .join("assets")
            .join("elementary")
            .join("tokens")
            .join(format!("{}.css", self.theme))
    }
}
