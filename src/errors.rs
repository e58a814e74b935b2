use thiserror::Error;

/// Main error type for the elementary crate
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Glob error: {0}")]
    Glob(#[from] glob::GlobError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The only failure the extraction core produces.
    #[error("cssContent is required")]
    MissingCssContent,

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File '{path}' exceeds maximum size limit ({size} bytes > {limit} bytes)")]
    FileTooLarge { path: String, size: u64, limit: u64 },

    #[error("Elementary assets not found at {path}")]
    AssetsNotFound { path: String },

    #[error("Failed to install assets to {path}: {message}")]
    InstallError { path: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Input error: {0}")]
    InputError(String),
}

pub type Result<T> = std::result::Result<T, ExtractorError>;
