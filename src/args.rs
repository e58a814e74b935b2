use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Elementary design system CLI - lists component classes and design tokens, installs assets
#[derive(Parser, Debug)]
#[command(name = "elementary")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Bare `elementary <CSS_FILE>` is shorthand for `elementary list <CSS_FILE>`
    #[command(flatten)]
    pub list: ListArgs,
}

impl Cli {
    /// The subcommand to run, with the bare form resolved to `list`
    pub fn into_command(self) -> Commands {
        self.command.unwrap_or(Commands::List(self.list))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List component classes and design tokens
    List(ListArgs),
    /// Install Elementary assets to a target directory
    Install(InstallArgs),
}

/// Output format for the list command
#[derive(ValueEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Arguments for the list command
#[derive(Parser, Debug, Clone, Default)]
pub struct ListArgs {
    /// Stylesheet to scan, relative to the skill root
    #[arg(value_name = "CSS_FILE", help = "Component stylesheet, relative to the skill root")]
    pub css_file: Option<PathBuf>,

    /// Also extract design tokens from the theme file
    #[arg(
        long = "include-tokens",
        default_value_t = false,
        help = "Also extract design tokens from the theme file"
    )]
    pub include_tokens: bool,

    /// Theme name for token extraction
    #[arg(
        long = "theme",
        value_name = "NAME",
        help = "Theme name for token extraction [default: polished]"
    )]
    pub theme: Option<String>,

    /// Output format
    #[arg(long = "format", value_enum, help = "Output format [default: human]")]
    pub format: Option<OutputFormat>,

    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON format)"
    )]
    pub config: Option<PathBuf>,

    /// Skill root containing the Elementary assets
    #[arg(
        long = "skill-root",
        value_name = "PATH",
        env = "ELEMENTARY_SKILL_ROOT",
        help = "Directory containing assets/elementary (defaults to the current directory)"
    )]
    pub skill_root: Option<PathBuf>,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

/// Arguments for the install command
#[derive(Parser, Debug, Clone)]
pub struct InstallArgs {
    /// Target directory for installation
    #[arg(value_name = "TARGET_DIR", help = "Project directory to install assets into")]
    pub target_dir: PathBuf,

    /// Configuration file path (YAML or JSON)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "PATH",
        help = "Path to configuration file (YAML or JSON format)"
    )]
    pub config: Option<PathBuf>,

    /// Skill root containing the Elementary assets
    #[arg(
        long = "skill-root",
        value_name = "PATH",
        env = "ELEMENTARY_SKILL_ROOT",
        help = "Directory containing assets/elementary (defaults to the current directory)"
    )]
    pub skill_root: Option<PathBuf>,

    /// Verbose output
    #[arg(
        short = 'v',
        long = "verbose",
        default_value_t = false,
        help = "Enable verbose output"
    )]
    pub verbose: bool,
}

impl ListArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        match &self.css_file {
            None => return Err("A CSS file must be provided".to_string()),
            Some(path) if path.as_os_str().is_empty() => {
                return Err("CSS file path must not be empty".to_string())
            }
            Some(_) => {}
        }

        Ok(())
    }
}

impl InstallArgs {
    /// Validate that the arguments are consistent
    pub fn validate(&self) -> Result<(), String> {
        if self.target_dir.as_os_str().is_empty() {
            return Err("Target directory required for install command".to_string());
        }
        Ok(())
    }
}
