//! Configuration management for PromptGuard.
//!
//! This module resolves the workspace and the prompts root from several sources,
//! lowest precedence first:
//! - Defaults (`prompts/` under the workspace, tool dir `.promptguard/`)
//! - The config file (`.promptguard/config.yaml`)
//! - Environment variables
//! - Command-line flags
//!
//! The workspace is discovered once, at startup. Everything downstream receives
//! the resolved prompts root as a plain path.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Directory holding tool-local state, relative to the workspace.
pub const DEFAULT_TOOL_DIR: &str = ".promptguard";

/// Prompts root, relative to the workspace.
pub const DEFAULT_PROMPTS_ROOT: &str = "prompts";

/// Config file name inside the tool directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to the workspace root (contains .promptguard/)
    pub workspace: PathBuf,

    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Prompts root; relative paths are resolved against `workspace`
    pub prompts_root: PathBuf,

    /// Tool-local directory name
    pub tool_dir: String,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// On-disk config file structure. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    prompts_root: Option<String>,
    tool_dir: Option<String>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            workspace: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            config_file: None,
            prompts_root: PathBuf::from(DEFAULT_PROMPTS_ROOT),
            tool_dir: DEFAULT_TOOL_DIR.to_string(),
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, the config file and defaults.
    ///
    /// Environment variables:
    /// - `PROMPTGUARD_WORKSPACE`: Override workspace path (skips discovery)
    /// - `PROMPTGUARD_CONFIG`: Path to config file
    /// - `PROMPTGUARD_PROMPTS_ROOT`: Override prompts root
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use promptguard_core::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load config");
    /// println!("Prompts root: {:?}", config.prompts_root_path());
    /// ```
    pub fn load() -> AppResult<Self> {
        Self::load_with(None, None)
    }

    /// Load configuration with an explicit workspace and/or config file.
    ///
    /// Explicit values win over `PROMPTGUARD_WORKSPACE`, `PROMPTGUARD_CONFIG`
    /// and discovery, and are in place before the config file is merged. An
    /// explicit config file that does not exist is an error.
    pub fn load_with(workspace: Option<PathBuf>, config_file: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        config.workspace = match workspace.or_else(|| env_path("PROMPTGUARD_WORKSPACE")) {
            Some(workspace) => workspace,
            None => discover_workspace(&config.workspace),
        };

        config.config_file = config_file.or_else(|| env_path("PROMPTGUARD_CONFIG"));

        if let Some(ref explicit) = config.config_file {
            if !explicit.is_file() {
                return Err(AppError::Config(format!(
                    "Config file not found: {:?}",
                    explicit
                )));
            }
        }

        if !config.workspace.exists() {
            return Err(AppError::Config(format!(
                "Workspace directory does not exist: {:?}",
                config.workspace
            )));
        }

        let config_path = config.config_path();
        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        if let Ok(root) = std::env::var("PROMPTGUARD_PROMPTS_ROOT") {
            config.prompts_root = PathBuf::from(root);
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var_os("NO_COLOR").is_some() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge a YAML configuration file into this config.
    fn merge_yaml(&self, path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        // An empty file is a valid, empty config.
        let config_file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(&contents).map_err(|e| {
                AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?
        };

        let mut result = self.clone();

        if let Some(root) = config_file.prompts_root {
            result.prompts_root = PathBuf::from(root);
        }

        if let Some(tool_dir) = config_file.tool_dir {
            result.tool_dir = tool_dir;
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        tracing::debug!("Merged config file {:?}", path);

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables and the config file.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        workspace: Option<PathBuf>,
        config_file: Option<PathBuf>,
        prompts_root: Option<PathBuf>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(workspace) = workspace {
            self.workspace = workspace;
        }

        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(prompts_root) = prompts_root {
            self.prompts_root = prompts_root;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Get the path to the tool-local directory.
    pub fn tool_dir_path(&self) -> PathBuf {
        self.workspace.join(&self.tool_dir)
    }

    /// Path of the config file: the explicit one, or `<tool_dir>/config.yaml`.
    pub fn config_path(&self) -> PathBuf {
        match self.config_file {
            Some(ref cf) => cf.clone(),
            None => self.tool_dir_path().join(CONFIG_FILE_NAME),
        }
    }

    /// The resolved prompts root handed to the catalog and resolver.
    pub fn prompts_root_path(&self) -> PathBuf {
        if self.prompts_root.is_absolute() {
            self.prompts_root.clone()
        } else {
            self.workspace.join(&self.prompts_root)
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key).map(PathBuf::from)
}

/// Find the workspace root by walking up from `start`.
///
/// The first ancestor containing `.promptguard/config.yaml` wins. When none
/// does, `start` itself is the workspace.
pub fn discover_workspace(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        let marker = dir.join(DEFAULT_TOOL_DIR).join(CONFIG_FILE_NAME);
        if marker.is_file() {
            tracing::debug!("Discovered workspace at {:?}", dir);
            return dir.to_path_buf();
        }
    }

    start.to_path_buf()
}
