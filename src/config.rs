use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::graph::{BuildOptions, NodeOrder};
use crate::render::DEFAULT_PLACEHOLDER;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "VALUEGRAPH_CONFIG";

/// Config file looked up in the current directory when CONFIG_ENV is unset
pub const DEFAULT_CONFIG_FILE: &str = "valuegraph.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub valuegraph: ValueGraphConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// General settings
#[derive(Debug, Clone, Deserialize)]
pub struct ValueGraphConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ValueGraphConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Graph construction settings
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub order: NodeOrder,
    #[serde(default = "default_true")]
    pub self_loops: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            order: NodeOrder::default(),
            self_loops: true,
        }
    }
}

/// Template settings
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// HTML template to use instead of the built-in one.
    #[serde(default)]
    pub template: Option<PathBuf>,
    /// Placeholder replaced in a custom template.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            template: None,
            placeholder: default_placeholder(),
        }
    }
}

/// Artifact settings
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory for generated files; the system temp dir when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_prefix")]
    pub prefix: String,
    #[serde(default = "default_true")]
    pub open_viewer: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            prefix: default_prefix(),
            open_viewer: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_prefix() -> String {
    "valuegraph".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in VALUEGRAPH_CONFIG environment variable (must exist)
    /// 2. ./valuegraph.toml in current directory
    ///
    /// Without either, built-in defaults are used.
    pub fn load() -> Result<Self> {
        // .env is optional
        let _ = dotenv::dotenv();

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_path(Path::new(&path));
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::from_path(&local);
        }

        Ok(Self::default())
    }

    /// Load and validate a specific config file
    pub fn from_path(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let config: Config = toml::from_str(config_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.render.placeholder.is_empty() {
            anyhow::bail!("render.placeholder must not be empty");
        }

        if self.output.prefix.is_empty() {
            anyhow::bail!("output.prefix must not be empty");
        }

        if let Some(dir) = &self.output.dir {
            if !dir.is_dir() {
                anyhow::bail!("output.dir is not a directory: {}", dir.display());
            }
        }

        Ok(())
    }

    /// Graph construction options
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            order: self.graph.order,
            self_loops: self.graph.self_loops,
        }
    }
}
