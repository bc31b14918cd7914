// Front-end configuration loaded from YAML

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{Level, debug};

const CONFIG_DIR: &str = "tasklist";
const CONFIG_FILE: &str = "tasklist.yml";

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve against whether stdout is a terminal
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color: ColorMode,
    pub title: String,
    pub subtitle: String,
    pub log_level: String,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            title: "Todo List".to_string(),
            subtitle: "Simple task management app".to_string(),
            log_level: "warn".to_string(),
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    /// Load configuration
    ///
    /// An explicit path must exist and parse. Without one, the per-user file
    /// under the platform config directory is used when present, otherwise
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and parse a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.log_level()?;

        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parsed tracing level
    pub fn log_level(&self) -> Result<Level> {
        parse_level(&self.log_level)
    }
}

/// Per-user config location, e.g. `~/.config/tasklist/tasklist.yml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn parse_level(level: &str) -> Result<Level> {
    level
        .trim()
        .parse::<Level>()
        .map_err(|_| eyre!("Invalid log level: {:?} (expected trace, debug, info, warn or error)", level))
}
