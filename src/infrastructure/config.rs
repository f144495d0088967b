//! Configuration management

use crate::error::{Result, SplitError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "daysplit.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Study guide to split
    pub source_path: PathBuf,
    /// Directory receiving one sub-directory per day
    pub output_root: PathBuf,
    /// Extension of generated day files
    pub extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_path: PathBuf::from("context/writings/lifegoalsstudyguide.md"),
            output_root: PathBuf::from("days"),
            extension: "md".to_string(),
        }
    }
}

/// Values given on the command line; each one wins over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_path: Option<PathBuf>,
    pub output_root: Option<PathBuf>,
    pub extension: Option<String>,
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `daysplit.toml` in the
    /// working directory is used when present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_from_file(default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SplitError::Config(format!("Config file not found: {}", path.display()))
            } else {
                SplitError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of this config
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(source) = overrides.source_path {
            self.source_path = source;
        }
        if let Some(output) = overrides.output_root {
            self.output_root = output;
        }
        if let Some(ext) = overrides.extension {
            self.extension = ext;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        let ext = &self.extension;
        if ext.is_empty() || ext.starts_with('.') || ext.contains('/') || ext.contains('\\') {
            return Err(SplitError::Config(format!("Invalid extension: '{}'", ext)));
        }
        Ok(())
    }
}
