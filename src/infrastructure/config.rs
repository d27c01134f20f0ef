//! Configuration management

use crate::error::{Result, TagError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// File name looked up in the build context
pub const CONFIG_FILE_NAME: &str = ".datetag.toml";

/// Environment variable overriding the layout
pub const FORMAT_ENV: &str = "DATETAG_FORMAT";

/// Environment variable overriding the timezone
pub const TIMEZONE_ENV: &str = "DATETAG_TIMEZONE";

/// Tagger settings; empty values select the defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaggerConfig {
    pub format: String,
    pub timezone: String,
}

impl TaggerConfig {
    /// Load config from .datetag.toml in the given directory.
    /// A missing file yields the default config.
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE_NAME);

        let contents = match fs::read_to_string(&config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(TaggerConfig::default())
            }
            Err(e) => return Err(TagError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            TagError::Config(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
        })
    }

    /// Load the file config, then apply environment and flag overrides
    pub fn load(
        build_context: &Path,
        format: Option<String>,
        timezone: Option<String>,
    ) -> Result<Self> {
        let config = Self::load_from_dir(build_context)?
            .with_env_overrides(|key| std::env::var(key).ok())
            .with_overrides(format, timezone);
        Ok(config)
    }

    /// Apply non-empty DATETAG_* values from `lookup`
    pub fn with_env_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let format = non_empty(FORMAT_ENV);
        let timezone = non_empty(TIMEZONE_ENV);
        self.with_overrides(format, timezone)
    }

    /// Replace fields for which an override is given
    pub fn with_overrides(mut self, format: Option<String>, timezone: Option<String>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        if let Some(timezone) = timezone {
            self.timezone = timezone;
        }
        self
    }
}
