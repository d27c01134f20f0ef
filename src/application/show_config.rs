//! Show effective configuration use case

use crate::domain::{resolve_timezone, Layout};
use crate::error::Result;
use crate::infrastructure::TaggerConfig;

/// Configuration after defaults are applied and values are validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub format: String,
    pub timezone: String,
}

/// Service for inspecting tagger configuration
pub struct ConfigService {
    config: TaggerConfig,
}

impl ConfigService {
    pub fn new(config: TaggerConfig) -> Self {
        ConfigService { config }
    }

    /// Resolve the layout and zone that tagging would use
    pub fn effective(&self) -> Result<EffectiveConfig> {
        let layout = Layout::resolve(&self.config.format)?;
        let zone = resolve_timezone(&self.config.timezone)?;

        Ok(EffectiveConfig {
            format: layout.source().to_string(),
            timezone: zone.name().to_string(),
        })
    }
}
