//! Output formatting utilities

use crate::application::EffectiveConfig;

/// Format the effective configuration for display
pub fn format_config(config: &EffectiveConfig) -> String {
    format!(
        "format = {}\ntimezone = {}\n",
        config.format, config.timezone
    )
}
