//! Application layer - Use cases and orchestration

pub mod generate_tag;
pub mod show_config;

pub use generate_tag::GenerateTagService;
pub use show_config::{ConfigService, EffectiveConfig};
