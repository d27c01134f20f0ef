//! Tagging strategies

use crate::domain::clock::{Clock, SystemClock};
use crate::domain::layout::Layout;
use crate::domain::tag_options::TagOptions;
use crate::domain::timezone::resolve_timezone;
use crate::error::{Result, TagError};
use std::path::Path;
use tracing::debug;

/// A strategy that turns tag options into a fully-qualified image name
pub trait Tagger {
    /// Produce `<image>:<tag>` for the given build.
    ///
    /// `build_context` is the build's working directory; strategies that do
    /// not derive the tag from its contents ignore it.
    fn generate_fully_qualified_image_name(
        &self,
        build_context: &Path,
        options: Option<&TagOptions>,
    ) -> Result<String>;
}

/// Tags images with the current time rendered in a configurable layout and zone
#[derive(Debug, Clone)]
pub struct DateTimeTagger<C: Clock = SystemClock> {
    format: String,
    timezone: String,
    clock: C,
}

impl DateTimeTagger<SystemClock> {
    /// Create a tagger reading the wall clock.
    ///
    /// An empty `format` selects the default layout, an empty `timezone` the
    /// local system zone.
    pub fn new(format: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self::with_clock(format, timezone, SystemClock)
    }
}

impl<C: Clock> DateTimeTagger<C> {
    /// Create a tagger with an explicit time source
    pub fn with_clock(format: impl Into<String>, timezone: impl Into<String>, clock: C) -> Self {
        DateTimeTagger {
            format: format.into(),
            timezone: timezone.into(),
            clock,
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }

    pub fn timezone(&self) -> &str {
        &self.timezone
    }
}

impl<C: Clock> Tagger for DateTimeTagger<C> {
    fn generate_fully_qualified_image_name(
        &self,
        _build_context: &Path,
        options: Option<&TagOptions>,
    ) -> Result<String> {
        let options = options
            .filter(|o| !o.image_name.is_empty())
            .ok_or(TagError::MissingTagOptions)?;

        let zone = resolve_timezone(&self.timezone)?;
        let layout = Layout::resolve(&self.format)?;
        debug!(zone = zone.name(), layout = layout.source(), "resolved tag layout");

        let now = self.clock.now().with_timezone(&zone);

        Ok(format!("{}:{}", options.image_name, layout.render(&now)?))
    }
}
