//! Generate tag use case

use crate::domain::{DateTimeTagger, TagOptions, Tagger};
use crate::error::Result;
use crate::infrastructure::TaggerConfig;
use std::path::Path;

/// Service producing fully-qualified image names for a build
pub struct GenerateTagService {
    tagger: Box<dyn Tagger>,
}

impl GenerateTagService {
    /// Create a service around any tagging strategy
    pub fn new(tagger: Box<dyn Tagger>) -> Self {
        GenerateTagService { tagger }
    }

    /// Create a service using the date-time strategy with the wall clock
    pub fn from_config(config: &TaggerConfig) -> Self {
        Self::new(Box::new(DateTimeTagger::new(
            config.format.clone(),
            config.timezone.clone(),
        )))
    }

    /// Tag `image_name` for the build rooted at `build_context`
    pub fn execute(&self, build_context: &Path, image_name: &str) -> Result<String> {
        let options = TagOptions::new(image_name);
        self.tagger
            .generate_fully_qualified_image_name(build_context, Some(&options))
    }
}
