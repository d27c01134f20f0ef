//! Per-request tag options

/// Parameters for a single tag request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagOptions {
    /// Image name without any tag suffix (e.g., `gcr.io/project/app`)
    pub image_name: String,
}

impl TagOptions {
    pub fn new(image_name: impl Into<String>) -> Self {
        TagOptions {
            image_name: image_name.into(),
        }
    }
}
