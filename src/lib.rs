//! datetag - Timestamped container image tags
//!
//! Builds fully-qualified image names (`name:tag`) whose tag is the current
//! time rendered in a configurable layout and timezone.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Clock, DateTimeTagger, TagOptions, Tagger};
pub use error::TagError;
