//! Domain layer - Tag generation logic and models

pub mod clock;
pub mod layout;
pub mod tag_options;
pub mod tagger;
pub mod timezone;

pub use clock::{Clock, FixedClock, SystemClock};
pub use layout::{Layout, DEFAULT_LAYOUT};
pub use tag_options::TagOptions;
pub use tagger::{DateTimeTagger, Tagger};
pub use timezone::{local_timezone, resolve_timezone};
