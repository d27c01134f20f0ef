//! Error types for datetag

use thiserror::Error;

/// Main error type for tag generation
#[derive(Debug, Error)]
pub enum TagError {
    #[error("Missing tag options: an image name is required")]
    MissingTagOptions,

    #[error("Unable to resolve timezone: {0}")]
    TimezoneResolution(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagError::MissingTagOptions => 2,
            TagError::TimezoneResolution(_) => 3,
            TagError::InvalidLayout(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagError::MissingTagOptions => format!(
                "{}\n\n\
                Usage:\n\
                datetag tag <IMAGE>\n\n\
                Example:\n\
                datetag tag gcr.io/project/app",
                self
            ),
            TagError::TimezoneResolution(name) => {
                format!(
                    "Unable to resolve timezone: '{}'\n\n\
                    Suggestions:\n\
                    • Use an IANA zone name (e.g., UTC, Europe/Berlin, America/Los_Angeles)\n\
                    • Zone names are case-sensitive\n\
                    • Leave the timezone empty or use 'Local' for the system timezone",
                    name
                )
            }
            TagError::InvalidLayout(layout) => {
                format!(
                    "Invalid layout: '{}'\n\n\
                    Suggestions:\n\
                    • Token layouts use YYYY, YY, MM, DD, hh, mm, ss, mmm, ZZZ\n\
                    • Layouts containing '%' are read as strftime (e.g., %Y-%m-%d)\n\
                    • Use '%%' for a literal percent sign in strftime layouts",
                    layout
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagError
pub type Result<T> = std::result::Result<T, TagError>;
