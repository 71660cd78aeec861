//! Error types for configuration and slide selection.

use thiserror::Error;

/// Errors raised while loading [`crate::LandingConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse landing config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// A slide index outside the testimonial sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("slide {index} out of range (0..{len})")]
pub struct SlideOutOfRange {
    pub index: usize,
    pub len: usize,
}
