//! Signal-specific error types.

use thiserror::Error;

/// Errors raised while turning raw input into a [`super::TrafficLength`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrafficLengthError {
    #[error("traffic length '{0}' is not a number")]
    NotANumber(String),

    #[error("traffic length must be finite, got {0}")]
    NotFinite(f64),
}
