//! Error types for color and style resolution.

use thiserror::Error;

/// Errors that can occur while parsing color strings or resolving
/// color and style specifications.
///
/// Every error is reported synchronously to the caller; there is no
/// partial-result mode and no logging layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// String matches no reserved ANSI name, CSS name, hex pattern, or
    /// `rgb(...)` pattern.
    #[error("unknown color '{0}'")]
    UnknownColor(String),

    /// A hex or `rgb(...)` string was recognized as such but is
    /// syntactically malformed.
    #[error("invalid color format '{value}': {reason}")]
    InvalidFormat { value: String, reason: String },

    /// Numeric palette index outside 0-255, or not an integer.
    #[error("color index {0} out of range (0-255)")]
    InvalidColorIndex(f64),

    /// One RGB triple component outside 0-255.
    #[error("RGB component {0} out of range (0-255)")]
    InvalidColorComponent(i64),

    /// Style token not in the recognized set.
    #[error("unknown style '{0}'")]
    UnknownStyle(String),
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
