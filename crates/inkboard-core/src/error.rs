//! Error handling for Inkboard
//!
//! Provides the error types for the library layers:
//! - Geometry errors (element categories, non-finite input)
//! - A top-level error wrapping them for checked entry points
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised only at the edges of the geometry core: parsing an untyped element
/// tag, or a checked distance query handed NaN/infinite coordinates. The
/// distance functions themselves are total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Element type tag outside the closed set of shape families
    #[error("Invalid element category: {name}")]
    InvalidCategory {
        /// The unrecognized type tag.
        name: String,
    },

    /// A coordinate or dimension was NaN or infinite
    #[error("Non-finite input: {what}")]
    NonFiniteInput {
        /// Which input carried the bad value.
        what: String,
    },
}

impl GeometryError {
    /// Create an invalid-category error for the given tag
    pub fn invalid_category(name: impl Into<String>) -> Self {
        GeometryError::InvalidCategory { name: name.into() }
    }

    /// Create a non-finite-input error naming the offending input
    pub fn non_finite(what: impl Into<String>) -> Self {
        GeometryError::NonFiniteInput { what: what.into() }
    }
}

/// Main error type for Inkboard
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result type for Inkboard operations
pub type Result<T> = std::result::Result<T, Error>;
