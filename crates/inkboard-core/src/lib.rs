//! # Inkboard Core
//!
//! Core value types and error types shared by the Inkboard crates.
//! Provides the plane [`Point`], element identifiers, and the error
//! hierarchy used by the geometry and settings layers.

pub mod error;
pub mod types;

pub use error::{Error, GeometryError, Result};
pub use types::{ElementId, Point};
