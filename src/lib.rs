//! # Inkboard
//!
//! Hit-testing geometry for an infinite-canvas whiteboard: the distance from a
//! pointer position to the outline of a rotated, possibly rounded shape.
//!
//! ## Architecture
//!
//! Inkboard is organized as a workspace with multiple crates:
//!
//! 1. **inkboard-core** - Shared value types and error types
//! 2. **inkboard-geometry** - Elements, point normalization, outline
//!    decomposition, distance and hit testing
//! 3. **inkboard-settings** - Hit-testing tunables loaded from JSON or TOML
//! 4. **inkboard** - This facade, re-exporting the above
//!
//! ## Features
//!
//! - **Shape families**: rectangles and other box-like elements, annotation
//!   markers, diamonds, ellipses, lines, arrows and freehand strokes
//! - **Rotation**: the query point is rotated into the shape's frame instead of
//!   rotating the shape
//! - **Rounded corners**: exact distance to cubic corner arcs
//! - **Picking**: topmost element under the pointer, honoring fills

pub use inkboard_geometry as geometry;
pub use inkboard_settings as settings;

pub use inkboard_core::{ElementId, Error, GeometryError, Point, Result};

pub use inkboard_geometry::{
    distance_to_element, distance_to_element_with, element_at_position, elements_at_position,
    hit_element, is_point_inside, normalize_point, to_elements_map, try_distance_to_element,
    BoundsCenter, CenterResolver, Element, ElementType, ElementsMap, HitTestOptions, Roundness,
    ShapeCategory,
};

pub use inkboard_settings::{default_config_path, Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, `info` when unset
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        tracing::debug!("Logging already initialized");
    }

    Ok(())
}

/// Load the hit-testing options from the default config file, or defaults
/// when there is none.
pub fn load_hit_test_options() -> anyhow::Result<HitTestOptions> {
    let path = default_config_path()?;
    Ok(Config::load_or_default(&path)?.hit_testing)
}
