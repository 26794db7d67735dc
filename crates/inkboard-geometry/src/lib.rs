//! # Inkboard Geometry
//!
//! Distance-to-shape computations used for pointer hit testing, selection and
//! binding on the board.
//!
//! ## Core Components
//!
//! - **Elements**: immutable snapshots of board shapes, grouped into five
//!   families (rectanguloid, annotation, diamond, ellipse, linear)
//! - **Normalization**: rotates the query point into an element's unrotated
//!   frame instead of rotating the element
//! - **Outlines**: decomposition of a shape into straight edges and cubic arcs
//! - **Distance**: point-to-segment, point-to-curve and point-to-ellipse
//!   primitives, and the per-family dispatcher
//! - **Hit testing**: threshold and fill based picking over a scene
//!
//! ## Architecture
//!
//! ```text
//! distance_to_element(element, elements, point)
//!   ├── CenterResolver   (rotation pivot)
//!   ├── normalize_point  (skipped for linear elements)
//!   ├── decompose        (skipped for ellipses)
//!   └── distance_to_outline / distance_to_ellipse
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use inkboard_geometry::{distance_to_element, Element, ElementsMap, Point};
//!
//! let rect = Element::rectangle(0.0, 0.0, 100.0, 50.0);
//! let d = distance_to_element(&rect, &ElementsMap::new(), Point::new(50.0, -10.0));
//! assert_eq!(d, 10.0);
//! ```

pub mod center;
pub mod distance;
pub mod element;
pub mod normalize;
pub mod options;
pub mod outline;

pub use inkboard_core::{ElementId, Error, GeometryError, Point};

pub use center::{path_midpoint, BoundsCenter, CenterResolver};
pub use distance::{
    distance_to_curve, distance_to_element, distance_to_element_with, distance_to_ellipse,
    distance_to_outline, distance_to_segment, try_distance_to_element,
};
pub use element::{
    to_elements_map, Element, ElementType, ElementsMap, Roundness, ShapeCategory,
    DEFAULT_ADAPTIVE_RADIUS, DEFAULT_PROPORTIONAL_RADIUS,
};
pub use hit_test::{element_at_position, elements_at_position, hit_element, is_point_inside};
pub use normalize::{normalize_point, rotate_point};
pub use options::HitTestOptions;
pub use outline::{
    decompose, decompose_diamond, decompose_linear, decompose_rectanguloid, GeomPoint, Outline,
};
