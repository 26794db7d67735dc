//! Distance from a board point to an element's outline.
//!
//! [`distance_to_element`] is the entry point used by selection, hit testing
//! and binding. It dispatches on the element's [`ShapeCategory`]:
//!
//! ```text
//! Annotation   -> radius fast path, then as Rectanguloid
//! Rectanguloid -> normalize point -> decompose -> min over edges/arcs
//! Diamond      -> normalize point -> decompose -> min over edges/arcs
//! Ellipse      -> normalize point -> closed-form ellipse distance
//! Linear       -> decompose in drawing space -> min over edges/arcs
//! ```

pub mod ellipse;
pub mod primitives;

pub use ellipse::distance_to_ellipse;
pub use primitives::{distance_to_curve, distance_to_outline, distance_to_segment};

use inkboard_core::{GeometryError, Point, Result};

use crate::center::{BoundsCenter, CenterResolver};
use crate::element::{Element, ElementsMap, ShapeCategory};
use crate::normalize::normalize_point;
use crate::options::HitTestOptions;
use crate::outline::{decompose_diamond, decompose_linear, decompose_rectanguloid, geom_point};

/// Distance from `p` to `element`, using default options and center resolution.
///
/// Zero means the point is on the outline or inside the element's enlarged
/// hit target.
pub fn distance_to_element(element: &Element, elements: &ElementsMap, p: Point) -> f64 {
    distance_to_element_with(element, elements, p, &HitTestOptions::default(), &BoundsCenter)
}

/// Distance from `p` to `element` with explicit options and center resolver.
pub fn distance_to_element_with<R>(
    element: &Element,
    elements: &ElementsMap,
    p: Point,
    options: &HitTestOptions,
    resolver: &R,
) -> f64
where
    R: CenterResolver + ?Sized,
{
    let center = resolver.center(element, elements);
    let category = element.category();

    // Markers are drawn small; anything near the center counts as on them.
    if category == ShapeCategory::Annotation
        && p.distance_to(&center) <= options.annotation_hit_radius
    {
        tracing::trace!(element = %element.id, "annotation hit by radius");
        return 0.0;
    }

    let distance = match category {
        ShapeCategory::Rectanguloid | ShapeCategory::Annotation => {
            let local = normalize_point(p, center, element.angle);
            if category == ShapeCategory::Annotation
                && local.distance_to(&center) <= options.annotation_local_hit_radius
            {
                0.0
            } else {
                distance_to_outline(geom_point(local), &decompose_rectanguloid(element), options)
            }
        }
        ShapeCategory::Diamond => {
            let local = normalize_point(p, center, element.angle);
            distance_to_outline(geom_point(local), &decompose_diamond(element), options)
        }
        ShapeCategory::Ellipse => {
            let local = normalize_point(p, center, element.angle);
            distance_to_ellipse(
                geom_point(local),
                geom_point(center),
                element.width / 2.0,
                element.height / 2.0,
                options.ellipse_iterations,
            )
        }
        ShapeCategory::Linear => {
            distance_to_outline(geom_point(p), &decompose_linear(element, center, options), options)
        }
    };

    tracing::trace!(
        element = %element.id,
        kind = %element.element_type,
        distance,
        "distance to element"
    );
    distance
}

/// Like [`distance_to_element_with`], but rejects non-finite input and output
/// with [`GeometryError::NonFiniteInput`].
pub fn try_distance_to_element(
    element: &Element,
    elements: &ElementsMap,
    p: Point,
    options: &HitTestOptions,
) -> Result<f64> {
    if !p.is_finite() {
        return Err(GeometryError::non_finite("query point").into());
    }
    element.check_finite()?;

    let distance = distance_to_element_with(element, elements, p, options, &BoundsCenter);
    if distance.is_finite() {
        Ok(distance)
    } else {
        Err(GeometryError::non_finite(format!("distance to element {}", element.id)).into())
    }
}
