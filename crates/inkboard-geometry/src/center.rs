//! Center resolution for elements.
//!
//! The center is the pivot for rotation normalization. Most elements use the
//! middle of their own box; linear elements and text bound to an arrow need
//! the surrounding geometry.

use inkboard_core::Point;

use crate::element::{Element, ElementsMap};
use crate::normalize::rotate_point;

/// Resolves the rotation pivot of an element.
pub trait CenterResolver {
    fn center(&self, element: &Element, elements: &ElementsMap) -> Point;
}

impl<F> CenterResolver for F
where
    F: Fn(&Element, &ElementsMap) -> Point,
{
    fn center(&self, element: &Element, elements: &ElementsMap) -> Point {
        self(element, elements)
    }
}

/// Default resolver based on element bounds.
///
/// - Linear elements: middle of their absolute point bounds.
/// - Text bound to a line or arrow: arc-length midpoint of the container path.
/// - Everything else: middle of the stored box.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsCenter;

impl CenterResolver for BoundsCenter {
    fn center(&self, element: &Element, elements: &ElementsMap) -> Point {
        if element.element_type.is_linear() {
            return bounds_center(element);
        }

        if let Some(container_id) = &element.container_id {
            match elements.get(container_id) {
                Some(container) if container.element_type.is_linear() => {
                    if let Some(mid) = path_midpoint(container) {
                        return mid;
                    }
                }
                Some(_) => {}
                None => tracing::warn!(
                    "Container {} of element {} not found, using its own box",
                    container_id,
                    element.id
                ),
            }
        }

        element.box_center()
    }
}

fn bounds_center(element: &Element) -> Point {
    let (min_x, min_y, max_x, max_y) = element.bounds();
    Point::new((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
}

/// Point halfway along a linear element's path, by arc length, in drawing space.
pub fn path_midpoint(element: &Element) -> Option<Point> {
    let pivot = bounds_center(element);
    let points: Vec<Point> = element
        .absolute_points()
        .into_iter()
        .map(|p| rotate_point(p, pivot, element.angle))
        .collect();
    if points.is_empty() {
        return None;
    }

    let total: f64 = points.windows(2).map(|w| w[0].distance_to(&w[1])).sum();
    if total <= f64::EPSILON {
        return points.first().copied();
    }

    let mut remaining = total / 2.0;
    for w in points.windows(2) {
        let len = w[0].distance_to(&w[1]);
        if len > 0.0 && remaining <= len {
            return Some(w[0].lerp(&w[1], remaining / len));
        }
        remaining -= len;
    }
    points.last().copied()
}
