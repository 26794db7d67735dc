//! Outline decomposition of elements into straight edges and cubic arcs.
//!
//! Box-like shapes and diamonds are decomposed in their unrotated frame, in
//! board coordinates: the caller rotates the query point instead of the
//! outline. Linear shapes are decomposed straight into drawing space, their
//! own rotation already applied, because their query point is never
//! normalized.
//!
//! ```text
//!   arc ╭──── top ────╮ arc          top
//!       │             │              ╱ ╲
//!     left          right         left right
//!       │             │              ╲ ╱
//!   arc ╰─── bottom ──╯ arc         bottom
//! ```

use inkboard_core::Point;
use lyon::geom::{point, CubicBezierSegment, LineSegment};
use smallvec::SmallVec;

use crate::distance::primitives::distance_to_segment;
use crate::element::{Element, ElementType, ShapeCategory};
use crate::normalize::rotate_point;
use crate::options::HitTestOptions;

/// Point type used by outline primitives.
pub type GeomPoint = lyon::geom::Point<f64>;

pub(crate) fn geom_point(p: Point) -> GeomPoint {
    point(p.x, p.y)
}

/// A shape boundary as straight edges plus curved arcs.
///
/// For rectanguloids and diamonds the edges and arcs join into one closed
/// loop. Linear outlines are open paths.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    pub edges: SmallVec<[LineSegment<f64>; 4]>,
    pub arcs: SmallVec<[CubicBezierSegment<f64>; 4]>,
}

/// Decompose an element into its outline.
///
/// `center` is the element's resolved center; only linear elements use it,
/// as the pivot for their own rotation. Ellipses have no discrete outline and
/// return `None`.
pub fn decompose(element: &Element, center: Point, options: &HitTestOptions) -> Option<Outline> {
    match element.category() {
        ShapeCategory::Rectanguloid | ShapeCategory::Annotation => {
            Some(decompose_rectanguloid(element))
        }
        ShapeCategory::Diamond => Some(decompose_diamond(element)),
        ShapeCategory::Ellipse => None,
        ShapeCategory::Linear => Some(decompose_linear(element, center, options)),
    }
}

/// Four edges inset by the corner radius, plus one arc per rounded corner.
pub fn decompose_rectanguloid(element: &Element) -> Outline {
    let x1 = element.x;
    let y1 = element.y;
    let x2 = element.x + element.width.max(0.0);
    let y2 = element.y + element.height.max(0.0);
    let r = element.rectanguloid_corner_radius();

    let top = segment(point(x1 + r, y1), point(x2 - r, y1));
    let right = segment(point(x2, y1 + r), point(x2, y2 - r));
    let bottom = segment(point(x2 - r, y2), point(x1 + r, y2));
    let left = segment(point(x1, y2 - r), point(x1, y1 + r));

    let mut outline = Outline::default();
    outline.edges.extend([top, right, bottom, left]);

    if r > 0.0 {
        outline.arcs.extend([
            corner_arc(left.to, point(x1, y1), top.from),
            corner_arc(top.to, point(x2, y1), right.from),
            corner_arc(right.to, point(x2, y2), bottom.from),
            corner_arc(bottom.to, point(x1, y2), left.from),
        ]);
    }
    outline
}

/// Edges between the midpoints of the box sides, optionally rounded at each vertex.
pub fn decompose_diamond(element: &Element) -> Outline {
    let w = element.width.max(0.0);
    let h = element.height.max(0.0);
    let vertices = [
        point(element.x + w / 2.0, element.y),
        point(element.x + w, element.y + h / 2.0),
        point(element.x + w / 2.0, element.y + h),
        point(element.x, element.y + h / 2.0),
    ];

    // Fraction of each edge cut away at a rounded vertex.
    let edge_len = (w / 2.0).hypot(h / 2.0);
    let cut = match element.roundness {
        Some(roundness) if edge_len > 0.0 => {
            (roundness.corner_radius(edge_len) / edge_len).clamp(0.0, 0.5)
        }
        _ => 0.0,
    };

    let mut outline = Outline::default();
    for i in 0..4 {
        let v = vertices[i];
        let next = vertices[(i + 1) % 4];
        outline
            .edges
            .push(segment(v.lerp(next, cut), next.lerp(v, cut)));
    }

    if cut > 0.0 {
        for i in 0..4 {
            let v = vertices[i];
            let prev = vertices[(i + 3) % 4];
            let next = vertices[(i + 1) % 4];
            outline.arcs.push(CubicBezierSegment {
                from: v.lerp(prev, cut),
                ctrl1: v,
                ctrl2: v,
                to: v.lerp(next, cut),
            });
        }
    }
    outline
}

/// Open path through the element's points, in drawing space.
///
/// Straight polylines yield one edge per span. Rounded lines and freehand
/// strokes are fitted with a Catmull-Rom spline, one cubic arc per span.
/// No closing edge is added.
pub fn decompose_linear(element: &Element, center: Point, options: &HitTestOptions) -> Outline {
    let mut points: Vec<Point> = element
        .absolute_points()
        .into_iter()
        .map(|p| rotate_point(p, center, element.angle))
        .collect();

    let curved = match element.element_type {
        ElementType::Freedraw => {
            points = simplify(&points, options.freedraw_simplify_tolerance);
            true
        }
        _ => element.roundness.is_some(),
    };
    // Repeated points would yield zero-length spans and degenerate arcs.
    points.dedup_by(|a, b| a.distance_to(b) <= f64::EPSILON);

    let points: Vec<GeomPoint> = points.into_iter().map(geom_point).collect();
    let mut outline = Outline::default();
    match points.as_slice() {
        [] => {
            tracing::debug!("Linear element {} has no points", element.id);
            let origin = point(element.x, element.y);
            outline.edges.push(segment(origin, origin));
        }
        [only] => outline.edges.push(segment(*only, *only)),
        [a, b] => outline.edges.push(segment(*a, *b)),
        _ if curved => outline.arcs.extend(catmull_rom(&points)),
        _ => outline
            .edges
            .extend(points.windows(2).map(|w| segment(w[0], w[1]))),
    }
    outline
}

fn segment(from: GeomPoint, to: GeomPoint) -> LineSegment<f64> {
    LineSegment { from, to }
}

/// Cubic approximating a quarter-circle-like corner between two edge ends.
fn corner_arc(from: GeomPoint, corner: GeomPoint, to: GeomPoint) -> CubicBezierSegment<f64> {
    CubicBezierSegment {
        from,
        ctrl1: from.lerp(corner, 2.0 / 3.0),
        ctrl2: to.lerp(corner, 2.0 / 3.0),
        to,
    }
}

/// Uniform Catmull-Rom spline through `points` as cubic Bezier spans.
fn catmull_rom(points: &[GeomPoint]) -> impl Iterator<Item = CubicBezierSegment<f64>> + '_ {
    let last = points.len() - 1;
    (0..last).map(move |i| {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];
        CubicBezierSegment {
            from: p1,
            ctrl1: p1 + (p2 - p0) / 6.0,
            ctrl2: p2 - (p3 - p1) / 6.0,
            to: p2,
        }
    })
}

/// Ramer-Douglas-Peucker simplification keeping both endpoints.
pub(crate) fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() < 3 || tolerance <= 0.0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut keep = vec![false; points.len()];
    keep[0] = true;
    keep[last] = true;

    let mut stack = vec![(0, last)];
    while let Some((start, end)) = stack.pop() {
        if end <= start + 1 {
            continue;
        }
        let chord = segment(geom_point(points[start]), geom_point(points[end]));
        let (index, max_dist) = (start + 1..end)
            .map(|i| (i, distance_to_segment(geom_point(points[i]), &chord)))
            .fold((start, 0.0), |best, cur| if cur.1 > best.1 { cur } else { best });
        if max_dist > tolerance {
            keep[index] = true;
            stack.push((start, index));
            stack.push((index, end));
        }
    }

    points
        .iter()
        .zip(keep)
        .filter_map(|(p, k)| k.then_some(*p))
        .collect()
}
