//! Rotation of query points into an element's unrotated frame.
//!
//! Rotating one point is cheaper than rotating a whole outline, so distance
//! queries move the point by `-angle` about the element center and then
//! measure against the unrotated shape.

use inkboard_core::Point;

/// Rotate `p` about `center` by `angle` radians.
///
/// Positive angles turn from +x towards +y, which on a y-down board reads as
/// clockwise. This is the same convention elements use for their stored angle.
/// Whole turns (including zero) return `p` unchanged, bit for bit.
pub fn rotate_point(p: Point, center: Point, angle: f64) -> Point {
    if angle % std::f64::consts::TAU == 0.0 {
        return p;
    }
    let (s, c) = angle.sin_cos();
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    Point {
        x: center.x + dx * c - dy * s,
        y: center.y + dx * s + dy * c,
    }
}

/// Map `p` into the frame of a shape rotated by `angle` about `center`.
pub fn normalize_point(p: Point, center: Point, angle: f64) -> Point {
    rotate_point(p, center, -angle)
}
