//! Closest-point distance to an axis-aligned ellipse boundary.

use lyon::geom::{point, LineSegment};

use super::primitives::distance_to_segment;
use crate::outline::GeomPoint;

/// Distance from `p` to the boundary of the axis-aligned ellipse centered at
/// `center` with semi-axes `a` (x) and `b` (y).
///
/// `p` must already be in the ellipse's unrotated frame. Points inside the
/// ellipse measure to the boundary as well. Uses the trig-free evolute
/// iteration on the first quadrant, then mirrors the result back.
pub fn distance_to_ellipse(p: GeomPoint, center: GeomPoint, a: f64, b: f64, iterations: usize) -> f64 {
    let a = a.abs();
    let b = b.abs();
    let local = p - center;

    if a <= f64::EPSILON || b <= f64::EPSILON {
        tracing::debug!("Degenerate ellipse ({}, {}), measuring to its axis", a, b);
        let axis = LineSegment {
            from: point(-a, -b),
            to: point(a, b),
        };
        return distance_to_segment(point(local.x, local.y), &axis);
    }

    let px = local.x.abs();
    let py = local.y.abs();

    let mut tx = std::f64::consts::FRAC_1_SQRT_2;
    let mut ty = std::f64::consts::FRAC_1_SQRT_2;
    for _ in 0..iterations {
        let x = a * tx;
        let y = b * ty;

        let ex = (a * a - b * b) * tx.powi(3) / a;
        let ey = (b * b - a * a) * ty.powi(3) / b;

        let rx = x - ex;
        let ry = y - ey;
        let qx = px - ex;
        let qy = py - ey;

        let r = rx.hypot(ry);
        let q = qx.hypot(qy);
        if q <= f64::EPSILON {
            break;
        }

        tx = ((qx * r / q + ex) / a).clamp(0.0, 1.0);
        ty = ((qy * r / q + ey) / b).clamp(0.0, 1.0);
        let t = tx.hypot(ty);
        if t <= f64::EPSILON {
            break;
        }
        tx /= t;
        ty /= t;
    }

    let closest_x = (a * tx).copysign(local.x);
    let closest_y = (b * ty).copysign(local.y);
    (local.x - closest_x).hypot(local.y - closest_y)
}
