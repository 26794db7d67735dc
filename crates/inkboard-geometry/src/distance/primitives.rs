//! Point-to-primitive distances: segments, cubic arcs and whole outlines.

use lyon::geom::{CubicBezierSegment, LineSegment};

use crate::options::HitTestOptions;
use crate::outline::{GeomPoint, Outline};

const INV_PHI: f64 = 0.618_033_988_749_894_9;

/// Distance from `p` to the closest point of `segment`.
///
/// Zero-length segments measure to their single point.
pub fn distance_to_segment(p: GeomPoint, segment: &LineSegment<f64>) -> f64 {
    let ab = segment.to - segment.from;
    let denom = ab.square_length();
    if denom <= f64::EPSILON {
        return (p - segment.from).length();
    }
    let t = ((p - segment.from).dot(ab) / denom).clamp(0.0, 1.0);
    let closest = segment.from + ab * t;
    (p - closest).length()
}

/// Distance from `p` to a cubic arc, or `None` when the arc has no extent.
///
/// Samples the arc coarsely, then narrows the best bracket with a
/// golden-section search.
pub fn distance_to_curve(
    p: GeomPoint,
    curve: &CubicBezierSegment<f64>,
    options: &HitTestOptions,
) -> Option<f64> {
    let controls = [curve.ctrl1, curve.ctrl2, curve.to];
    if controls
        .iter()
        .all(|c| (*c - curve.from).square_length() <= f64::EPSILON)
    {
        return None;
    }

    let dist_at = |t: f64| (curve.sample(t) - p).length();

    let steps = options.curve_samples.max(1);
    let step = 1.0 / steps as f64;
    let (best_i, best_d) = (0..=steps)
        .map(|i| (i, dist_at(i as f64 * step)))
        .fold((0, f64::INFINITY), |best, cur| if cur.1 < best.1 { cur } else { best });

    let mut lo = (best_i as f64 - 1.0) * step;
    let mut hi = (best_i as f64 + 1.0) * step;
    lo = lo.max(0.0);
    hi = hi.min(1.0);

    let mut a = hi - (hi - lo) * INV_PHI;
    let mut b = lo + (hi - lo) * INV_PHI;
    let mut da = dist_at(a);
    let mut db = dist_at(b);
    for _ in 0..options.curve_refine_iterations {
        if da < db {
            hi = b;
            b = a;
            db = da;
            a = hi - (hi - lo) * INV_PHI;
            da = dist_at(a);
        } else {
            lo = a;
            a = b;
            da = db;
            b = lo + (hi - lo) * INV_PHI;
            db = dist_at(b);
        }
    }

    let refined = da.min(db).min(best_d);
    refined.is_finite().then_some(refined)
}

/// Smallest distance from `p` to any edge or arc of `outline`.
///
/// Arcs without a defined distance are skipped. An empty outline yields
/// `f64::INFINITY`.
pub fn distance_to_outline(p: GeomPoint, outline: &Outline, options: &HitTestOptions) -> f64 {
    let edges = outline.edges.iter().map(|e| distance_to_segment(p, e));
    let arcs = outline
        .arcs
        .iter()
        .filter_map(|a| distance_to_curve(p, a, options));
    edges.chain(arcs).fold(f64::INFINITY, f64::min)
}
