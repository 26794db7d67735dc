//! Tunables shared by distance queries and hit testing.

use serde::{Deserialize, Serialize};

/// Tunables for distance and hit-test queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitTestOptions {
    /// Radius around an annotation's center that counts as a hit, in board space
    pub annotation_hit_radius: f64,
    /// Second, smaller radius checked after rotating into the annotation's frame
    pub annotation_local_hit_radius: f64,
    /// Coarse samples taken along a curve before refining
    pub curve_samples: usize,
    /// Golden-section steps used to refine the closest curve parameter
    pub curve_refine_iterations: usize,
    /// Iterations of the closest-point solver for ellipses
    pub ellipse_iterations: usize,
    /// Ramer-Douglas-Peucker tolerance applied to freehand strokes
    pub freedraw_simplify_tolerance: f64,
    /// Default distance under which an element counts as hit
    pub hit_threshold: f64,
}

impl Default for HitTestOptions {
    fn default() -> Self {
        Self {
            annotation_hit_radius: 16.0,
            annotation_local_hit_radius: 12.0,
            curve_samples: 30,
            curve_refine_iterations: 24,
            ellipse_iterations: 4,
            freedraw_simplify_tolerance: 0.75,
            hit_threshold: 10.0,
        }
    }
}
