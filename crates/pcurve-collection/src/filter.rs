//! Projection of one variant out of a mixed sequence.

use std::sync::Arc;

use pcurve_geometry::{AnyCurve, Circle};
use tracing::debug;

/// Collect the circles of `curves`, keeping their relative order.
///
/// The result shares the circle instances with `curves`; nothing is copied.
pub fn filter_circles(curves: &[AnyCurve]) -> Vec<Arc<Circle>> {
    let circles: Vec<Arc<Circle>> = curves
        .iter()
        .filter_map(AnyCurve::as_circle)
        .cloned()
        .collect();
    debug!(total = curves.len(), circles = circles.len(), "filtered circles");
    circles
}
