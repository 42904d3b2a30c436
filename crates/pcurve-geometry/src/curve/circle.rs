//! Circle curve.

use pcurve_core::{ensure_finite, Result};
use pcurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Curve, CurveKind};

/// A circle of the given radius centered at the origin in the XY plane.
///
/// `t` is the angle in radians; the curve repeats every `2*PI`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Zero and negative radii are accepted and give degenerate curves.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Like [`Circle::new`], but rejects a NaN or infinite radius.
    pub fn try_new(radius: f64) -> Result<Self> {
        Ok(Self::new(ensure_finite("radius", radius)?))
    }

    pub fn get_radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn get_point(&self, t: f64) -> Point3 {
        Point3::new(self.radius * t.cos(), self.radius * t.sin(), 0.0)
    }

    fn get_derivative(&self, t: f64) -> Vector3 {
        Vector3::new(-self.radius * t.sin(), self.radius * t.cos(), 0.0)
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Circle
    }
}
