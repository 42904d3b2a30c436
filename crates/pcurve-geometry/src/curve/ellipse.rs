//! Ellipse curve.

use pcurve_core::{ensure_finite, Result};
use pcurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Curve, CurveKind};

/// An origin-centered, axis-aligned ellipse in the XY plane.
///
/// `radius_x` is the semi-axis along X and `radius_y` the semi-axis along Y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    radius_x: f64,
    radius_y: f64,
}

impl Ellipse {
    pub fn new(radius_x: f64, radius_y: f64) -> Self {
        Self { radius_x, radius_y }
    }

    /// Like [`Ellipse::new`], but rejects NaN or infinite radii.
    pub fn try_new(radius_x: f64, radius_y: f64) -> Result<Self> {
        Ok(Self::new(
            ensure_finite("radius_x", radius_x)?,
            ensure_finite("radius_y", radius_y)?,
        ))
    }
}

impl Curve for Ellipse {
    fn get_point(&self, t: f64) -> Point3 {
        Point3::new(self.radius_x * t.cos(), self.radius_y * t.sin(), 0.0)
    }

    fn get_derivative(&self, t: f64) -> Vector3 {
        Vector3::new(-self.radius_x * t.sin(), self.radius_y * t.cos(), 0.0)
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Ellipse
    }
}
