//! Helix curve.

use std::f64::consts::TAU;

use pcurve_core::{ensure_finite, Result};
use pcurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{Curve, CurveKind};

/// A circular helix around the Z axis.
///
/// The projection onto the XY plane is a circle of `radius`; each full turn
/// (`t` increasing by `2*PI`) rises by `step` along Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Helix {
    radius: f64,
    step: f64,
}

impl Helix {
    pub fn new(radius: f64, step: f64) -> Self {
        Self { radius, step }
    }

    /// Like [`Helix::new`], but rejects NaN or infinite parameters.
    pub fn try_new(radius: f64, step: f64) -> Result<Self> {
        Ok(Self::new(
            ensure_finite("radius", radius)?,
            ensure_finite("step", step)?,
        ))
    }

    /// Rise along Z per radian of `t`.
    fn pitch(&self) -> f64 {
        self.step / TAU
    }
}

impl Curve for Helix {
    fn get_point(&self, t: f64) -> Point3 {
        Point3::new(self.radius * t.cos(), self.radius * t.sin(), t * self.pitch())
    }

    fn get_derivative(&self, t: f64) -> Vector3 {
        Vector3::new(-self.radius * t.sin(), self.radius * t.cos(), self.pitch())
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Helix
    }
}
