//! Batch evaluation of mixed curve sequences.

use std::f64::consts::FRAC_PI_4;
use std::fmt;

use pcurve_geometry::{AnyCurve, Curve, CurveKind};
use pcurve_math::{Point3, PointDisplay, Vector3};
use serde::Serialize;

/// Parameter at which the command-line driver samples every curve.
pub const DEFAULT_EVAL_PARAMETER: f64 = FRAC_PI_4;

/// Position and derivative of one curve at one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub kind: CurveKind,
    pub point: Point3,
    pub derivative: Vector3,
}

impl Evaluation {
    pub fn of<C: Curve + ?Sized>(curve: &C, t: f64) -> Self {
        Self {
            kind: curve.kind(),
            point: curve.get_point(t),
            derivative: curve.get_derivative(t),
        }
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "point: {}, derivative: {}",
            PointDisplay(self.point),
            PointDisplay(self.derivative)
        )
    }
}

/// Evaluate every curve at `t`, in sequence order.
pub fn evaluate_all(curves: &[AnyCurve], t: f64) -> Vec<Evaluation> {
    curves.iter().map(|curve| Evaluation::of(curve, t)).collect()
}
