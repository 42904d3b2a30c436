//! The curve contract and its implementations.

mod any;
mod circle;
mod ellipse;
mod helix;

use std::fmt;

use pcurve_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

pub use any::AnyCurve;
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use helix::Helix;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Circle {}
    impl Sealed for super::Ellipse {}
    impl Sealed for super::Helix {}
    impl Sealed for super::AnyCurve {}
}

/// Trait for parametric curves in 3D space.
///
/// Implemented only by the curve types of this crate. Both evaluations are
/// pure functions of `t` and the construction-time shape parameters.
pub trait Curve: sealed::Sealed + Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn get_point(&self, t: f64) -> Point3;

    /// Evaluate the first derivative (not normalized) at parameter `t`.
    fn get_derivative(&self, t: f64) -> Vector3;

    /// Runtime variant of this curve.
    fn kind(&self) -> CurveKind;
}

/// The closed set of curve variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveKind {
    Circle,
    Ellipse,
    Helix,
}

impl CurveKind {
    pub const ALL: [CurveKind; 3] = [CurveKind::Circle, CurveKind::Ellipse, CurveKind::Helix];
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CurveKind::Circle => "circle",
            CurveKind::Ellipse => "ellipse",
            CurveKind::Helix => "helix",
        };
        f.write_str(name)
    }
}
