//! Shared handles to curves of any variant.

use std::sync::Arc;

use pcurve_math::{Point3, Vector3};

use super::{Circle, Curve, CurveKind, Ellipse, Helix};

/// A shared, immutable curve of any variant.
///
/// Cloning an `AnyCurve` clones the `Arc`, so copies of a collection
/// refer to the same curve instances.
#[derive(Debug, Clone)]
pub enum AnyCurve {
    Circle(Arc<Circle>),
    Ellipse(Arc<Ellipse>),
    Helix(Arc<Helix>),
}

impl AnyCurve {
    pub fn as_circle(&self) -> Option<&Arc<Circle>> {
        match self {
            AnyCurve::Circle(circle) => Some(circle),
            AnyCurve::Ellipse(_) | AnyCurve::Helix(_) => None,
        }
    }

    /// Whether both handles refer to the same curve instance.
    pub fn ptr_eq(&self, other: &AnyCurve) -> bool {
        match (self, other) {
            (AnyCurve::Circle(a), AnyCurve::Circle(b)) => Arc::ptr_eq(a, b),
            (AnyCurve::Ellipse(a), AnyCurve::Ellipse(b)) => Arc::ptr_eq(a, b),
            (AnyCurve::Helix(a), AnyCurve::Helix(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Curve for AnyCurve {
    fn get_point(&self, t: f64) -> Point3 {
        match self {
            AnyCurve::Circle(c) => c.get_point(t),
            AnyCurve::Ellipse(e) => e.get_point(t),
            AnyCurve::Helix(h) => h.get_point(t),
        }
    }

    fn get_derivative(&self, t: f64) -> Vector3 {
        match self {
            AnyCurve::Circle(c) => c.get_derivative(t),
            AnyCurve::Ellipse(e) => e.get_derivative(t),
            AnyCurve::Helix(h) => h.get_derivative(t),
        }
    }

    fn kind(&self) -> CurveKind {
        match self {
            AnyCurve::Circle(_) => CurveKind::Circle,
            AnyCurve::Ellipse(_) => CurveKind::Ellipse,
            AnyCurve::Helix(_) => CurveKind::Helix,
        }
    }
}

impl From<Circle> for AnyCurve {
    fn from(circle: Circle) -> Self {
        AnyCurve::Circle(Arc::new(circle))
    }
}

impl From<Ellipse> for AnyCurve {
    fn from(ellipse: Ellipse) -> Self {
        AnyCurve::Ellipse(Arc::new(ellipse))
    }
}

impl From<Helix> for AnyCurve {
    fn from(helix: Helix) -> Self {
        AnyCurve::Helix(Arc::new(helix))
    }
}

impl From<Arc<Circle>> for AnyCurve {
    fn from(circle: Arc<Circle>) -> Self {
        AnyCurve::Circle(circle)
    }
}
