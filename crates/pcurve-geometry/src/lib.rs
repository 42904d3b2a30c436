//! pcurve geometry: closed-form parametric curves.

pub mod curve;

pub use curve::{AnyCurve, Circle, Curve, CurveKind, Ellipse, Helix};
