//! Text rendering of points.

use std::fmt;

use crate::Point3;

/// Renders a point as `{x, y, z}`.
///
/// glam's own `Display` prints `[x, y, z]`; this wrapper keeps the brace
/// format used by the command-line output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointDisplay(pub Point3);

impl fmt::Display for PointDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        write!(f, "{{{}, {}, {}}}", p.x, p.y, p.z)
    }
}
