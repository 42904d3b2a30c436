pub mod derivative;
pub mod display;

pub use glam::DVec3;
pub use derivative::central_difference;
pub use display::PointDisplay;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
