pub mod error;
pub mod tolerance;

pub use error::{ensure_finite, PcurveError, Result};
pub use tolerance::Tolerance;
