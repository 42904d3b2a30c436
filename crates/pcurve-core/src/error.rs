use thiserror::Error;

#[derive(Debug, Error)]
pub enum PcurveError {
    #[error("Non-finite parameter: {name} = {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Invalid range for {name}: [{low}, {high})")]
    InvalidRange {
        name: &'static str,
        low: f64,
        high: f64,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PcurveError>;

/// Reject NaN and infinite shape parameters.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PcurveError::NonFinite { name, value })
    }
}
