/// Tolerances for comparing floating-point results.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Absolute tolerance (in model units)
    pub linear: f64,
    /// Tolerance relative to the larger magnitude of the compared values
    pub relative: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-7;
    pub const DEFAULT_RELATIVE: f64 = 1e-9;

    pub fn new(linear: f64, relative: f64) -> Self {
        Self { linear, relative }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
            relative: Self::DEFAULT_RELATIVE,
        }
    }

    pub fn loose() -> Self {
        Self {
            linear: 1e-4,
            relative: 1e-6,
        }
    }

    pub fn tight() -> Self {
        Self {
            linear: 1e-10,
            relative: 1e-12,
        }
    }

    /// Tolerance for comparing two sums of `n` same-sign terms accumulated
    /// in different orders. Each order is off by at most `(n - 1) * EPSILON`
    /// relative to the exact sum.
    pub fn reduction(n: usize) -> Self {
        Self {
            linear: 0.0,
            relative: 2.0 * n.max(1) as f64 * f64::EPSILON,
        }
    }

    /// Check if two values are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.linear
    }

    /// Check if two values are equal within the combined absolute and relative tolerance
    pub fn relative_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear + self.relative * a.abs().max(b.abs())
    }

    /// Check if a value is zero within linear tolerance
    pub fn is_zero(self, v: f64) -> bool {
        v.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_eq() {
        let tol = Tolerance::default();
        assert!(tol.linear_eq(1.0, 1.0 + 1e-9));
        assert!(!tol.linear_eq(1.0, 1.0 + 1e-5));
        assert!(tol.is_zero(1e-8));
    }

    #[test]
    fn test_presets_are_ordered() {
        assert!(Tolerance::tight().linear < Tolerance::default().linear);
        assert!(Tolerance::default().linear < Tolerance::loose().linear);
        let custom = Tolerance::new(0.5, 0.0);
        assert!(custom.relative_eq(1.0, 1.4));
        assert!(!custom.relative_eq(1.0, 1.6));
    }

    #[test]
    fn test_reduction_scales_with_count() {
        let small = Tolerance::reduction(10);
        let large = Tolerance::reduction(1_000_000);
        assert!(large.relative > small.relative);
        assert_eq!(Tolerance::reduction(0).relative, 2.0 * f64::EPSILON);
    }

    #[test]
    fn test_reduction_relative_eq() {
        let tol = Tolerance::reduction(1_000);
        let sum = 50_000.0;
        assert!(tol.relative_eq(sum, sum + sum * 100.0 * f64::EPSILON));
        assert!(!tol.relative_eq(sum, sum + 1.0));
        assert!(tol.relative_eq(0.0, 0.0));
    }
}
