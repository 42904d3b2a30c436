//! Random generation of mixed curve collections.

use std::ops::Range;

use pcurve_core::{PcurveError, Result};
use pcurve_geometry::{AnyCurve, Circle, CurveKind, Ellipse, Helix};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Parameters for [`generate_curves`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of curves to generate
    pub count: usize,
    /// Half-open range for every radius (circle, ellipse semi-axes, helix)
    pub radius_range: Range<f64>,
    /// Half-open range for helix steps
    pub step_range: Range<f64>,
    /// Fixed seed for reproducible output; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub const DEFAULT_COUNT: usize = 1_000_000;
    pub const DEFAULT_RADIUS_RANGE: Range<f64> = 0.1..100.0;
    pub const DEFAULT_STEP_RANGE: Range<f64> = 0.1..20.0;

    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Both ranges must be finite and non-empty.
    pub fn validate(&self) -> Result<()> {
        check_range("radius", &self.radius_range)?;
        check_range("step", &self.step_range)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: Self::DEFAULT_COUNT,
            radius_range: Self::DEFAULT_RADIUS_RANGE,
            step_range: Self::DEFAULT_STEP_RANGE,
            seed: None,
        }
    }
}

fn check_range(name: &'static str, range: &Range<f64>) -> Result<()> {
    if range.start.is_finite() && range.end.is_finite() && range.start < range.end {
        Ok(())
    } else {
        Err(PcurveError::InvalidRange {
            name,
            low: range.start,
            high: range.end,
        })
    }
}

/// Generate `config.count` curves, each variant equally likely.
#[instrument(skip_all, fields(count = config.count, seed = ?config.seed))]
pub fn generate_curves(config: &GeneratorConfig) -> Result<Vec<AnyCurve>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let curves: Vec<AnyCurve> = (0..config.count)
        .map(|_| random_curve(&mut rng, config))
        .collect();
    info!(count = curves.len(), "generated curves");
    Ok(curves)
}

fn random_curve<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> AnyCurve {
    let kind = CurveKind::ALL[rng.random_range(0..CurveKind::ALL.len())];
    let radius = config.radius_range.clone();
    match kind {
        CurveKind::Circle => Circle::new(rng.random_range(radius)).into(),
        CurveKind::Ellipse => {
            let radius_x = rng.random_range(radius.clone());
            let radius_y = rng.random_range(radius);
            Ellipse::new(radius_x, radius_y).into()
        }
        CurveKind::Helix => {
            let r = rng.random_range(radius);
            let step = rng.random_range(config.step_range.clone());
            Helix::new(r, step).into()
        }
    }
}
