//! Summation of circle radii, sequentially or in parallel.
//!
//! Both strategies add the same terms with `+` starting from `0.0`. They may
//! group the additions differently, so results can differ in the last bits.

use std::sync::Arc;

use pcurve_geometry::Circle;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of circles summed by one parallel task.
const PARALLEL_CHUNK_LEN: usize = 4096;

/// How [`sum_of_radii`] schedules its work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExecutionPolicy {
    /// Left-to-right fold on the calling thread.
    #[default]
    Sequenced,
    /// Per-chunk partial sums on the rayon pool, combined pairwise.
    Parallel,
}

/// Sum the radii of `circles` under `policy`.
///
/// Returns `0.0` for an empty slice. Blocks until the sum is complete.
#[instrument(skip(circles), fields(len = circles.len()))]
pub fn sum_of_radii(circles: &[Arc<Circle>], policy: ExecutionPolicy) -> f64 {
    match policy {
        ExecutionPolicy::Sequenced => sum_of_radii_sequenced(circles),
        ExecutionPolicy::Parallel => sum_of_radii_parallel(circles),
    }
}

pub fn sum_of_radii_sequenced(circles: &[Arc<Circle>]) -> f64 {
    circles.iter().fold(0.0, |acc, circle| acc + circle.get_radius())
}

/// Each worker folds a contiguous chunk into a private partial sum;
/// the partial sums are then combined by rayon's reduction tree.
pub fn sum_of_radii_parallel(circles: &[Arc<Circle>]) -> f64 {
    circles
        .par_chunks(PARALLEL_CHUNK_LEN)
        .map(sum_of_radii_sequenced)
        .reduce(|| 0.0, |lhs, rhs| lhs + rhs)
}
