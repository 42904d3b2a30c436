//! Summary of one program run.

use std::fmt;
use std::time::Duration;

use pcurve_collection::ExecutionPolicy;
use serde::Serialize;

/// Sum of radii computed under one execution policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SumTiming {
    pub policy: ExecutionPolicy,
    pub sum: f64,
    pub micros: u128,
}

impl SumTiming {
    pub fn new(policy: ExecutionPolicy, sum: f64, elapsed: Duration) -> Self {
        Self {
            policy,
            sum,
            micros: elapsed.as_micros(),
        }
    }
}

impl fmt::Display for SumTiming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match self.policy {
            ExecutionPolicy::Sequenced => "sequenced",
            ExecutionPolicy::Parallel => "parallel",
        };
        write!(
            f,
            "sum = {}, {} solution time (microseconds): {}",
            self.sum, mode, self.micros
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub curves: usize,
    pub circles: usize,
    pub min_radius: Option<f64>,
    pub max_radius: Option<f64>,
    pub sums: Vec<SumTiming>,
    pub sums_agree: bool,
}
