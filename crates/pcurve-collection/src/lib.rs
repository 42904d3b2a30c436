//! Operations over heterogeneous sequences of shared curves.
//!
//! A caller composes these independently: [`filter_circles`] projects the
//! circles out of a mixed sequence, [`sort_by_radius`] orders them and
//! [`sum_of_radii`] reduces their radii under an [`ExecutionPolicy`].

pub mod evaluate;
pub mod filter;
pub mod generate;
pub mod reduce;
pub mod sort;

pub use evaluate::{evaluate_all, Evaluation, DEFAULT_EVAL_PARAMETER};
pub use filter::filter_circles;
pub use generate::{generate_curves, GeneratorConfig};
pub use reduce::{sum_of_radii, sum_of_radii_parallel, sum_of_radii_sequenced, ExecutionPolicy};
pub use sort::sort_by_radius;
