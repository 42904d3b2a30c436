//! Property-based tests for the filter/sort/reduce pipeline.

use std::sync::Arc;

use proptest::prelude::*;

use pcurve_collection::{
    filter_circles, generate_curves, sort_by_radius, sum_of_radii, ExecutionPolicy,
    GeneratorConfig,
};
use pcurve_core::Tolerance;
use pcurve_geometry::{AnyCurve, Circle, Ellipse, Helix};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_curve() -> impl Strategy<Value = AnyCurve> {
    prop_oneof![
        (0.1f64..100.0).prop_map(|r| AnyCurve::from(Circle::new(r))),
        (0.1f64..100.0, 0.1f64..100.0).prop_map(|(rx, ry)| AnyCurve::from(Ellipse::new(rx, ry))),
        (0.1f64..100.0, 0.1f64..20.0).prop_map(|(r, s)| AnyCurve::from(Helix::new(r, s))),
    ]
}

fn arb_curves() -> impl Strategy<Value = Vec<AnyCurve>> {
    prop::collection::vec(arb_curve(), 0..200)
}

fn radii(circles: &[Arc<Circle>]) -> Vec<f64> {
    circles.iter().map(|c| c.get_radius()).collect()
}

fn as_curves(circles: &[Arc<Circle>]) -> Vec<AnyCurve> {
    circles.iter().cloned().map(AnyCurve::from).collect()
}

// ---------------------------------------------------------------------------
// 1. Filtering is idempotent, counts circles and aliases its input
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn filter_is_idempotent(curves in arb_curves()) {
        let once = filter_circles(&curves);
        let twice = filter_circles(&as_curves(&once));
        prop_assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(&twice) {
            prop_assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn filter_counts_and_aliases_circles(curves in arb_curves()) {
        let circles = filter_circles(&curves);
        let expected = curves.iter().filter(|c| c.as_circle().is_some()).count();
        prop_assert_eq!(circles.len(), expected);
        for circle in &circles {
            prop_assert!(curves
                .iter()
                .filter_map(AnyCurve::as_circle)
                .any(|source| Arc::ptr_eq(source, circle)));
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Sorting yields non-decreasing radii and is stable under repetition
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn sort_is_non_decreasing(curves in arb_curves()) {
        let mut circles = filter_circles(&curves);
        sort_by_radius(&mut circles);
        let r = radii(&circles);
        prop_assert!(r.windows(2).all(|w| w[0] <= w[1]));

        sort_by_radius(&mut circles);
        prop_assert_eq!(radii(&circles), r);
    }
}

// ---------------------------------------------------------------------------
// 3. Sequential and parallel sums agree up to reassociation error
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn sequential_and_parallel_sums_agree(curves in arb_curves()) {
        let circles = filter_circles(&curves);
        let seq = sum_of_radii(&circles, ExecutionPolicy::Sequenced);
        let par = sum_of_radii(&circles, ExecutionPolicy::Parallel);
        prop_assert!(
            Tolerance::reduction(circles.len()).relative_eq(seq, par),
            "sequential {} vs parallel {}", seq, par
        );
    }
}

#[test]
fn large_generated_collection_sums_agree() {
    let curves = generate_curves(&GeneratorConfig::with_count(200_000).seeded(2024)).unwrap();
    let mut circles = filter_circles(&curves);
    sort_by_radius(&mut circles);

    let seq = sum_of_radii(&circles, ExecutionPolicy::Sequenced);
    let par = sum_of_radii(&circles, ExecutionPolicy::Parallel);
    assert!(!circles.is_empty());
    assert!(
        Tolerance::reduction(circles.len()).relative_eq(seq, par),
        "sequential {} vs parallel {}",
        seq,
        par
    );
}

#[test]
fn three_circle_scenario() {
    let curves: Vec<AnyCurve> = vec![
        Circle::new(3.0).into(),
        Helix::new(5.0, 1.0).into(),
        Circle::new(1.0).into(),
        Ellipse::new(4.0, 6.0).into(),
        Circle::new(2.0).into(),
    ];
    let mut circles = filter_circles(&curves);
    sort_by_radius(&mut circles);
    assert_eq!(radii(&circles), vec![1.0, 2.0, 3.0]);

    assert_eq!(sum_of_radii(&circles, ExecutionPolicy::Sequenced), 6.0);
    let par = sum_of_radii(&circles, ExecutionPolicy::Parallel);
    assert!((par - 6.0).abs() <= f64::EPSILON * 6.0);
}
