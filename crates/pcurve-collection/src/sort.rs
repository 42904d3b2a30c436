//! Ordering of circles by radius.

use std::sync::Arc;

use pcurve_geometry::Circle;

/// Sort `circles` in place by ascending radius.
///
/// The sort is unstable: circles of equal radius may swap places. Radii are
/// compared with [`f64::total_cmp`], which puts NaN radii after every
/// finite radius (or before, for NaN with the sign bit set).
pub fn sort_by_radius(circles: &mut [Arc<Circle>]) {
    circles.sort_unstable_by(|lhs, rhs| lhs.get_radius().total_cmp(&rhs.get_radius()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circles(radii: &[f64]) -> Vec<Arc<Circle>> {
        radii.iter().map(|&r| Arc::new(Circle::new(r))).collect()
    }

    fn radii(circles: &[Arc<Circle>]) -> Vec<f64> {
        circles.iter().map(|c| c.get_radius()).collect()
    }

    #[test]
    fn test_sort_by_radius() {
        let mut v = circles(&[3.0, 1.0, 2.0]);
        sort_by_radius(&mut v);
        assert_eq!(radii(&v), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_sort_sorted_is_noop() {
        let mut v = circles(&[0.5, 0.5, 1.0, 7.0]);
        sort_by_radius(&mut v);
        assert_eq!(radii(&v), vec![0.5, 0.5, 1.0, 7.0]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let mut empty: Vec<Arc<Circle>> = Vec::new();
        sort_by_radius(&mut empty);
        assert!(empty.is_empty());

        let mut single = circles(&[4.0]);
        sort_by_radius(&mut single);
        assert_eq!(radii(&single), vec![4.0]);
    }

    #[test]
    fn test_sort_nan_goes_last() {
        let mut v = circles(&[2.0, f64::NAN, -1.0, 0.0]);
        sort_by_radius(&mut v);
        let r = radii(&v);
        assert_eq!(&r[..3], &[-1.0, 0.0, 2.0]);
        assert!(r[3].is_nan());
    }

    #[test]
    fn test_sort_moves_handles_not_instances() {
        let a = Arc::new(Circle::new(9.0));
        let b = Arc::new(Circle::new(1.0));
        let mut v = vec![Arc::clone(&a), Arc::clone(&b)];
        sort_by_radius(&mut v);
        assert!(Arc::ptr_eq(&v[0], &b));
        assert!(Arc::ptr_eq(&v[1], &a));
    }
}
