//! Piecewise linear interpolation over a non-decreasing table.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Piecewise linear map through `(xs[i], ys[i])` knots.
///
/// Abscissae must be non-decreasing. Repeated abscissae are accepted so that
/// a cumulative table with plateaus can be used as an inverse lookup; a
/// query never lands on a zero-width segment.
///
/// Queries outside `[xs[0], xs[last]]` clamp to the matching end value, which
/// absorbs targets drifting a few ulps past a table edge.
///
/// # Example
///
/// ```
/// use lds_core::math::interpolators::{Interpolator, LinearInterpolator};
///
/// // Inverse of y = x^2 sampled on [0, 2]
/// let squares = [0.0, 1.0, 4.0];
/// let roots = [0.0, 1.0, 2.0];
///
/// let inverse = LinearInterpolator::new(&squares, &roots).unwrap();
/// assert_eq!(inverse.domain(), (0.0, 4.0));
/// assert_eq!(inverse.interpolate(2.5), 1.5);
/// assert_eq!(inverse.interpolate(-1.0), 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Float> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> LinearInterpolator<T> {
    /// Builds the interpolator from paired knot slices.
    ///
    /// Knots are taken in the order given and never sorted.
    ///
    /// # Errors
    ///
    /// - `InterpolationError::InvalidInput` if the slices differ in length or
    ///   an abscissa is NaN
    /// - `InterpolationError::InsufficientData` for fewer than 2 knots
    /// - `InterpolationError::NonMonotonicData` at the first `xs[i] < xs[i - 1]`
    ///
    /// ```
    /// use lds_core::math::interpolators::LinearInterpolator;
    /// use lds_core::types::InterpolationError;
    ///
    /// let result = LinearInterpolator::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]);
    /// assert_eq!(
    ///     result.unwrap_err(),
    ///     InterpolationError::NonMonotonicData { index: 2 }
    /// );
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "knot slices differ in length: {} abscissae, {} ordinates",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(InterpolationError::InsufficientData {
                got: xs.len(),
                need: 2,
            });
        }
        if let Some(index) = xs.iter().position(|x| x.is_nan()) {
            return Err(InterpolationError::InvalidInput(format!(
                "abscissa {} is NaN",
                index
            )));
        }
        if let Some(offset) = xs.windows(2).position(|w| w[1] < w[0]) {
            return Err(InterpolationError::NonMonotonicData { index: offset + 1 });
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Knot abscissae.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Knot ordinates.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false once constructed; provided alongside `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Index `i` of the segment with `xs[i] <= x < xs[i + 1]`, for `x`
    /// strictly inside the domain.
    #[inline]
    fn segment_of(&self, x: T) -> usize {
        let after = self.xs.partition_point(|&knot| knot <= x);
        after.saturating_sub(1).min(self.xs.len() - 2)
    }
}

impl<T: Float> Interpolator<T> for LinearInterpolator<T> {
    /// Clamped piecewise linear value at `x`; NaN passes through.
    fn interpolate(&self, x: T) -> T {
        if x.is_nan() {
            return x;
        }
        let last = self.xs.len() - 1;
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[last] {
            return self.ys[last];
        }

        let i = self.segment_of(x);
        let (x_lo, x_hi) = (self.xs[i], self.xs[i + 1]);
        let (y_lo, y_hi) = (self.ys[i], self.ys[i + 1]);
        y_lo + (y_hi - y_lo) * ((x - x_lo) / (x_hi - x_lo))
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_two_knots_is_smallest_table() {
        let table = LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());

        let empty: [f64; 0] = [];
        assert_eq!(
            LinearInterpolator::new(&empty, &empty).unwrap_err(),
            InterpolationError::InsufficientData { got: 0, need: 2 }
        );
        assert_eq!(
            LinearInterpolator::new(&[1.0], &[2.0]).unwrap_err(),
            InterpolationError::InsufficientData { got: 1, need: 2 }
        );
    }

    #[test]
    fn test_length_mismatch_is_invalid_input() {
        let err = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidInput(ref m) if m.contains("length")));
    }

    #[test]
    fn test_decreasing_knot_reports_its_index() {
        let err = LinearInterpolator::new(&[0.0, 1.0, 0.5, 2.0], &[0.0; 4]).unwrap_err();
        assert_eq!(err, InterpolationError::NonMonotonicData { index: 2 });
    }

    #[test]
    fn test_nan_knot_rejected() {
        let err = LinearInterpolator::new(&[0.0, f64::NAN], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, InterpolationError::InvalidInput(_)));
    }

    #[test]
    fn test_knots_kept_in_given_order() {
        let table = LinearInterpolator::new(&[0.0, 1.0, 2.0], &[5.0, 3.0, 1.0]).unwrap();
        assert_eq!(table.xs(), &[0.0, 1.0, 2.0]);
        assert_eq!(table.ys(), &[5.0, 3.0, 1.0]);
    }

    // ========================================
    // Evaluation
    // ========================================

    #[test]
    fn test_exact_at_knots() {
        let table = LinearInterpolator::new(&[0.0, 0.5, 2.0, 3.0], &[1.0, 3.0, -1.0, 0.0]).unwrap();
        for (&x, &y) in table.xs().iter().zip(table.ys()) {
            assert_abs_diff_eq!(table.interpolate(x), y, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_uneven_segments() {
        let table = LinearInterpolator::new(&[0.0, 0.1, 1.0, 10.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_abs_diff_eq!(table.interpolate(0.05), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(table.interpolate(0.55), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(table.interpolate(5.5), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_queries_outside_domain_clamp() {
        let table = LinearInterpolator::new(&[-1.0, 0.0, 1.0], &[0.0, 1.0, 4.0]).unwrap();
        assert_eq!(table.domain(), (-1.0, 1.0));
        assert_eq!(table.interpolate(-1.5), 0.0);
        assert_eq!(table.interpolate(1.0 + 1e-15), 4.0);
        assert_eq!(table.interpolate(f64::INFINITY), 4.0);
        assert_eq!(table.interpolate(f64::NEG_INFINITY), 0.0);
        assert!(table.interpolate(f64::NAN).is_nan());
    }

    #[test]
    fn test_plateau_never_divides_by_zero() {
        // Cumulative curve flat at x = 1 between ordinates 1 and 2
        let inverse =
            LinearInterpolator::new(&[0.0, 1.0, 1.0, 2.0], &[0.0, 1.0, 2.0, 3.0]).unwrap();
        assert_abs_diff_eq!(inverse.interpolate(0.5), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(inverse.interpolate(1.5), 2.5, epsilon = 1e-12);
        assert_eq!(inverse.interpolate(1.0), 2.0);
    }

    #[test]
    fn test_single_precision() {
        let table = LinearInterpolator::new(&[0.0_f32, 1.0, 2.0], &[0.0_f32, 2.0, 4.0]).unwrap();
        assert!((table.interpolate(1.25_f32) - 2.5_f32).abs() < 1e-6);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// A monotone table maps any query into its ordinate range,
        /// and larger queries never map lower.
        #[test]
        fn prop_monotone_table_stays_in_range(
            steps in proptest::collection::vec(0.0f64..1.0, 2..50),
            a in -1.0f64..60.0,
            b in -1.0f64..60.0,
        ) {
            let xs: Vec<f64> = steps
                .iter()
                .scan(0.0, |acc, s| {
                    *acc += s;
                    Some(*acc)
                })
                .collect();
            let ys: Vec<f64> = (0..xs.len()).map(|i| i as f64).collect();
            let table = LinearInterpolator::new(&xs, &ys).unwrap();

            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let (y_lo, y_hi) = (table.interpolate(lo), table.interpolate(hi));
            prop_assert!(y_lo >= 0.0 && y_hi <= (xs.len() - 1) as f64);
            prop_assert!(y_lo <= y_hi + 1e-12);
        }
    }
}
