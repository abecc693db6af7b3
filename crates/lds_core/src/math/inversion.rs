//! Inverse-transform lookup from cumulative measure to polar angle.
//!
//! Given a uniform scalar `u` in `[0, 1)`, [`RadialInverter::angle_at`]
//! returns the angle whose cumulative `sin^n` measure is the fraction `u` of
//! the total, i.e. a sample with density proportional to `sin^n(angle)`.

use std::sync::Arc;

use super::interpolators::Interpolator;
use super::measure::MeasureCurve;

/// Monotone inverse of a [`MeasureCurve`].
///
/// Holds the curve by `Arc` so recursive generators can share tables from a
/// common cache without copying them.
///
/// # Examples
///
/// ```rust
/// use lds_core::math::inversion::RadialInverter;
/// use lds_core::math::measure::MeasureTableCache;
///
/// let cache = MeasureTableCache::new();
/// let inverter = RadialInverter::new(cache.get(1).unwrap());
///
/// // For sin^1 the cumulative measure is 1 - cos(angle), so a target of 1
/// // sits at pi / 2
/// let angle = inverter.invert(1.0);
/// assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-4);
///
/// // Targets beyond the table are clamped to its endpoints
/// assert_eq!(inverter.invert(-5.0), 0.0);
/// assert_eq!(inverter.invert(5.0), std::f64::consts::PI);
/// ```
#[derive(Debug, Clone)]
pub struct RadialInverter {
    curve: Arc<MeasureCurve>,
    start: f64,
    range: f64,
}

impl RadialInverter {
    /// Wraps a cumulative-measure curve.
    pub fn new(curve: Arc<MeasureCurve>) -> Self {
        let start = curve.start();
        let range = curve.range();
        Self {
            curve,
            start,
            range,
        }
    }

    /// The underlying curve.
    #[inline]
    pub fn curve(&self) -> &Arc<MeasureCurve> {
        &self.curve
    }

    /// Dimension of the underlying curve.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.curve.dimension()
    }

    /// Angle in `[0, pi]` whose cumulative value equals `target`.
    ///
    /// Targets outside `[start, end]` of the curve are clamped to the nearest
    /// grid endpoint.
    #[inline]
    pub fn invert(&self, target: f64) -> f64 {
        self.curve.inverse().interpolate(target)
    }

    /// Angle for a uniform fraction `u` of the total measure.
    ///
    /// Maps `u` to `start + range * u` and inverts it.
    #[inline]
    pub fn angle_at(&self, u: f64) -> f64 {
        self.invert(self.start + self.range * u)
    }
}
