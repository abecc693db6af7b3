//! Interpolator trait.

use num_traits::Float;

/// One-dimensional interpolation over sampled data.
///
/// Implementors are generic over `T: Float` so the same table can be
/// evaluated in `f32` or `f64`.
pub trait Interpolator<T: Float> {
    /// Interpolated value at `x`.
    ///
    /// Queries outside [`domain`](Interpolator::domain) return the value at
    /// the nearest endpoint.
    fn interpolate(&self, x: T) -> T;

    /// The sampled range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
