//! Table lookup by interpolation.
//!
//! [`LinearInterpolator`] is the only implementation of the [`Interpolator`]
//! trait; measure curves use it with the cumulative values as abscissae to
//! turn a target measure back into an angle.
//!
//! ```
//! use lds_core::math::interpolators::{Interpolator, LinearInterpolator};
//!
//! // Cumulative counts 0, 1, 4, 9 reached at positions 0..=3
//! let cumulative = [0.0, 1.0, 4.0, 9.0];
//! let position = [0.0, 1.0, 2.0, 3.0];
//!
//! let lookup = LinearInterpolator::new(&cumulative, &position).unwrap();
//! assert_eq!(lookup.interpolate(2.5), 1.5);
//! assert_eq!(lookup.interpolate(10.0), 3.0);
//! ```

mod linear;
mod traits;

pub use linear::LinearInterpolator;
pub use traits::Interpolator;
