//! Base surface generators.
//!
//! - [`Circle`]: points on the unit circle from one van der Corput sequence
//! - [`Sphere`]: points on the unit 2-sphere by cylindrical (Archimedes)
//!   projection of a circle point
//!
//! These terminate the recursive chains in [`crate::recursive`].

mod circle;
mod sphere;

pub use circle::Circle;
pub use sphere::Sphere;
