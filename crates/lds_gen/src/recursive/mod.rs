//! Recursive generators on n-cylinders and n-spheres.
//!
//! Each level owns one van der Corput sequence that fixes the polar angle of
//! the last coordinate, and a child generator one dimension lower whose point
//! is scaled by the sine of that angle. The chain bottoms out at a
//! [`Circle`](crate::surface::Circle) or [`Sphere`](crate::surface::Sphere).
//!
//! | Generator | Polar angle | Terminal | Coordinates | Bases |
//! |-----------|-------------|----------|-------------|-------|
//! | [`CylinN`] `(k)` | `acos(2u - 1)` | Circle | `k + 2` | `k + 1` |
//! | [`SphereN`] `(k)` | inverse `sin^k` measure | Sphere | `k + 2` | `k + 1` |
//! | [`Sphere3`] | inverse `sin^2` measure | Sphere | 4 | 3 |
//!
//! Children are held in enums so the whole chain is statically dispatched.

mod cylinder;
mod sphere_n;

pub use cylinder::CylinN;
pub use sphere_n::{Sphere3, SphereN};

/// Scales every coordinate written after `start` by `factor`.
#[inline]
fn scale_tail(point: &mut [f64], start: usize, factor: f64) {
    for x in &mut point[start..] {
        *x *= factor;
    }
}
