//! Unit circle generator.

use std::f64::consts::TAU;

use lds_core::traits::LowDiscrepancySequence;
use lds_core::types::LdsError;

use crate::scalar::VdCorput;

/// Low-discrepancy points on the unit circle.
///
/// The angle is `2π·u` for the van der Corput value `u`, and the point is
/// `[sin θ, cos θ]`.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{Circle, LowDiscrepancySequence};
///
/// let mut cgen = Circle::new(2).unwrap();
/// cgen.reseed(0);
/// let [x, y] = cgen.pop();
/// assert!(x.abs() < 1e-15);
/// assert_eq!(y, -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct Circle {
    vdc: VdCorput,
}

impl Circle {
    /// Creates a circle generator for `base`.
    pub fn new(base: u64) -> Result<Self, LdsError> {
        Ok(Self {
            vdc: VdCorput::new(base)?,
        })
    }
}

impl LowDiscrepancySequence for Circle {
    type Output = [f64; 2];

    #[inline]
    fn dimension(&self) -> usize {
        2
    }

    #[inline]
    fn pop(&mut self) -> [f64; 2] {
        let theta = TAU * self.vdc.pop();
        [theta.sin(), theta.cos()]
    }

    #[inline]
    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
    }

    #[inline]
    fn index(&self) -> u64 {
        self.vdc.index()
    }
}
