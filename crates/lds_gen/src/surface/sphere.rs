//! Unit 2-sphere generator.

use lds_core::traits::LowDiscrepancySequence;
use lds_core::types::LdsError;

use super::Circle;
use crate::scalar::VdCorput;

/// Low-discrepancy points on the unit 2-sphere.
///
/// The height `cosphi = 2u - 1` is drawn from `base[0]` and the circle point
/// from `base[1]`; by Archimedes' hat-box theorem a uniform height gives a
/// uniform surface density.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{LowDiscrepancySequence, Sphere};
///
/// let mut sgen = Sphere::new([2, 3]).unwrap();
/// sgen.reseed(0);
/// let [x, y, z] = sgen.pop();
/// assert_eq!(z, 0.0);
/// assert!((x * x + y * y + z * z - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Sphere {
    vdc: VdCorput,
    circle: Circle,
}

impl Sphere {
    /// Creates a sphere generator with a height base and a circle base.
    pub fn new(base: [u64; 2]) -> Result<Self, LdsError> {
        Ok(Self {
            vdc: VdCorput::new(base[0])?,
            circle: Circle::new(base[1])?,
        })
    }

    /// Creates a sphere generator from the first two entries of `bases`.
    pub(crate) fn from_slice(bases: &[u64]) -> Result<Self, LdsError> {
        match bases {
            [b0, b1, ..] => Self::new([*b0, *b1]),
            _ => Err(LdsError::InsufficientBases {
                family: "Sphere",
                got: bases.len(),
                need: 2,
            }),
        }
    }
}

impl LowDiscrepancySequence for Sphere {
    type Output = [f64; 3];

    #[inline]
    fn dimension(&self) -> usize {
        3
    }

    fn pop(&mut self) -> [f64; 3] {
        let cosphi = 2.0 * self.vdc.pop() - 1.0;
        let sinphi = (1.0 - cosphi * cosphi).sqrt();
        let [c0, c1] = self.circle.pop();
        [sinphi * c0, sinphi * c1, cosphi]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.circle.reseed(seed);
    }

    #[inline]
    fn index(&self) -> u64 {
        self.vdc.index()
    }
}
