//! Runtime-selected generator produced by [`SamplerConfig`](crate::SamplerConfig).

use lds_core::traits::LowDiscrepancySequence;

use crate::halton::HaltonN;
use crate::recursive::{CylinN, SphereN};

/// A generator of any configurable family, with `Vec<f64>` points.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{HaltonN, LowDiscrepancySequence, Sampler};
///
/// let mut sampler = Sampler::from(HaltonN::new(2, &[2, 3]).unwrap());
/// assert_eq!(sampler.pop(), vec![0.5, 0.3333333333333333]);
/// ```
#[derive(Debug, Clone)]
pub enum Sampler {
    /// Box sampling.
    Halton(HaltonN),
    /// Cylindrical-projection sphere sampling.
    Cylinder(CylinN),
    /// Equal-area sphere sampling.
    Sphere(SphereN),
}

impl LowDiscrepancySequence for Sampler {
    type Output = Vec<f64>;

    fn dimension(&self) -> usize {
        match self {
            Sampler::Halton(g) => g.dimension(),
            Sampler::Cylinder(g) => g.dimension(),
            Sampler::Sphere(g) => g.dimension(),
        }
    }

    fn pop(&mut self) -> Vec<f64> {
        match self {
            Sampler::Halton(g) => g.pop(),
            Sampler::Cylinder(g) => g.pop(),
            Sampler::Sphere(g) => g.pop(),
        }
    }

    fn reseed(&mut self, seed: u64) {
        match self {
            Sampler::Halton(g) => g.reseed(seed),
            Sampler::Cylinder(g) => g.reseed(seed),
            Sampler::Sphere(g) => g.reseed(seed),
        }
    }

    fn index(&self) -> u64 {
        match self {
            Sampler::Halton(g) => g.index(),
            Sampler::Cylinder(g) => g.index(),
            Sampler::Sphere(g) => g.index(),
        }
    }
}

impl From<HaltonN> for Sampler {
    fn from(g: HaltonN) -> Self {
        Sampler::Halton(g)
    }
}

impl From<CylinN> for Sampler {
    fn from(g: CylinN) -> Self {
        Sampler::Cylinder(g)
    }
}

impl From<SphereN> for Sampler {
    fn from(g: SphereN) -> Self {
        Sampler::Sphere(g)
    }
}
