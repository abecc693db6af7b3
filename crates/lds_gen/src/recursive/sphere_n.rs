//! Equal-area generators on the 3-sphere and the n-sphere.
//!
//! The polar angle of level `k` has density proportional to `sin^k`, so it
//! is drawn by inverting the cumulative measure table of dimension `k`.

use std::sync::Arc;

use lds_core::math::inversion::RadialInverter;
use lds_core::math::measure::MeasureTableCache;
use lds_core::traits::LowDiscrepancySequence;
use lds_core::types::LdsError;
use tracing::trace;

use super::scale_tail;
use crate::scalar::VdCorput;
use crate::surface::Sphere;

/// Low-discrepancy points on the unit 3-sphere `S^3`.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{LowDiscrepancySequence, Sphere3};
///
/// let mut sgen = Sphere3::new(&[2, 3, 5]).unwrap();
/// sgen.reseed(0);
/// let [x0, x1, x2, x3] = sgen.pop();
/// assert!((x0 * x0 + x1 * x1 + x2 * x2 + x3 * x3 - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Sphere3 {
    vdc: VdCorput,
    sphere: Sphere,
    inverter: RadialInverter,
}

impl Sphere3 {
    /// Creates a generator from `bases[0..3]` with a private measure cache.
    pub fn new(bases: &[u64]) -> Result<Self, LdsError> {
        Self::with_cache(bases, MeasureTableCache::shared())
    }

    /// Creates a generator reading its measure table from `cache`.
    ///
    /// # Errors
    ///
    /// - `LdsError::InsufficientBases` if `bases.len() < 3`
    /// - `LdsError::InvalidBase` for any consumed base below 2
    pub fn with_cache(bases: &[u64], cache: Arc<MeasureTableCache>) -> Result<Self, LdsError> {
        if bases.len() < 3 {
            return Err(LdsError::InsufficientBases {
                family: "Sphere3",
                got: bases.len(),
                need: 3,
            });
        }
        let vdc = VdCorput::new(bases[0])?;
        let sphere = Sphere::from_slice(&bases[1..3])?;
        let inverter = RadialInverter::new(cache.get(2)?);
        trace!(base = bases[0], "constructed 3-sphere generator");
        Ok(Self {
            vdc,
            sphere,
            inverter,
        })
    }
}

impl LowDiscrepancySequence for Sphere3 {
    type Output = [f64; 4];

    #[inline]
    fn dimension(&self) -> usize {
        4
    }

    fn pop(&mut self) -> [f64; 4] {
        let xi = self.inverter.angle_at(self.vdc.pop());
        let (sinxi, cosxi) = xi.sin_cos();
        let [s0, s1, s2] = self.sphere.pop();
        [sinxi * s0, sinxi * s1, sinxi * s2, cosxi]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.sphere.reseed(seed);
    }

    #[inline]
    fn index(&self) -> u64 {
        self.vdc.index()
    }
}

/// Lower level of a [`SphereN`] chain.
#[derive(Debug, Clone)]
enum SphereChild {
    Sphere(Sphere),
    SphereN(Box<SphereN>),
}

impl SphereChild {
    fn fill(&mut self, point: &mut Vec<f64>) {
        match self {
            SphereChild::Sphere(sphere) => point.extend_from_slice(&sphere.pop()),
            SphereChild::SphereN(sphere_n) => sphere_n.fill(point),
        }
    }

    fn reseed(&mut self, seed: u64) {
        match self {
            SphereChild::Sphere(sphere) => sphere.reseed(seed),
            SphereChild::SphereN(sphere_n) => sphere_n.reseed(seed),
        }
    }
}

/// Low-discrepancy points on the unit sphere `S^(k+1)`.
///
/// Level `k` draws its polar angle from the `sin^k` measure, scales the
/// level `k - 1` point by its sine and appends its cosine. The chain ends
/// at a 2-sphere [`Sphere`] when `k = 2`.
///
/// Every level's measure table is fetched when the generator is built, so
/// `pop` never touches the cache lock.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use lds_gen::{LowDiscrepancySequence, MeasureTableCache, SphereN};
///
/// let cache = MeasureTableCache::shared();
/// let mut a = SphereN::with_cache(3, &[2, 3, 5, 7], Arc::clone(&cache)).unwrap();
/// let mut b = SphereN::with_cache(4, &[2, 3, 5, 7, 11], Arc::clone(&cache)).unwrap();
///
/// assert_eq!(a.pop().len(), 5);
/// assert_eq!(b.pop().len(), 6);
/// assert!(cache.contains(2) && cache.contains(3) && cache.contains(4));
/// ```
#[derive(Debug, Clone)]
pub struct SphereN {
    vdc: VdCorput,
    child: SphereChild,
    inverter: RadialInverter,
    n: usize,
}

impl SphereN {
    /// Creates a level-`n` generator from `bases[..=n]` with a private
    /// measure cache shared by the whole chain.
    pub fn new(n: usize, bases: &[u64]) -> Result<Self, LdsError> {
        Self::with_cache(n, bases, MeasureTableCache::shared())
    }

    /// Creates a level-`n` generator reading measure tables from `cache`.
    ///
    /// # Errors
    ///
    /// - `LdsError::InvalidDimension` if `n < 2`
    /// - `LdsError::InsufficientBases` if `bases.len() < n + 1`
    /// - `LdsError::InvalidBase` for any consumed base below 2
    pub fn with_cache(
        n: usize,
        bases: &[u64],
        cache: Arc<MeasureTableCache>,
    ) -> Result<Self, LdsError> {
        if n < 2 {
            return Err(LdsError::InvalidDimension {
                family: "SphereN",
                dimension: n,
                min: 2,
            });
        }
        if bases.len() <= n {
            return Err(LdsError::InsufficientBases {
                family: "SphereN",
                got: bases.len(),
                need: n.saturating_add(1),
            });
        }
        let vdc = VdCorput::new(bases[0])?;
        let child = if n == 2 {
            SphereChild::Sphere(Sphere::from_slice(&bases[1..3])?)
        } else {
            SphereChild::SphereN(Box::new(SphereN::with_cache(
                n - 1,
                &bases[1..],
                Arc::clone(&cache),
            )?))
        };
        let inverter = RadialInverter::new(cache.get(n)?);
        trace!(level = n, base = bases[0], "constructed sphere level");
        Ok(Self {
            vdc,
            child,
            inverter,
            n,
        })
    }

    /// Recursion level `k`; points have `k + 2` coordinates.
    #[inline]
    pub fn level(&self) -> usize {
        self.n
    }

    fn fill(&mut self, point: &mut Vec<f64>) {
        let xi = self.inverter.angle_at(self.vdc.pop());
        let (sinphi, cosphi) = xi.sin_cos();
        let start = point.len();
        self.child.fill(point);
        scale_tail(point, start, sinphi);
        point.push(cosphi);
    }
}

impl LowDiscrepancySequence for SphereN {
    type Output = Vec<f64>;

    #[inline]
    fn dimension(&self) -> usize {
        self.n + 2
    }

    fn pop(&mut self) -> Vec<f64> {
        let mut point = Vec::with_capacity(self.n + 2);
        self.fill(&mut point);
        point
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.child.reseed(seed);
    }

    #[inline]
    fn index(&self) -> u64 {
        self.vdc.index()
    }
}
