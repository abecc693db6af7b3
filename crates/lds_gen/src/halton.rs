//! Halton sequences: independent van der Corput sequences, one per axis.
//!
//! - [`Halton`]: 2-D, normalised `f64` output
//! - [`HaltonN`]: n-D, normalised `f64` output
//! - [`IntHalton`]: 2-D, fixed-point `u64` output

use lds_core::traits::LowDiscrepancySequence;
use lds_core::types::LdsError;

use crate::scalar::{IntVdCorput, VdCorput};

/// 2-D Halton sequence generator.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{Halton, LowDiscrepancySequence};
///
/// let mut hgen = Halton::new([2, 3]).unwrap();
/// hgen.reseed(0);
/// assert_eq!(hgen.pop(), [0.5, 0.3333333333333333]);
/// ```
#[derive(Debug, Clone)]
pub struct Halton {
    vdc0: VdCorput,
    vdc1: VdCorput,
}

impl Halton {
    /// Creates a generator with one base per axis.
    pub fn new(base: [u64; 2]) -> Result<Self, LdsError> {
        Ok(Self {
            vdc0: VdCorput::new(base[0])?,
            vdc1: VdCorput::new(base[1])?,
        })
    }
}

impl LowDiscrepancySequence for Halton {
    type Output = [f64; 2];

    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [f64; 2] {
        [self.vdc0.pop(), self.vdc1.pop()]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc0.reseed(seed);
        self.vdc1.reseed(seed);
    }

    fn index(&self) -> u64 {
        self.vdc0.index()
    }
}

/// n-D Halton sequence generator for box sampling.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{HaltonN, LowDiscrepancySequence};
///
/// let mut hgen = HaltonN::new(3, &[2, 3, 5]).unwrap();
/// hgen.reseed(0);
/// assert_eq!(hgen.pop(), vec![0.5, 0.3333333333333333, 0.2]);
/// ```
#[derive(Debug, Clone)]
pub struct HaltonN {
    vdcs: Vec<VdCorput>,
}

impl HaltonN {
    /// Creates an `n`-axis generator from the first `n` entries of `bases`.
    ///
    /// # Errors
    ///
    /// - `LdsError::InvalidDimension` if `n == 0`
    /// - `LdsError::InsufficientBases` if `bases.len() < n`
    /// - `LdsError::InvalidBase` for any base below 2
    pub fn new(n: usize, bases: &[u64]) -> Result<Self, LdsError> {
        if n == 0 {
            return Err(LdsError::InvalidDimension {
                family: "HaltonN",
                dimension: n,
                min: 1,
            });
        }
        if bases.len() < n {
            return Err(LdsError::InsufficientBases {
                family: "HaltonN",
                got: bases.len(),
                need: n,
            });
        }
        let vdcs = bases[..n]
            .iter()
            .map(|&b| VdCorput::new(b))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { vdcs })
    }
}

impl LowDiscrepancySequence for HaltonN {
    type Output = Vec<f64>;

    fn dimension(&self) -> usize {
        self.vdcs.len()
    }

    fn pop(&mut self) -> Vec<f64> {
        self.vdcs.iter_mut().map(|vdc| vdc.pop()).collect()
    }

    fn reseed(&mut self, seed: u64) {
        for vdc in &mut self.vdcs {
            vdc.reseed(seed);
        }
    }

    fn index(&self) -> u64 {
        self.vdcs[0].index()
    }
}

/// 2-D Halton sequence generator with fixed-point output.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{IntHalton, LowDiscrepancySequence};
///
/// let mut hgen = IntHalton::new([2, 3], [11, 7]).unwrap();
/// hgen.reseed(0);
/// assert_eq!(hgen.pop(), [1024, 729]);
/// ```
#[derive(Debug, Clone)]
pub struct IntHalton {
    vdc0: IntVdCorput,
    vdc1: IntVdCorput,
}

impl IntHalton {
    /// Creates a generator with one base and one scale per axis.
    pub fn new(base: [u64; 2], scale: [u32; 2]) -> Result<Self, LdsError> {
        Ok(Self {
            vdc0: IntVdCorput::new(base[0], scale[0])?,
            vdc1: IntVdCorput::new(base[1], scale[1])?,
        })
    }
}

impl LowDiscrepancySequence for IntHalton {
    type Output = [u64; 2];

    fn dimension(&self) -> usize {
        2
    }

    fn pop(&mut self) -> [u64; 2] {
        [self.vdc0.pop(), self.vdc1.pop()]
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc0.reseed(seed);
        self.vdc1.reseed(seed);
    }

    fn index(&self) -> u64 {
        self.vdc0.index()
    }
}
