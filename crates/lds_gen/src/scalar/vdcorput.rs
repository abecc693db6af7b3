//! Normalised van der Corput sequence.

use lds_core::traits::LowDiscrepancySequence;
use lds_core::types::LdsError;

use super::validate_base;

/// Digit reversal of `k` in `base`, as a fraction in `[0, 1)`.
///
/// Digits are accumulated least significant first as `digit / base^position`,
/// so results are bit-for-bit reproducible (e.g. index 6 in base 5 gives
/// `0.2 + 0.04 = 0.24000000000000002`).
///
/// # Panics
///
/// Panics if `base < 2`, since the digit expansion would not terminate.
/// [`VdCorput::new`] rejects such bases with an error instead.
///
/// # Examples
///
/// ```
/// use lds_gen::vdc;
///
/// assert_eq!(vdc(1, 2), 0.5);
/// assert_eq!(vdc(11, 2), 0.8125);
/// assert_eq!(vdc(6, 5), 0.24000000000000002);
/// ```
pub fn vdc(k: u64, base: u64) -> f64 {
    assert!(base >= 2, "vdc base must be at least 2, got {}", base);
    let mut k = k;
    let mut res = 0.0;
    let mut denom = 1.0;
    let b = base as f64;
    while k != 0 {
        denom *= b;
        let remainder = k % base;
        k /= base;
        res += remainder as f64 / denom;
    }
    res
}

/// Van der Corput sequence generator with `f64` output.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{LowDiscrepancySequence, VdCorput};
///
/// let mut vgen = VdCorput::new(2).unwrap();
/// vgen.reseed(0);
/// assert_eq!(vgen.take_points(4), vec![0.5, 0.25, 0.75, 0.125]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VdCorput {
    base: u64,
    count: u64,
}

impl VdCorput {
    /// Creates a generator for `base`, starting at index 0.
    ///
    /// # Errors
    ///
    /// Returns `LdsError::InvalidBase` if `base < 2`.
    pub fn new(base: u64) -> Result<Self, LdsError> {
        Ok(Self {
            base: validate_base(base)?,
            count: 0,
        })
    }

    /// The digit-reversal base.
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }
}

impl LowDiscrepancySequence for VdCorput {
    type Output = f64;

    #[inline]
    fn dimension(&self) -> usize {
        1
    }

    #[inline]
    fn pop(&mut self) -> f64 {
        self.count = self.count.wrapping_add(1);
        vdc(self.count, self.base)
    }

    #[inline]
    fn reseed(&mut self, seed: u64) {
        self.count = seed;
    }

    #[inline]
    fn index(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vdc_zero_index() {
        assert_eq!(vdc(0, 2), 0.0);
        assert_eq!(vdc(0, 7), 0.0);
    }

    #[test]
    fn test_vdc_base_two_prefix() {
        let values: Vec<f64> = (1..=10).map(|k| vdc(k, 2)).collect();
        assert_eq!(
            values,
            vec![0.5, 0.25, 0.75, 0.125, 0.625, 0.375, 0.875, 0.0625, 0.5625, 0.3125]
        );
    }

    #[test]
    fn test_vdc_base_three_prefix() {
        let values: Vec<f64> = (1..=4).map(|k| vdc(k, 3)).collect();
        assert_eq!(
            values,
            vec![
                0.3333333333333333,
                0.6666666666666666,
                0.1111111111111111,
                0.4444444444444444
            ]
        );
    }

    #[test]
    fn test_new_rejects_degenerate_base() {
        assert_eq!(VdCorput::new(1), Err(LdsError::InvalidBase { base: 1 }));
        assert_eq!(VdCorput::new(0), Err(LdsError::InvalidBase { base: 0 }));
    }

    #[test]
    fn test_pop_advances_index() {
        let mut vgen = VdCorput::new(3).unwrap();
        assert_eq!(vgen.index(), 0);
        vgen.pop();
        vgen.pop();
        assert_eq!(vgen.index(), 2);
        assert_eq!(vgen.base(), 3);
        assert_eq!(vgen.dimension(), 1);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut vgen = VdCorput::new(5).unwrap();
        let first: Vec<f64> = vgen.take_points(8);
        vgen.reseed(0);
        assert_eq!(vgen.take_points(8), first);

        vgen.reseed(3);
        assert_eq!(vgen.pop(), vdc(4, 5));
    }

    #[test]
    fn test_skip_matches_reseed() {
        let mut a = VdCorput::new(2).unwrap();
        let mut b = VdCorput::new(2).unwrap();
        a.pop();
        a.skip(5);
        b.reseed(6);
        assert_eq!(a.pop(), b.pop());
    }

    #[test]
    fn test_pop_wraps_after_last_index() {
        let mut vgen = VdCorput::new(2).unwrap();
        vgen.reseed(u64::MAX);
        assert_eq!(vgen.pop(), vdc(0, 2));
        assert_eq!(vgen.index(), 0);
        assert_eq!(vgen.pop(), vdc(1, 2));
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn test_vdc_panics_on_degenerate_base() {
        vdc(5, 1);
    }

    #[test]
    fn test_values_in_unit_interval() {
        let mut vgen = VdCorput::new(7).unwrap();
        for _ in 0..2000 {
            let v = vgen.pop();
            assert!((0.0..1.0).contains(&v), "value {} out of [0, 1)", v);
        }
    }
}
