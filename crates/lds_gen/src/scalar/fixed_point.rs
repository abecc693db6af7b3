//! Fixed-point (integer) van der Corput sequence.
//!
//! Values are the digit reversal of the index scaled by `base^scale`, so the
//! output is an exact integer in `[0, base^scale)`. Digits beyond position
//! `scale` fall below the fixed-point resolution and are dropped.

use lds_core::traits::LowDiscrepancySequence;
use lds_core::types::LdsError;

use super::validate_base;

/// Default number of base digits of fixed-point precision.
pub const DEFAULT_SCALE: u32 = 10;

/// Fixed-point digit reversal of `k` in `base` with `scale` digits.
///
/// # Panics
///
/// Panics if `base < 2` or if `base^scale` does not fit in a `u64`.
/// [`IntVdCorput::new`] reports both as errors instead.
///
/// # Examples
///
/// ```
/// use lds_gen::vdc_i;
///
/// assert_eq!(vdc_i(1, 2, 10), 512);
/// assert_eq!(vdc_i(11, 2, 10), 832);
/// assert_eq!(vdc_i(1, 3, 7), 729);
/// ```
pub fn vdc_i(k: u64, base: u64, scale: u32) -> u64 {
    assert!(base >= 2, "vdc_i base must be at least 2, got {}", base);
    let full_scale = base
        .checked_pow(scale)
        .unwrap_or_else(|| panic!("vdc_i scale overflow: {}^{} exceeds u64", base, scale));
    reverse_digits(k, base, full_scale)
}

fn reverse_digits(k: u64, base: u64, full_scale: u64) -> u64 {
    let mut k = k;
    let mut factor = full_scale;
    let mut vdc = 0;
    while k != 0 {
        factor /= base;
        let remainder = k % base;
        k /= base;
        vdc += remainder * factor;
    }
    vdc
}

/// Van der Corput sequence generator with fixed-point `u64` output.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{IntVdCorput, LowDiscrepancySequence};
///
/// let mut vgen = IntVdCorput::new(2, 10).unwrap();
/// vgen.reseed(0);
/// assert_eq!(vgen.pop(), 512);
/// assert_eq!(vgen.pop(), 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntVdCorput {
    base: u64,
    scale: u32,
    full_scale: u64,
    count: u64,
}

impl IntVdCorput {
    /// Creates a generator for `base` with `scale` digits of precision.
    ///
    /// # Errors
    ///
    /// - `LdsError::InvalidBase` if `base < 2`
    /// - `LdsError::InvalidParameter` if `scale` is 0
    /// - `LdsError::ScaleOverflow` if `base^scale` does not fit in a `u64`
    pub fn new(base: u64, scale: u32) -> Result<Self, LdsError> {
        let base = validate_base(base)?;
        if scale == 0 {
            return Err(LdsError::InvalidParameter {
                name: "scale",
                value: "must be at least 1".to_string(),
            });
        }
        let full_scale = base
            .checked_pow(scale)
            .ok_or(LdsError::ScaleOverflow { base, scale })?;
        Ok(Self {
            base,
            scale,
            full_scale,
            count: 0,
        })
    }

    /// Creates a generator with [`DEFAULT_SCALE`] digits.
    pub fn with_default_scale(base: u64) -> Result<Self, LdsError> {
        Self::new(base, DEFAULT_SCALE)
    }

    /// The digit-reversal base.
    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Digits of precision.
    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// `base^scale`, the exclusive upper bound of every output.
    #[inline]
    pub fn full_scale(&self) -> u64 {
        self.full_scale
    }
}

impl LowDiscrepancySequence for IntVdCorput {
    type Output = u64;

    #[inline]
    fn dimension(&self) -> usize {
        1
    }

    #[inline]
    fn pop(&mut self) -> u64 {
        self.count = self.count.wrapping_add(1);
        reverse_digits(self.count, self.base, self.full_scale)
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
    fn test_vdc_i_reference_value() {
        assert_eq!(vdc_i(1, 2, 10), 512);
    }

    #[test]
    fn test_vdc_i_zero_index() {
        assert_eq!(vdc_i(0, 2, 10), 0);
    }

    #[test]
    fn test_vdc_i_digits_beyond_scale_are_dropped() {
        // 1024 = 1 followed by ten zeros in base 2: the only set digit is
        // below the 10-digit resolution
        assert_eq!(vdc_i(1024, 2, 10), 0);
        assert_eq!(vdc_i(1025, 2, 10), 512);
    }

    #[test]
    fn test_vdc_i_matches_float_variant() {
        for k in 1..200u64 {
            let fixed = vdc_i(k, 3, 7) as f64 / 3f64.powi(7);
            let float = crate::scalar::vdc(k, 3);
            assert!((fixed - float).abs() < 1e-12, "k = {}", k);
        }
    }

    #[test]
    fn test_new_validation() {
        assert_eq!(
            IntVdCorput::new(1, 10),
            Err(LdsError::InvalidBase { base: 1 })
        );
        assert_eq!(
            IntVdCorput::new(10, 20),
            Err(LdsError::ScaleOverflow { base: 10, scale: 20 })
        );
        assert!(matches!(
            IntVdCorput::new(2, 0),
            Err(LdsError::InvalidParameter { name: "scale", .. })
        ));
        assert!(IntVdCorput::new(2, 63).is_ok());
        assert!(IntVdCorput::new(2, 64).is_err());
    }

    #[test]
    fn test_default_scale() {
        let vgen = IntVdCorput::with_default_scale(3).unwrap();
        assert_eq!(vgen.scale(), DEFAULT_SCALE);
        assert_eq!(vgen.full_scale(), 59_049);
        assert_eq!(vgen.base(), 3);
    }

    #[test]
    fn test_pop_sequence_base_two() {
        let mut vgen = IntVdCorput::new(2, 11).unwrap();
        vgen.reseed(0);
        assert_eq!(vgen.take_points(5), vec![1024, 512, 1536, 256, 1280]);
        assert_eq!(vgen.index(), 5);
    }

    #[test]
    fn test_pop_wraps_after_last_index() {
        let mut vgen = IntVdCorput::new(3, 7).unwrap();
        vgen.reseed(u64::MAX);
        assert_eq!(vgen.pop(), vdc_i(0, 3, 7));
        assert_eq!(vgen.index(), 0);
        assert_eq!(vgen.pop(), vdc_i(1, 3, 7));
    }

    #[test]
    #[should_panic(expected = "scale overflow")]
    fn test_vdc_i_panics_on_scale_overflow() {
        vdc_i(1, 10, 20);
    }

    #[test]
    #[should_panic(expected = "at least 2")]
    fn test_vdc_i_panics_on_degenerate_base() {
        vdc_i(1, 0, 3);
    }

    #[test]
    fn test_outputs_below_full_scale() {
        let mut vgen = IntVdCorput::new(5, 4).unwrap();
        for _ in 0..1000 {
            assert!(vgen.pop() < vgen.full_scale());
        }
    }
}
