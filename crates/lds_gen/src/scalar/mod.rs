//! Van der Corput digit-reversal sequences.
//!
//! The value for index `k` in base `b` is obtained by writing `k` in base `b`
//! and mirroring its digits around the radix point:
//!
//! ```text
//! k = d_0 + d_1 b + d_2 b^2 + ...   ->   d_0 / b + d_1 / b^2 + d_2 / b^3 + ...
//! ```
//!
//! Two variants are provided:
//! - [`VdCorput`]: normalised `f64` output in `[0, 1)`
//! - [`IntVdCorput`]: fixed-point `u64` output in `[0, base^scale)`

mod fixed_point;
mod vdcorput;

pub use fixed_point::{vdc_i, IntVdCorput, DEFAULT_SCALE};
pub use vdcorput::{vdc, VdCorput};

use lds_core::types::LdsError;

/// Rejects bases for which digit reversal does not terminate.
pub(crate) fn validate_base(base: u64) -> Result<u64, LdsError> {
    if base < 2 {
        return Err(LdsError::InvalidBase { base });
    }
    Ok(base)
}
