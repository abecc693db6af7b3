//! Error types for structured error handling.
//!
//! This module provides:
//! - `LdsError`: Errors raised while constructing sequences and generators
//! - `InterpolationError`: Errors from interpolation operations
//!
//! Every error in this module is a construction-time error. Once a generator
//! has been built, `pop` and `reseed` cannot fail.

use thiserror::Error;

/// Construction errors for low-discrepancy sequences and generators.
///
/// # Variants
/// - `InvalidBase`: Digit-reversal base below 2
/// - `ScaleOverflow`: Fixed-point scale whose `base^scale` does not fit in `u64`
/// - `InvalidDimension`: Dimension below the minimum of a generator family
/// - `InsufficientBases`: Fewer bases than the generator chain consumes
/// - `InvalidParameter`: Invalid configuration value
/// - `Interpolation`: Failure while building an interpolation table
///
/// # Examples
/// ```
/// use lds_core::types::LdsError;
///
/// let err = LdsError::InvalidBase { base: 1 };
/// assert_eq!(format!("{}", err), "Invalid base 1: must be at least 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LdsError {
    /// Base below 2 (digit reversal would not terminate).
    #[error("Invalid base {base}: must be at least 2")]
    InvalidBase {
        /// The rejected base
        base: u64,
    },

    /// Fixed-point scale too large for the base.
    #[error("Scale overflow: {base}^{scale} does not fit in 64 bits")]
    ScaleOverflow {
        /// Base of the sequence
        base: u64,
        /// Number of base digits requested
        scale: u32,
    },

    /// Dimension below the minimum supported by a generator family.
    #[error("Invalid dimension {dimension} for {family}: must be at least {min}")]
    InvalidDimension {
        /// Generator family name
        family: &'static str,
        /// Requested dimension
        dimension: usize,
        /// Minimum supported dimension
        min: usize,
    },

    /// Not enough bases for the requested dimension.
    #[error("Insufficient bases for {family}: got {got}, need {need}")]
    InsufficientBases {
        /// Generator family name
        family: &'static str,
        /// Number of bases supplied
        got: usize,
        /// Number of bases required
        need: usize,
    },

    /// Invalid configuration value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the invalid value
        value: String,
    },

    /// Interpolation table could not be built.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InsufficientData`: Not enough data points for interpolation
/// - `NonMonotonicData`: Abscissae decrease somewhere
/// - `InvalidInput`: General invalid input error
///
/// # Examples
/// ```
/// use lds_core::types::InterpolationError;
///
/// let err = InterpolationError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("need at least 2"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Data is not monotonic when monotonicity is required.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
