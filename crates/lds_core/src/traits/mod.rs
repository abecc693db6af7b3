//! Core traits shared by every sequence generator.
//!
//! This module defines:
//! - The generator contract (`LowDiscrepancySequence` trait)
//! - Generic floating-point operations (`Float` re-export)
//!
//! Generators compose through enums rather than trait objects: a recursive
//! generator resolves its child variant once at construction, so `pop` is
//! statically dispatched all the way down the chain.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use lds_core::traits::Float;
///
/// fn unit_circle_x<T: Float>(theta: T) -> T {
///     theta.sin()
/// }
///
/// assert_eq!(unit_circle_x(0.0_f64), 0.0);
/// ```
pub use num_traits::Float;

pub mod sequence;

pub use sequence::LowDiscrepancySequence;
