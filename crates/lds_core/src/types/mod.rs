//! Core types for low-discrepancy sequence generation.
//!
//! This module provides:
//! - `LdsError`: Construction-time errors for sequences and generators
//! - `InterpolationError`: Errors from interpolation operations

pub mod error;

// Re-export error types at the types module level
pub use error::{InterpolationError, LdsError};
