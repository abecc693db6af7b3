//! # lds_core: Foundation for Low-Discrepancy Sequence Generation
//!
//! ## Layer 1 (Foundation) Role
//!
//! lds_core is the bottom layer of the workspace and provides:
//! - Piecewise linear interpolation (`math::interpolators`)
//! - Cumulative-measure tables for `sin^n`-weighted polar angles (`math::measure`)
//! - Inverse-transform lookup of polar angles (`math::inversion`)
//! - Prime table used for default sequence bases (`math::primes`)
//! - The shared generator contract (`traits::LowDiscrepancySequence`)
//! - Error types: `LdsError`, `InterpolationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - tracing: Structured logging of cache activity
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use lds_core::math::inversion::RadialInverter;
//! use lds_core::math::measure::MeasureTableCache;
//!
//! let cache = MeasureTableCache::new();
//! let curve = cache.get(2).unwrap();
//! let inverter = RadialInverter::new(curve);
//!
//! // The median of the sin^2 density on [0, pi] is pi / 2
//! let angle = inverter.angle_at(0.5);
//! assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
