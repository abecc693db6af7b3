//! Numerical building blocks for spherical low-discrepancy sampling.
//!
//! ## Submodules
//!
//! - [`interpolators`]: Piecewise linear interpolation with clamped boundaries
//! - [`measure`]: Cumulative-measure tables of `sin^n` over `[0, pi]` and their cache
//! - [`inversion`]: Inverse-transform lookup from cumulative measure to polar angle
//! - [`primes`]: Small prime table used for default sequence bases

pub mod interpolators;
pub mod inversion;
pub mod measure;
pub mod primes;
