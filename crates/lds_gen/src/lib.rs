//! # lds_gen: Low-Discrepancy Point Generators
//!
//! ## Layer 2 (Generators) Role
//!
//! lds_gen builds every point sequence on top of the `lds_core` foundation:
//! - Digit-reversal scalar sequences, floating and fixed-point (`scalar`)
//! - Halton box sampling in 2 or n dimensions (`halton`)
//! - Base surface generators: circle and 2-sphere (`surface`)
//! - Recursive generators: n-cylinder and n-sphere (`recursive`)
//! - Configuration builder and the `Sampler` enum (`config`, `sampler`)
//!
//! All generators implement [`LowDiscrepancySequence`]: `pop` advances one
//! index and returns a point, `reseed` jumps to an index and is forwarded down
//! every recursive chain so all levels stay aligned.
//!
//! ## Usage Example
//!
//! ```rust
//! use lds_gen::{LowDiscrepancySequence, SphereN};
//!
//! let mut sgen = SphereN::new(3, &[2, 3, 5, 7]).unwrap();
//! sgen.reseed(0);
//!
//! let point = sgen.pop();
//! assert_eq!(point.len(), 5);
//! let norm: f64 = point.iter().map(|x| x * x).sum::<f64>().sqrt();
//! assert!((norm - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Measure Table Sharing
//!
//! Sphere generators read `sin^n` cumulative-measure tables from a
//! [`MeasureTableCache`]. Each generator built with `new` owns a private cache
//! shared by its whole chain; use `with_cache` to share one cache between
//! several generators.
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `SamplerConfig` and `SamplerFamily`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod halton;
pub mod recursive;
pub mod sampler;
pub mod scalar;
pub mod surface;

// Public re-exports
pub use config::{SamplerConfig, SamplerConfigBuilder, SamplerFamily};
pub use halton::{Halton, HaltonN, IntHalton};
pub use lds_core::math::measure::MeasureTableCache;
pub use lds_core::traits::LowDiscrepancySequence;
pub use lds_core::types::LdsError;
pub use recursive::{CylinN, Sphere3, SphereN};
pub use sampler::Sampler;
pub use scalar::{vdc, vdc_i, IntVdCorput, VdCorput, DEFAULT_SCALE};
pub use surface::{Circle, Sphere};
