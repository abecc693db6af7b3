//! Sampler configuration.
//!
//! Provides [`SamplerConfig`] for describing a generator by family, dimension
//! and bases, and [`SamplerFamily`] for selecting the point geometry.

use std::collections::HashSet;
use std::sync::Arc;

use lds_core::math::measure::MeasureTableCache;
use lds_core::math::primes::{first_primes, is_prime, PRIME_TABLE};
use lds_core::types::LdsError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::halton::HaltonN;
use crate::recursive::{CylinN, SphereN};
use crate::sampler::Sampler;

/// Point geometry produced by a configured sampler.
///
/// # Variants
///
/// * `Halton` - Unit box `[0, 1)^n`
/// * `Cylinder` - Sphere `S^(n+1)` by recursive cylindrical projection
/// * `Sphere` - Sphere `S^(n+1)` with equal-area polar angles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SamplerFamily {
    /// Halton box sampling, `n` coordinates.
    #[default]
    Halton,
    /// [`CylinN`] chain of level `n`, `n + 2` coordinates.
    Cylinder,
    /// [`SphereN`] chain of level `n`, `n + 2` coordinates.
    Sphere,
}

impl SamplerFamily {
    /// Smallest dimension the family supports.
    pub fn min_dimension(self) -> usize {
        match self {
            SamplerFamily::Halton | SamplerFamily::Cylinder => 1,
            SamplerFamily::Sphere => 2,
        }
    }

    /// Number of bases consumed by a generator of dimension `n`.
    pub fn required_bases(self, n: usize) -> usize {
        match self {
            SamplerFamily::Halton => n,
            SamplerFamily::Cylinder | SamplerFamily::Sphere => n.saturating_add(1),
        }
    }

    /// Number of coordinates per point for dimension `n`.
    pub fn point_len(self, n: usize) -> usize {
        match self {
            SamplerFamily::Halton => n,
            SamplerFamily::Cylinder | SamplerFamily::Sphere => n.saturating_add(2),
        }
    }

    fn name(self) -> &'static str {
        match self {
            SamplerFamily::Halton => "HaltonN",
            SamplerFamily::Cylinder => "CylinN",
            SamplerFamily::Sphere => "SphereN",
        }
    }
}

/// Validated description of a sampler.
///
/// Use the builder via [`SamplerConfig::builder()`] for construction.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `family` | `Halton` | Point geometry |
/// | `dimension` | required | Level `n` of the generator |
/// | `bases` | first primes | One base per consumed sequence |
///
/// # Examples
///
/// ```rust
/// use lds_gen::{LowDiscrepancySequence, SamplerConfig, SamplerFamily};
///
/// let config = SamplerConfig::builder()
///     .family(SamplerFamily::Sphere)
///     .dimension(3)
///     .build()
///     .unwrap();
/// assert_eq!(config.bases, vec![2, 3, 5, 7]);
///
/// let mut sampler = config.build_sampler().unwrap();
/// assert_eq!(sampler.pop().len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Point geometry.
    pub family: SamplerFamily,

    /// Generator level `n`.
    pub dimension: usize,

    /// Bases, exactly `family.required_bases(dimension)` of them.
    pub bases: Vec<u64>,
}

impl SamplerConfig {
    /// Creates a new builder for constructing a `SamplerConfig`.
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// Non-prime or repeated bases are accepted, since the sequences remain
    /// well defined, but they correlate axes and are logged at `warn`.
    pub fn validate(&self) -> Result<(), LdsError> {
        let min = self.family.min_dimension();
        if self.dimension < min {
            return Err(LdsError::InvalidDimension {
                family: self.family.name(),
                dimension: self.dimension,
                min,
            });
        }

        let need = self.family.required_bases(self.dimension);
        if self.bases.len() < need {
            return Err(LdsError::InsufficientBases {
                family: self.family.name(),
                got: self.bases.len(),
                need,
            });
        }

        if let Some(&base) = self.bases.iter().find(|&&b| b < 2) {
            return Err(LdsError::InvalidBase { base });
        }

        let mut seen = HashSet::with_capacity(self.bases.len());
        for &base in &self.bases {
            if !seen.insert(base) {
                warn!(base, "repeated base correlates sequence axes");
            } else if !is_prime(base) {
                warn!(base, "non-prime base may correlate sequence axes");
            }
        }

        Ok(())
    }

    /// Builds the configured generator with a private measure cache.
    pub fn build_sampler(&self) -> Result<Sampler, LdsError> {
        self.build_sampler_with_cache(MeasureTableCache::shared())
    }

    /// Builds the configured generator, reading measure tables from `cache`.
    ///
    /// The cache is only consulted by the `Sphere` family.
    pub fn build_sampler_with_cache(
        &self,
        cache: Arc<MeasureTableCache>,
    ) -> Result<Sampler, LdsError> {
        self.validate()?;
        debug!(
            family = ?self.family,
            dimension = self.dimension,
            bases = ?self.bases,
            "building sampler"
        );
        let sampler = match self.family {
            SamplerFamily::Halton => Sampler::Halton(HaltonN::new(self.dimension, &self.bases)?),
            SamplerFamily::Cylinder => {
                Sampler::Cylinder(CylinN::new(self.dimension, &self.bases)?)
            }
            SamplerFamily::Sphere => {
                Sampler::Sphere(SphereN::with_cache(self.dimension, &self.bases, cache)?)
            }
        };
        Ok(sampler)
    }
}

/// Builder for [`SamplerConfig`].
#[derive(Debug, Default)]
pub struct SamplerConfigBuilder {
    family: Option<SamplerFamily>,
    dimension: Option<usize>,
    bases: Option<Vec<u64>>,
}

impl SamplerConfigBuilder {
    /// Sets the point geometry (default: `Halton`).
    pub fn family(mut self, family: SamplerFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Sets the generator level `n`.
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Sets explicit bases (default: the first primes).
    ///
    /// Bases beyond the number the family consumes are dropped.
    pub fn bases(mut self, bases: &[u64]) -> Self {
        self.bases = Some(bases.to_vec());
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// - `LdsError::InvalidParameter` if no dimension was set, or if default
    ///   bases are requested beyond the prime table
    /// - Any error from [`SamplerConfig::validate`]
    pub fn build(self) -> Result<SamplerConfig, LdsError> {
        let family = self.family.unwrap_or_default();
        let dimension = self.dimension.ok_or_else(|| LdsError::InvalidParameter {
            name: "dimension",
            value: "dimension must be set".to_string(),
        })?;
        let need = family.required_bases(dimension);

        let bases = match self.bases {
            Some(mut bases) => {
                bases.truncate(need);
                bases
            }
            None => first_primes(need)
                .ok_or_else(|| LdsError::InvalidParameter {
                    name: "bases",
                    value: format!(
                        "{} default bases requested, only {} primes tabulated",
                        need,
                        PRIME_TABLE.len()
                    ),
                })?
                .to_vec(),
        };

        let config = SamplerConfig {
            family,
            dimension,
            bases,
        };
        config.validate()?;
        Ok(config)
    }
}
