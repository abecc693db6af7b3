//! Cumulative-measure tables for `sin^n`-weighted polar angles.
//!
//! Sampling the surface of a sphere recursively needs, at every level, a polar
//! angle whose density on `[0, pi]` is proportional to `sin^n(angle)`. This
//! module tabulates the cumulative measure
//!
//! ```text
//! value_n(theta) = integral_0^theta sin^n(t) dt
//! ```
//!
//! on a fixed angle grid using the reduction formula
//!
//! ```text
//! value_0(theta) = theta
//! value_1(theta) = 1 - cos(theta)
//! value_n(theta) = ((n - 1) * value_{n-2}(theta) - cos(theta) * sin(theta)^(n-1)) / n
//! ```
//!
//! so table `n` is derived only from table `n - 2` and the shared sine and
//! cosine samples.
//!
//! # Caching Strategy
//!
//! [`MeasureTableCache`] is a context object, not global state. Tables are
//! built lazily on first demand and kept until the cache is dropped.
//! - Read lock fast path for cached dimensions
//! - On a miss, one write lock covers the whole check, compute and insert
//!   sequence (including missing `n - 2` ancestors), so concurrent first
//!   access never builds the same table twice
//! - Cache misses are logged at `debug` level
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use lds_core::math::measure::MeasureTableCache;
//!
//! let cache = MeasureTableCache::new();
//!
//! let first = cache.get(4).unwrap();
//! let second = cache.get(4).unwrap();
//! assert!(Arc::ptr_eq(&first, &second));
//!
//! // Building dimension 4 also cached its ancestors
//! assert!(cache.contains(2) && cache.contains(0));
//! assert!(first.is_monotone());
//! ```

use std::collections::HashMap;
use std::f64::consts::PI;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use super::interpolators::LinearInterpolator;
use crate::types::{InterpolationError, LdsError};

/// Default number of angle samples over `[0, pi]`.
pub const ANGLE_SAMPLES: usize = 300;

/// Shared angle samples with their precomputed sine and negated cosine.
///
/// `angles` is `linspace(0, pi, samples)` with the last sample set to exactly
/// `pi`.
#[derive(Debug, Clone)]
pub struct AngleGrid {
    angles: Vec<f64>,
    neg_cosine: Vec<f64>,
    sine: Vec<f64>,
}

impl AngleGrid {
    /// Builds a grid with `samples` points over `[0, pi]`.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::InsufficientData` if `samples < 2`.
    pub fn new(samples: usize) -> Result<Self, InterpolationError> {
        if samples < 2 {
            return Err(InterpolationError::InsufficientData {
                got: samples,
                need: 2,
            });
        }

        Ok(Self::sample(samples))
    }

    fn sample(samples: usize) -> Self {
        let step = PI / (samples - 1) as f64;
        let mut angles: Vec<f64> = (0..samples).map(|i| i as f64 * step).collect();
        angles[samples - 1] = PI;

        let neg_cosine = angles.iter().map(|a| -a.cos()).collect();
        let sine = angles.iter().map(|a| a.sin()).collect();

        Self {
            angles,
            neg_cosine,
            sine,
        }
    }

    /// Angle samples in increasing order.
    #[inline]
    pub fn angles(&self) -> &[f64] {
        &self.angles
    }

    /// `-cos(angle)` for every sample.
    #[inline]
    pub fn neg_cosine(&self) -> &[f64] {
        &self.neg_cosine
    }

    /// `sin(angle)` for every sample.
    #[inline]
    pub fn sine(&self) -> &[f64] {
        &self.sine
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    /// Always false for a constructed grid.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }
}

/// Sampled cumulative-measure curve for one dimension.
///
/// Stored as the inverse map (cumulative value -> angle), which is the
/// direction every consumer reads it in.
#[derive(Debug, Clone)]
pub struct MeasureCurve {
    dimension: usize,
    inverse: LinearInterpolator<f64>,
}

impl MeasureCurve {
    fn from_values(
        dimension: usize,
        grid: &AngleGrid,
        mut values: Vec<f64>,
    ) -> Result<Self, InterpolationError> {
        // Running maximum: rounding must never make the table decrease.
        for i in 1..values.len() {
            if values[i] < values[i - 1] {
                values[i] = values[i - 1];
            }
        }
        let inverse = LinearInterpolator::new(&values, grid.angles())?;
        Ok(Self { dimension, inverse })
    }

    /// The exponent `n` of `sin^n` this curve integrates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Angle samples over `[0, pi]`.
    #[inline]
    pub fn angles(&self) -> &[f64] {
        self.inverse.ys()
    }

    /// Cumulative values, parallel to [`angles`](Self::angles).
    #[inline]
    pub fn values(&self) -> &[f64] {
        self.inverse.xs()
    }

    /// Cumulative value at angle 0.
    #[inline]
    pub fn start(&self) -> f64 {
        self.values()[0]
    }

    /// Cumulative value at angle pi.
    #[inline]
    pub fn end(&self) -> f64 {
        self.values()[self.len() - 1]
    }

    /// `end() - start()`.
    #[inline]
    pub fn range(&self) -> f64 {
        self.end() - self.start()
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.inverse.len()
    }

    /// Always false for a constructed curve.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inverse.is_empty()
    }

    /// True if the cumulative values never decrease along the angle samples.
    pub fn is_monotone(&self) -> bool {
        self.values().windows(2).all(|w| w[0] <= w[1])
    }

    pub(crate) fn inverse(&self) -> &LinearInterpolator<f64> {
        &self.inverse
    }
}

/// Thread-safe, lazily populated cache of [`MeasureCurve`]s keyed by dimension.
///
/// Entries are never evicted. Share one cache between generators by cloning
/// the `Arc` that holds it; generators built without an explicit cache use a
/// private one.
#[derive(Debug)]
pub struct MeasureTableCache {
    grid: AngleGrid,
    tables: RwLock<HashMap<usize, Arc<MeasureCurve>>>,
}

impl MeasureTableCache {
    /// Creates an empty cache over the default [`ANGLE_SAMPLES`] grid.
    pub fn new() -> Self {
        Self {
            grid: AngleGrid::sample(ANGLE_SAMPLES),
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an empty cache over a grid with `samples` points.
    ///
    /// # Errors
    ///
    /// Returns `InterpolationError::InsufficientData` if `samples < 2`.
    pub fn with_resolution(samples: usize) -> Result<Self, InterpolationError> {
        Ok(Self {
            grid: AngleGrid::new(samples)?,
            tables: RwLock::new(HashMap::new()),
        })
    }

    /// Convenience constructor returning the cache already wrapped in an `Arc`.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// The angle grid every table in this cache is sampled on.
    #[inline]
    pub fn grid(&self) -> &AngleGrid {
        &self.grid
    }

    /// Number of angle samples per table.
    #[inline]
    pub fn resolution(&self) -> usize {
        self.grid.len()
    }

    /// True if the table for dimension `n` has been built.
    pub fn contains(&self, n: usize) -> bool {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&n)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// True if no table has been built yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Retrieves or builds the cumulative-measure curve for dimension `n`.
    ///
    /// Implements double-check locking:
    /// 1. Acquire read lock, check cache
    /// 2. On a miss, acquire write lock and check again
    /// 3. Build the missing chain `.., n - 2, n` under that lock and cache it
    ///
    /// Lock poisoning is ignored: tables are immutable once inserted, so a
    /// panic elsewhere cannot leave a half-written entry behind.
    ///
    /// # Errors
    ///
    /// Only fails if the grid cannot back an interpolator, which the grid
    /// constructor already rules out.
    pub fn get(&self, n: usize) -> Result<Arc<MeasureCurve>, LdsError> {
        // Fast path: read lock check
        {
            let tables = self.tables.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(curve) = tables.get(&n) {
                return Ok(Arc::clone(curve));
            }
        }

        // Slow path: write lock with double-check
        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(curve) = tables.get(&n) {
            return Ok(Arc::clone(curve));
        }

        // Walk down to the nearest cached ancestor (or a base case)
        let mut pending = Vec::new();
        let mut k = n;
        while !tables.contains_key(&k) {
            pending.push(k);
            if k < 2 {
                break;
            }
            k -= 2;
        }

        for k in pending.into_iter().rev() {
            debug!(
                dimension = k,
                samples = self.grid.len(),
                "building cumulative measure table"
            );
            let values = match k {
                0 => self.grid.angles().to_vec(),
                1 => self.grid.neg_cosine().iter().map(|c| 1.0 + c).collect(),
                _ => {
                    let previous = tables.get(&(k - 2)).ok_or_else(|| {
                        InterpolationError::InvalidInput(format!(
                            "table {} missing while building table {}",
                            k - 2,
                            k
                        ))
                    })?;
                    reduction_step(k, previous.values(), &self.grid)
                }
            };
            let curve = MeasureCurve::from_values(k, &self.grid, values)?;
            tables.insert(k, Arc::new(curve));
        }

        tables.get(&n).map(Arc::clone).ok_or_else(|| {
            InterpolationError::InvalidInput(format!("table {} was not built", n)).into()
        })
    }
}

impl Default for MeasureTableCache {
    fn default() -> Self {
        Self::new()
    }
}

/// `((n - 1) * previous + (-cos) * sin^(n - 1)) / n`, elementwise.
fn reduction_step(n: usize, previous: &[f64], grid: &AngleGrid) -> Vec<f64> {
    let weight = (n - 1) as f64;
    let power = (n - 1) as i32;
    previous
        .iter()
        .zip(grid.neg_cosine())
        .zip(grid.sine())
        .map(|((&prev, &neg_cos), &sin)| (weight * prev + neg_cos * sin.powi(power)) / n as f64)
        .collect()
}
