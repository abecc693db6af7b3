//! Cylindrical-projection generator for the n-sphere.

use lds_core::traits::LowDiscrepancySequence;
use lds_core::types::LdsError;
use tracing::trace;

use super::scale_tail;
use crate::scalar::VdCorput;
use crate::surface::Circle;

/// Lower level of a [`CylinN`] chain.
#[derive(Debug, Clone)]
enum CylinChild {
    Circle(Circle),
    Cylin(Box<CylinN>),
}

impl CylinChild {
    fn fill(&mut self, point: &mut Vec<f64>) {
        match self {
            CylinChild::Circle(circle) => point.extend_from_slice(&circle.pop()),
            CylinChild::Cylin(cylin) => cylin.fill(point),
        }
    }

    fn reseed(&mut self, seed: u64) {
        match self {
            CylinChild::Circle(circle) => circle.reseed(seed),
            CylinChild::Cylin(cylin) => cylin.reseed(seed),
        }
    }
}

/// Low-discrepancy points on the unit sphere `S^(k+1)` by recursive
/// cylindrical projection.
///
/// Each level draws `cosphi = 2u - 1`, scales the child point by
/// `sinphi = sqrt(1 - cosphi^2)` and appends `cosphi`. Only the 2-sphere
/// (`k = 1`) is equal-area; higher levels trade uniformity for speed and
/// need no measure tables.
///
/// # Examples
///
/// ```rust
/// use lds_gen::{CylinN, LowDiscrepancySequence};
///
/// let mut cgen = CylinN::new(3, &[2, 3, 5, 7]).unwrap();
/// cgen.reseed(0);
/// let point = cgen.pop();
/// assert_eq!(point.len(), 5);
/// assert_eq!(point[4], 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct CylinN {
    vdc: VdCorput,
    child: CylinChild,
    n: usize,
}

impl CylinN {
    /// Creates a level-`n` generator consuming `bases[..=n]`.
    ///
    /// # Errors
    ///
    /// - `LdsError::InvalidDimension` if `n < 1`
    /// - `LdsError::InsufficientBases` if `bases.len() < n + 1`
    /// - `LdsError::InvalidBase` for any consumed base below 2
    pub fn new(n: usize, bases: &[u64]) -> Result<Self, LdsError> {
        if n < 1 {
            return Err(LdsError::InvalidDimension {
                family: "CylinN",
                dimension: n,
                min: 1,
            });
        }
        if bases.len() <= n {
            return Err(LdsError::InsufficientBases {
                family: "CylinN",
                got: bases.len(),
                need: n.saturating_add(1),
            });
        }
        let vdc = VdCorput::new(bases[0])?;
        let child = if n == 1 {
            CylinChild::Circle(Circle::new(bases[1])?)
        } else {
            CylinChild::Cylin(Box::new(CylinN::new(n - 1, &bases[1..])?))
        };
        trace!(level = n, base = bases[0], "constructed cylinder level");
        Ok(Self { vdc, child, n })
    }

    /// Recursion level `k`; points have `k + 2` coordinates.
    #[inline]
    pub fn level(&self) -> usize {
        self.n
    }

    fn fill(&mut self, point: &mut Vec<f64>) {
        let cosphi = 2.0 * self.vdc.pop() - 1.0;
        let sinphi = (1.0 - cosphi * cosphi).sqrt();
        let start = point.len();
        self.child.fill(point);
        scale_tail(point, start, sinphi);
        point.push(cosphi);
    }
}

impl LowDiscrepancySequence for CylinN {
    type Output = Vec<f64>;

    #[inline]
    fn dimension(&self) -> usize {
        self.n + 2
    }

    fn pop(&mut self) -> Vec<f64> {
        let mut point = Vec::with_capacity(self.n + 2);
        self.fill(&mut point);
        point
    }

    fn reseed(&mut self, seed: u64) {
        self.vdc.reseed(seed);
        self.child.reseed(seed);
    }

    #[inline]
    fn index(&self) -> u64 {
        self.vdc.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_cylin_n_reference_points() {
        let mut cgen = CylinN::new(3, &[2, 3, 5, 7]).unwrap();
        cgen.reseed(0);
        let expected = [
            [
                0.5896942325314937,
                0.4702654580212986,
                -0.565685424949238,
                -0.33333333333333337,
                0.0,
            ],
            [
                0.7799423297454589,
                -0.17801674716505145,
                -0.16329931618554513,
                0.2886751345948128,
                -0.5,
            ],
        ];
        for row in expected {
            let point = cgen.pop();
            assert_eq!(point.len(), 5);
            for (got, want) in point.iter().zip(row) {
                assert_abs_diff_eq!(*got, want, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_cylin_one_is_two_sphere() {
        let mut cgen = CylinN::new(1, &[2, 3]).unwrap();
        let mut sgen = crate::surface::Sphere::new([2, 3]).unwrap();
        for _ in 0..20 {
            assert_eq!(cgen.pop(), sgen.pop().to_vec());
        }
    }

    #[test]
    fn test_cylin_n_unit_norm() {
        let mut cgen = CylinN::new(4, &[2, 3, 5, 7, 11]).unwrap();
        for point in cgen.take_points(300) {
            let norm_sq: f64 = point.iter().map(|x| x * x).sum();
            assert_abs_diff_eq!(norm_sq, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cylin_n_validation() {
        assert_eq!(
            CylinN::new(0, &[2, 3]).unwrap_err(),
            LdsError::InvalidDimension {
                family: "CylinN",
                dimension: 0,
                min: 1
            }
        );
        assert_eq!(
            CylinN::new(3, &[2, 3, 5]).unwrap_err(),
            LdsError::InsufficientBases {
                family: "CylinN",
                got: 3,
                need: 4
            }
        );
        assert_eq!(
            CylinN::new(2, &[2, 3, 1]).unwrap_err(),
            LdsError::InvalidBase { base: 1 }
        );
    }

    #[test]
    fn test_cylin_n_huge_level_reports_missing_bases() {
        assert_eq!(
            CylinN::new(usize::MAX, &[2, 3, 5]).unwrap_err(),
            LdsError::InsufficientBases {
                family: "CylinN",
                got: 3,
                need: usize::MAX
            }
        );
    }

    #[test]
    fn test_cylin_n_reseed_propagates() {
        let mut cgen = CylinN::new(3, &[2, 3, 5, 7]).unwrap();
        let first = cgen.take_points(5);
        cgen.take_points(11);
        cgen.reseed(0);
        assert_eq!(cgen.take_points(5), first);
        assert_eq!(cgen.index(), 5);
        assert_eq!(cgen.dimension(), 5);
        assert_eq!(cgen.level(), 3);
    }
}
