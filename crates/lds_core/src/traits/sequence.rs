//! The generator contract shared by scalar, box, circle, cylinder and sphere
//! sequences.

/// Deterministic, index-driven low-discrepancy sequence.
///
/// Every implementation advances an integer index by exactly one per
/// [`pop`](LowDiscrepancySequence::pop), and its output is a pure function of
/// that index and its construction parameters. Composite generators forward
/// [`reseed`](LowDiscrepancySequence::reseed) to every component so that all
/// levels stay index-aligned.
///
/// # Examples
///
/// ```rust
/// use lds_core::traits::LowDiscrepancySequence;
///
/// /// Sequence of successive indices, for illustration.
/// struct Counter {
///     count: u64,
/// }
///
/// impl LowDiscrepancySequence for Counter {
///     type Output = u64;
///
///     fn dimension(&self) -> usize {
///         1
///     }
///
///     fn pop(&mut self) -> u64 {
///         self.count += 1;
///         self.count
///     }
///
///     fn reseed(&mut self, seed: u64) {
///         self.count = seed;
///     }
///
///     fn index(&self) -> u64 {
///         self.count
///     }
/// }
///
/// let mut counter = Counter { count: 0 };
/// counter.skip(10);
/// assert_eq!(counter.take_points(3), vec![11, 12, 13]);
/// ```
pub trait LowDiscrepancySequence {
    /// The point type produced by [`pop`](LowDiscrepancySequence::pop).
    type Output;

    /// Number of coordinates in each point.
    fn dimension(&self) -> usize;

    /// Advances the index by one and returns the point for the new index.
    fn pop(&mut self) -> Self::Output;

    /// Sets the index directly. The next `pop` returns the point for `seed + 1`.
    fn reseed(&mut self, seed: u64);

    /// Current index.
    fn index(&self) -> u64;

    /// Skips ahead by `n` points without generating them.
    fn skip(&mut self, n: u64) {
        let index = self.index();
        self.reseed(index.wrapping_add(n));
    }

    /// Pops `n` consecutive points.
    fn take_points(&mut self, n: usize) -> Vec<Self::Output> {
        (0..n).map(|_| self.pop()).collect()
    }
}
