//! Small prime table for sequence bases.
//!
//! Distinct prime bases give the best discrepancy for Halton-style and
//! recursive spherical sequences, so they are the default choice whenever
//! the caller does not supply bases.

/// The first 100 primes.
pub const PRIME_TABLE: [u64; 100] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251, 257, 263, 269, 271, 277, 281, 283,
    293, 307, 311, 313, 317, 331, 337, 347, 349, 353, 359, 367, 373, 379, 383, 389, 397, 401,
    409, 419, 421, 431, 433, 439, 443, 449, 457, 461, 463, 467, 479, 487, 491, 499, 503, 509,
    521, 523, 541,
];

/// Primality by trial division.
///
/// # Examples
///
/// ```
/// use lds_core::math::primes::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(541));
/// assert!(!is_prime(1));
/// assert!(!is_prime(91));
/// ```
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// The first `count` primes, or `None` if the table is too short.
pub fn first_primes(count: usize) -> Option<&'static [u64]> {
    PRIME_TABLE.get(..count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_prime_and_increasing() {
        for w in PRIME_TABLE.windows(2) {
            assert!(w[0] < w[1]);
        }
        assert!(PRIME_TABLE.iter().all(|&p| is_prime(p)));
    }

    #[test]
    fn test_table_has_no_gaps() {
        let count = (2..=541).filter(|&n| is_prime(n)).count();
        assert_eq!(count, PRIME_TABLE.len());
    }

    #[test]
    fn test_first_primes() {
        assert_eq!(first_primes(4), Some(&[2, 3, 5, 7][..]));
        assert_eq!(first_primes(0), Some(&[][..]));
        assert!(first_primes(101).is_none());
    }

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }
}
