//! Primality testing and prime power factorization.
//!
//! This module provides the number-theoretic predicates the constructor
//! dispatch relies on:
//! - Testing whether a number is prime (Miller-Rabin)
//! - Testing whether a number is a prime power
//! - Factoring prime powers into (prime, exponent) pairs

use super::mod_pow;

/// Result of factoring a prime power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimePowerFactorization {
    /// The prime base.
    pub prime: u32,
    /// The exponent (power).
    pub exponent: u32,
}

impl PrimePowerFactorization {
    /// Compute the value p^k.
    #[must_use]
    pub fn value(&self) -> u64 {
        u64::from(self.prime).pow(self.exponent)
    }
}

/// Test if a number is prime using the Miller-Rabin primality test.
///
/// For n < 2^32, this is deterministic (no false positives) using a fixed
/// set of witnesses that covers all 32-bit integers.
///
/// # Examples
///
/// ```
/// use diffset::utils::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(73));
/// assert!(!is_prime(9));
/// assert!(!is_prime(91));
/// ```
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    if n < 9 {
        return true;
    }
    if n % 3 == 0 {
        return false;
    }

    // Miller-Rabin witnesses sufficient for deterministic testing of all
    // 32-bit integers.
    let witnesses: &[u64] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

    // Write n-1 as 2^r * d where d is odd
    let n_minus_1 = u64::from(n - 1);
    let r = n_minus_1.trailing_zeros();
    let d = n_minus_1 >> r;

    'witness: for &a in witnesses {
        if a >= u64::from(n) {
            continue;
        }

        let mut x = mod_pow(a, d, u64::from(n));

        if x == 1 || x == n_minus_1 {
            continue 'witness;
        }

        for _ in 0..(r - 1) {
            x = x.wrapping_mul(x) % u64::from(n);
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Test if a number is a prime power (p^k for some prime p and k >= 1).
///
/// Prime power orders are exactly the orders for which a Galois field exists,
/// so this predicate gates every field-based construction branch.
///
/// # Examples
///
/// ```
/// use diffset::utils::is_prime_power;
///
/// assert!(is_prime_power(9));   // 3^2
/// assert!(is_prime_power(73));  // prime
/// assert!(!is_prime_power(6));  // 2 * 3
/// assert!(!is_prime_power(1));
/// ```
#[must_use]
pub fn is_prime_power(n: u32) -> bool {
    factor_prime_power(n).is_some()
}

/// Factor a number as a prime power if possible.
///
/// Returns `Some((p, k))` if `n = p^k` for some prime p and k >= 1,
/// otherwise returns `None`.
///
/// # Examples
///
/// ```
/// use diffset::utils::{factor_prime_power, PrimePowerFactorization};
///
/// assert_eq!(factor_prime_power(8), Some(PrimePowerFactorization { prime: 2, exponent: 3 }));
/// assert_eq!(factor_prime_power(7), Some(PrimePowerFactorization { prime: 7, exponent: 1 }));
/// assert_eq!(factor_prime_power(6), None);
/// ```
#[must_use]
pub fn factor_prime_power(n: u32) -> Option<PrimePowerFactorization> {
    if n < 2 {
        return None;
    }

    if is_prime(n) {
        return Some(PrimePowerFactorization {
            prime: n,
            exponent: 1,
        });
    }

    if n.is_power_of_two() {
        return Some(PrimePowerFactorization {
            prime: 2,
            exponent: n.trailing_zeros(),
        });
    }

    // If n = p^k for k >= 2, then p = n^(1/k); test every possible root.
    let max_exp = 32 - n.leading_zeros();

    for k in 2..=max_exp {
        if let Some(root) = integer_kth_root(u64::from(n), k) {
            let root = u32::try_from(root).ok()?;
            if root > 1
                && is_prime(root)
                && root.checked_pow(k).map_or(false, |v| v == n)
            {
                return Some(PrimePowerFactorization {
                    prime: root,
                    exponent: k,
                });
            }
        }
    }

    None
}

/// Compute the integer k-th root of n (floor(n^(1/k))) by Newton iteration.
fn integer_kth_root(n: u64, k: u32) -> Option<u64> {
    if k == 0 {
        return None;
    }
    if n == 0 {
        return Some(0);
    }
    if k == 1 {
        return Some(n);
    }
    if n == 1 {
        return Some(1);
    }

    // Initial guess: 2^(ceil(log2(n) / k))
    let bits = 64 - n.leading_zeros();
    let mut x = 1u64 << ((bits + k - 1) / k);

    loop {
        let x_pow_k_minus_1 = match x.checked_pow(k - 1) {
            Some(v) => v,
            None => {
                x /= 2;
                continue;
            }
        };

        if x_pow_k_minus_1 == 0 {
            return Some(x);
        }

        let n_div_x_pow = n / x_pow_k_minus_1;
        let new_x = ((u64::from(k) - 1) * x + n_div_x_pow) / u64::from(k);

        if new_x >= x {
            if let Some(x_pow_k) = x.checked_pow(k) {
                if x_pow_k == n {
                    return Some(x);
                }
            }
            return None;
        }

        x = new_x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        for p in [2u32, 3, 5, 7, 11, 13, 31, 61, 73, 97, 337, 1009, 100_003] {
            assert!(is_prime(p), "{p} is prime");
        }
        for n in [0u32, 1, 4, 6, 9, 15, 21, 100] {
            assert!(!is_prime(n), "{n} is composite");
        }

        // Carmichael numbers must be identified as composite
        assert!(!is_prime(561)); // 3 * 11 * 17
        assert!(!is_prime(1105)); // 5 * 13 * 17
        assert!(!is_prime(1729)); // 7 * 13 * 19
    }

    #[test]
    fn test_is_prime_power() {
        for q in [2u32, 3, 4, 5, 7, 8, 9, 16, 25, 27, 32, 81, 121, 125] {
            assert!(is_prime_power(q), "{q} is a prime power");
        }
        for n in [0u32, 1, 6, 10, 12, 15, 18, 20, 21, 36] {
            assert!(!is_prime_power(n), "{n} is not a prime power");
        }
    }

    #[test]
    fn test_factor_prime_power() {
        assert_eq!(
            factor_prime_power(8),
            Some(PrimePowerFactorization {
                prime: 2,
                exponent: 3
            })
        );
        assert_eq!(
            factor_prime_power(9),
            Some(PrimePowerFactorization {
                prime: 3,
                exponent: 2
            })
        );
        assert_eq!(
            factor_prime_power(125),
            Some(PrimePowerFactorization {
                prime: 5,
                exponent: 3
            })
        );
        assert_eq!(
            factor_prime_power(73),
            Some(PrimePowerFactorization {
                prime: 73,
                exponent: 1
            })
        );

        assert_eq!(factor_prime_power(0), None);
        assert_eq!(factor_prime_power(1), None);
        assert_eq!(factor_prime_power(6), None);
        assert_eq!(factor_prime_power(12), None);
    }

    #[test]
    fn test_prime_power_factorization_value() {
        let f = PrimePowerFactorization {
            prime: 2,
            exponent: 10,
        };
        assert_eq!(f.value(), 1024);
    }
}
