//! Utility functions for primality testing and elementary number theory.
//!
//! This module provides the arithmetic predicates used throughout the
//! library: prime power detection for field-based constructions, perfect
//! square tests for the quartic residue difference sets, and prime
//! factorization support for multiplicative generator search.

mod primality;

pub use primality::{factor_prime_power, is_prime, is_prime_power, PrimePowerFactorization};

/// Compute the power of a base modulo a modulus using binary exponentiation.
///
/// Computes `base^exp mod modulus` efficiently in O(log exp) time.
///
/// # Panics
///
/// Panics if `modulus` is 0.
///
/// # Examples
///
/// ```
/// use diffset::utils::mod_pow;
///
/// assert_eq!(mod_pow(2, 10, 1000), 24);  // 2^10 = 1024, 1024 mod 1000 = 24
/// assert_eq!(mod_pow(3, 5, 7), 5);       // 3^5 = 243, 243 mod 7 = 5
/// ```
#[must_use]
pub fn mod_pow(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    assert!(modulus > 0, "modulus must be positive");

    if modulus == 1 {
        return 0;
    }

    let mut result = 1u64;
    base %= modulus;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base) % modulus;
        }
        exp >>= 1;
        base = base.wrapping_mul(base) % modulus;
    }

    result
}

/// Test whether `n` is a perfect square.
///
/// The quartic residue difference set constructions apply only when
/// `(v-1)/4` or `(v-9)/4` is a perfect square, so this check gates those
/// branches.
///
/// # Examples
///
/// ```
/// use diffset::utils::is_perfect_square;
///
/// assert!(is_perfect_square(0));
/// assert!(is_perfect_square(9));
/// assert!(is_perfect_square(1024));
/// assert!(!is_perfect_square(8));
/// ```
#[must_use]
pub fn is_perfect_square(n: u64) -> bool {
    if n == 0 {
        return true;
    }
    // Float sqrt gives a guess within one of the true root for u64 inputs.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    let guess = (n as f64).sqrt() as u64;
    for r in guess.saturating_sub(1)..=guess + 1 {
        if r.checked_mul(r) == Some(n) {
            return true;
        }
    }
    false
}

/// Return the distinct prime factors of `n` in increasing order.
///
/// Trial division; `n` here is always a field order minus one, which keeps
/// the inputs small.
///
/// # Examples
///
/// ```
/// use diffset::utils::distinct_prime_factors;
///
/// assert_eq!(distinct_prime_factors(72), vec![2, 3]);
/// assert_eq!(distinct_prime_factors(30), vec![2, 3, 5]);
/// assert_eq!(distinct_prime_factors(1), Vec::<u32>::new());
/// ```
#[must_use]
pub fn distinct_prime_factors(mut n: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut p = 2u32;
    while u64::from(p) * u64::from(p) <= u64::from(n) {
        if n % p == 0 {
            factors.push(p);
            while n % p == 0 {
                n /= p;
            }
        }
        p += if p == 2 { 1 } else { 2 };
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}
