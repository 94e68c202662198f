//! Precomputed arithmetic tables for Galois fields.
//!
//! The difference-family searches perform O(b·k²) field operations per
//! candidate, so multiplication is table-backed: discrete exp/log tables
//! over a fixed generator x of the unit group, with `exp[i] = x^i` and
//! `log` its inverse, make products, inverses and powers index arithmetic
//! modulo q-1. Addition is digit arithmetic computed per call (residues
//! modulo p for prime fields, digitwise base-p sums for extensions, XOR in
//! characteristic 2), keeping memory at O(q) for any field order. The
//! generator anchors every cyclotomic coset and Wilson search in the
//! crate, so it is chosen deterministically: the smallest element, in
//! encoding order, whose multiplicative order is q-1.

use crate::error::{Error, Result};
use crate::utils::{distinct_prime_factors, factor_prime_power, is_prime};

/// Arithmetic tables for a Galois field of order q = p^n.
///
/// Elements are integers in `0..q`. Prime fields encode residues directly;
/// extension fields encode a_0 + a_1·y + ... + a_{n-1}·y^{n-1} as the base-p
/// digit string a_0 + a_1·p + ... + a_{n-1}·p^{n-1}.
#[derive(Debug, Clone)]
pub struct GfTables {
    order: u32,
    characteristic: u32,
    degree: u32,
    /// exp[i] = x^i for i in 0..q-1, where x is the fixed generator.
    exp: Vec<u32>,
    /// log[exp[i]] = i; log[0] is never consulted.
    log: Vec<u32>,
}

impl GfTables {
    /// Build tables for the prime field GF(p).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotPrimePower`] if `p` is not prime.
    pub fn new_prime(p: u32) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::NotPrimePower(p));
        }
        let mul = move |a: u32, b: u32| ((u64::from(a) * u64::from(b)) % u64::from(p)) as u32;
        Ok(Self::assemble(p, p, 1, mul))
    }

    /// Build tables for GF(p^n), reducing by a tabulated irreducible
    /// polynomial when n > 1.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotPrimePower`] if `q` is not a prime power, or
    /// [`Error::NoIrreduciblePolynomial`] if the polynomial table has no
    /// entry for this order.
    pub fn new_extension(q: u32) -> Result<Self> {
        let pp = factor_prime_power(q).ok_or(Error::NotPrimePower(q))?;
        if pp.exponent == 1 {
            return Self::new_prime(q);
        }

        let (p, n) = (pp.prime, pp.exponent);
        let modulus = super::poly::get_irreducible_poly(p, n)
            .ok_or(Error::NoIrreduciblePolynomial(q))?;

        let mul = move |a: u32, b: u32| poly_mul(a, b, p, n, &modulus);
        Ok(Self::assemble(q, p, n, mul))
    }

    fn assemble(
        order: u32,
        characteristic: u32,
        degree: u32,
        raw_mul: impl Fn(u32, u32) -> u32,
    ) -> Self {
        let generator = find_generator(order, &raw_mul);
        let units = (order - 1) as usize;
        let mut exp = Vec::with_capacity(units);
        let mut log = vec![0u32; order as usize];
        let mut y = 1u32;
        for i in 0..units {
            exp.push(y);
            log[y as usize] = i as u32;
            y = raw_mul(y, generator);
        }

        Self {
            order,
            characteristic,
            degree,
            exp,
            log,
        }
    }

    /// The field order q.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// The prime characteristic p.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.characteristic
    }

    /// The extension degree n.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// The fixed multiplicative generator of the unit group.
    #[must_use]
    pub fn generator(&self) -> u32 {
        // exp[0] = 1, exp[1] = x; GF(2) has only the trivial unit.
        self.exp.get(1).copied().unwrap_or(1)
    }

    /// a + b.
    #[must_use]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        if self.characteristic == 2 {
            a ^ b
        } else if self.degree == 1 {
            ((u64::from(a) + u64::from(b)) % u64::from(self.order)) as u32
        } else {
            let p = self.characteristic;
            poly_combine(a, b, p, self.degree, |x, y| (x + y) % p)
        }
    }

    /// a - b.
    #[must_use]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        if self.characteristic == 2 {
            a ^ b
        } else {
            self.add(a, self.neg(b))
        }
    }

    /// -a.
    #[must_use]
    pub fn neg(&self, a: u32) -> u32 {
        if self.characteristic == 2 {
            a
        } else if self.degree == 1 {
            if a == 0 { 0 } else { self.order - a }
        } else {
            let p = self.characteristic;
            poly_combine(0, a, p, self.degree, |_, y| (p - y) % p)
        }
    }

    /// a · b.
    #[must_use]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let units = self.order - 1;
        let i = (self.log[a as usize] + self.log[b as usize]) % units;
        self.exp[i as usize]
    }

    /// a^(-1).
    ///
    /// # Panics
    ///
    /// Panics if `a` is zero.
    #[must_use]
    pub fn inv(&self, a: u32) -> u32 {
        assert!(a != 0, "inverse of zero");
        let units = self.order - 1;
        let i = (units - self.log[a as usize]) % units;
        self.exp[i as usize]
    }

    /// a^e.
    #[must_use]
    pub fn pow(&self, a: u32, e: u32) -> u32 {
        if a == 0 {
            return u32::from(e == 0);
        }
        let units = u64::from(self.order - 1);
        let i = (u64::from(self.log[a as usize]) * u64::from(e)) % units;
        self.exp[i as usize]
    }
}

/// Scan for the smallest element of multiplicative order q-1.
///
/// An element generates the unit group iff a^((q-1)/p) != 1 for every
/// distinct prime p | q-1; the unit group of a finite field is cyclic, so
/// some element always passes.
fn find_generator(order: u32, raw_mul: &impl Fn(u32, u32) -> u32) -> u32 {
    let units = order - 1;
    let checks = distinct_prime_factors(units);

    let pow = |mut base: u32, mut e: u32| {
        let mut acc = 1u32;
        while e > 0 {
            if e & 1 == 1 {
                acc = raw_mul(acc, base);
            }
            e >>= 1;
            base = raw_mul(base, base);
        }
        acc
    };

    (1..order)
        .find(|&a| checks.iter().all(|&p| pow(a, units / p) != 1))
        .unwrap_or(1)
}

/// Apply `op` to the base-p digits of a and b pairwise.
fn poly_combine(a: u32, b: u32, p: u32, n: u32, op: impl Fn(u32, u32) -> u32) -> u32 {
    let (mut a, mut b) = (a, b);
    let mut out = 0u32;
    let mut place = 1u32;
    for _ in 0..n {
        out += op(a % p, b % p) * place;
        a /= p;
        b /= p;
        place *= p;
    }
    out
}

/// Schoolbook polynomial product reduced by the irreducible modulus.
///
/// `modulus` holds the low coefficients [c_0, ..., c_{n-1}] of the monic
/// polynomial y^n + c_{n-1}·y^{n-1} + ... + c_0, so y^n ≡ -(c_{n-1}·y^{n-1}
/// + ... + c_0).
fn poly_mul(a: u32, b: u32, p: u32, n: u32, modulus: &[u32]) -> u32 {
    let n = n as usize;
    let digits = |mut v: u32| {
        let mut d = vec![0u32; n];
        for slot in &mut d {
            *slot = v % p;
            v /= p;
        }
        d
    };
    let (da, db) = (digits(a), digits(b));

    let mut prod = vec![0u32; 2 * n - 1];
    for (i, &ca) in da.iter().enumerate() {
        for (j, &cb) in db.iter().enumerate() {
            prod[i + j] = (prod[i + j] + ca * cb) % p;
        }
    }

    for i in (n..prod.len()).rev() {
        let carry = prod[i];
        if carry == 0 {
            continue;
        }
        prod[i] = 0;
        for (j, &c) in modulus.iter().enumerate() {
            prod[i - n + j] = (prod[i - n + j] + p - (carry * c) % p) % p;
        }
    }

    let mut out = 0u32;
    let mut place = 1u32;
    for &c in prod.iter().take(n) {
        out += c * place;
        place *= p;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_field_arithmetic() {
        let gf7 = GfTables::new_prime(7).unwrap();

        assert_eq!(gf7.add(3, 5), 1);
        assert_eq!(gf7.sub(3, 5), 5);
        assert_eq!(gf7.mul(3, 5), 1);
        assert_eq!(gf7.mul(0, 5), 0);
        assert_eq!(gf7.mul(4, 0), 0);

        for a in 1..7u32 {
            assert_eq!(gf7.mul(a, gf7.inv(a)), 1, "a={a}");
        }
        for a in 0..7u32 {
            assert_eq!(gf7.add(a, gf7.neg(a)), 0, "a={a}");
        }
    }

    #[test]
    fn test_extension_field_axioms() {
        let gf9 = GfTables::new_extension(9).unwrap();
        assert_eq!(
            (gf9.order(), gf9.characteristic(), gf9.degree()),
            (9, 3, 2)
        );

        for a in 0..9u32 {
            assert_eq!(gf9.add(a, 0), a);
            assert_eq!(gf9.add(a, gf9.neg(a)), 0);
            assert_eq!(gf9.mul(a, 1), a);
            if a != 0 {
                assert_eq!(gf9.mul(a, gf9.inv(a)), 1);
            }
            for b in 0..9u32 {
                assert_eq!(gf9.mul(a, b), gf9.mul(b, a));
                assert_eq!(gf9.add(a, b), gf9.add(b, a));
            }
        }

        // Distributivity on a spot-check grid.
        for a in 0..9u32 {
            for b in 0..9u32 {
                for c in [0u32, 1, 4, 8] {
                    assert_eq!(
                        gf9.mul(a, gf9.add(b, c)),
                        gf9.add(gf9.mul(a, b), gf9.mul(a, c))
                    );
                }
            }
        }
    }

    #[test]
    fn test_char2_addition_is_xor() {
        let gf16 = GfTables::new_extension(16).unwrap();
        for a in 0..16u32 {
            for b in 0..16u32 {
                assert_eq!(gf16.add(a, b), a ^ b);
                assert_eq!(gf16.sub(a, b), a ^ b);
            }
            assert_eq!(gf16.neg(a), a);
        }
    }

    #[test]
    fn test_generator_has_full_order() {
        for q in [2u32, 3, 4, 5, 7, 8, 9, 11, 13, 16, 25, 27, 73] {
            let tables = GfTables::new_extension(q).unwrap();
            let x = tables.generator();

            let mut seen = vec![false; q as usize];
            let mut y = 1u32;
            for _ in 0..(q - 1) {
                assert!(!seen[y as usize], "generator of GF({q}) has short order");
                seen[y as usize] = true;
                y = tables.mul(y, x);
            }
            assert_eq!(y, 1);
        }
    }

    #[test]
    fn test_generator_is_smallest() {
        // Smallest primitive roots: 3 mod 7, 2 mod 13, 5 mod 73.
        assert_eq!(GfTables::new_prime(7).unwrap().generator(), 3);
        assert_eq!(GfTables::new_prime(13).unwrap().generator(), 2);
        assert_eq!(GfTables::new_prime(73).unwrap().generator(), 5);
    }

    #[test]
    fn test_pow() {
        let gf7 = GfTables::new_prime(7).unwrap();
        assert_eq!(gf7.pow(3, 0), 1);
        assert_eq!(gf7.pow(3, 2), 2);
        assert_eq!(gf7.pow(3, 6), 1);
        assert_eq!(gf7.pow(0, 0), 1);
        assert_eq!(gf7.pow(0, 5), 0);
    }

    #[test]
    fn test_large_prime_field() {
        // Orders above 2^16 must stay cheap to build and arithmetically
        // exact; 65537 is prime with smallest primitive root 3.
        let gf = GfTables::new_prime(65537).unwrap();
        assert_eq!(gf.generator(), 3);
        assert_eq!(gf.add(65536, 1), 0);
        assert_eq!(gf.sub(0, 1), 65536);
        assert_eq!(gf.neg(2), 65535);
        // 65536 ≡ -1, so its square is 1 and it is self-inverse.
        assert_eq!(gf.mul(65536, 65536), 1);
        assert_eq!(gf.inv(65536), 65536);
    }

    #[test]
    fn test_rejects_non_prime_power() {
        assert!(matches!(
            GfTables::new_prime(6),
            Err(Error::NotPrimePower(6))
        ));
        assert!(GfTables::new_extension(6).is_err());
        assert!(GfTables::new_extension(10).is_err());
        assert!(GfTables::new_extension(0).is_err());
    }
}
