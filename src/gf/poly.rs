//! Irreducible polynomials for extension field construction.
//!
//! GF(p^n) is built as GF(p)[y] modulo a monic irreducible polynomial of
//! degree n. Each table entry packs the low coefficients of one such
//! polynomial into a single integer using the same base-p digit encoding
//! the field uses for its elements: the entry c encodes
//! y^n + c_{n-1}·y^{n-1} + ... + c_1·y + c_0 with c = Σ c_i·p^i (the
//! leading coefficient is implicit).
//!
//! Prime power orders outside this table cannot be instantiated as fields;
//! the constructor treats such parameters as having no known construction
//! rather than as infeasible.

/// Packed irreducible polynomials: (p, n, packed low coefficients).
static IRREDUCIBLE_POLYS: &[(u32, u32, u32)] = &[
    (2, 2, 3),   // y^2 + y + 1
    (2, 3, 3),   // y^3 + y + 1
    (2, 4, 3),   // y^4 + y + 1
    (2, 5, 5),   // y^5 + y^2 + 1
    (2, 6, 3),   // y^6 + y + 1
    (2, 7, 9),   // y^7 + y^3 + 1
    (2, 8, 27),  // y^8 + y^4 + y^3 + y + 1
    (3, 2, 1),   // y^2 + 1
    (3, 3, 7),   // y^3 + 2y + 1
    (3, 4, 56),  // y^4 + 2y^3 + 2
    (5, 2, 2),   // y^2 + 2
    (5, 3, 6),   // y^3 + y + 1
    (7, 2, 1),   // y^2 + 1
    (11, 2, 1),  // y^2 + 1
    (13, 2, 2),  // y^2 + 2
];

/// Look up an irreducible polynomial for GF(p^n), unpacked to its low
/// coefficients `[c_0, ..., c_{n-1}]`.
#[must_use]
pub fn get_irreducible_poly(p: u32, n: u32) -> Option<Vec<u32>> {
    let &(_, _, packed) = IRREDUCIBLE_POLYS
        .iter()
        .find(|&&(tp, tn, _)| tp == p && tn == n)?;

    let mut coeffs = Vec::with_capacity(n as usize);
    let mut rest = packed;
    for _ in 0..n {
        coeffs.push(rest % p);
        rest /= p;
    }
    Some(coeffs)
}

/// Whether GF(p^n) can be instantiated from the polynomial table.
#[must_use]
pub fn has_irreducible_poly(p: u32, n: u32) -> bool {
    IRREDUCIBLE_POLYS.iter().any(|&(tp, tn, _)| tp == p && tn == n)
}

/// All extension field orders the table covers, in table order.
#[must_use]
pub fn available_field_orders() -> Vec<u32> {
    IRREDUCIBLE_POLYS.iter().map(|&(p, n, _)| p.pow(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpacking() {
        assert_eq!(get_irreducible_poly(2, 2).unwrap(), vec![1, 1]);
        assert_eq!(get_irreducible_poly(2, 8).unwrap(), vec![1, 1, 0, 1, 1, 0, 0, 0]);
        assert_eq!(get_irreducible_poly(3, 3).unwrap(), vec![1, 2, 0]);
        assert_eq!(get_irreducible_poly(3, 4).unwrap(), vec![2, 0, 0, 2]);
        assert_eq!(get_irreducible_poly(5, 3).unwrap(), vec![1, 1, 0]);
        assert!(get_irreducible_poly(17, 5).is_none());
    }

    #[test]
    fn test_availability() {
        assert!(has_irreducible_poly(2, 4));
        assert!(has_irreducible_poly(11, 2));
        assert!(!has_irreducible_poly(17, 5));

        let orders = available_field_orders();
        for q in [4u32, 16, 27, 81, 121, 125, 169] {
            assert!(orders.contains(&q), "GF({q}) should be available");
        }
    }
}
