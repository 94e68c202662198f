//! Difference family construction.
//!
//! The entry points are [`difference_family`], which builds a
//! (v,k,λ)-difference family together with the group it lives in, and
//! [`difference_family_existence`], which answers the existence question
//! without materializing blocks. Construction tries, in order:
//!
//! 1. the counting relation λ·(v-1) ≡ 0 (mod k·(k-1)): failure here is a
//!    disproof, reported as [`Error::InfeasibleParameters`];
//! 2. the database of sporadic constructions;
//! 3. over a finite field (v a prime power): the full set of cyclotomic
//!    cosets when λ = k-1, the classical residue difference sets when the
//!    family is a single block, and the Wilson searches when λ = 1.
//!
//! Anything past step 1 that fails is reported as
//! [`Error::UnsupportedParameters`]: the parameters may well admit a family
//! this crate cannot build. [`Existence`] keeps that three-way distinction.

mod wilson;

use crate::cosets::cyclotomic_cosets;
use crate::database::ConstructionDb;
use crate::error::{Error, Result};
use crate::gf::DynamicGf;
use crate::group::DesignGroup;
use crate::utils::{is_perfect_square, is_prime_power};
use crate::verify::is_difference_family;

/// Answer to the existence question for a parameter triple.
///
/// `Impossible` is a disproof; `Unknown` only means no construction in this
/// crate covers the parameters. The two are never collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Existence {
    /// A difference family with these parameters was constructed.
    Exists,
    /// No difference family with these parameters can exist.
    Impossible,
    /// Existence is undecided by this crate's constructions.
    Unknown,
}

impl Existence {
    /// Whether a family was constructed.
    #[must_use]
    pub fn is_exists(self) -> bool {
        self == Self::Exists
    }

    /// Whether the parameters are disproved.
    #[must_use]
    pub fn is_impossible(self) -> bool {
        self == Self::Impossible
    }

    /// Whether existence is undecided.
    #[must_use]
    pub fn is_unknown(self) -> bool {
        self == Self::Unknown
    }
}

impl std::fmt::Display for Existence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Exists => "exists",
            Self::Impossible => "impossible",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Run the construction sequence without the final verification gate.
fn construct(
    db: &ConstructionDb,
    v: u32,
    k: usize,
    lambda: u32,
) -> Result<(DesignGroup, Vec<Vec<u32>>)> {
    let infeasible = Error::InfeasibleParameters { v, k, lambda };

    // Blocks are k-subsets of a group of order v.
    if k < 2 || lambda == 0 || u64::from(v) < k as u64 {
        return Err(infeasible);
    }

    let e = (k as u64) * (k as u64 - 1);
    let total = u64::from(lambda) * u64::from(v - 1);
    if total % e != 0 {
        return Err(infeasible);
    }
    let unsupported = Error::UnsupportedParameters { v, k, lambda };
    let Ok(t) = u32::try_from(total / e) else {
        return Err(unsupported);
    };

    if let Some(construction) = db.get(v, k, lambda) {
        return construction();
    }

    if is_prime_power(v) {
        let field = DynamicGf::new(v)?;
        let k32 = k as u32;

        // All cyclotomic cosets of index (v-1)/k form a (v, k, k-1)-family.
        if lambda == k32 - 1 {
            let blocks = cyclotomic_cosets(&field, (v - 1) / k32, None, false);
            return Ok((DesignGroup::Field(field), blocks));
        }

        // Single-block families: the classical residue difference sets
        // (Handbook of Combinatorial Designs, VI.18.48).
        if t == 1 {
            // Quadratic residues, v ≡ 3 (mod 4).
            if v % 4 == 3 && k32 == (v - 1) / 2 {
                let blocks = cyclotomic_cosets(&field, 2, Some(&[1]), false);
                return Ok((DesignGroup::Field(field), blocks));
            }
            // Quartic residues, v = 4s² + 1 with s odd.
            if v % 8 == 5 && k32 == (v - 1) / 4 && is_perfect_square(u64::from((v - 1) / 4)) {
                let blocks = cyclotomic_cosets(&field, 4, Some(&[1]), false);
                return Ok((DesignGroup::Field(field), blocks));
            }
            // Quartic residues with zero, v = 4s² + 9 with s odd.
            if v % 8 == 5 && k32 == (v + 3) / 4 && is_perfect_square(u64::from((v - 9) / 4)) {
                let blocks = cyclotomic_cosets(&field, 4, Some(&[1]), true);
                return Ok((DesignGroup::Field(field), blocks));
            }
        }

        if lambda != 1 {
            return Err(unsupported);
        }

        let blocks = if k % 2 == 1 {
            wilson::wilson_odd(&field, k, t)
        } else {
            wilson::wilson_even(&field, k, t)
        };
        let blocks = blocks.or_else(|| (k == 6).then(|| wilson::wilson_k6(&field, t)).flatten());

        if let Some(blocks) = blocks {
            return Ok((DesignGroup::Field(field), blocks));
        }
    }

    Err(unsupported)
}

/// Construct a (v,k,λ)-difference family.
///
/// Returns the group and the family's blocks, with the blocks' entries in
/// the group's integer encoding. With `check`, the constructed family is
/// re-verified before being returned.
///
/// Uses the built-in construction database; [`difference_family_with`]
/// accepts a custom one.
///
/// # Errors
///
/// - [`Error::InfeasibleParameters`] when no (v,k,λ)-difference family can
///   exist.
/// - [`Error::UnsupportedParameters`] when no construction covers the
///   parameters (not a non-existence proof).
/// - [`Error::VerificationFailed`] when `check` is set and the constructed
///   family does not verify.
///
/// # Example
///
/// ```
/// use diffset::difference_family;
///
/// let (group, blocks) = difference_family(73, 4, 1, true).unwrap();
/// assert_eq!(group.to_string(), "GF(73)");
/// assert_eq!(blocks.len(), 6);
/// assert_eq!(blocks[0], vec![0, 1, 8, 64]);
/// ```
pub fn difference_family(
    v: u32,
    k: usize,
    lambda: u32,
    check: bool,
) -> Result<(DesignGroup, Vec<Vec<u32>>)> {
    difference_family_with(&ConstructionDb::new(), v, k, lambda, check)
}

/// [`difference_family`] with a caller-supplied construction database.
///
/// Database entries take precedence over the generic constructions, and
/// their output passes through the same `check` gate.
///
/// # Errors
///
/// Same as [`difference_family`].
pub fn difference_family_with(
    db: &ConstructionDb,
    v: u32,
    k: usize,
    lambda: u32,
    check: bool,
) -> Result<(DesignGroup, Vec<Vec<u32>>)> {
    let (group, blocks) = construct(db, v, k, lambda)?;
    if check && !is_difference_family(&group, &blocks, Some(v), Some(k), Some(lambda)) {
        return Err(Error::VerificationFailed { v, k, lambda });
    }
    Ok((group, blocks))
}

/// Decide whether a (v,k,λ)-difference family exists, as far as this
/// crate's constructions can tell.
///
/// Total over all inputs; degenerate parameters come back `Impossible`.
///
/// # Example
///
/// ```
/// use diffset::{difference_family_existence, Existence};
///
/// assert_eq!(difference_family_existence(31, 6, 1), Existence::Exists);
/// assert_eq!(difference_family_existence(8, 3, 1), Existence::Impossible);
/// assert_eq!(difference_family_existence(61, 6, 1), Existence::Unknown);
/// ```
#[must_use]
pub fn difference_family_existence(v: u32, k: usize, lambda: u32) -> Existence {
    difference_family_existence_with(&ConstructionDb::new(), v, k, lambda)
}

/// [`difference_family_existence`] with a caller-supplied database.
#[must_use]
pub fn difference_family_existence_with(
    db: &ConstructionDb,
    v: u32,
    k: usize,
    lambda: u32,
) -> Existence {
    match construct(db, v, k, lambda) {
        Ok(_) => Existence::Exists,
        Err(Error::InfeasibleParameters { .. }) => Existence::Impossible,
        Err(_) => Existence::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::Group;

    #[test]
    fn test_infeasible_parameters() {
        assert!(matches!(
            difference_family(8, 3, 1, true),
            Err(Error::InfeasibleParameters { v: 8, k: 3, lambda: 1 })
        ));
    }

    #[test]
    fn test_degenerate_parameters() {
        assert!(difference_family(7, 0, 1, true).is_err());
        assert!(difference_family(7, 1, 1, true).is_err());
        assert!(difference_family(7, 3, 0, true).is_err());
        assert!(difference_family(3, 7, 1, true).is_err());
    }

    #[test]
    fn test_database_entry() {
        let (group, blocks) = difference_family(21, 5, 1, true).unwrap();
        assert_eq!(group.to_string(), "Zmod(21)");
        assert_eq!(blocks, vec![vec![0, 1, 4, 14, 16]]);
    }

    #[test]
    fn test_quadratic_residue_set() {
        // With the database bypassed, (7,3,1) comes from the quadratic
        // residues of GF(7).
        let db = ConstructionDb::empty();
        let (group, blocks) = difference_family_with(&db, 7, 3, 1, true).unwrap();
        assert_eq!(group.to_string(), "GF(7)");
        assert_eq!(blocks, vec![vec![1, 2, 4]]);
    }

    #[test]
    fn test_quartic_residue_set_with_zero() {
        // 13 = 4·1 + 9: quartic residues plus zero.
        let db = ConstructionDb::empty();
        let (group, blocks) = difference_family_with(&db, 13, 4, 1, true).unwrap();
        assert_eq!(group.to_string(), "GF(13)");
        assert_eq!(blocks, vec![vec![0, 1, 3, 9]]);
    }

    #[test]
    fn test_quartic_residue_set() {
        // 37 = 4·9 + 1: quartic residues, k = 9, single block.
        let (group, blocks) = difference_family(37, 9, 2, true).unwrap();
        assert_eq!(group.cardinality(), 37);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 9);
    }

    #[test]
    fn test_all_cosets_when_lambda_is_k_minus_one() {
        // λ = k-1 is the full cyclotomic coset family.
        let (group, blocks) = difference_family(7, 3, 2, true).unwrap();
        assert_eq!(group.to_string(), "GF(7)");
        assert_eq!(blocks, vec![vec![1, 2, 4], vec![3, 6, 5]]);

        // Same construction over an extension field.
        let (group, blocks) = difference_family(16, 3, 2, true).unwrap();
        assert_eq!(group.cardinality(), 16);
        assert_eq!(blocks.len(), 5);
    }

    #[test]
    fn test_wilson_even() {
        let (group, blocks) = difference_family(73, 4, 1, true).unwrap();
        assert_eq!(group.to_string(), "GF(73)");
        assert_eq!(blocks[0], vec![0, 1, 8, 64]);
        assert_eq!(blocks.len(), 6);
    }

    #[test]
    fn test_wilson_odd() {
        let (group, blocks) = difference_family(337, 7, 1, true).unwrap();
        assert_eq!(blocks.len(), 8);
        assert_eq!(group.cardinality(), 337);
    }

    #[test]
    fn test_k6_fallback() {
        let (group, blocks) = difference_family(31, 6, 1, true).unwrap();
        assert_eq!(group.to_string(), "GF(31)");
        assert_eq!(blocks, vec![vec![1, 25, 5, 11, 27, 24]]);
    }

    #[test]
    fn test_higher_lambda_families() {
        for (v, k, lambda) in [(11u32, 5usize, 2u32), (16, 5, 4), (19, 3, 2), (19, 9, 8), (23, 11, 5)] {
            let (_, blocks) = difference_family(v, k, lambda, true).unwrap();
            assert!(!blocks.is_empty(), "({v},{k},{lambda})");
        }
    }

    #[test]
    fn test_existence() {
        assert_eq!(difference_family_existence(7, 3, 1), Existence::Exists);
        assert_eq!(difference_family_existence(31, 6, 1), Existence::Exists);
        assert_eq!(difference_family_existence(8, 3, 1), Existence::Impossible);
        // 61 and 121 are the known holes for k = 6 among small prime powers.
        assert_eq!(difference_family_existence(61, 6, 1), Existence::Unknown);
        // 22 is feasible by counting but is not a prime power.
        assert_eq!(difference_family_existence(22, 7, 2), Existence::Unknown);
        // Degenerate input must not panic.
        assert_eq!(difference_family_existence(0, 0, 0), Existence::Impossible);
    }

    #[test]
    fn test_existence_total_above_u16_orders() {
        // (65537, 2, 1) is a feasible λ = k-1 triple over a large prime
        // field; the query must answer, not exhaust memory or overflow.
        assert_eq!(difference_family_existence(65537, 2, 1), Existence::Exists);
    }

    #[test]
    fn test_existence_sweep_k5() {
        // k = 5, v ≡ 1 (mod 20): theorem 9's condition holds for 41, 61 and
        // 241 but not for 101 or 181, and 141 is not a prime power. A failed
        // search is never reported as Impossible.
        for (v, expected) in [
            (41u32, Existence::Exists),
            (61, Existence::Exists),
            (101, Existence::Unknown),
            (141, Existence::Unknown),
            (181, Existence::Unknown),
            (241, Existence::Exists),
        ] {
            assert_eq!(difference_family_existence(v, 5, 1), expected, "v = {v}");
        }
    }

    #[test]
    fn test_custom_database_takes_precedence() {
        let mut db = ConstructionDb::empty();
        db.insert(7, 3, 1, || {
            Ok((
                crate::group::DesignGroup::Cyclic(crate::group::Zmod::new(7)),
                vec![vec![0, 1, 3]],
            ))
        });
        let (group, blocks) = difference_family_with(&db, 7, 3, 1, true).unwrap();
        assert_eq!(group.to_string(), "Zmod(7)");
        assert_eq!(blocks, vec![vec![0, 1, 3]]);
    }

    #[test]
    fn test_check_gate_rejects_bad_database_entry() {
        let mut db = ConstructionDb::empty();
        db.insert(7, 3, 1, || {
            Ok((
                crate::group::DesignGroup::Cyclic(crate::group::Zmod::new(7)),
                vec![vec![0, 1, 2]],
            ))
        });
        assert!(matches!(
            difference_family_with(&db, 7, 3, 1, true),
            Err(Error::VerificationFailed { .. })
        ));
        // Without the gate the entry passes through untouched.
        assert!(difference_family_with(&db, 7, 3, 1, false).is_ok());
    }

    #[test]
    fn test_constructed_families_verify() {
        use crate::verify::is_difference_family;

        for (v, k, lambda) in [
            (7u32, 3usize, 1u32),
            (13, 4, 1),
            (37, 9, 2),
            (41, 5, 1),
            (61, 5, 1),
            (73, 4, 1),
            (101, 25, 6),
        ] {
            let (group, blocks) = difference_family(v, k, lambda, false).unwrap();
            assert!(
                is_difference_family(&group, &blocks, Some(v), Some(k), Some(lambda)),
                "({v},{k},{lambda})"
            );
        }
    }
}
