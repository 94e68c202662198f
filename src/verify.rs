//! Difference family verification.
//!
//! A family D = {D_1, ..., D_b} of k-subsets of a group G is a
//! (v,k,λ)-difference family when the multiset of within-block differences
//! covers every non-identity element of G exactly λ times. This module
//! checks that counting invariant exhaustively, failing fast on the first
//! violation: verification runs inside search loops on partially wrong
//! candidates, and must not pay full-scan cost on obviously bad input.
//!
//! [`verify_family`] returns a structured report; [`is_difference_family`]
//! is the plain predicate over it.

use std::collections::HashMap;

use crate::error::Result;
use crate::group::{group_law, Group};

/// A specific violation found while checking a candidate family.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FamilyIssue {
    /// The group's cardinality does not match the required v.
    CardinalityMismatch {
        /// Required group order.
        expected: u32,
        /// Actual group order.
        actual: u32,
    },
    /// Groups with fewer than two elements have no non-identity differences.
    GroupTooSmall {
        /// The group order.
        v: u32,
    },
    /// A block does not have exactly k elements.
    BlockSize {
        /// Index of the offending block.
        block: usize,
        /// Required block size.
        expected: usize,
        /// Actual block size.
        actual: usize,
    },
    /// The counting relation b·k·(k-1) = λ·(v-1) does not hold (or, with λ
    /// inferred, b·k·(k-1) is not divisible by v-1).
    CountingRelation {
        /// Number of blocks.
        b: usize,
        /// Block size.
        k: usize,
        /// Supplied multiplicity, if any.
        lambda: Option<u32>,
        /// Group order.
        v: u32,
    },
    /// Two positions of one block hold the same group element.
    RepeatedElement {
        /// Index of the offending block.
        block: usize,
    },
    /// A coerced value is not an element of the group.
    ElementOutsideGroup {
        /// Index of the offending block.
        block: usize,
        /// The foreign encoding.
        element: u32,
    },
    /// Some non-identity element occurs more than λ times as a difference.
    OverrepresentedDifference {
        /// The over-covered group element.
        element: u32,
        /// The multiplicity bound that was exceeded.
        lambda: u32,
    },
}

/// Result of checking a candidate difference family.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FamilyCheck {
    /// Whether the candidate is a difference family.
    pub is_valid: bool,
    /// Group order v.
    pub v: u32,
    /// Block size k (as supplied or inferred).
    pub k: usize,
    /// Difference multiplicity λ (as supplied or inferred); meaningful only
    /// when the counting relation held.
    pub lambda: u32,
    /// The first violation found, if any.
    pub issue: Option<FamilyIssue>,
}

impl FamilyCheck {
    fn failure(v: u32, k: usize, lambda: u32, issue: FamilyIssue) -> Self {
        Self {
            is_valid: false,
            v,
            k,
            lambda,
            issue: Some(issue),
        }
    }
}

/// Check whether `family` is a (v,k,λ)-difference family in `group`.
///
/// Omitted parameters are inferred: v from the group's cardinality, k from
/// the first block, and λ from the counting relation
/// b·k·(k-1) = λ·(v-1). Block entries are raw values coerced through the
/// group, so e.g. negative representatives of Z/nZ are accepted.
///
/// The check walks every ordered pair of distinct positions within each
/// block, computing the difference `combine(dᵢ, invert(dⱼ))` and counting
/// its occurrences; it stops at the first repeated element or at the first
/// counter exceeding λ. If no counter ever exceeds λ, the counting relation
/// forces every counter to equal λ exactly, so a clean walk is a proof.
///
/// Complexity: O(b·k²) group operations plus O(v) counter initialization.
///
/// # Errors
///
/// Returns an error only if the group cannot be classified as additive or
/// multiplicative.
///
/// # Example
///
/// ```
/// use diffset::group::Zmod;
/// use diffset::verify::verify_family;
///
/// let g = Zmod::new(21);
/// let check = verify_family(&g, &[vec![0, 1, 4, 14, 16]], None, None, None).unwrap();
/// assert!(check.is_valid);
/// assert_eq!((check.v, check.k, check.lambda), (21, 5, 1));
/// ```
pub fn verify_family<G, T>(
    group: &G,
    family: &[Vec<T>],
    v: Option<u32>,
    k: Option<usize>,
    lambda: Option<u32>,
) -> Result<FamilyCheck>
where
    G: Group + ?Sized,
    T: Copy + Into<i64>,
{
    let law = group_law(group)?;

    let actual_v = group.cardinality();
    if let Some(expected) = v {
        if actual_v != expected {
            return Ok(FamilyCheck::failure(
                expected,
                k.unwrap_or(0),
                lambda.unwrap_or(0),
                FamilyIssue::CardinalityMismatch {
                    expected,
                    actual: actual_v,
                },
            ));
        }
    }
    let v = actual_v;

    let k = k.unwrap_or_else(|| family.first().map_or(0, Vec::len));
    let b = family.len();

    if v < 2 {
        return Ok(FamilyCheck::failure(
            v,
            k,
            lambda.unwrap_or(0),
            FamilyIssue::GroupTooSmall { v },
        ));
    }

    for (index, block) in family.iter().enumerate() {
        if block.len() != k {
            return Ok(FamilyCheck::failure(
                v,
                k,
                lambda.unwrap_or(0),
                FamilyIssue::BlockSize {
                    block: index,
                    expected: k,
                    actual: block.len(),
                },
            ));
        }
    }

    // Total number of ordered within-block differences.
    let total = (b as u64) * (k as u64) * (k.saturating_sub(1) as u64);
    let lambda = match lambda {
        Some(l) => {
            if total != u64::from(l) * u64::from(v - 1) {
                return Ok(FamilyCheck::failure(
                    v,
                    k,
                    l,
                    FamilyIssue::CountingRelation {
                        b,
                        k,
                        lambda: Some(l),
                        v,
                    },
                ));
            }
            l
        }
        None => {
            if total % u64::from(v - 1) != 0 {
                return Ok(FamilyCheck::failure(
                    v,
                    k,
                    0,
                    FamilyIssue::CountingRelation {
                        b,
                        k,
                        lambda: None,
                        v,
                    },
                ));
            }
            u32::try_from(total / u64::from(v - 1)).unwrap_or(u32::MAX)
        }
    };

    // Every non-identity element must occur exactly lambda times as a
    // difference.
    let identity = law.identity();
    let mut counter: HashMap<u32, u32> = group
        .elements()
        .into_iter()
        .filter(|&g| g != identity)
        .map(|g| (g, 0))
        .collect();

    for (index, block) in family.iter().enumerate() {
        let coerced: Vec<u32> = block.iter().map(|&raw| group.coerce(raw.into())).collect();

        for i in 0..k {
            for j in 0..k {
                if i == j {
                    continue;
                }
                let diff = law.combine(coerced[i], law.invert(coerced[j]));
                if diff == identity {
                    return Ok(FamilyCheck::failure(
                        v,
                        k,
                        lambda,
                        FamilyIssue::RepeatedElement { block: index },
                    ));
                }
                let Some(count) = counter.get_mut(&diff) else {
                    return Ok(FamilyCheck::failure(
                        v,
                        k,
                        lambda,
                        FamilyIssue::ElementOutsideGroup {
                            block: index,
                            element: diff,
                        },
                    ));
                };
                *count += 1;
                if *count > lambda {
                    return Ok(FamilyCheck::failure(
                        v,
                        k,
                        lambda,
                        FamilyIssue::OverrepresentedDifference {
                            element: diff,
                            lambda,
                        },
                    ));
                }
            }
        }
    }

    Ok(FamilyCheck {
        is_valid: true,
        v,
        k,
        lambda,
        issue: None,
    })
}

/// Predicate form of [`verify_family`].
///
/// Unclassifiable groups verify false.
///
/// # Example
///
/// ```
/// use diffset::group::Zmod;
/// use diffset::is_difference_family;
///
/// let g = Zmod::new(41);
/// let good = [vec![0, 1, 4, 11, 29], vec![0, 2, 8, 17, 22]];
/// let bad = [vec![0, 1, 4, 11, 29], vec![0, 2, 8, 17, 21]];
///
/// assert!(is_difference_family(&g, &good, None, None, None));
/// assert!(!is_difference_family(&g, &bad, None, None, None));
/// ```
#[must_use]
pub fn is_difference_family<G, T>(
    group: &G,
    family: &[Vec<T>],
    v: Option<u32>,
    k: Option<usize>,
    lambda: Option<u32>,
) -> bool
where
    G: Group + ?Sized,
    T: Copy + Into<i64>,
{
    verify_family(group, family, v, k, lambda).map_or(false, |check| check.is_valid)
}
