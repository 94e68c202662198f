//! Cyclotomic cosets of a finite field's unit group.
//!
//! Let q be the cardinality of K and e a divisor of q-1. With x a
//! multiplicative generator of K*, the e-th powers H = {x^(e·s)} form a
//! subgroup of index e, and the e-th cyclotomic cosets are the cosets of H
//! in K*. These cosets are the raw material of every construction in this
//! crate: taken all together they form a (q, f, f-1)-difference family with
//! f = (q-1)/e, and single cosets give the classical residue difference
//! sets.
//!
//! The output depends on which generator the field fixes; see
//! [`DynamicGf::multiplicative_generator`] for this backend's deterministic
//! choice.

use std::collections::{HashMap, HashSet};

use crate::gf::DynamicGf;

/// Return the e-th cyclotomic cosets of K*.
///
/// Each returned coset is the list `{y·x^(e·s) : s = 0..f-1}` for a
/// representative y, where f = (q-1)/e. With the default representatives
/// `x^0, ..., x^(e-1)` the cosets partition the non-zero elements of K.
/// An explicit `representatives` slice restricts the output to the cosets
/// containing those elements. With `with_zero`, each coset is prefixed with
/// the field's zero (used by the quartic-residue-with-zero difference set).
///
/// # Panics
///
/// Panics unless `e >= 1` and e divides q-1; calling with such an `e` is a
/// caller error, not a recoverable condition.
///
/// # Example
///
/// ```
/// use diffset::cosets::cyclotomic_cosets;
/// use diffset::gf::DynamicGf;
///
/// let gf7 = DynamicGf::new(7).unwrap();
/// let cosets = cyclotomic_cosets(&gf7, 2, None, false);
/// assert_eq!(cosets, vec![vec![1, 2, 4], vec![3, 6, 5]]);
/// ```
#[must_use]
pub fn cyclotomic_cosets(
    field: &DynamicGf,
    e: u32,
    representatives: Option<&[u32]>,
    with_zero: bool,
) -> Vec<Vec<u32>> {
    let q = field.order();
    assert!(e >= 1, "coset index e must be at least 1");
    assert_eq!((q - 1) % e, 0, "e must divide q-1 (got q={q}, e={e})");

    let f = (q - 1) / e;
    let tables = field.tables();
    let x = tables.generator();
    let xx = tables.pow(x, e);

    let default_reps: Vec<u32>;
    let reps: &[u32] = match representatives {
        Some(reps) => reps,
        None => {
            default_reps = (0..e).map(|i| tables.pow(x, i)).collect();
            &default_reps
        }
    };

    reps.iter()
        .map(|&y| {
            let mut coset = Vec::with_capacity((f + u32::from(with_zero)) as usize);
            if with_zero {
                coset.push(0);
            }
            let mut elt = y;
            for _ in 0..f {
                coset.push(elt);
                elt = tables.mul(elt, xx);
            }
            coset
        })
        .collect()
}

/// Map each non-zero element of K to the index of its coset among the m
/// cosets of the subgroup generated by x^m.
///
/// The map sends x^i · (x^m)^j to i for i in 0..m. It is rebuilt per search
/// and consumed transiently by the Wilson constructions, which test
/// candidate differences for distinct coset membership.
pub(crate) fn coset_index_map(field: &DynamicGf, m: u32) -> HashMap<u32, usize> {
    let q = field.order();
    debug_assert!(m >= 1 && (q - 1) % m == 0);

    let tables = field.tables();
    let x = tables.generator();
    let xx = tables.pow(x, m);
    let f = (q - 1) / m;

    let mut map = HashMap::with_capacity((q - 1) as usize);
    for i in 0..m {
        let mut elt = tables.pow(x, i);
        for _ in 0..f {
            map.insert(elt, i as usize);
            elt = tables.mul(elt, xx);
        }
    }
    map
}

/// Check that every element of `elts` is non-zero and that their images
/// under `to_coset` are pairwise distinct and avoid the pre-seeded images
/// in `seen`.
///
/// Consumption of `elts` stops at the first violation, so callers may pass
/// lazily produced sequences without materializing elements the check will
/// never look at. The search loops rely on this: most candidates fail on
/// the first or second element.
pub(crate) fn nonzero_distinct_images<I>(
    elts: I,
    to_coset: &HashMap<u32, usize>,
    mut seen: HashSet<usize>,
) -> bool
where
    I: IntoIterator<Item = u32>,
{
    for elt in elts {
        if elt == 0 {
            return false;
        }
        let Some(&image) = to_coset.get(&elt) else {
            return false;
        };
        if !seen.insert(image) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_cosets_partition_units() {
        for (q, e) in [(7u32, 2u32), (7, 3), (13, 4), (16, 5), (27, 13), (73, 8)] {
            let field = DynamicGf::new(q).unwrap();
            let cosets = cyclotomic_cosets(&field, e, None, false);

            assert_eq!(cosets.len(), e as usize);
            let f = (q - 1) / e;
            for coset in &cosets {
                assert_eq!(coset.len(), f as usize, "GF({q}), e={e}");
            }

            let mut all: Vec<u32> = cosets.iter().flatten().copied().collect();
            all.sort_unstable();
            assert_eq!(all, (1..q).collect::<Vec<u32>>(), "GF({q}), e={e}");
        }
    }

    #[test]
    fn test_gf7_squares() {
        let gf7 = DynamicGf::new(7).unwrap();
        let cosets = cyclotomic_cosets(&gf7, 2, None, false);
        // Generator 3: squares {1, 2, 4}, non-squares {3, 6, 5}
        assert_eq!(cosets, vec![vec![1, 2, 4], vec![3, 6, 5]]);
    }

    #[test]
    fn test_restricted_representative() {
        let gf19 = DynamicGf::new(19).unwrap();
        let cosets = cyclotomic_cosets(&gf19, 2, Some(&[1]), false);
        assert_eq!(cosets.len(), 1);
        assert_eq!(cosets[0].len(), 9);
        // The coset of 1 is exactly the set of non-zero squares mod 19.
        let mut squares: Vec<u32> = (1..19u32).map(|a| a * a % 19).collect();
        squares.sort_unstable();
        squares.dedup();
        let mut got = cosets[0].clone();
        got.sort_unstable();
        assert_eq!(got, squares);
    }

    #[test]
    fn test_with_zero_prefix() {
        let gf13 = DynamicGf::new(13).unwrap();
        let cosets = cyclotomic_cosets(&gf13, 4, Some(&[1]), true);
        assert_eq!(cosets.len(), 1);
        assert_eq!(cosets[0].len(), 4); // f = 3, plus the zero
        assert_eq!(cosets[0][0], 0);
        assert!(cosets[0][1..].iter().all(|&e| e != 0));
    }

    #[test]
    #[should_panic(expected = "must divide")]
    fn test_bad_index_panics() {
        let gf7 = DynamicGf::new(7).unwrap();
        let _ = cyclotomic_cosets(&gf7, 4, None, false);
    }

    #[test]
    fn test_coset_index_map_covers_units() {
        let gf31 = DynamicGf::new(31).unwrap();
        let map = coset_index_map(&gf31, 5);

        assert_eq!(map.len(), 30);
        for i in 0..5usize {
            assert_eq!(map.values().filter(|&&v| v == i).count(), 6);
        }
        // The subgroup itself maps to index 0 and contains 1.
        assert_eq!(map[&1], 0);
    }

    #[test]
    fn test_distinct_images() {
        let map: HashMap<u32, usize> = [(1, 0), (2, 1), (3, 1), (4, 2)].into_iter().collect();

        assert!(nonzero_distinct_images([1, 2], &map, HashSet::new()));
        assert!(nonzero_distinct_images([2, 4], &map, HashSet::new()));
        // 2 and 3 share an image
        assert!(!nonzero_distinct_images([2, 3], &map, HashSet::new()));
        // zero element
        assert!(!nonzero_distinct_images([0, 1], &map, HashSet::new()));
        // element outside the map's domain
        assert!(!nonzero_distinct_images([7], &map, HashSet::new()));
        // forbidden seed
        assert!(nonzero_distinct_images([2, 4], &map, HashSet::from([0])));
        assert!(!nonzero_distinct_images([2, 4], &map, HashSet::from([2])));
    }

    #[test]
    fn test_distinct_images_short_circuits() {
        let map: HashMap<u32, usize> = [(1, 0), (2, 1)].into_iter().collect();

        let consumed = Cell::new(0u32);
        let elts = (0..100u32).map(|i| {
            consumed.set(consumed.get() + 1);
            if i == 1 {
                0 // violation on the second element
            } else {
                1
            }
        });

        assert!(!nonzero_distinct_images(elts, &map, HashSet::new()));
        assert_eq!(consumed.get(), 2, "consumption must stop at the violation");
    }
}
