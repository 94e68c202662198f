//! Wilson's difference family constructions over finite fields.
//!
//! These are the three searches of Wilson, "Cyclotomy and difference
//! families in elementary abelian groups" (1972): Theorem 9 for odd block
//! size, Theorem 10 for even block size, and the Theorem 11 fallback for
//! k = 6. All three fix a base block B built from roots of unity in K and,
//! when a coset-distinctness condition on the differences of B holds,
//! translate B by powers of the generator to tile the unit group. Each
//! search either produces a family with λ = 1 or reports that its condition
//! failed; failure of the search is not a non-existence proof.

use std::collections::HashSet;

use crate::cosets::{coset_index_map, nonzero_distinct_images};
use crate::gf::DynamicGf;

/// Translate the base block by x^(i·m) for i in 0..t.
fn translates(field: &DynamicGf, base: &[u32], m: u32, t: u32) -> Vec<Vec<u32>> {
    let tables = field.tables();
    let x = tables.generator();
    (0..t)
        .map(|i| {
            let scale = tables.pow(x, i * m);
            base.iter().map(|&b| tables.mul(scale, b)).collect()
        })
        .collect()
}

/// Wilson's Theorem 9: odd k, λ = 1, t blocks.
///
/// With m = (k-1)/2 and r a primitive k-th root of unity, the base block is
/// {1, r, ..., r^(k-1)}. The family exists when the differences r^j - 1 for
/// j = 1..m fall into pairwise distinct cosets of the index-m subgroup.
pub(super) fn wilson_odd(field: &DynamicGf, k: usize, t: u32) -> Option<Vec<Vec<u32>>> {
    let q = field.order();
    let k = k as u32;
    let m = (k - 1) / 2;

    let tables = field.tables();
    let x = tables.generator();
    let r = tables.pow(x, (q - 1) / k);
    let to_coset = coset_index_map(field, m);

    let diffs = (1..=m).map(|j| tables.sub(tables.pow(r, j), 1));
    if !nonzero_distinct_images(diffs, &to_coset, HashSet::new()) {
        return None;
    }

    let base: Vec<u32> = (0..k).map(|j| tables.pow(r, j)).collect();
    Some(translates(field, &base, m, t))
}

/// Wilson's Theorem 10: even k, λ = 1, t blocks.
///
/// With m = k/2 and r a primitive (k-1)-th root of unity, the base block is
/// {0, 1, r, ..., r^(k-2)}. The differences involving zero are ±r^j, which
/// always land in the subgroup's own coset, so that coset is pre-claimed
/// and the r^j - 1 for j = 1..m-1 must occupy the remaining m-1 cosets.
pub(super) fn wilson_even(field: &DynamicGf, k: usize, t: u32) -> Option<Vec<Vec<u32>>> {
    let q = field.order();
    let k = k as u32;
    let m = k / 2;

    let tables = field.tables();
    let x = tables.generator();
    let r = tables.pow(x, (q - 1) / (k - 1));
    let to_coset = coset_index_map(field, m);

    let diffs = (1..m).map(|j| tables.sub(tables.pow(r, j), 1));
    if !nonzero_distinct_images(diffs, &to_coset, HashSet::from([0])) {
        return None;
    }

    let mut base = Vec::with_capacity(k as usize);
    base.push(0);
    base.extend((0..k - 1).map(|j| tables.pow(r, j)));
    Some(translates(field, &base, m, t))
}

/// Wilson's Theorem 11: k = 6, λ = 1, t blocks.
///
/// With r a primitive cube root of unity, scan the units c of K for a base
/// block {1, r, r², c, cr, cr²} whose five characteristic differences fall
/// into the five cosets of the index-5 subgroup. Candidates are scanned in
/// increasing encoding order, so the first hit is deterministic.
pub(super) fn wilson_k6(field: &DynamicGf, t: u32) -> Option<Vec<Vec<u32>>> {
    let q = field.order();
    let tables = field.tables();
    let x = tables.generator();
    let r = tables.pow(x, (q - 1) / 3);
    let r2 = tables.pow(r, 2);
    let to_coset = coset_index_map(field, 5);

    let mut candidates: Vec<u32> = to_coset.keys().copied().collect();
    candidates.sort_unstable();

    for c in candidates {
        let r_minus_one = tables.sub(r, 1);
        let diffs = [
            r_minus_one,
            tables.mul(c, r_minus_one),
            tables.sub(c, 1),
            tables.sub(c, r),
            tables.sub(c, r2),
        ];
        if nonzero_distinct_images(diffs, &to_coset, HashSet::new()) {
            let base = vec![
                1,
                r,
                r2,
                c,
                tables.mul(c, r),
                tables.mul(c, r2),
            ];
            return Some(translates(field, &base, 5, t));
        }
    }
    None
}
