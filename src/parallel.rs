//! Parallel construction support for difference families.
//!
//! This module provides parallel versions of the search-heavy constructions
//! using Rayon. Enable with the `parallel` feature flag.
//!
//! # Usage
//!
//! ```ignore
//! use diffset::parallel::par_wilson_k6;
//! use diffset::gf::DynamicGf;
//!
//! let gf31 = DynamicGf::new(31).unwrap();
//! let family = par_wilson_k6(&gf31, 1).unwrap();
//! assert_eq!(family.len(), 1);
//! ```
//!
//! # Performance
//!
//! Parallel search is most beneficial for:
//! - The k = 6 candidate scan over large fields (q in the thousands)
//! - Existence sweeps over many parameter triples
//!
//! For small fields the sequential versions are usually faster due to the
//! parallelization overhead.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::construct::{difference_family_existence_with, Existence};
use crate::cosets::{coset_index_map, nonzero_distinct_images};
use crate::database::ConstructionDb;
use crate::gf::DynamicGf;

/// Parallel variant of the k = 6 candidate scan (Wilson's Theorem 11).
///
/// Candidates are tested in parallel and `find_first` keeps the result of
/// the scan identical to the sequential one: the accepted candidate is the
/// smallest in encoding order.
#[must_use]
pub fn par_wilson_k6(field: &DynamicGf, t: u32) -> Option<Vec<Vec<u32>>> {
    let q = field.order();
    let tables = field.tables();
    let x = tables.generator();
    let r = tables.pow(x, (q - 1) / 3);
    let r2 = tables.pow(r, 2);
    let to_coset = coset_index_map(field, 5);

    let mut candidates: Vec<u32> = to_coset.keys().copied().collect();
    candidates.sort_unstable();

    let r_minus_one = tables.sub(r, 1);
    let hit = candidates.par_iter().copied().find_first(|&c| {
        let diffs = [
            r_minus_one,
            tables.mul(c, r_minus_one),
            tables.sub(c, 1),
            tables.sub(c, r),
            tables.sub(c, r2),
        ];
        nonzero_distinct_images(diffs, &to_coset, HashSet::new())
    })?;

    let base = [
        1,
        r,
        r2,
        hit,
        tables.mul(hit, r),
        tables.mul(hit, r2),
    ];
    Some(
        (0..t)
            .map(|i| {
                let scale = tables.pow(x, i * 5);
                base.iter().map(|&b| tables.mul(scale, b)).collect()
            })
            .collect(),
    )
}

/// Decide existence for many parameter triples in parallel.
///
/// Results come back in input order. Each triple is independent, so this is
/// an embarrassingly parallel map over [`difference_family_existence_with`].
#[must_use]
pub fn par_existence_sweep(
    db: &ConstructionDb,
    triples: &[(u32, usize, u32)],
) -> Vec<Existence> {
    triples
        .par_iter()
        .map(|&(v, k, lambda)| difference_family_existence_with(db, v, k, lambda))
        .collect()
}
