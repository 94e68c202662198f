//! # Diffset
//!
//! A difference family construction and verification library for
//! combinatorial design theory.
//!
//! ## Overview
//!
//! Let `G` be a finite Abelian group of order `v`. A *(v,k,λ)-difference
//! family* is a collection of `k`-subsets of `G` (the *blocks*) such that
//! the multiset of within-block differences covers every non-identity
//! element of `G` exactly `λ` times. Difference families are the standard
//! route to balanced incomplete block designs: developing the blocks
//! through the group yields a 2-design. A single-block family is a
//! *difference set*.
//!
//! This library provides:
//! - Construction of difference families from parameters (cyclotomic coset
//!   families, classical residue difference sets, Wilson's constructions, a
//!   database of sporadic cases)
//! - A three-valued existence oracle that never conflates "cannot exist"
//!   with "no construction known"
//! - Verification of arbitrary candidate families over Z/nZ, finite field
//!   additive groups, and multiplicative unit groups
//! - Full prime power support via custom Galois field arithmetic
//!
//! ## Quick Start
//!
//! ```rust
//! use diffset::{difference_family, is_difference_family};
//!
//! // A (73,4,1)-difference family over GF(73): 6 blocks of size 4.
//! let (group, blocks) = difference_family(73, 4, 1, true).unwrap();
//! assert_eq!(blocks.len(), 6);
//! assert_eq!(blocks[0], vec![0, 1, 8, 64]);
//! assert!(is_difference_family(&group, &blocks, Some(73), Some(4), Some(1)));
//! ```
//!
//! Or ask for existence without materializing the blocks:
//!
//! ```rust
//! use diffset::{difference_family_existence, Existence};
//!
//! assert_eq!(difference_family_existence(7, 3, 1), Existence::Exists);
//! assert_eq!(difference_family_existence(8, 3, 1), Existence::Impossible);
//! assert_eq!(difference_family_existence(61, 6, 1), Existence::Unknown);
//! ```
//!
//! ## Notation
//!
//! A difference family is denoted (v, k, λ) where:
//! - **v**: Order of the group
//! - **k**: Block size
//! - **λ**: Number of times each non-identity element occurs as a
//!   within-block difference
//!
//! The block count `b` is forced by the counting relation
//! `b·k·(k-1) = λ·(v-1)`.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of reports and results
//! - `parallel`: Enable parallel search using rayon
//! - `python`: Enable Python bindings via PyO3

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod construct;
pub mod cosets;
pub mod database;
pub mod error;
pub mod gf;
pub mod group;
#[cfg(feature = "python")]
pub mod python;
pub mod utils;
pub mod verify;

#[cfg(feature = "parallel")]
pub mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::construct::{
        difference_family, difference_family_existence, difference_family_existence_with,
        difference_family_with, Existence,
    };
    pub use crate::cosets::cyclotomic_cosets;
    pub use crate::database::ConstructionDb;
    pub use crate::error::{Error, Result};
    pub use crate::gf::{
        available_field_orders, get_irreducible_poly, has_irreducible_poly, DynamicGf, GfElement,
    };
    pub use crate::group::{group_law, DesignGroup, Group, GroupKind, UnitGroup, Zmod};
    pub use crate::utils::{factor_prime_power, is_prime, is_prime_power};
    pub use crate::verify::{is_difference_family, verify_family, FamilyCheck, FamilyIssue};

    #[cfg(feature = "parallel")]
    pub use crate::parallel::{par_existence_sweep, par_wilson_k6};
}

// Re-export commonly used items at crate root
pub use construct::{
    difference_family, difference_family_existence, difference_family_existence_with,
    difference_family_with, Existence,
};
pub use database::ConstructionDb;
pub use error::{Error, Result};
pub use utils::{is_prime, is_prime_power};
pub use verify::{is_difference_family, verify_family};
