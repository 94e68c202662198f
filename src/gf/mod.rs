//! Galois field (finite field) arithmetic.
//!
//! This module provides implementations of Galois fields GF(q) where q is a
//! prime power. Finite fields carry the algebraic structure behind every
//! construction in this crate: cyclotomic cosets partition the unit group
//! K*, and the Wilson searches manipulate roots of unity in K.
//!
//! ## Overview
//!
//! - [`DynamicGf`]: Runtime-configured field with precomputed tables and a
//!   fixed multiplicative generator
//! - [`GfElement`]: Element in a dynamic Galois field
//! - [`GfTables`]: The underlying arithmetic tables
//!
//! ## Example
//!
//! ```
//! use diffset::gf::DynamicGf;
//!
//! let gf13 = DynamicGf::new(13).unwrap();
//! let x = gf13.multiplicative_generator();
//!
//! // x generates the unit group: x^(q-1) = 1 and no smaller power does.
//! assert_eq!(x.pow(12).to_u32(), 1);
//! assert_ne!(x.pow(6).to_u32(), 1);
//! ```
//!
//! A field doubles as the additive group its difference families live in;
//! see the [`Group`](crate::group::Group) implementation on [`DynamicGf`].

mod element;
mod poly;
mod tables;

pub use element::{DynamicGf, GfElement};
pub use poly::{available_field_orders, get_irreducible_poly, has_irreducible_poly};
pub use tables::GfTables;
