//! Group capabilities and the group law provider.
//!
//! A difference family lives in a finite group. This module defines the
//! [`Group`] capability the verifier and constructor consume, together with
//! the concrete groups the crate works with:
//!
//! - [`Zmod`]: integers modulo n under addition
//! - [`DynamicGf`]: a Galois field viewed as its additive group
//! - [`UnitGroup`]: the multiplicative group K* of a field
//! - [`DesignGroup`]: the group type constructions return (cyclic or field)
//!
//! Each group declares whether it is additive or multiplicative once, as a
//! capability tag fixed when the value is built. The
//! [`group_law`] provider validates that tag a single time and hands back a
//! [`GroupLaw`] exposing the uniform `{identity, combine, invert}` law, so
//! no call site re-classifies per operation.
//!
//! Elements are `u32` encodings throughout, matching the field backend. Raw
//! values (possibly negative, e.g. `-3` in Z/21Z) enter a group through its
//! [`Group::coerce`] method, which each group owns explicitly.

use std::fmt;

use crate::error::{Error, Result};
use crate::gf::DynamicGf;

/// Declared classification of a group's binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupKind {
    /// A commutative group written additively; identity is 0.
    Additive,
    /// A group written multiplicatively; identity is 1.
    Multiplicative,
}

/// Capability trait for finite groups of `u32`-encoded elements.
///
/// All operations are total over valid encodings; feeding an encoding that
/// is not a group element is a caller error that the verifier reports as an
/// issue rather than panicking on.
pub trait Group {
    /// Number of elements in the group.
    fn cardinality(&self) -> u32;

    /// The declared algebraic capability, if any.
    ///
    /// Returning `None` makes the group unusable by [`group_law`]; every
    /// concrete group in this crate declares exactly one classification.
    fn classification(&self) -> Option<GroupKind>;

    /// The identity element.
    fn identity(&self) -> u32;

    /// Apply the group operation to two elements.
    fn combine(&self, a: u32, b: u32) -> u32;

    /// The inverse of an element.
    fn invert(&self, a: u32) -> u32;

    /// Enumerate all elements of the group.
    fn elements(&self) -> Vec<u32>;

    /// Coerce a raw integer into a group element encoding.
    ///
    /// Negative values are reduced into range where the encoding has a
    /// natural modular meaning (cyclic groups and prime fields); extension
    /// fields reduce the raw value modulo the order and interpret it as an
    /// element encoding.
    fn coerce(&self, raw: i64) -> u32;
}

/// The uniform `{identity, combine, invert}` law of a classified group.
///
/// Produced by [`group_law`]; holds the classification checked once at
/// construction so repeated difference computations skip re-classification.
#[derive(Clone, Copy)]
pub struct GroupLaw<'g, G: Group + ?Sized> {
    group: &'g G,
    kind: GroupKind,
    identity: u32,
}

impl<'g, G: Group + ?Sized> GroupLaw<'g, G> {
    /// The group's classification.
    #[must_use]
    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    /// The identity element.
    #[must_use]
    pub fn identity(&self) -> u32 {
        self.identity
    }

    /// Apply the group operation.
    #[must_use]
    pub fn combine(&self, a: u32, b: u32) -> u32 {
        self.group.combine(a, b)
    }

    /// Invert an element.
    #[must_use]
    pub fn invert(&self, a: u32) -> u32 {
        self.group.invert(a)
    }
}

/// Return the `{identity, combine, invert}` law of a group.
///
/// Classification happens here, once; the returned handle is then pure
/// delegation.
///
/// # Errors
///
/// Returns [`Error::UnclassifiableGroup`] if the group declares no
/// classification.
///
/// # Example
///
/// ```
/// use diffset::group::{group_law, GroupKind, Zmod};
///
/// let g = Zmod::new(21);
/// let law = group_law(&g).unwrap();
/// assert_eq!(law.kind(), GroupKind::Additive);
/// assert_eq!(law.identity(), 0);
/// assert_eq!(law.combine(20, 5), 4);
/// assert_eq!(law.invert(6), 15);
/// ```
pub fn group_law<G: Group + ?Sized>(group: &G) -> Result<GroupLaw<'_, G>> {
    let kind = group
        .classification()
        .ok_or(Error::UnclassifiableGroup {
            cardinality: group.cardinality(),
        })?;
    Ok(GroupLaw {
        group,
        kind,
        identity: group.identity(),
    })
}

/// The cyclic group Z/nZ of integers modulo n under addition.
///
/// # Example
///
/// ```
/// use diffset::group::{Group, Zmod};
///
/// let g = Zmod::new(7);
/// assert_eq!(g.cardinality(), 7);
/// assert_eq!(g.combine(5, 4), 2);
/// assert_eq!(g.coerce(-3), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zmod {
    n: u32,
}

impl Zmod {
    /// Create the additive group of integers modulo `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    #[must_use]
    pub fn new(n: u32) -> Self {
        assert!(n > 0, "modulus must be positive");
        Self { n }
    }

    /// The modulus n.
    #[must_use]
    pub fn modulus(&self) -> u32 {
        self.n
    }
}

impl Group for Zmod {
    fn cardinality(&self) -> u32 {
        self.n
    }

    fn classification(&self) -> Option<GroupKind> {
        Some(GroupKind::Additive)
    }

    fn identity(&self) -> u32 {
        0
    }

    fn combine(&self, a: u32, b: u32) -> u32 {
        ((u64::from(a) + u64::from(b)) % u64::from(self.n)) as u32
    }

    fn invert(&self, a: u32) -> u32 {
        if a == 0 {
            0
        } else {
            self.n - (a % self.n)
        }
    }

    fn elements(&self) -> Vec<u32> {
        (0..self.n).collect()
    }

    fn coerce(&self, raw: i64) -> u32 {
        raw.rem_euclid(i64::from(self.n)) as u32
    }
}

impl fmt::Display for Zmod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Zmod({})", self.n)
    }
}

/// A Galois field viewed as its additive group.
///
/// Differences within blocks are field subtractions, so the classification
/// is additive. This is the group that every field-based construction
/// returns its families over.
impl Group for DynamicGf {
    fn cardinality(&self) -> u32 {
        self.order()
    }

    fn classification(&self) -> Option<GroupKind> {
        Some(GroupKind::Additive)
    }

    fn identity(&self) -> u32 {
        0
    }

    fn combine(&self, a: u32, b: u32) -> u32 {
        self.tables().add(a, b)
    }

    fn invert(&self, a: u32) -> u32 {
        self.tables().neg(a)
    }

    fn elements(&self) -> Vec<u32> {
        (0..self.order()).collect()
    }

    fn coerce(&self, raw: i64) -> u32 {
        raw.rem_euclid(i64::from(self.order())) as u32
    }
}

/// The multiplicative group K* of the non-zero elements of a field.
///
/// "Differences" in a multiplicative group are quotients a·b⁻¹; the
/// verifier handles both classifications through the same law.
///
/// # Example
///
/// ```
/// use diffset::gf::DynamicGf;
/// use diffset::group::{Group, GroupKind, UnitGroup};
///
/// let units = UnitGroup::new(DynamicGf::new(5).unwrap());
/// assert_eq!(units.cardinality(), 4);
/// assert_eq!(units.classification(), Some(GroupKind::Multiplicative));
/// assert_eq!(units.combine(2, 3), 1); // 2 * 3 = 6 ≡ 1 (mod 5)
/// assert_eq!(units.invert(2), 3);
/// ```
#[derive(Clone)]
pub struct UnitGroup {
    field: DynamicGf,
}

impl UnitGroup {
    /// Create the multiplicative group of the given field.
    #[must_use]
    pub fn new(field: DynamicGf) -> Self {
        Self { field }
    }

    /// The underlying field.
    #[must_use]
    pub fn field(&self) -> &DynamicGf {
        &self.field
    }
}

impl Group for UnitGroup {
    fn cardinality(&self) -> u32 {
        self.field.order() - 1
    }

    fn classification(&self) -> Option<GroupKind> {
        Some(GroupKind::Multiplicative)
    }

    fn identity(&self) -> u32 {
        1
    }

    fn combine(&self, a: u32, b: u32) -> u32 {
        self.field.tables().mul(a, b)
    }

    fn invert(&self, a: u32) -> u32 {
        if a == 0 {
            // Zero is not a unit; map to zero so the verifier flags it as a
            // foreign element instead of panicking.
            0
        } else {
            self.field.tables().inv(a)
        }
    }

    fn elements(&self) -> Vec<u32> {
        (1..self.field.order()).collect()
    }

    fn coerce(&self, raw: i64) -> u32 {
        raw.rem_euclid(i64::from(self.field.order())) as u32
    }
}

impl fmt::Display for UnitGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*", self.field)
    }
}

/// The group over which a constructed difference family lives.
///
/// Field-based constructions return the additive group of a Galois field;
/// database entries may return a plain cyclic group.
#[derive(Clone)]
pub enum DesignGroup {
    /// The cyclic group Z/nZ.
    Cyclic(Zmod),
    /// The additive group of a Galois field.
    Field(DynamicGf),
}

impl DesignGroup {
    /// The underlying field, if this group is one.
    #[must_use]
    pub fn as_field(&self) -> Option<&DynamicGf> {
        match self {
            Self::Field(field) => Some(field),
            Self::Cyclic(_) => None,
        }
    }
}

impl Group for DesignGroup {
    fn cardinality(&self) -> u32 {
        match self {
            Self::Cyclic(g) => g.cardinality(),
            Self::Field(g) => g.cardinality(),
        }
    }

    fn classification(&self) -> Option<GroupKind> {
        match self {
            Self::Cyclic(g) => g.classification(),
            Self::Field(g) => g.classification(),
        }
    }

    fn identity(&self) -> u32 {
        match self {
            Self::Cyclic(g) => g.identity(),
            Self::Field(g) => g.identity(),
        }
    }

    fn combine(&self, a: u32, b: u32) -> u32 {
        match self {
            Self::Cyclic(g) => g.combine(a, b),
            Self::Field(g) => g.combine(a, b),
        }
    }

    fn invert(&self, a: u32) -> u32 {
        match self {
            Self::Cyclic(g) => g.invert(a),
            Self::Field(g) => g.invert(a),
        }
    }

    fn elements(&self) -> Vec<u32> {
        match self {
            Self::Cyclic(g) => g.elements(),
            // The inherent DynamicGf::elements iterates GfElement values;
            // qualify to get the trait's encoding list.
            Self::Field(g) => Group::elements(g),
        }
    }

    fn coerce(&self, raw: i64) -> u32 {
        match self {
            Self::Cyclic(g) => g.coerce(raw),
            Self::Field(g) => g.coerce(raw),
        }
    }
}

impl fmt::Display for DesignGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cyclic(g) => g.fmt(f),
            Self::Field(g) => g.fmt(f),
        }
    }
}

impl fmt::Debug for DesignGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zmod_law() {
        let g = Zmod::new(5);
        assert_eq!(g.cardinality(), 5);
        assert_eq!(g.identity(), 0);
        assert_eq!(g.combine(3, 4), 2);
        assert_eq!(g.invert(2), 3);
        assert_eq!(g.invert(0), 0);
        assert_eq!(g.elements(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_zmod_coercion() {
        let g = Zmod::new(21);
        assert_eq!(g.coerce(0), 0);
        assert_eq!(g.coerce(25), 4);
        assert_eq!(g.coerce(-1), 20);
        assert_eq!(g.coerce(-22), 20);
    }

    #[test]
    fn test_field_additive_law() {
        let gf9 = DynamicGf::new(9).unwrap();
        assert_eq!(gf9.classification(), Some(GroupKind::Additive));
        assert_eq!(Group::identity(&gf9), 0);
        for a in 0..9u32 {
            assert_eq!(gf9.combine(a, gf9.invert(a)), 0);
        }
    }

    #[test]
    fn test_unit_group_law() {
        let units = UnitGroup::new(DynamicGf::new(7).unwrap());
        assert_eq!(units.cardinality(), 6);
        assert_eq!(units.identity(), 1);
        for a in 1..7u32 {
            assert_eq!(units.combine(a, units.invert(a)), 1);
        }
        assert_eq!(units.elements(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_group_law_classifications() {
        let g = Zmod::new(7);
        let law = group_law(&g).unwrap();
        assert_eq!(law.kind(), GroupKind::Additive);
        assert_eq!(law.identity(), 0);
        assert_eq!(law.combine(3, law.invert(3)), 0);

        let units = UnitGroup::new(DynamicGf::new(7).unwrap());
        let law = group_law(&units).unwrap();
        assert_eq!(law.kind(), GroupKind::Multiplicative);
        assert_eq!(law.identity(), 1);
        assert_eq!(law.combine(5, law.invert(5)), 1);
    }

    #[test]
    fn test_group_law_rejects_unclassifiable() {
        struct Opaque;

        impl Group for Opaque {
            fn cardinality(&self) -> u32 {
                4
            }
            fn classification(&self) -> Option<GroupKind> {
                None
            }
            fn identity(&self) -> u32 {
                0
            }
            fn combine(&self, a: u32, b: u32) -> u32 {
                a ^ b
            }
            fn invert(&self, a: u32) -> u32 {
                a
            }
            fn elements(&self) -> Vec<u32> {
                vec![0, 1, 2, 3]
            }
            fn coerce(&self, raw: i64) -> u32 {
                raw.rem_euclid(4) as u32
            }
        }

        // GroupLaw carries no Debug impl, so inspect the Err side directly.
        let err = group_law(&Opaque).err().unwrap();
        assert_eq!(err, Error::UnclassifiableGroup { cardinality: 4 });
    }

    #[test]
    fn test_design_group_delegation() {
        let g = DesignGroup::Cyclic(Zmod::new(21));
        assert_eq!(g.cardinality(), 21);
        assert_eq!(g.coerce(-1), 20);
        assert!(g.as_field().is_none());
        assert_eq!(format!("{g}"), "Zmod(21)");

        let g = DesignGroup::Field(DynamicGf::new(9).unwrap());
        assert_eq!(g.cardinality(), 9);
        assert_eq!(g.elements(), (0..9).collect::<Vec<u32>>());
        assert!(g.as_field().is_some());
        assert_eq!(format!("{g}"), "GF(3^2)");
    }
}
