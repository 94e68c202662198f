//! Runtime-configured Galois field handle and its element type.
//!
//! Field orders are data here, not types: a difference-family search may
//! touch GF(73) and GF(337) in the same run, so the field is a
//! reference-counted handle around its arithmetic tables and elements carry
//! a clone of that handle.

use std::fmt;
use std::sync::Arc;

use super::GfTables;
use crate::error::Result;

/// A Galois field GF(q) fixed at runtime, q = p^n a prime power.
///
/// Cloning is cheap; all clones share one set of tables. Besides the
/// arithmetic, the handle fixes a multiplicative generator that every
/// coset and search construction in the crate is expressed against.
///
/// # Example
///
/// ```
/// use diffset::gf::DynamicGf;
///
/// let gf7 = DynamicGf::new(7).unwrap();
/// let a = gf7.element(3);
/// let b = gf7.element(5);
///
/// assert_eq!((a.clone() + b.clone()).to_u32(), 1); // 3 + 5 ≡ 1 (mod 7)
/// assert_eq!((a * b).to_u32(), 1);                 // 3 · 5 ≡ 1 (mod 7)
/// ```
#[derive(Clone)]
pub struct DynamicGf {
    tables: Arc<GfTables>,
}

impl DynamicGf {
    /// Construct the field of the given order.
    ///
    /// # Errors
    ///
    /// Fails if the order is not a prime power, or if it is a prime power
    /// whose extension degree the irreducible polynomial table does not
    /// cover.
    ///
    /// # Example
    ///
    /// ```
    /// use diffset::gf::DynamicGf;
    ///
    /// assert!(DynamicGf::new(7).is_ok());   // prime field
    /// assert!(DynamicGf::new(9).is_ok());   // GF(3^2)
    /// assert!(DynamicGf::new(6).is_err());  // 6 = 2 · 3
    /// ```
    pub fn new(order: u32) -> Result<Self> {
        Ok(Self {
            tables: Arc::new(GfTables::new_extension(order)?),
        })
    }

    /// The number of elements q.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.tables.order()
    }

    /// The prime p with q = p^n.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        self.tables.characteristic()
    }

    /// The extension degree n.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.tables.degree()
    }

    /// Wrap an integer encoding as an element, reducing modulo the order.
    #[must_use]
    pub fn element(&self, value: u32) -> GfElement {
        self.wrap(value % self.order())
    }

    /// The additive identity.
    #[must_use]
    pub fn zero(&self) -> GfElement {
        self.wrap(0)
    }

    /// The multiplicative identity.
    #[must_use]
    pub fn one(&self) -> GfElement {
        self.wrap(1)
    }

    /// The fixed multiplicative generator of K*.
    ///
    /// Cyclotomic cosets and the Wilson searches are all written in powers
    /// of this element, so the exact families the crate produces (though
    /// never their validity) depend on the choice. This backend always
    /// picks the smallest element, in encoding order, of multiplicative
    /// order q-1, which makes every construction reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use diffset::gf::DynamicGf;
    ///
    /// assert_eq!(DynamicGf::new(7).unwrap().multiplicative_generator().to_u32(), 3);
    /// ```
    #[must_use]
    pub fn multiplicative_generator(&self) -> GfElement {
        self.wrap(self.tables.generator())
    }

    /// Iterate the whole field in encoding order.
    pub fn elements(&self) -> impl Iterator<Item = GfElement> + '_ {
        (0..self.order()).map(|v| self.wrap(v))
    }

    /// Iterate the non-zero elements in encoding order.
    pub fn units(&self) -> impl Iterator<Item = GfElement> + '_ {
        (1..self.order()).map(|v| self.wrap(v))
    }

    /// The underlying tables, for code that works on raw encodings.
    #[must_use]
    pub fn tables(&self) -> &GfTables {
        &self.tables
    }

    fn wrap(&self, value: u32) -> GfElement {
        GfElement {
            value,
            field: self.clone(),
        }
    }
}

impl fmt::Display for DynamicGf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.degree() == 1 {
            write!(f, "GF({})", self.order())
        } else {
            write!(f, "GF({}^{})", self.characteristic(), self.degree())
        }
    }
}

impl fmt::Debug for DynamicGf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// An element of a [`DynamicGf`], carrying its field handle.
#[derive(Clone)]
pub struct GfElement {
    value: u32,
    field: DynamicGf,
}

impl GfElement {
    /// The integer encoding.
    #[must_use]
    pub fn to_u32(&self) -> u32 {
        self.value
    }

    /// The field this element lives in.
    #[must_use]
    pub fn field(&self) -> &DynamicGf {
        &self.field
    }

    /// Whether this is the additive identity.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// -a.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.apply(|t, v| t.neg(v))
    }

    /// a^(-1), or `None` for zero.
    #[must_use]
    pub fn checked_inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(self.apply(|t, v| t.inv(v)))
        }
    }

    /// a^(-1).
    ///
    /// # Panics
    ///
    /// Panics on zero.
    #[must_use]
    pub fn inv(&self) -> Self {
        assert!(!self.is_zero(), "cannot invert the zero element");
        self.apply(|t, v| t.inv(v))
    }

    /// a + b.
    #[must_use]
    pub fn add(&self, rhs: &Self) -> Self {
        self.apply(|t, v| t.add(v, rhs.value))
    }

    /// a - b.
    #[must_use]
    pub fn sub(&self, rhs: &Self) -> Self {
        self.apply(|t, v| t.sub(v, rhs.value))
    }

    /// a · b.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        self.apply(|t, v| t.mul(v, rhs.value))
    }

    /// a^e.
    #[must_use]
    pub fn pow(&self, e: u32) -> Self {
        self.apply(|t, v| t.pow(v, e))
    }

    fn apply(&self, op: impl FnOnce(&GfTables, u32) -> u32) -> Self {
        Self {
            value: op(&self.field.tables, self.value),
            field: self.field.clone(),
        }
    }
}

impl PartialEq for GfElement {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.field.order() == other.field.order()
    }
}

impl Eq for GfElement {}

impl std::hash::Hash for GfElement {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (self.value, self.field.order()).hash(state);
    }
}

impl fmt::Debug for GfElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.field, self.value)
    }
}

impl fmt::Display for GfElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl std::ops::Add for GfElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        GfElement::add(&self, &rhs)
    }
}

impl std::ops::Sub for GfElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        GfElement::sub(&self, &rhs)
    }
}

impl std::ops::Mul for GfElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        GfElement::mul(&self, &rhs)
    }
}

impl std::ops::Neg for GfElement {
    type Output = Self;

    fn neg(self) -> Self {
        GfElement::neg(&self)
    }
}
