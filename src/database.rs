//! Database of sporadic difference families.
//!
//! Some parameter triples admit a difference family even though no general
//! construction in this crate produces one; others are reached more directly
//! from a stored block set than from a search. The [`ConstructionDb`] maps
//! (v, k, λ) to a builder closure producing the group and blocks, and the
//! construction entry point consults it before attempting the generic
//! constructions, so database entries take precedence.

use std::collections::HashMap;

use crate::error::Result;
use crate::group::{DesignGroup, Zmod};

/// A stored construction: builds the group and the family's blocks.
pub type DbConstruction = fn() -> Result<(DesignGroup, Vec<Vec<u32>>)>;

/// Lookup table of sporadic (v, k, λ) difference family constructions.
///
/// The built-in entries cover small parameter triples where a known block
/// set is simpler than any search. Additional entries can be registered at
/// runtime with [`insert`](Self::insert); construction functions receive no
/// arguments and return the group together with the blocks, which are
/// re-verified by the caller like any other construction's output.
#[derive(Clone)]
pub struct ConstructionDb {
    entries: HashMap<(u32, usize, u32), DbConstruction>,
}

impl ConstructionDb {
    /// Create the database with all built-in entries.
    #[must_use]
    pub fn new() -> Self {
        let mut db = Self::empty();
        db.insert(7, 3, 1, || {
            Ok((DesignGroup::Cyclic(Zmod::new(7)), vec![vec![1, 2, 4]]))
        });
        db.insert(11, 5, 2, || {
            Ok((DesignGroup::Cyclic(Zmod::new(11)), vec![vec![1, 3, 4, 5, 9]]))
        });
        db.insert(13, 4, 1, || {
            Ok((DesignGroup::Cyclic(Zmod::new(13)), vec![vec![0, 1, 3, 9]]))
        });
        db.insert(21, 5, 1, || {
            Ok((
                DesignGroup::Cyclic(Zmod::new(21)),
                vec![vec![0, 1, 4, 14, 16]],
            ))
        });
        db
    }

    /// Create a database with no entries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a construction for (v, k, λ), replacing any existing entry.
    pub fn insert(&mut self, v: u32, k: usize, lambda: u32, construction: DbConstruction) {
        self.entries.insert((v, k, lambda), construction);
    }

    /// Look up the construction for (v, k, λ).
    #[must_use]
    pub fn get(&self, v: u32, k: usize, lambda: u32) -> Option<DbConstruction> {
        self.entries.get(&(v, k, lambda)).copied()
    }

    /// Whether the database has an entry for (v, k, λ).
    #[must_use]
    pub fn contains(&self, v: u32, k: usize, lambda: u32) -> bool {
        self.entries.contains_key(&(v, k, lambda))
    }

    /// The registered (v, k, λ) triples, in sorted order.
    #[must_use]
    pub fn parameters(&self) -> Vec<(u32, usize, u32)> {
        let mut keys: Vec<_> = self.entries.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the database has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ConstructionDb {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConstructionDb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConstructionDb")
            .field("keys", &self.parameters())
            .finish()
    }
}
