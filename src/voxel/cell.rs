//! Cell content abstraction shared by every edit.
//!
//! The engine never interprets what a cell holds. It only needs to clone it,
//! compare it, and ask which category it belongs to so masks can restrict
//! which existing cells an edit may overwrite.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Opaque value stored in one grid cell.
pub trait CellContent: Clone + PartialEq + Debug {
    /// Coarse grouping used by masks (for voxels: the material id).
    type Category: Clone + Eq + Hash + Debug;

    fn category(&self) -> Self::Category;
}

/// Predicate deciding whether an existing cell is selected by a replace.
pub trait CellMatcher<C> {
    fn matches(&self, cell: &C) -> bool;
}

impl<C: CellContent> CellMatcher<C> for C {
    fn matches(&self, cell: &C) -> bool {
        self == cell
    }
}

/// Allow-list of cell categories an edit may overwrite.
///
/// Carried as `Option<Mask<_>>`; `None` means every category is allowed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask<K: Eq + Hash> {
    allowed: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Mask<K> {
    /// Build a mask; an empty set yields `None` (unrestricted).
    pub fn new(allowed: impl IntoIterator<Item = K>) -> Option<Self> {
        let allowed: HashSet<K> = allowed.into_iter().collect();
        if allowed.is_empty() {
            None
        } else {
            Some(Self { allowed })
        }
    }

    pub fn allows(&self, category: &K) -> bool {
        self.allowed.contains(category)
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = &K> {
        self.allowed.iter()
    }
}

/// Mask check with the "absent mask allows everything" rule.
pub fn mask_allows<C: CellContent>(mask: Option<&Mask<C::Category>>, cell: &C) -> bool {
    mask.is_none_or(|m| m.allows(&cell.category()))
}
