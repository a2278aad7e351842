//! Set primitives over components.
//!
//! [`ComponentSet`] is the working representation of candidates and conflicts
//! during a search: an unordered, duplicate-free, hash-based set. Canonical
//! (sorted) sequences are produced only at the output boundary.

use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt;

use crate::component::Component;

/// An unordered, duplicate-free set of components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSet {
    members: HashSet<Component>,
}

impl ComponentSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of components in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the set has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn contains(&self, component: &Component) -> bool {
        self.members.contains(component)
    }

    /// Adds a component. Returns true if it was not already present.
    pub fn insert(&mut self, component: Component) -> bool {
        self.members.insert(component)
    }

    /// Returns a copy of this set extended with one more component.
    pub fn with(&self, component: &Component) -> Self {
        let mut members = HashSet::with_capacity(self.members.len() + 1);
        members.extend(self.members.iter().cloned());
        members.insert(component.clone());
        Self { members }
    }

    /// Returns the union of two sets.
    pub fn union(&self, other: &ComponentSet) -> Self {
        self.members.union(&other.members).cloned().collect()
    }

    /// Iterates over the components in unspecified order.
    pub fn iter(&self) -> hash_set::Iter<'_, Component> {
        self.members.iter()
    }

    /// Returns the components in canonical (lexicographic) order.
    pub fn to_sorted_vec(&self) -> Vec<Component> {
        let mut v: Vec<Component> = self.members.iter().cloned().collect();
        v.sort();
        v
    }
}

/// Returns true iff `candidate` and `conflict` share at least one component.
pub fn hits(candidate: &ComponentSet, conflict: &ComponentSet) -> bool {
    let (small, large) = if candidate.len() <= conflict.len() {
        (candidate, conflict)
    } else {
        (conflict, candidate)
    };
    small.iter().any(|c| large.contains(c))
}

/// Returns true iff every component of `a` is also in `b`.
pub fn is_subset_or_equal(a: &ComponentSet, b: &ComponentSet) -> bool {
    a.len() <= b.len() && a.iter().all(|c| b.contains(c))
}

/// Returns true iff `a` is a subset of `b` and `a != b`.
pub fn is_strict_subset(a: &ComponentSet, b: &ComponentSet) -> bool {
    a.len() < b.len() && a.iter().all(|c| b.contains(c))
}

impl FromIterator<Component> for ComponentSet {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl Extend<Component> for ComponentSet {
    fn extend<I: IntoIterator<Item = Component>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ComponentSet {
    type Item = &'a Component;
    type IntoIter = hash_set::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ComponentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.to_sorted_vec().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "}}")
    }
}
