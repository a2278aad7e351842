//! Conflict sets and conflict families: the input of the diagnosis engines.

use std::collections::BTreeSet;
use std::fmt;

use crate::component::Component;
use crate::error::{Error, Result};
use crate::set::{hits, is_strict_subset, is_subset_or_equal, ComponentSet};

/// A non-empty set of components that cannot all be healthy at once.
///
/// Components are kept in input order (first occurrence wins) so that
/// everything iterating over a conflict is deterministic. Equality is set
/// equality and ignores that order.
#[derive(Debug, Clone)]
pub struct ConflictSet {
    ordered: Vec<Component>,
    members: ComponentSet,
}

impl ConflictSet {
    /// Builds a conflict set from component identifiers.
    pub fn new<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Result<Self> {
        let components = names.into_iter().map(Component::new).collect::<Result<Vec<_>>>()?;
        Self::from_components(components)
    }

    /// Builds a conflict set from components. Duplicates are dropped.
    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Result<Self> {
        let mut ordered = Vec::new();
        let mut members = ComponentSet::new();
        for c in components {
            if members.insert(c.clone()) {
                ordered.push(c);
            }
        }
        if ordered.is_empty() {
            return Err(Error::invalid_input("conflict set is empty"));
        }
        Ok(Self { ordered, members })
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Always false: conflict sets are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Components in input order.
    pub fn components(&self) -> &[Component] {
        &self.ordered
    }

    pub fn as_set(&self) -> &ComponentSet {
        &self.members
    }

    pub fn contains(&self, component: &Component) -> bool {
        self.members.contains(component)
    }

    /// Returns true iff `candidate` contains at least one component of this conflict.
    pub fn is_hit_by(&self, candidate: &ComponentSet) -> bool {
        hits(candidate, &self.members)
    }
}

impl PartialEq for ConflictSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for ConflictSet {}

impl fmt::Display for ConflictSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.members)
    }
}

/// An ordered sequence of conflict sets.
///
/// Order only matters for heuristic tie-breaking; it never changes the set of
/// minimal diagnoses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictFamily {
    conflicts: Vec<ConflictSet>,
}

impl ConflictFamily {
    /// Builds a family from nested lists of component identifiers.
    ///
    /// Fails with [`Error::InvalidInput`] if any conflict is empty or any
    /// identifier is empty.
    ///
    /// ```
    /// use mhs_rs::family::ConflictFamily;
    ///
    /// let family = ConflictFamily::new([vec!["A", "B"], vec!["B", "C"]]).unwrap();
    /// assert_eq!(family.len(), 2);
    ///
    /// assert!(ConflictFamily::new([Vec::<&str>::new()]).is_err());
    /// ```
    pub fn new<I, C, S>(conflicts: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let conflicts = conflicts
            .into_iter()
            .enumerate()
            .map(|(i, names)| {
                ConflictSet::new(names).map_err(|e| match e {
                    Error::InvalidInput { reason } => Error::invalid_input(format!("conflict #{}: {}", i, reason)),
                    other => other,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { conflicts })
    }

    /// Builds a family from already validated conflict sets.
    pub fn from_sets(conflicts: Vec<ConflictSet>) -> Self {
        Self { conflicts }
    }

    pub fn len(&self) -> usize {
        self.conflicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conflicts.is_empty()
    }

    pub fn conflicts(&self) -> &[ConflictSet] {
        &self.conflicts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConflictSet> {
        self.conflicts.iter()
    }

    /// Returns all components appearing in the family, sorted.
    pub fn universe(&self) -> Vec<Component> {
        let all: BTreeSet<&Component> = self.conflicts.iter().flat_map(|c| c.components()).collect();
        all.into_iter().cloned().collect()
    }

    /// Returns true iff `candidate` hits every conflict.
    pub fn is_hit_by(&self, candidate: &ComponentSet) -> bool {
        self.conflicts.iter().all(|c| c.is_hit_by(candidate))
    }

    /// Returns the conflicts not hit by `candidate`, in family order.
    pub fn uncovered_by<'a>(&'a self, candidate: &ComponentSet) -> Vec<&'a ConflictSet> {
        self.conflicts.iter().filter(|c| !c.is_hit_by(candidate)).collect()
    }

    /// Returns true iff no conflict is a subset of (or equal to) another.
    pub fn is_minimal(&self) -> bool {
        self.conflicts.iter().enumerate().all(|(i, a)| {
            self.conflicts
                .iter()
                .enumerate()
                .all(|(j, b)| i == j || !is_subset_or_equal(a.as_set(), b.as_set()))
        })
    }

    /// Returns a copy without duplicate conflicts and without conflicts that
    /// strictly contain another one. Input order is kept.
    pub fn reduced(&self) -> Self {
        let mut kept: Vec<ConflictSet> = Vec::new();
        for (i, c) in self.conflicts.iter().enumerate() {
            let dominated = self.conflicts.iter().any(|o| is_strict_subset(o.as_set(), c.as_set()));
            let duplicate = self.conflicts[..i].iter().any(|o| o == c);
            if !dominated && !duplicate {
                kept.push(c.clone());
            }
        }
        Self { conflicts: kept }
    }
}

impl<'a> IntoIterator for &'a ConflictFamily {
    type Item = &'a ConflictSet;
    type IntoIter = std::slice::Iter<'a, ConflictSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ConflictFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.conflicts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
