//! Diagnoses and their canonical presentation.
//!
//! The engines work with unordered [`ComponentSet`]s internally. [`finalize`]
//! turns whatever they collected into the canonical output: each diagnosis
//! sorted, duplicates removed, and the list ordered by cardinality and then
//! lexicographically.

use std::fmt;

use crate::component::Component;
use crate::set::ComponentSet;

/// A set of components that, assumed faulty, explains every conflict.
///
/// Components are always stored sorted, so derived equality is set equality
/// and the derived ordering is lexicographic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Diagnosis(Vec<Component>);

impl Diagnosis {
    /// Builds a diagnosis in canonical form.
    pub fn new(components: impl IntoIterator<Item = Component>) -> Self {
        let mut v: Vec<Component> = components.into_iter().collect();
        v.sort();
        v.dedup();
        Diagnosis(v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Components in lexicographic order.
    pub fn components(&self) -> &[Component] {
        &self.0
    }

    /// Component identifiers in lexicographic order.
    pub fn names(&self) -> Vec<String> {
        self.0.iter().map(|c| c.name().to_string()).collect()
    }

    pub fn to_set(&self) -> ComponentSet {
        self.0.iter().cloned().collect()
    }
}

impl From<&ComponentSet> for Diagnosis {
    fn from(set: &ComponentSet) -> Self {
        Diagnosis(set.to_sorted_vec())
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "}}")
    }
}

/// Canonicalizes a collection of diagnoses: sorted, deduplicated, ordered by
/// cardinality first and lexicographically second.
pub fn finalize<'a>(diagnoses: impl IntoIterator<Item = &'a ComponentSet>) -> Vec<Diagnosis> {
    let mut result: Vec<Diagnosis> = diagnoses.into_iter().map(Diagnosis::from).collect();
    result.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    result.dedup();
    result
}

/// Renders a list of diagnoses as `[{A}, {B, C}]`.
pub fn to_bracket_string(diagnoses: &[Diagnosis]) -> String {
    let inner: Vec<String> = diagnoses.iter().map(|d| d.to_string()).collect();
    format!("[{}]", inner.join(", "))
}
