//! Exhaustive hitting set enumeration.
//!
//! Every subset of the universe (the components appearing in the family) is
//! tested, smallest first and in lexicographic order within a size. This is
//! exponential in the universe size and serves as a reference oracle for the
//! HS-Tree, never as the production path.

use log::debug;
use num_bigint::BigUint;

use crate::component::Component;
use crate::config::EnumerationConfig;
use crate::diagnosis::{finalize, Diagnosis};
use crate::error::{Error, Result};
use crate::family::ConflictFamily;
use crate::set::{is_strict_subset, ComponentSet};

/// All hitting sets of a family, plus the minimal ones among them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumeration {
    /// Every hitting set, in canonical order
    pub all: Vec<Diagnosis>,
    /// The subset-minimal hitting sets, in canonical order
    pub minimal: Vec<Diagnosis>,
}

/// Brute-force enumerator.
#[derive(Debug, Clone, Default)]
pub struct BruteForce {
    config: EnumerationConfig,
}

impl BruteForce {
    pub fn new(config: EnumerationConfig) -> Self {
        Self { config }
    }

    /// Enumerates all hitting sets of `family` and filters the minimal ones.
    ///
    /// The empty family is hit by the empty set alone, so both lists are `[{}]`.
    pub fn enumerate_all(&self, family: &ConflictFamily) -> Result<Enumeration> {
        let universe = family.universe();
        if universe.len() > self.config.max_universe {
            return Err(Error::UniverseTooLarge {
                size: universe.len(),
                limit: self.config.max_universe,
            });
        }
        debug!(
            "enumerate_all(family = {}): {} candidates over {} components",
            family,
            search_space_size(family),
            universe.len()
        );

        let mut hitting: Vec<ComponentSet> = Vec::new();
        for r in 0..=universe.len() {
            for indices in Combinations::new(universe.len(), r) {
                let candidate = subset(&universe, &indices);
                if family.is_hit_by(&candidate) {
                    hitting.push(candidate);
                }
            }
        }

        let all = finalize(&hitting);
        let unique: Vec<ComponentSet> = all.iter().map(|d| d.to_set()).collect();
        let minimal_sets: Vec<&ComponentSet> = unique
            .iter()
            .filter(|s| !unique.iter().any(|t| is_strict_subset(t, s)))
            .collect();
        let minimal = finalize(minimal_sets);

        debug!("enumerate_all: {} hitting sets, {} minimal", all.len(), minimal.len());
        Ok(Enumeration { all, minimal })
    }
}

/// Enumerates with the default configuration.
pub fn enumerate_all(family: &ConflictFamily) -> Result<Enumeration> {
    BruteForce::default().enumerate_all(family)
}

/// Number of candidate subsets brute force has to test: `2^|U|`.
pub fn search_space_size(family: &ConflictFamily) -> BigUint {
    BigUint::from(2u32).pow(family.universe().len() as u32)
}

fn subset(universe: &[Component], indices: &[usize]) -> ComponentSet {
    indices.iter().map(|&i| universe[i].clone()).collect()
}

/// Iterator over all `r`-element index combinations of `0..n`, in
/// lexicographic order.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, r: usize) -> Self {
        Self {
            n,
            indices: (0..r).collect(),
            done: r > n,
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let current = self.indices.clone();

        // Advance: find the rightmost index that can still move right.
        let r = self.indices.len();
        let mut i = r;
        loop {
            if i == 0 {
                self.done = true;
                break;
            }
            i -= 1;
            if self.indices[i] < self.n - r + i {
                self.indices[i] += 1;
                for j in i + 1..r {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}
