//! Conflict-selection heuristics for the HS-Tree.
//!
//! When a node is expanded, the search asks a heuristic which of the conflicts
//! not yet hit by the node's path to branch on. The choice changes how many
//! nodes get generated, never which minimal diagnoses are found.
//!
//! Three strategies are provided by [`Heuristic`]:
//!
//! - [`Heuristic::SmallestFirst`]: the conflict with the fewest components.
//! - [`Heuristic::MostFrequentComponent`]: a conflict containing the component
//!   that occurs in the most uncovered conflicts.
//! - [`Heuristic::Random`]: a uniformly random uncovered conflict, drawn from
//!   an explicit, seedable random source.
//!
//! Ties are always broken by family order.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::component::Component;
use crate::error::Error;
use crate::family::ConflictSet;
use crate::set::ComponentSet;

/// Picks the conflict to branch on.
///
/// Implementations must return one of the elements of `uncovered`, unmodified.
/// Returning anything else (or `None`) makes the search fail with
/// [`Error::HeuristicContractViolation`].
pub trait SelectConflict {
    fn select<'a>(&mut self, uncovered: &[&'a ConflictSet], path: &ComponentSet) -> Option<&'a ConflictSet>;
}

/// The built-in conflict-selection strategies.
#[derive(Debug, Clone)]
pub enum Heuristic {
    SmallestFirst,
    MostFrequentComponent,
    Random(ChaCha8Rng),
}

impl Heuristic {
    /// Random selection backed by a ChaCha8 generator seeded with `seed`.
    pub fn random(seed: u64) -> Self {
        Heuristic::Random(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn kind(&self) -> HeuristicKind {
        match self {
            Heuristic::SmallestFirst => HeuristicKind::SmallestFirst,
            Heuristic::MostFrequentComponent => HeuristicKind::MostFrequentComponent,
            Heuristic::Random(_) => HeuristicKind::Random,
        }
    }
}

impl SelectConflict for Heuristic {
    fn select<'a>(&mut self, uncovered: &[&'a ConflictSet], _path: &ComponentSet) -> Option<&'a ConflictSet> {
        match self {
            Heuristic::SmallestFirst => smallest_first(uncovered),
            Heuristic::MostFrequentComponent => most_frequent_component(uncovered),
            Heuristic::Random(rng) => random_choice(uncovered, rng),
        }
    }
}

/// Uniformly random selection from any caller-supplied random source.
#[derive(Debug, Clone)]
pub struct RandomChoice<R>(pub R);

impl<R: Rng> SelectConflict for RandomChoice<R> {
    fn select<'a>(&mut self, uncovered: &[&'a ConflictSet], _path: &ComponentSet) -> Option<&'a ConflictSet> {
        random_choice(uncovered, &mut self.0)
    }
}

fn smallest_first<'a>(uncovered: &[&'a ConflictSet]) -> Option<&'a ConflictSet> {
    // `min_by_key` keeps the first minimum.
    uncovered.iter().copied().min_by_key(|c| c.len())
}

fn most_frequent_component<'a>(uncovered: &[&'a ConflictSet]) -> Option<&'a ConflictSet> {
    let mut counts: HashMap<&Component, usize> = HashMap::new();
    for conflict in uncovered {
        for c in conflict.components() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }

    // Scan in family order so the first component reaching the maximum wins.
    let mut best: Option<(&Component, usize)> = None;
    for conflict in uncovered {
        for c in conflict.components() {
            let count = counts[c];
            if best.map_or(true, |(_, n)| count > n) {
                best = Some((c, count));
            }
        }
    }

    let (component, _) = best?;
    uncovered.iter().copied().find(|conflict| conflict.contains(component))
}

fn random_choice<'a, R: Rng>(uncovered: &[&'a ConflictSet], rng: &mut R) -> Option<&'a ConflictSet> {
    if uncovered.is_empty() {
        return None;
    }
    let index = rng.random_range(0..uncovered.len());
    Some(uncovered[index])
}

/// Name of a built-in heuristic, without its random state.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HeuristicKind {
    SmallestFirst,
    MostFrequentComponent,
    Random,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::SmallestFirst,
        HeuristicKind::MostFrequentComponent,
        HeuristicKind::Random,
    ];

    /// Instantiates the heuristic. `seed` is only used by [`HeuristicKind::Random`].
    pub fn build(self, seed: u64) -> Heuristic {
        match self {
            HeuristicKind::SmallestFirst => Heuristic::SmallestFirst,
            HeuristicKind::MostFrequentComponent => Heuristic::MostFrequentComponent,
            HeuristicKind::Random => Heuristic::random(seed),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            HeuristicKind::SmallestFirst => "smallest",
            HeuristicKind::MostFrequentComponent => "most_frequent",
            HeuristicKind::Random => "random",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for HeuristicKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "smallest" | "smallest_first" => Ok(HeuristicKind::SmallestFirst),
            "most_frequent" | "most_frequent_component" => Ok(HeuristicKind::MostFrequentComponent),
            "random" => Ok(HeuristicKind::Random),
            _ => Err(Error::UnknownHeuristic { name: s.to_string() }),
        }
    }
}
