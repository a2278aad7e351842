//! Reiter's HS-Tree: breadth-first enumeration of all minimal hitting sets.
//!
//! # Algorithm
//!
//! Every node of the tree carries a *path*: the set of components assumed
//! faulty so far. The root has the empty path. Nodes are processed in strict
//! FIFO order, and each dequeued node ends up in exactly one state:
//!
//! 1. **Pruned**: an already recorded diagnosis is a subset of the path. No
//!    superset of a diagnosis can be minimal, so the node is dropped.
//! 2. **Solution**: the path hits every conflict. It is recorded.
//! 3. **Expand**: the heuristic picks one conflict `C` among those the path
//!    does not hit yet, and every `c` in `C` outside the path yields a child
//!    with path `path + {c}`.
//!
//! Breadth-first order means all paths of cardinality `k` are classified before
//! any path of cardinality `k + 1`. A diagnosis is therefore always recorded
//! before any of its supersets is dequeued, and pruning removes every
//! non-minimal solution. A path that was already generated through a different
//! branch is not generated again.
//!
//! # Example
//!
//! ```
//! use mhs_rs::family::ConflictFamily;
//! use mhs_rs::heuristic::Heuristic;
//! use mhs_rs::hstree::search;
//!
//! let family = ConflictFamily::new([vec!["A", "B"], vec!["B", "C"]]).unwrap();
//! let diagnoses = search(&family, &mut Heuristic::SmallestFirst).unwrap();
//!
//! let names: Vec<Vec<String>> = diagnoses.iter().map(|d| d.names()).collect();
//! assert_eq!(names, vec![vec!["B"], vec!["A", "C"]]);
//! ```

use std::collections::{HashSet, VecDeque};
use std::time::Instant;

use log::{debug, trace};

use crate::config::SearchConfig;
use crate::diagnosis::{finalize, Diagnosis};
use crate::error::{Error, Result};
use crate::family::{ConflictFamily, ConflictSet};
use crate::heuristic::SelectConflict;
use crate::set::{is_subset_or_equal, ComponentSet};
use crate::stats::SearchStats;

/// Classification of a dequeued node.
#[derive(Debug)]
enum NodeState<'a> {
    Pruned,
    Solution,
    Expand(Vec<&'a ConflictSet>),
}

/// Result of a successful search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// All minimal diagnoses, in canonical order
    pub diagnoses: Vec<Diagnosis>,
    pub stats: SearchStats,
}

/// HS-Tree search engine.
#[derive(Debug, Clone, Default)]
pub struct HsTree {
    config: SearchConfig,
}

impl HsTree {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Computes all minimal hitting sets of `family`, branching on the
    /// conflicts picked by `heuristic`.
    pub fn search<H>(&self, family: &ConflictFamily, heuristic: &mut H) -> Result<SearchOutcome>
    where
        H: SelectConflict + ?Sized,
    {
        debug!("search(family = {}, config = {:?})", family, self.config);
        let start = Instant::now();

        let mut stats = SearchStats::default();
        let mut solutions: Vec<ComponentSet> = Vec::new();
        let mut queue: VecDeque<ComponentSet> = VecDeque::new();
        let mut generated: HashSet<Diagnosis> = HashSet::new();

        queue.push_back(ComponentSet::new());
        generated.insert(Diagnosis::default());

        while let Some(path) = queue.pop_front() {
            if let Some(limit) = self.config.max_nodes {
                if stats.nodes_visited >= limit {
                    return Err(Error::NodeLimitExceeded { limit });
                }
            }
            stats.nodes_visited += 1;
            stats.max_depth = stats.max_depth.max(path.len());

            let state = self.classify(&path, family, &solutions)?;
            trace!("node {} -> {:?}", path, state);

            match state {
                NodeState::Pruned => {
                    stats.nodes_pruned += 1;
                }
                NodeState::Solution => {
                    debug!("found diagnosis {}", path);
                    solutions.push(path);
                }
                NodeState::Expand(uncovered) => {
                    stats.nodes_expanded += 1;
                    let chosen = select_checked(heuristic, &uncovered, &path)?;
                    for c in chosen.components() {
                        if path.contains(c) {
                            continue;
                        }
                        let child = path.with(c);
                        if generated.insert(Diagnosis::from(&child)) {
                            queue.push_back(child);
                        } else {
                            stats.duplicates += 1;
                        }
                    }
                }
            }
        }

        stats.solutions = solutions.len();
        stats.elapsed = start.elapsed();
        let diagnoses = finalize(&solutions);
        debug!("search: {} minimal diagnoses ({})", diagnoses.len(), stats);

        Ok(SearchOutcome { diagnoses, stats })
    }

    fn classify<'a>(&self, path: &ComponentSet, family: &'a ConflictFamily, solutions: &[ComponentSet]) -> Result<NodeState<'a>> {
        if solutions.iter().any(|s| is_subset_or_equal(s, path)) {
            return Ok(NodeState::Pruned);
        }

        // Only nodes that survive pruning count against the depth limit.
        if let Some(limit) = self.config.max_depth {
            if path.len() > limit {
                return Err(Error::DepthLimitExceeded { limit });
            }
        }

        let uncovered = family.uncovered_by(path);
        if uncovered.is_empty() {
            Ok(NodeState::Solution)
        } else {
            Ok(NodeState::Expand(uncovered))
        }
    }
}

/// Asks the heuristic for a conflict and checks that it is one of `uncovered`.
fn select_checked<'a, H>(heuristic: &mut H, uncovered: &[&'a ConflictSet], path: &ComponentSet) -> Result<&'a ConflictSet>
where
    H: SelectConflict + ?Sized,
{
    match heuristic.select(uncovered, path) {
        Some(chosen) if uncovered.iter().any(|&c| c == chosen) => Ok(chosen),
        Some(chosen) => Err(Error::HeuristicContractViolation {
            selected: chosen.to_string(),
        }),
        None => Err(Error::HeuristicContractViolation {
            selected: "nothing".to_string(),
        }),
    }
}

/// Computes all minimal diagnoses of `family` with default settings.
pub fn search<H>(family: &ConflictFamily, heuristic: &mut H) -> Result<Vec<Diagnosis>>
where
    H: SelectConflict + ?Sized,
{
    HsTree::default().search(family, heuristic).map(|outcome| outcome.diagnoses)
}

/// Builds a family from raw identifiers and computes its minimal diagnoses.
///
/// Fails with [`Error::InvalidInput`] if a conflict or an identifier is empty.
pub fn minimal_hitting_sets<I, C, S, H>(conflicts: I, heuristic: &mut H) -> Result<Vec<Diagnosis>>
where
    I: IntoIterator<Item = C>,
    C: IntoIterator<Item = S>,
    S: AsRef<str>,
    H: SelectConflict + ?Sized,
{
    let family = ConflictFamily::new(conflicts)?;
    search(&family, heuristic)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::diagnosis::to_bracket_string;
    use crate::heuristic::{Heuristic, HeuristicKind};

    fn family(conflicts: &[&[&str]]) -> ConflictFamily {
        ConflictFamily::new(conflicts.iter().map(|c| c.iter().copied())).unwrap()
    }

    fn run(conflicts: &[&[&str]]) -> String {
        let f = family(conflicts);
        let diagnoses = search(&f, &mut Heuristic::SmallestFirst).unwrap();
        to_bracket_string(&diagnoses)
    }

    #[test]
    fn test_overlapping_conflicts() {
        assert_eq!(run(&[&["A", "B"], &["B", "C"]]), "[{B}, {A, C}]");
    }

    #[test]
    fn test_single_conflict() {
        assert_eq!(run(&[&["A", "B"]]), "[{A}, {B}]");
    }

    #[test]
    fn test_disjoint_conflicts() {
        assert_eq!(run(&[&["A", "B"], &["C", "D"]]), "[{A, C}, {A, D}, {B, C}, {B, D}]");
    }

    #[test]
    fn test_singleton_conflict() {
        assert_eq!(run(&[&["A"]]), "[{A}]");
    }

    #[test]
    fn test_empty_family() {
        let diagnoses = search(&ConflictFamily::default(), &mut Heuristic::SmallestFirst).unwrap();
        assert_eq!(diagnoses.len(), 1);
        assert!(diagnoses[0].is_empty());
    }

    #[test]
    fn test_empty_conflict_is_invalid() {
        let err = minimal_hitting_sets([vec!["A", "B"], vec![]], &mut Heuristic::SmallestFirst).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_larger_family() {
        let conflicts: &[&[&str]] = &[&["C", "D", "E"], &["A", "C", "F", "G", "H"], &["A", "B"], &["B", "D", "F"]];
        let expected = "[{A, D}, {B, C}, {A, B, E}, {A, C, F}, {A, E, F}, \
                        {B, D, F}, {B, D, G}, {B, D, H}, {B, E, F}, {B, E, G}, {B, E, H}]";
        for kind in HeuristicKind::ALL {
            let f = family(conflicts);
            let diagnoses = search(&f, &mut kind.build(5)).unwrap();
            assert_eq!(to_bracket_string(&diagnoses), expected, "heuristic {}", kind);
        }
    }

    #[test]
    fn test_stats() {
        let f = family(&[&["A", "B"], &["B", "C"]]);
        let outcome = HsTree::default().search(&f, &mut Heuristic::SmallestFirst).unwrap();

        // root, {A}, {B}, {A,B} (pruned by {B}), {A,C}
        assert_eq!(outcome.stats.nodes_visited, 5);
        assert_eq!(outcome.stats.nodes_expanded, 2);
        assert_eq!(outcome.stats.nodes_pruned, 1);
        assert_eq!(outcome.stats.solutions, 2);
        assert_eq!(outcome.stats.duplicates, 0);
        assert_eq!(outcome.stats.max_depth, 2);
    }

    #[test]
    fn test_duplicate_paths_generated_once() {
        // {A} branches on {B,D} and {B} branches on {A,C}: both reach {A,B}.
        let f = family(&[&["A", "B"], &["A", "C"], &["B", "D"]]);
        let outcome = HsTree::default().search(&f, &mut Heuristic::SmallestFirst).unwrap();
        assert_eq!(outcome.stats.duplicates, 1);
        assert_eq!(outcome.stats.nodes_visited, 6);
        assert_eq!(to_bracket_string(&outcome.diagnoses), "[{A, B}, {A, D}, {B, C}]");
    }

    #[test]
    fn test_node_limit() {
        let f = family(&[&["A", "B"], &["C", "D"], &["E", "F"]]);
        let tree = HsTree::new(SearchConfig::new().with_max_nodes(3));
        let err = tree.search(&f, &mut Heuristic::SmallestFirst).unwrap_err();
        assert_eq!(err, Error::NodeLimitExceeded { limit: 3 });

        let tree = HsTree::new(SearchConfig::new().with_max_nodes(1000));
        assert_eq!(tree.search(&f, &mut Heuristic::SmallestFirst).unwrap().diagnoses.len(), 8);
    }

    #[test]
    fn test_depth_limit() {
        let f = family(&[&["A", "B"], &["C", "D"], &["E", "F"]]);
        let tree = HsTree::new(SearchConfig::new().with_max_depth(2));
        let err = tree.search(&f, &mut Heuristic::SmallestFirst).unwrap_err();
        assert_eq!(err, Error::DepthLimitExceeded { limit: 2 });

        let tree = HsTree::new(SearchConfig::new().with_max_depth(3));
        assert!(tree.search(&f, &mut Heuristic::SmallestFirst).is_ok());
    }

    struct Rogue(&'static ConflictSet);

    impl SelectConflict for Rogue {
        fn select<'a>(&mut self, _uncovered: &[&'a ConflictSet], _path: &ComponentSet) -> Option<&'a ConflictSet> {
            Some(self.0)
        }
    }

    struct Silent;

    impl SelectConflict for Silent {
        fn select<'a>(&mut self, _uncovered: &[&'a ConflictSet], _path: &ComponentSet) -> Option<&'a ConflictSet> {
            None
        }
    }

    #[test]
    fn test_heuristic_contract_violation() {
        let f = family(&[&["A", "B"], &["B", "C"]]);

        let foreign: &'static ConflictSet = Box::leak(Box::new(ConflictSet::new(["X", "Y"]).unwrap()));
        let err = search(&f, &mut Rogue(foreign)).unwrap_err();
        assert!(matches!(err, Error::HeuristicContractViolation { .. }));

        let err = search(&f, &mut Silent).unwrap_err();
        assert!(matches!(err, Error::HeuristicContractViolation { .. }));
    }

    #[test]
    fn test_dyn_heuristic() {
        let f = family(&[&["A", "B"]]);
        let mut h: Box<dyn SelectConflict> = Box::new(Heuristic::MostFrequentComponent);
        let diagnoses = search(&f, h.as_mut()).unwrap();
        assert_eq!(to_bracket_string(&diagnoses), "[{A}, {B}]");
    }
}
