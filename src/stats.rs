//! Search statistics.

use std::fmt;
use std::time::Duration;

/// Counters collected during one HS-Tree search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes taken off the queue and classified
    pub nodes_visited: usize,
    /// Nodes classified as Expand
    pub nodes_expanded: usize,
    /// Nodes classified as Pruned
    pub nodes_pruned: usize,
    /// Nodes classified as Solution
    pub solutions: usize,
    /// Children not enqueued because the same path was already generated
    pub duplicates: usize,
    /// Largest path cardinality seen
    pub max_depth: usize,
    pub elapsed: Duration,
}

impl fmt::Display for SearchStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "visited={}, expanded={}, pruned={}, solutions={}, duplicates={}, depth={}, time={:.3}ms",
            self.nodes_visited,
            self.nodes_expanded,
            self.nodes_pruned,
            self.solutions,
            self.duplicates,
            self.max_depth,
            self.elapsed.as_secs_f64() * 1000.0,
        )
    }
}
