//! Configuration for the search and enumeration engines.

/// Limits for the HS-Tree search.
///
/// Both limits are off by default. When a limit is hit the search fails
/// instead of returning a partial result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of nodes dequeued (None for unbounded)
    pub max_nodes: Option<usize>,
    /// Maximum path cardinality a node may reach (None for unbounded)
    pub max_depth: Option<usize>,
}

impl SearchConfig {
    /// Create a configuration without limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node limit.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    /// Set the depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }
}

/// Limits for the brute-force enumerator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Largest universe (number of distinct components) to enumerate over
    pub max_universe: usize,
}

impl EnumerationConfig {
    pub const DEFAULT_MAX_UNIVERSE: usize = 20;

    pub fn new() -> Self {
        Self {
            max_universe: Self::DEFAULT_MAX_UNIVERSE,
        }
    }

    /// Set the universe limit.
    pub fn with_max_universe(mut self, max_universe: usize) -> Self {
        self.max_universe = max_universe;
        self
    }
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self::new()
    }
}
