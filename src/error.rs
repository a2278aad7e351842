//! Error type for hitting set computations.
//!
//! Every error is a caller-side problem (bad input, a misbehaving heuristic, or
//! a configured limit), so nothing is retried and no partial results escape.

use thiserror::Error;

/// Errors reported by the search and enumeration engines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A conflict set is empty or a component identifier is empty.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The injected heuristic picked something outside the uncovered conflicts.
    #[error("heuristic returned a conflict that is not uncovered: {selected}")]
    HeuristicContractViolation { selected: String },

    /// The search dequeued more nodes than allowed.
    #[error("node limit of {limit} exceeded")]
    NodeLimitExceeded { limit: usize },

    /// The search tried to go deeper than allowed.
    #[error("depth limit of {limit} exceeded")]
    DepthLimitExceeded { limit: usize },

    /// Brute force refused because the universe is too large.
    #[error("universe of {size} components exceeds brute force limit of {limit}")]
    UniverseTooLarge { size: usize, limit: usize },

    /// Unrecognized heuristic name.
    #[error("unknown heuristic '{name}' (expected one of: smallest, most_frequent, random)")]
    UnknownHeuristic { name: String },
}

impl Error {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput { reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Error::invalid_input("empty conflict set at position 2");
        assert_eq!(e.to_string(), "invalid input: empty conflict set at position 2");

        let e = Error::NodeLimitExceeded { limit: 10 };
        assert_eq!(e.to_string(), "node limit of 10 exceeded");

        let e = Error::UniverseTooLarge { size: 30, limit: 20 };
        assert_eq!(e.to_string(), "universe of 30 components exceeds brute force limit of 20");
    }
}
