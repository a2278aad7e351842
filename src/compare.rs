//! Side-by-side runs of the HS-Tree under different heuristics.
//!
//! Heuristics only change how much of the tree gets built, so a comparison
//! reports node counts and timing per heuristic and checks that all of them
//! agree on the diagnoses.

use std::fmt;

use log::info;

use crate::config::SearchConfig;
use crate::diagnosis::Diagnosis;
use crate::error::Result;
use crate::family::ConflictFamily;
use crate::heuristic::HeuristicKind;
use crate::hstree::HsTree;
use crate::stats::SearchStats;

/// Outcome of one heuristic.
#[derive(Debug, Clone)]
pub struct HeuristicReport {
    pub kind: HeuristicKind,
    pub diagnoses: Vec<Diagnosis>,
    pub stats: SearchStats,
}

/// Outcomes of several heuristics on the same family.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    pub reports: Vec<HeuristicReport>,
}

impl Comparison {
    /// Returns true iff every heuristic found the same diagnoses.
    pub fn all_agree(&self) -> bool {
        match self.reports.split_first() {
            None => true,
            Some((first, rest)) => rest.iter().all(|r| r.diagnoses == first.diagnoses),
        }
    }

    /// Returns `(min, max, percent)` of visited nodes across heuristics, where
    /// `percent` is `(max - min) / min * 100` (0 when `min` is 0).
    pub fn node_spread(&self) -> Option<(usize, usize, f64)> {
        let min = self.reports.iter().map(|r| r.stats.nodes_visited).min()?;
        let max = self.reports.iter().map(|r| r.stats.nodes_visited).max()?;
        let percent = if min > 0 {
            (max - min) as f64 / min as f64 * 100.0
        } else {
            0.0
        };
        Some((min, max, percent))
    }

    pub fn report(&self, kind: HeuristicKind) -> Option<&HeuristicReport> {
        self.reports.iter().find(|r| r.kind == kind)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<16} {:>10} {:>10} {:>10} {:>12} {:>10}", "heuristic", "visited", "expanded", "pruned", "time (ms)", "minimal")?;
        writeln!(f, "{}", "-".repeat(73))?;
        for r in &self.reports {
            writeln!(
                f,
                "{:<16} {:>10} {:>10} {:>10} {:>12.3} {:>10}",
                r.kind.to_string(),
                r.stats.nodes_visited,
                r.stats.nodes_expanded,
                r.stats.nodes_pruned,
                r.stats.elapsed.as_secs_f64() * 1000.0,
                r.diagnoses.len(),
            )?;
        }
        Ok(())
    }
}

/// Runs the HS-Tree once per heuristic. Each run gets its own fresh heuristic
/// instance; `seed` feeds the random one.
pub fn compare_heuristics(family: &ConflictFamily, kinds: &[HeuristicKind], seed: u64, config: &SearchConfig) -> Result<Comparison> {
    let tree = HsTree::new(config.clone());
    let mut reports = Vec::with_capacity(kinds.len());
    for &kind in kinds {
        let mut heuristic = kind.build(seed);
        let outcome = tree.search(family, &mut heuristic)?;
        info!("{}: {} diagnoses, {}", kind, outcome.diagnoses.len(), outcome.stats);
        reports.push(HeuristicReport {
            kind,
            diagnoses: outcome.diagnoses,
            stats: outcome.stats,
        });
    }
    Ok(Comparison { reports })
}
