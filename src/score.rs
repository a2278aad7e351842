//! Similarity scoring between two lists of diagnoses.
//!
//! Used to grade a guessed list of diagnoses against the computed one: every
//! true diagnosis is matched with its most similar guess (Jaccard index), and
//! guesses that never served as a best match count as a penalty.

use std::collections::HashSet;

use crate::diagnosis::Diagnosis;
use crate::set::ComponentSet;

/// Jaccard similarity `|a & b| / |a | b|` of two sets; 1.0 when both are empty.
pub fn jaccard(a: &ComponentSet, b: &ComponentSet) -> f64 {
    let intersection = a.iter().filter(|c| b.contains(c)).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        1.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Scores `guess` against `truth`, from 0 (nothing alike) to 100 (identical).
///
/// ```text
/// score = max(0, mean(best match per truth set) - |#guess - #matched| / max(#truth, 1)) * 100
/// ```
///
/// When `truth` is empty the mean term is 1 if `guess` is empty too, 0 otherwise.
pub fn score(truth: &[Diagnosis], guess: &[Diagnosis]) -> f64 {
    let truth: Vec<ComponentSet> = truth.iter().map(Diagnosis::to_set).collect();
    let guess: Vec<ComponentSet> = guess.iter().map(Diagnosis::to_set).collect();

    let mut matched: HashSet<usize> = HashSet::new();
    let mut total = 0.0;
    for t in &truth {
        let mut best_score = 0.0;
        let mut best_index = None;
        for (i, g) in guess.iter().enumerate() {
            let s = jaccard(t, g);
            if s > best_score {
                best_score = s;
                best_index = Some(i);
            }
        }
        total += best_score;
        if let Some(i) = best_index {
            matched.insert(i);
        }
    }

    let extra = guess.len().abs_diff(matched.len());
    let penalty = extra as f64 / truth.len().max(1) as f64;

    let mean = if truth.is_empty() {
        if guess.is_empty() {
            1.0
        } else {
            0.0
        }
    } else {
        total / truth.len() as f64
    };

    (mean - penalty).max(0.0) * 100.0
}
