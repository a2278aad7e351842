//! Property tests for the HS-Tree.
//!
//! Random conflict families are generated from a seeded ChaCha8 source and the
//! search results are checked against the brute-force enumerator.

use mhs_rs::brute::enumerate_all;
use mhs_rs::diagnosis::Diagnosis;
use mhs_rs::family::ConflictFamily;
use mhs_rs::heuristic::{Heuristic, HeuristicKind};
use mhs_rs::hstree::{search, HsTree};
use mhs_rs::set::is_strict_subset;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random family over at most `max_universe` components, reduced to minimal conflicts.
fn random_family(rng: &mut ChaCha8Rng, max_universe: usize) -> ConflictFamily {
    let universe = rng.random_range(1..=max_universe);
    let num_conflicts = rng.random_range(1..=6);
    let mut conflicts: Vec<Vec<String>> = Vec::new();
    for _ in 0..num_conflicts {
        let size = rng.random_range(1..=universe.min(4));
        let mut conflict: Vec<String> = Vec::new();
        while conflict.len() < size {
            let name = format!("C{}", rng.random_range(0..universe));
            if !conflict.contains(&name) {
                conflict.push(name);
            }
        }
        conflicts.push(conflict);
    }
    ConflictFamily::new(conflicts).unwrap().reduced()
}

fn families(seed: u64, count: usize) -> Vec<ConflictFamily> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| random_family(&mut rng, 12)).collect()
}

// ─── Hitting & Minimality ──────────────────────────────────────────────────────

#[test]
fn every_diagnosis_hits_every_conflict() {
    for family in families(1, 100) {
        let diagnoses = search(&family, &mut Heuristic::SmallestFirst).unwrap();
        for d in &diagnoses {
            assert!(family.is_hit_by(&d.to_set()), "{} does not hit {}", d, family);
        }
    }
}

#[test]
fn no_diagnosis_contains_another() {
    for family in families(2, 100) {
        let diagnoses = search(&family, &mut Heuristic::MostFrequentComponent).unwrap();
        let sets: Vec<_> = diagnoses.iter().map(Diagnosis::to_set).collect();
        for a in &sets {
            for b in &sets {
                assert!(!is_strict_subset(a, b), "{} is inside {} for {}", a, b, family);
            }
        }
        let mut unique = diagnoses.clone();
        unique.dedup();
        assert_eq!(unique.len(), diagnoses.len());
    }
}

// ─── Completeness & Invariance ────────────────────────────────────────────────

#[test]
fn matches_brute_force_for_every_heuristic() {
    for (i, family) in families(3, 150).into_iter().enumerate() {
        let reference = enumerate_all(&family).unwrap().minimal;
        for kind in HeuristicKind::ALL {
            let diagnoses = search(&family, &mut kind.build(i as u64)).unwrap();
            assert_eq!(diagnoses, reference, "heuristic {} on {}", kind, family);
        }
    }
}

#[test]
fn heuristics_differ_only_in_effort() {
    let tree = HsTree::default();
    for family in families(4, 50) {
        let outcomes: Vec<_> = HeuristicKind::ALL
            .iter()
            .map(|kind| tree.search(&family, &mut kind.build(99)).unwrap())
            .collect();
        for o in &outcomes[1..] {
            assert_eq!(o.diagnoses, outcomes[0].diagnoses);
        }
    }
}

// ─── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn seeded_runs_are_reproducible() {
    let tree = HsTree::default();
    for family in families(5, 50) {
        let a = tree.search(&family, &mut Heuristic::random(7)).unwrap();
        let b = tree.search(&family, &mut Heuristic::random(7)).unwrap();
        assert_eq!(a.diagnoses, b.diagnoses);
        assert_eq!(a.stats.nodes_visited, b.stats.nodes_visited);
        assert_eq!(a.stats.nodes_pruned, b.stats.nodes_pruned);
    }
}

// ─── Edge Cases ────────────────────────────────────────────────────────────────

#[test]
fn empty_family_has_the_empty_diagnosis() {
    let family = ConflictFamily::default();
    let diagnoses = search(&family, &mut Heuristic::SmallestFirst).unwrap();
    assert_eq!(diagnoses, vec![Diagnosis::default()]);
    assert_eq!(enumerate_all(&family).unwrap().minimal, diagnoses);
}

#[test]
fn conflict_order_does_not_matter() {
    let forward = ConflictFamily::new([vec!["A", "B"], vec!["B", "C"], vec!["C", "D", "E"]]).unwrap();
    let backward = ConflictFamily::new([vec!["E", "D", "C"], vec!["C", "B"], vec!["B", "A"]]).unwrap();
    for kind in HeuristicKind::ALL {
        assert_eq!(
            search(&forward, &mut kind.build(0)).unwrap(),
            search(&backward, &mut kind.build(0)).unwrap(),
        );
    }
}

#[test]
fn invocations_on_separate_threads() {
    let family = ConflictFamily::new([vec!["A", "B"], vec!["C", "D"], vec!["A", "D"]]).unwrap();
    let handles: Vec<_> = HeuristicKind::ALL
        .iter()
        .map(|&kind| {
            let family = family.clone();
            std::thread::spawn(move || search(&family, &mut kind.build(3)).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.iter().all(|r| r == &results[0]));
    assert_eq!(results[0].len(), 3);
}
