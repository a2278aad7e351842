//! # mhs-rs: Minimal Hitting Sets for Model-Based Diagnosis
//!
//! **`mhs-rs`** computes all subset-minimal hitting sets of a family of conflict sets.
//! In model-based diagnosis, a *conflict set* is a set of components that cannot all be healthy given the observations,
//! and a *minimal hitting set* (a *diagnosis*) is a smallest-by-inclusion set of components that, assumed faulty, explains every conflict.
//!
//! ## Key Features
//!
//! - **Reiter's HS-Tree**: breadth-first search with superset pruning and duplicate-path avoidance, see [`hstree`].
//! - **Pluggable heuristics**: conflict selection is injected at call time ([`heuristic::SelectConflict`]).
//!   Smallest-first, most-frequent-component and seeded random selection are built in.
//! - **Brute-force oracle**: exhaustive enumeration for verification on small universes, see [`brute`].
//! - **Deterministic output**: diagnoses are returned sorted, ordered by cardinality and then lexicographically.
//!
//! ## Basic Usage
//!
//! ```rust
//! use mhs_rs::brute::enumerate_all;
//! use mhs_rs::family::ConflictFamily;
//! use mhs_rs::heuristic::Heuristic;
//! use mhs_rs::hstree::search;
//!
//! // 1. Describe the conflicts
//! let family = ConflictFamily::new([vec!["A", "B"], vec!["C", "D"]]).unwrap();
//!
//! // 2. Search with a heuristic
//! let diagnoses = search(&family, &mut Heuristic::MostFrequentComponent).unwrap();
//! assert_eq!(diagnoses.len(), 4); // {A,C}, {A,D}, {B,C}, {B,D}
//!
//! // 3. Cross-check against brute force
//! let reference = enumerate_all(&family).unwrap();
//! assert_eq!(diagnoses, reference.minimal);
//! ```
//!
//! ## Core Components
//!
//! - **[`family`]**: conflict sets and families (the input).
//! - **[`hstree`]**: the HS-Tree search engine.
//! - **[`heuristic`]**: conflict-selection strategies.
//! - **[`brute`]**: the brute-force reference enumerator.
//! - **[`diagnosis`]**: canonical output form.
//! - **[`compare`]** and **[`score`]**: heuristic comparison and guess scoring.

pub mod brute;
pub mod compare;
pub mod component;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod family;
pub mod heuristic;
pub mod hstree;
pub mod score;
pub mod set;
pub mod stats;
