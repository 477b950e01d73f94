//! Eigenvector centrality rankings for head to head tournaments.
//!
//! Start from a log of `winner loser` results, build the win tally matrix,
//! decompose it and take an eigenvector whose components all share a sign as
//! the ranking. Ranks are divided by each player's game count so players who
//! played different numbers of matches still compare.
//!
//! # Example
//!
//! ```
//! use eigenrank::analysis::AnalysisBuilder;
//!
//! let result = AnalysisBuilder::new().demo().build().unwrap().run().unwrap();
//! let standings = result.standings().unwrap();
//! assert_eq!("bob-r", standings[0].0);
//! ```
//!
//! # Modules
//!
//! - [`core`] match records, parsing and the player registry
//! - [`matrix`] the win count matrix
//! - [`eigen`] the eigen decomposition seam and its nalgebra solver
//! - [`rank`] choosing and normalizing the ranking vector
//! - [`export`] tables, matrix dumps, Graphviz output and JSON
//! - [`analysis`] the whole pipeline behind a builder

/// Match records, parsing and the player registry.
pub mod core;

/// The win count matrix.
pub mod matrix;

/// Eigen decomposition.
pub mod eigen;

/// Ranking selection.
pub mod rank;

/// Output for people and for Graphviz.
pub mod export;

/// End to end analysis.
pub mod analysis;
