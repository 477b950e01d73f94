//! Turning an eigen decomposition into a per player ranking.
//!
//! A win/loss matrix is generally not symmetric, so there's no promise of a
//! single dominant eigenvector with a canonical sign. A vector is accepted as
//! a ranking only if all of its components share one sign once oriented by
//! its [sense](sense). The accepted vector is then divided by each player's
//! game count so players with different schedules compare as a rate.
//!
//! # Example
//!
//! ```
//! use eigenrank::core::{Match, Tournament};
//! use eigenrank::eigen::SchurEigenSolver;
//! use eigenrank::rank::{RankConfig, RankSelector};
//!
//! let tourn: Tournament = vec![Match::new("alice", "bob")].into();
//! let selector = RankSelector::new(RankConfig::default()).unwrap();
//! let ranks = selector.rank(&tourn.matrix(), &SchurEigenSolver::new()).unwrap();
//! assert_eq!(2, ranks.len());
//! assert!(ranks.get(0) > ranks.get(1));
//! ```

mod config;
mod error;
mod selector;
mod vector;

pub use config::{RankConfig, SelectionStrategy, ZeroGamePolicy};
pub use error::{RankError, Result};
pub use selector::{RankSelector, is_sign_consistent, sense};
pub use vector::RankVector;
