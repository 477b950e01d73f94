//! The full forward pipeline: matches, registry, matrix, decomposition,
//! ranking, rendering.
//!
//! # Example
//!
//! ```
//! use eigenrank::analysis::AnalysisBuilder;
//! use eigenrank::export::OutputMode;
//!
//! let analysis = AnalysisBuilder::new()
//!     .add_match("alice", "bob")
//!     .add_match("bob", "carol")
//!     .add_match("carol", "alice")
//!     .add_match("alice", "carol")
//!     .build()
//!     .unwrap();
//!
//! let result = analysis.run().unwrap();
//! let mut out = Vec::new();
//! result.render(OutputMode::Matrix, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("tournmat = "));
//! ```

mod builder;
mod error;
mod result;
mod runner;

pub use builder::AnalysisBuilder;
pub use error::{AnalysisError, Result};
pub use result::AnalysisResult;
pub use runner::TournamentAnalysis;
