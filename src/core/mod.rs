/// Error type for reading match logs.
mod error;
/// Export `ParseError`
pub use self::error::ParseError;

/// Module with the `Match` and `Tournament` types, plus the built-in demo
/// tournament.
mod tournament;
/// Export `Match` and `Tournament`
pub use self::tournament::{Match, Tournament, demo_tournament};

/// Module that turns a whitespace separated match log into matches.
mod parse;
/// Export the match log parsers
pub use self::parse::{parse_matches, read_matches};

/// Module for assigning dense ids to player names.
mod registry;
/// Export `PlayerRegistry`
pub use self::registry::PlayerRegistry;
