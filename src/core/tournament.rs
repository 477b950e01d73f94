use std::fmt;

use crate::matrix::MatchMatrix;

use super::PlayerRegistry;

/// One recorded contest with a single winner and a single loser.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Match {
    pub winner: String,
    pub loser: String,
}

impl Match {
    pub fn new<W: Into<String>, L: Into<String>>(winner: W, loser: L) -> Self {
        Self {
            winner: winner.into(),
            loser: loser.into(),
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} beat {}", self.winner, self.loser)
    }
}

/// The full ordered list of matches for one analysis run.
///
/// The order only matters for player id assignment: players get ids in the
/// order they first show up. Once built a tournament is never changed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tournament {
    matches: Vec<Match>,
}

impl Tournament {
    pub fn new(matches: Vec<Match>) -> Self {
        Self { matches }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Assign ids to every player in first appearance order.
    pub fn registry(&self) -> PlayerRegistry {
        PlayerRegistry::from_matches(&self.matches)
    }

    /// Player names indexed by id.
    pub fn players(&self) -> Vec<String> {
        self.registry().into_names()
    }

    /// Build the win count matrix for this tournament.
    pub fn matrix(&self) -> MatchMatrix {
        MatchMatrix::from_matches(&self.matches, &self.registry())
    }
}

impl From<Vec<Match>> for Tournament {
    fn from(matches: Vec<Match>) -> Self {
        Self::new(matches)
    }
}

impl FromIterator<Match> for Tournament {
    fn from_iter<I: IntoIterator<Item = Match>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Tournament {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// Pairs of (winner, loser) for the built in demo tournament.
///
/// Three people each play under two identities, `-r` for the row seat and
/// `-c` for the column seat. Rows only ever play columns so the win
/// structure is bipartite and partly cyclic.
const DEMO_MATCHES: [(&str, &str); 14] = [
    ("bob-r", "joe-c"),
    ("bob-r", "tim-c"),
    ("bob-r", "tim-c"),
    ("bob-r", "tim-c"),
    ("joe-r", "tim-c"),
    ("joe-r", "bob-c"),
    ("tim-r", "joe-c"),
    ("tim-r", "bob-c"),
    ("bob-c", "joe-r"),
    ("bob-c", "tim-r"),
    ("joe-c", "tim-r"),
    ("joe-c", "bob-r"),
    ("tim-c", "joe-r"),
    ("tim-c", "bob-r"),
];

/// The fixed 14 match demo tournament.
pub fn demo_tournament() -> Tournament {
    DEMO_MATCHES
        .iter()
        .map(|(winner, loser)| Match::new(*winner, *loser))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_has_fourteen_matches() {
        let tourn = demo_tournament();
        assert_eq!(14, tourn.len());
        assert_eq!(Match::new("bob-r", "joe-c"), tourn.matches()[0]);
        assert_eq!(Match::new("tim-c", "bob-r"), tourn.matches()[13]);
    }

    #[test]
    fn test_demo_has_six_identities() {
        let players = demo_tournament().players();
        assert_eq!(
            vec!["bob-r", "joe-c", "tim-c", "joe-r", "bob-c", "tim-r"],
            players
        );
    }

    #[test]
    fn test_empty_tournament() {
        let tourn = Tournament::default();
        assert!(tourn.is_empty());
        assert!(tourn.players().is_empty());
        assert_eq!(0, tourn.matrix().size());
    }

    #[test]
    fn test_display_match() {
        assert_eq!("a beat b", Match::new("a", "b").to_string());
    }
}
