use std::collections::HashMap;

use super::Match;

/// Two way mapping between player names and dense ids in `[0, n)`.
///
/// Ids are handed out in first appearance order while scanning the matches,
/// looking at the winner before the loser of each match. Matrix rows,
/// columns and eigenvector components are all indexed by these ids so the
/// order has to be stable for identical input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRegistry {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_matches(matches: &[Match]) -> Self {
        let mut registry = Self::new();
        for m in matches {
            registry.insert(&m.winner);
            registry.insert(&m.loser);
        }
        registry
    }

    /// Register a name, returning its id. Names that are already known keep
    /// the id they were first given.
    pub fn insert(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Names indexed by id.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(id, n)| (id, n.as_str()))
    }
}
