use std::collections::{BTreeMap, BTreeSet};

use crate::record::SceneId;

/// Symmetric navigation adjacency: scene id to the set of scenes it offers
/// a transition to. Neighbor sets never contain duplicates or self-loops,
/// and iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavGraph {
    adjacency: BTreeMap<SceneId, BTreeSet<SceneId>>,
}

impl NavGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scene with no edges yet, so isolated scenes still appear
    /// in the adjacency map.
    pub fn insert_node(&mut self, id: SceneId) {
        self.adjacency.entry(id).or_default();
    }

    /// Link `a` and `b` in both directions. Self-loops are ignored.
    pub fn insert_bidirectional(&mut self, a: SceneId, b: SceneId) {
        if a == b {
            return;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Remove the `a`-`b` link in both directions, whatever introduced it.
    pub fn remove_bidirectional(&mut self, a: SceneId, b: SceneId) {
        if let Some(set) = self.adjacency.get_mut(&a) {
            set.remove(&b);
        }
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.remove(&a);
        }
    }

    pub fn contains_edge(&self, a: SceneId, b: SceneId) -> bool {
        self.adjacency
            .get(&a)
            .map(|set| set.contains(&b))
            .unwrap_or(false)
    }

    pub fn neighbors(&self, id: SceneId) -> impl Iterator<Item = SceneId> + '_ {
        self.adjacency.get(&id).into_iter().flatten().copied()
    }

    pub fn neighbor_count(&self, id: SceneId) -> usize {
        self.adjacency.get(&id).map(BTreeSet::len).unwrap_or(0)
    }

    pub fn nodes(&self) -> impl Iterator<Item = SceneId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn adjacency(&self) -> &BTreeMap<SceneId, BTreeSet<SceneId>> {
        &self.adjacency
    }
}
