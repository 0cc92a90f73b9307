//! Insertion-ordered sets of node ids.

use crate::shapes::NodeId;

/// A small set of node ids that remembers insertion order.
///
/// Backed by a `Vec` with uniqueness enforced by equality. Hit-test result sets
/// and selections hold a handful of ids, so linear scans are fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeSet {
    ids: Vec<NodeId>,
}

impl NodeSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids in the set.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when the set holds no ids.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: NodeId) -> bool {
        self.ids.contains(&id)
    }

    /// True when the set holds exactly `id` and nothing else.
    pub fn is_only(&self, id: NodeId) -> bool {
        self.ids.len() == 1 && self.ids[0] == id
    }

    /// Add `id`; returns `false` if it was already present.
    pub fn insert(&mut self, id: NodeId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`; returns `false` if it was not present.
    pub fn remove(&mut self, id: NodeId) -> bool {
        match self.ids.iter().position(|&i| i == id) {
            Some(index) => {
                self.ids.remove(index);
                true
            }
            None => false,
        }
    }

    /// Flip membership of `id` and return the new membership.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Keep only the ids for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, keep: impl FnMut(&NodeId) -> bool) {
        self.ids.retain(keep);
    }

    /// Remove every id.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.ids.iter().copied()
    }

    /// Ids in insertion order, as a slice.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.ids
    }
}

impl FromIterator<NodeId> for NodeSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        let mut set = NodeSet::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
