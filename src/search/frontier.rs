//! Explore frontier: archive members still awaiting exploration.

use rand::Rng;

use crate::pareto::MemberId;

/// The set of archive members whose neighbourhood is not yet explored.
///
/// Holds member ids only. Removing an id never touches the archive;
/// engines call [`forget`](Self::forget) with the ids an insertion
/// evicted so the frontier stays a subset of the archive.
#[derive(Debug, Clone, Default)]
pub struct ExploreFrontier {
    members: Vec<MemberId>,
}

impl ExploreFrontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a member for exploration. Duplicates are ignored.
    pub fn push(&mut self, id: MemberId) {
        if !self.members.contains(&id) {
            self.members.push(id);
        }
    }

    /// Removes a member; returns `true` if it was queued.
    pub fn remove(&mut self, id: MemberId) -> bool {
        match self.members.iter().position(|&m| m == id) {
            Some(pos) => {
                self.members.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drops every id in `evicted`.
    pub fn forget(&mut self, evicted: &[MemberId]) {
        if !evicted.is_empty() {
            self.members.retain(|id| !evicted.contains(id));
        }
    }

    /// Replaces the frontier with `ids`.
    pub fn reset_to<I: IntoIterator<Item = MemberId>>(&mut self, ids: I) {
        self.members.clear();
        self.members.extend(ids);
    }

    /// Draws a member uniformly at random. The member stays queued.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty; the search loop guards against it.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> MemberId {
        assert!(!self.members.is_empty(), "cannot sample from an empty explore frontier");
        self.members[rng.random_range(0..self.members.len())]
    }

    /// Returns `true` if `id` is queued.
    pub fn contains(&self, id: MemberId) -> bool {
        self.members.contains(&id)
    }

    /// Queued ids in insertion order.
    pub fn ids(&self) -> &[MemberId] {
        &self.members
    }

    /// Number of queued members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
