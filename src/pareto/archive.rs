//! Non-dominated solution archive.

use super::dominance::{ConstrainedDominance, Dominance, DominanceComparator};
use crate::problem::Solution;

/// Stable handle to an archive member.
///
/// Ids are assigned on insertion and never reused within one archive,
/// so structures derived from the archive (such as an explore frontier)
/// can refer to members without holding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(u64);

/// Outcome of a successful insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    /// Id of the newly inserted member.
    pub id: MemberId,
    /// Ids of members removed because the new solution dominates them.
    pub evicted: Vec<MemberId>,
}

/// A minimal set of mutually non-dominated solutions.
///
/// # Invariant
///
/// For every pair of members the comparator reports
/// [`Dominance::Neither`], and no two members share an objective vector.
///
/// # Complexity
///
/// Insertion is O(n) comparisons in the archive size, which suits the
/// archive sizes (hundreds) local search produces.
///
/// # Example
///
/// ```
/// use u_pareto::pareto::ParetoArchive;
/// use u_pareto::problem::Solution;
///
/// let mk = |o: Vec<f64>| Solution { variables: vec![0u8], objectives: o, constraints: vec![] };
///
/// let mut archive = ParetoArchive::new();
/// assert!(archive.add(mk(vec![1.0, 3.0])));
/// assert!(archive.add(mk(vec![3.0, 1.0])));
/// assert!(!archive.add(mk(vec![3.0, 3.0]))); // dominated
/// assert!(archive.add(mk(vec![0.5, 0.5])));  // dominates both
/// assert_eq!(archive.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ParetoArchive<V, D = ConstrainedDominance> {
    members: Vec<(MemberId, Solution<V>)>,
    next_id: u64,
    comparator: D,
}

impl<V, D: DominanceComparator + Default> Default for ParetoArchive<V, D> {
    fn default() -> Self {
        Self::with_comparator(D::default())
    }
}

impl<V> ParetoArchive<V> {
    /// Creates an empty archive using [`ConstrainedDominance`].
    pub fn new() -> Self {
        Self::with_comparator(ConstrainedDominance)
    }
}

impl<V, D: DominanceComparator> ParetoArchive<V, D> {
    /// Creates an empty archive using `comparator`.
    pub fn with_comparator(comparator: D) -> Self {
        Self {
            members: Vec::new(),
            next_id: 0,
            comparator,
        }
    }

    /// The comparator used by this archive.
    pub fn comparator(&self) -> &D {
        &self.comparator
    }

    /// Offers `solution` to the archive.
    ///
    /// Rejected (returns `None`, archive unchanged) if a member dominates
    /// it or has an identical objective vector. Otherwise every member it
    /// dominates is removed and the solution is inserted.
    pub fn admit(&mut self, solution: Solution<V>) -> Option<Admission> {
        for (_, member) in &self.members {
            match self.comparator.compare(member, &solution) {
                Dominance::Left => return None,
                Dominance::Neither if member.objectives == solution.objectives => return None,
                _ => {}
            }
        }

        let mut evicted = Vec::new();
        let comparator = &self.comparator;
        self.members.retain(|(id, member)| {
            if comparator.compare(&solution, member) == Dominance::Left {
                evicted.push(*id);
                false
            } else {
                true
            }
        });

        let id = MemberId(self.next_id);
        self.next_id += 1;
        self.members.push((id, solution));
        Some(Admission { id, evicted })
    }

    /// Like [`admit`](Self::admit), returning only the new member id.
    pub fn insert(&mut self, solution: Solution<V>) -> Option<MemberId> {
        self.admit(solution).map(|a| a.id)
    }

    /// Like [`admit`](Self::admit), returning whether the solution was accepted.
    pub fn add(&mut self, solution: Solution<V>) -> bool {
        self.admit(solution).is_some()
    }

    /// Adds each solution in order; returns how many were accepted at the time.
    ///
    /// The result is order-dependent: a solution accepted early may be
    /// evicted by a later one.
    pub fn add_all<I: IntoIterator<Item = Solution<V>>>(&mut self, solutions: I) -> usize {
        let mut accepted = 0;
        for solution in solutions {
            if self.add(solution) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Returns `true` if `solution` dominates at least one member.
    ///
    /// Does not modify the archive.
    pub fn dominates_any(&self, solution: &Solution<V>) -> bool {
        self.members
            .iter()
            .any(|(_, m)| self.comparator.compare(solution, m) == Dominance::Left)
    }

    /// Returns `true` if some member dominates `solution` or shares its
    /// objective vector, i.e. [`add`](Self::add) would reject it.
    pub fn is_dominated(&self, solution: &Solution<V>) -> bool {
        self.members.iter().any(|(_, m)| match self.comparator.compare(m, solution) {
            Dominance::Left => true,
            Dominance::Neither => m.objectives == solution.objectives,
            Dominance::Right => false,
        })
    }

    /// Returns `true` if some member strictly dominates `solution`.
    ///
    /// Unlike [`is_dominated`](Self::is_dominated), a duplicate of a member's
    /// objective vector does not count.
    pub fn is_dominated_strictly(&self, solution: &Solution<V>) -> bool {
        self.members
            .iter()
            .any(|(_, m)| self.comparator.compare(m, solution) == Dominance::Left)
    }

    /// Returns `true` if `solution` neither dominates nor is dominated by
    /// any member, and duplicates no member's objective vector.
    pub fn is_incomparable(&self, solution: &Solution<V>) -> bool {
        !self.dominates_any(solution) && !self.is_dominated(solution)
    }

    /// Removes a member by id.
    pub fn remove(&mut self, id: MemberId) -> Option<Solution<V>> {
        let pos = self.members.iter().position(|(mid, _)| *mid == id)?;
        Some(self.members.remove(pos).1)
    }

    /// Returns the member with the given id.
    pub fn get(&self, id: MemberId) -> Option<&Solution<V>> {
        self.members.iter().find(|(mid, _)| *mid == id).map(|(_, s)| s)
    }

    /// Returns `true` if `id` is a current member.
    pub fn contains(&self, id: MemberId) -> bool {
        self.members.iter().any(|(mid, _)| *mid == id)
    }

    /// Ids of the current members.
    pub fn ids(&self) -> impl Iterator<Item = MemberId> + '_ {
        self.members.iter().map(|(id, _)| *id)
    }

    /// Current members.
    pub fn solutions(&self) -> impl Iterator<Item = &Solution<V>> + '_ {
        self.members.iter().map(|(_, s)| s)
    }

    /// Current members paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (MemberId, &Solution<V>)> + '_ {
        self.members.iter().map(|(id, s)| (*id, s))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the archive has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Removes all members. Ids are not reused afterwards.
    pub fn clear(&mut self) {
        self.members.clear();
    }

    /// Consumes the archive, returning its members.
    pub fn into_vec(self) -> Vec<Solution<V>> {
        self.members.into_iter().map(|(_, s)| s).collect()
    }
}

impl<V: Clone, D: DominanceComparator> ParetoArchive<V, D> {
    /// Clones the current members into a list.
    pub fn to_vec(&self) -> Vec<Solution<V>> {
        self.solutions().cloned().collect()
    }
}
