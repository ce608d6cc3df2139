//! Candidate selection from the explore frontier.

use rand::Rng;

use super::config::CandidateSelection;
use crate::pareto::{DominanceComparator, MemberId, ParetoArchive};
use crate::search::ExploreFrontier;

/// Index of the point bordering the largest empty area on the first two
/// objectives.
///
/// Points are ordered by the first objective. Each interior point scores
/// the sum of the rectangles it spans with its two neighbours; the two
/// boundary points score twice their single rectangle. Ties go to the
/// point with the smaller first objective.
///
/// # Panics
///
/// Panics if `points` is empty or a point has fewer than two objectives.
///
/// ```
/// use u_pareto::atpls::hypervolume_gap_index;
///
/// let a = [0.0, 10.0];
/// let b = [1.0, 9.0];
/// let c = [6.0, 1.0];
/// // c is a boundary point: its 5x8 gap to b counts twice.
/// assert_eq!(hypervolume_gap_index(&[c, a, b]), 0);
/// ```
pub fn hypervolume_gap_index<P: AsRef<[f64]>>(points: &[P]) -> usize {
    assert!(!points.is_empty(), "hypervolume gap selection needs at least one point");
    if points.len() == 1 {
        return 0;
    }

    let points: Vec<&[f64]> = points.iter().map(AsRef::as_ref).collect();
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| points[a][0].total_cmp(&points[b][0]));

    let area = |a: usize, b: usize| {
        (points[a][0] - points[b][0]).abs() * (points[a][1] - points[b][1]).abs()
    };

    let last = order.len() - 1;
    let score = |k: usize| match k {
        0 => 2.0 * area(order[0], order[1]),
        k if k == last => 2.0 * area(order[last], order[last - 1]),
        k => area(order[k - 1], order[k]) + area(order[k], order[k + 1]),
    };

    let mut best = 0;
    let mut best_score = score(0);
    for k in 1..order.len() {
        let s = score(k);
        if s > best_score {
            best = k;
            best_score = s;
        }
    }
    order[best]
}

/// Draws the next candidate according to `selection`.
///
/// `HypervolumeGap` falls back to uniform sampling when the archive has
/// fewer than two objectives.
pub(crate) fn select<V, D: DominanceComparator, R: Rng>(
    selection: CandidateSelection,
    frontier: &ExploreFrontier,
    archive: &ParetoArchive<V, D>,
    rng: &mut R,
) -> MemberId {
    match selection {
        CandidateSelection::UniformRandom => frontier.sample(rng),
        CandidateSelection::HypervolumeGap => {
            let members: Vec<(MemberId, &[f64])> = frontier
                .ids()
                .iter()
                .filter_map(|&id| archive.get(id).map(|s| (id, s.objectives.as_slice())))
                .collect();
            if members.len() < 2 || members.iter().any(|(_, o)| o.len() < 2) {
                return frontier.sample(rng);
            }
            let points: Vec<&[f64]> = members.iter().map(|&(_, o)| o).collect();
            members[hypervolume_gap_index(points.as_slice())].0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pareto::ParetoDominance;
    use crate::problem::Solution;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_point() {
        assert_eq!(hypervolume_gap_index(&[[3.0, 4.0]]), 0);
    }

    #[test]
    fn test_two_points_tie_goes_to_left() {
        let a = [5.0, 0.0];
        let b = [0.0, 5.0];
        assert_eq!(hypervolume_gap_index(&[a, b]), 1);
    }

    #[test]
    fn test_boundary_counts_double() {
        // Sorted: (0,10) (1,2) (2,1) (10,0).
        // Scores: 2*8=16, 8+1=9, 1+8=9, 2*8=16 -> first boundary wins.
        let pts: [&[f64]; 4] = [&[2.0, 1.0], &[10.0, 0.0], &[0.0, 10.0], &[1.0, 2.0]];
        assert_eq!(hypervolume_gap_index(&pts), 2);
    }

    #[test]
    fn test_interior_gap_wins() {
        // Sorted: (0,10) (1,9) (9,1) (10,0).
        // Scores: 2, 1+64=65, 64+1=65, 2 -> (1,9).
        let pts: [&[f64]; 4] = [&[10.0, 0.0], &[9.0, 1.0], &[1.0, 9.0], &[0.0, 10.0]];
        assert_eq!(hypervolume_gap_index(&pts), 2);
    }

    #[test]
    #[should_panic(expected = "at least one point")]
    fn test_empty_panics() {
        hypervolume_gap_index::<&[f64]>(&[]);
    }

    #[test]
    fn test_select_uses_frontier_members_only() {
        let mut archive = ParetoArchive::with_comparator(ParetoDominance);
        let objs = [[0.0, 10.0], [1.0, 9.0], [9.0, 1.0], [10.0, 0.0]];
        let ids: Vec<MemberId> = objs
            .iter()
            .map(|o| {
                archive
                    .insert(Solution {
                        variables: vec![0u8],
                        objectives: o.to_vec(),
                        constraints: vec![],
                    })
                    .unwrap()
            })
            .collect();

        let mut frontier = ExploreFrontier::new();
        frontier.reset_to([ids[0], ids[3]]);
        let mut rng = StdRng::seed_from_u64(0);

        let picked = select(CandidateSelection::HypervolumeGap, &frontier, &archive, &mut rng);
        assert_eq!(picked, ids[0]);

        for _ in 0..10 {
            let picked = select(CandidateSelection::UniformRandom, &frontier, &archive, &mut rng);
            assert!(frontier.contains(picked));
        }
    }
}
