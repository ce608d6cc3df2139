//! Engine properties across the four problem families.
//!
//! A run that empties its frontier must leave a Pareto local optimum: no
//! neighbour of any archive member is accepted by the archive.

use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_pareto::atpls::{Atpls, AtplsConfig, CandidateSelection};
use u_pareto::neighborhood::{BitFlip, NeighborhoodKind, NeighborhoodPolicy, Reversal, Swap};
use u_pareto::pareto::{Dominance, DominanceComparator, ParetoArchive};
use u_pareto::pls::{Pls, PlsConfig};
use u_pareto::problem::{Knapsack, MoProblem, NkLandscape, Qap, Solution, Tsp};
use u_pareto::search::Termination;

fn assert_local_optimum<P, N, D>(problem: &P, policy: &N, archive: &ParetoArchive<P::Variable, D>)
where
    P: MoProblem,
    N: NeighborhoodPolicy<P::Variable>,
    D: DominanceComparator,
{
    let moves = policy.generate_moves(problem.num_variables());
    for member in archive.solutions() {
        for &mv in &moves {
            let mut neighbor = policy.apply_move(member, mv);
            problem.evaluate(&mut neighbor);
            assert!(
                archive.is_dominated(&neighbor),
                "{}: neighbour {:?} of {:?} escapes the archive",
                problem.name(),
                neighbor.objectives,
                member.objectives
            );
        }
    }
}

fn assert_mutually_non_dominated<V, D: DominanceComparator>(archive: &ParetoArchive<V, D>) {
    let members: Vec<&Solution<V>> = archive.solutions().collect();
    for (i, a) in members.iter().enumerate() {
        for b in &members[i + 1..] {
            assert_eq!(archive.comparator().compare(a, b), Dominance::Neither);
            assert_ne!(a.objectives, b.objectives);
        }
    }
}

fn random_matrix(rng: &mut StdRng, n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 0.0 } else { rng.random_range(1.0..20.0) })
                .collect()
        })
        .collect()
}

fn nk_instance(n: usize, k: usize, objectives: usize, seed: u64) -> NkLandscape {
    let mut rng = StdRng::seed_from_u64(seed);
    let links = (0..objectives)
        .map(|_| (0..n).map(|i| (1..=k).map(|d| (i + d) % n).collect()).collect())
        .collect();
    let tables = (0..objectives)
        .map(|_| {
            (0..n)
                .map(|_| (0..1usize << (k + 1)).map(|_| rng.random::<f64>()).collect())
                .collect()
        })
        .collect();
    NkLandscape::new(n, k, links, tables).unwrap()
}

#[test]
fn pls_nk_landscape_reaches_local_optimum() {
    let nk = nk_instance(8, 2, 2, 1);
    assert_eq!(NeighborhoodKind::for_problem(nk.name()), Some(NeighborhoodKind::BitFlip));

    let mut pls = Pls::new(&nk, &BitFlip, PlsConfig::default().with_seed(3)).unwrap();
    let result = pls.run();

    assert_eq!(result.termination, Termination::LocalOptimum);
    assert_eq!(pls.frontier_len(), 0);
    assert_local_optimum(&nk, &BitFlip, pls.archive());
    assert_mutually_non_dominated(pls.archive());
}

#[test]
fn pls_tsp_with_reversal_reaches_local_optimum() {
    let mut rng = StdRng::seed_from_u64(9);
    let tsp = Tsp::new(vec![random_matrix(&mut rng, 7), random_matrix(&mut rng, 7)]).unwrap();
    assert_eq!(NeighborhoodKind::for_problem(tsp.name()), Some(NeighborhoodKind::Reversal));

    let mut pls = Pls::new(&tsp, &Reversal, PlsConfig::default().with_seed(4)).unwrap();
    let result = pls.run();

    assert_eq!(result.termination, Termination::LocalOptimum);
    assert_local_optimum(&tsp, &Reversal, pls.archive());
    for s in &result.front {
        let mut tour = s.variables.clone();
        tour.sort_unstable();
        assert_eq!(tour, (0..7).collect::<Vec<_>>());
    }
}

#[test]
fn atpls_qap_with_swap_reaches_local_optimum() {
    let mut rng = StdRng::seed_from_u64(13);
    let distance = random_matrix(&mut rng, 6);
    let flows = vec![random_matrix(&mut rng, 6), random_matrix(&mut rng, 6)];
    let qap = Qap::new(distance, flows).unwrap();
    assert_eq!(NeighborhoodKind::for_problem(qap.name()), Some(NeighborhoodKind::Swap));

    // First-dominating acceptance over all moves keeps the PLS guarantee.
    let config = AtplsConfig::from_tags("<", "*")
        .unwrap()
        .with_selection(CandidateSelection::HypervolumeGap)
        .with_seed(6);
    let mut atpls = Atpls::new(&qap, &Swap, config).unwrap();
    let result = atpls.run();

    assert_eq!(result.termination, Termination::LocalOptimum);
    assert_local_optimum(&qap, &Swap, atpls.archive());
    assert_mutually_non_dominated(atpls.external_archive());
}

#[test]
fn cancelled_run_still_returns_archive() {
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    let nk = nk_instance(10, 3, 2, 2);
    let flag = Arc::new(AtomicBool::new(true));
    let mut atpls = Atpls::new(&nk, &BitFlip, AtplsConfig::default().with_seed(1)).unwrap();
    let result = atpls.run_with_cancel(Some(flag));

    assert_eq!(result.termination, Termination::Cancelled);
    assert_eq!(result.front.len(), 1);
    assert_eq!(result.front, atpls.initial_solutions());
}

fn knapsack_strategy() -> impl Strategy<Value = (Knapsack, u64)> {
    (3usize..7)
        .prop_flat_map(|n| {
            (
                vec(1.0f64..10.0, n),
                vec(1.0f64..10.0, n),
                vec(1.0f64..10.0, n),
                any::<u64>(),
            )
        })
        .prop_map(|(weights, v1, v2, seed)| {
            let capacity = weights.iter().sum::<f64>() / 2.0;
            (Knapsack::new(weights, vec![v1, v2], capacity).unwrap(), seed)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_pls_knapsack_is_pareto_local_optimum((kp, seed) in knapsack_strategy()) {
        let n = kp.num_variables();
        let mut pls = Pls::new(&kp, &BitFlip, PlsConfig::default().with_seed(seed))
            .unwrap()
            .with_seeds(vec![Solution::new(vec![false; n], 2, 1)])
            .unwrap();
        let result = pls.run();

        prop_assert_eq!(result.termination, Termination::LocalOptimum);
        prop_assert!(result.front.iter().all(|s| s.is_feasible()));
        assert_local_optimum(&kp, &BitFlip, pls.archive());
    }

    #[test]
    fn prop_budget_is_never_exceeded((kp, seed) in knapsack_strategy(), budget in 1usize..60) {
        let n = kp.num_variables();
        let seeds = vec![Solution::new(vec![false; n], 2, 1)];

        let config = PlsConfig::default()
            .with_seed(seed)
            .with_max_evaluations(budget);
        let mut pls = Pls::new(&kp, &BitFlip, config)
            .unwrap()
            .with_seeds(seeds.clone())
            .unwrap();
        prop_assert!(pls.run().evaluations <= budget);
        assert_mutually_non_dominated(pls.archive());

        let config = AtplsConfig::default()
            .with_seed(seed)
            .with_max_evaluations(budget);
        let mut atpls = Atpls::new(&kp, &BitFlip, config)
            .unwrap()
            .with_seeds(seeds)
            .unwrap();
        prop_assert!(atpls.run().evaluations <= budget);
        assert_mutually_non_dominated(atpls.archive());
    }
}
