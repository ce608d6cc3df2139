//! Independent repeated runs.

/// Calls `run` once per seed and collects the results in seed order.
///
/// With the `parallel` feature the runs are spread over the rayon thread
/// pool. Each run owns its engine, so results do not depend on scheduling.
/// If any run fails, one of the errors is returned.
pub fn run_repeated<T, E, F>(seeds: &[u64], run: F) -> Result<Vec<T>, E>
where
    T: Send,
    E: Send,
    F: Fn(u64) -> Result<T, E> + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        seeds.par_iter().map(|&seed| run(seed)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run(seed)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_follow_seed_order() {
        let out: Result<Vec<u64>, ()> = run_repeated(&[3, 1, 2], |s| Ok(s * 10));
        assert_eq!(out, Ok(vec![30, 10, 20]));
    }

    #[test]
    fn test_error_is_returned() {
        let out: Result<Vec<u64>, String> =
            run_repeated(&[1, 2, 3], |s| if s == 2 { Err("bad".into()) } else { Ok(s) });
        assert_eq!(out, Err("bad".to_string()));
    }
}
