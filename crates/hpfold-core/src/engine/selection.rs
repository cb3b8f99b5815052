use rand::Rng;

/// Tournament selection: draws `size` contestants with replacement and returns the
/// index of the fittest. Ties go to the contestant drawn first.
///
/// `fitness` must not be empty.
pub fn tournament<R: Rng + ?Sized>(fitness: &[f64], size: usize, rng: &mut R) -> usize {
    debug_assert!(!fitness.is_empty());
    let mut best = rng.gen_range(0..fitness.len());
    for _ in 1..size {
        let contender = rng.gen_range(0..fitness.len());
        if fitness[contender] > fitness[best] {
            best = contender;
        }
    }
    best
}

/// Indices of the `count` fittest entries, best first.
pub fn elites(fitness: &[f64], count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]));
    order.truncate(count);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn tournament_of_full_population_size_tends_to_the_best() {
        let fitness = [0.0, 5.0, 1.0, 2.0];
        let mut rng = StdRng::seed_from_u64(11);
        let wins = (0..200)
            .filter(|_| tournament(&fitness, 4, &mut rng) == 1)
            .count();
        assert!(wins > 100);
    }

    #[test]
    fn tournament_of_one_is_uniform_sampling() {
        let fitness = [0.0, 5.0];
        let mut rng = StdRng::seed_from_u64(2);
        let picks: Vec<_> = (0..100).map(|_| tournament(&fitness, 1, &mut rng)).collect();
        assert!(picks.contains(&0));
        assert!(picks.contains(&1));
    }

    #[test]
    fn tournament_index_is_always_in_range() {
        let fitness = [1.0; 7];
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            assert!(tournament(&fitness, 3, &mut rng) < fitness.len());
        }
    }

    #[test]
    fn elites_are_sorted_best_first() {
        let fitness = [0.5, 3.0, -1.0, 2.0];
        assert_eq!(elites(&fitness, 2), vec![1, 3]);
        assert_eq!(elites(&fitness, 10).len(), 4);
        assert!(elites(&fitness, 0).is_empty());
    }
}
