//! Property-based tests for u-aco
//!
//! Uses proptest to verify invariants of tours, the pheromone field and
//! roulette selection.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use u_aco::aco::{
    construct_tour, nearest_neighbor, roulette_select, AcoConfig, AcoRunner, CostMatrix,
    PheromoneField, PheromoneLog, Tour,
};

/// Symmetric matrix of `n` cities with costs in `[1, 100)`.
fn cost_matrix() -> impl Strategy<Value = CostMatrix> {
    (2usize..10).prop_flat_map(|n| {
        prop::collection::vec(1.0f64..100.0, n * n).prop_map(move |raw| {
            CostMatrix::from_fn(n, |i, j| raw[i * n + j]).expect("costs are positive")
        })
    })
}

fn shuffled_tour(n: usize, seed: u64) -> Tour {
    use rand::seq::SliceRandom;
    let mut cities: Vec<usize> = (0..n).collect();
    cities.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    Tour::new(cities).unwrap()
}

fn is_permutation(cities: &[usize], n: usize) -> bool {
    let mut sorted = cities.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

proptest! {
    // ==================== Greedy Builder ====================

    #[test]
    fn greedy_is_permutation_from_every_start(matrix in cost_matrix()) {
        for start in 0..matrix.len() {
            let tour = nearest_neighbor(&matrix, start).unwrap();
            prop_assert_eq!(tour.start(), start);
            prop_assert!(is_permutation(tour.cities(), matrix.len()));
        }
    }

    // ==================== Tour Cost ====================

    #[test]
    fn tour_cost_rotation_invariant(matrix in cost_matrix(), seed in any::<u64>()) {
        let tour = shuffled_tour(matrix.len(), seed);
        let base = tour.cost(&matrix);
        prop_assert!(base > 0.0);
        for city in 0..matrix.len() {
            let rotated = tour.rotated_to(city).unwrap();
            prop_assert!((rotated.cost(&matrix) - base).abs() < 1e-9 * base);
        }
    }

    #[test]
    fn tour_cost_reversal_invariant(matrix in cost_matrix(), seed in any::<u64>()) {
        let tour = shuffled_tour(matrix.len(), seed);
        let base = tour.cost(&matrix);
        prop_assert!((tour.reversed().cost(&matrix) - base).abs() < 1e-9 * base);
    }

    // ==================== Pheromone Field ====================

    #[test]
    fn evaporation_scales_every_cell_exactly(
        level in 0.0f64..10.0,
        seed in any::<u64>(),
        cost in 1.0f64..100.0,
        rho in 0.0f64..1.0
    ) {
        let mut field = PheromoneField::uniform(6, level);
        field.reinforce(&shuffled_tour(6, seed), cost).unwrap();
        let prior = field.clone();
        field.evaporate(rho);
        for (after, before) in field.values().iter().zip(prior.values()) {
            prop_assert_eq!(*after, before * (1.0 - rho));
        }
    }

    #[test]
    fn reinforcement_preserves_symmetry(
        n in 2usize..10,
        seeds in prop::collection::vec(any::<u64>(), 1..6),
        cost in 1.0f64..1000.0,
        level in 0.0f64..1.0
    ) {
        let mut field = PheromoneField::uniform(n, level);
        for seed in seeds {
            let tour = shuffled_tour(n, seed);
            let before = field.clone();
            field.reinforce(&tour, cost).unwrap();
            for (a, b) in tour.edges() {
                let up_ab = field.get(a, b) - before.get(a, b);
                let up_ba = field.get(b, a) - before.get(b, a);
                prop_assert_eq!(up_ab, up_ba);
                prop_assert!(up_ab > 0.0);
            }
            prop_assert!(field.is_symmetric(0.0));
        }
    }

    // ==================== Roulette Selection ====================

    #[test]
    fn roulette_never_picks_excluded(
        weights in prop::collection::vec(prop::option::of(0.0f64..5.0), 1..12),
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let eligible = weights.iter().any(|w| matches!(w, Some(w) if *w > 0.0));
        for _ in 0..200 {
            match roulette_select(&weights, &mut rng) {
                Some(i) => {
                    prop_assert!(eligible);
                    prop_assert!(matches!(weights[i], Some(w) if w > 0.0));
                }
                None => prop_assert!(!eligible),
            }
        }
    }

    #[test]
    fn constructed_tours_never_revisit(matrix in cost_matrix(), seed in any::<u64>()) {
        let n = matrix.len();
        let field = PheromoneField::uniform(n, 0.5);
        let config = AcoConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for _ in 0..20 {
            let tour = construct_tour(&matrix, &field, &config, &mut rng).unwrap();
            prop_assert!(is_permutation(tour.cities(), n));
        }
    }

    // ==================== Reproducibility ====================

    #[test]
    fn fixed_seed_reproduces_log(matrix in cost_matrix(), seed in any::<u64>()) {
        let config = AcoConfig::default().with_epochs(10).with_seed(seed);
        let mut a = PheromoneLog::new(Vec::new());
        let mut b = PheromoneLog::new(Vec::new());
        AcoRunner::run(&matrix, &config, &mut a).unwrap();
        AcoRunner::run(&matrix, &config, &mut b).unwrap();
        prop_assert_eq!(a.into_inner(), b.into_inner());
    }
}
