//! Property tests for tour evaluation, the swap move, and acceptance.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tsp_anneal::sa::{acceptance_probability, SaConfig, SaRunner};
use u_tsp_anneal::tsp::{
    distance, is_permutation, random_tour, swap_neighbor, tour_cost, Point, TspProblem,
};

fn point() -> impl Strategy<Value = Point> {
    (-1e3f64..1e3, -1e3f64..1e3).prop_map(Point::from)
}

fn cities(max: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec(point(), 2..max)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #[test]
    fn distance_is_symmetric(a in point(), b in point()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
        prop_assert_eq!(distance(&a, &a), 0.0);
        prop_assert!(distance(&a, &b) >= 0.0);
    }

    #[test]
    fn cost_invariant_under_rotation(points in cities(40), seed in any::<u64>(), shift in 0usize..40) {
        let mut rng = StdRng::seed_from_u64(seed);
        let tour = random_tour(points.len(), &mut rng);
        let mut rotated = tour.clone();
        rotated.rotate_left(shift % tour.len());

        prop_assert!(close(tour_cost(&points, &tour), tour_cost(&points, &rotated)));
    }

    #[test]
    fn cost_invariant_under_reversal(points in cities(40), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let tour = random_tour(points.len(), &mut rng);
        let reversed: Vec<usize> = tour.iter().rev().copied().collect();

        prop_assert!(close(tour_cost(&points, &tour), tour_cost(&points, &reversed)));
    }

    #[test]
    fn swap_neighbor_keeps_permutation(n in 2usize..60, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let tour = random_tour(n, &mut rng);
        let next = swap_neighbor(&tour, &mut rng);

        prop_assert!(is_permutation(&next, n));
        let changed: Vec<usize> = (0..n).filter(|&i| tour[i] != next[i]).collect();
        prop_assert_eq!(changed.len(), 2);
        prop_assert_eq!(tour[changed[0]], next[changed[1]]);
        prop_assert_eq!(tour[changed[1]], next[changed[0]]);
    }

    #[test]
    fn acceptance_decreases_with_temperature(
        delta in 0.01f64..10.0,
        t_low in 0.1f64..100.0,
        factor in 1.01f64..10.0,
    ) {
        let t_high = t_low * factor;
        let p_low = acceptance_probability(delta, t_low);
        let p_high = acceptance_probability(delta, t_high);

        prop_assert!(p_low < p_high, "p({t_low}) = {p_low} >= p({t_high}) = {p_high}");
        prop_assert!(p_high < 1.0);
        prop_assert!(p_low > 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn best_never_worse_than_initial(points in cities(25), seed in any::<u64>()) {
        let n = points.len();
        let problem = TspProblem::new(points).unwrap();
        let config = SaConfig::default()
            .with_iterations(1000)
            .with_initial_temperature(100.0)
            .with_seed(seed);
        let result = SaRunner::run(&problem, &config).unwrap();

        prop_assert!(is_permutation(&result.best, n));
        prop_assert!(result.best_cost <= result.initial_cost);
        prop_assert!(close(problem.tour_cost(&result.best), result.best_cost));
        for w in result.cost_history.windows(2) {
            prop_assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn two_cities_cost_twice_distance(a in point(), b in point(), seed in any::<u64>()) {
        let problem = TspProblem::new(vec![a, b]).unwrap();
        let config = SaConfig::default().with_iterations(50).with_seed(seed);
        let result = SaRunner::run(&problem, &config).unwrap();

        prop_assert!(close(result.best_cost, 2.0 * distance(&a, &b)));
    }
}
