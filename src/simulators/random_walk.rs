// src/simulators/random_walk.rs

use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Additive random walk with a hard price floor.
///
/// Each step adds a shock drawn uniformly from `[-max_change, max_change)`
/// and clamps the result from below at `floor`.
#[derive(Debug, Clone)]
pub struct RandomWalk {
    max_change: f64,
    floor: f64,
    shock: Uniform<f64>,
}

impl RandomWalk {
    /// `max_change` must be positive and finite; `SimConfig::validate`
    /// checks this before a walk is ever built from user input.
    pub fn new(max_change: f64, floor: f64) -> Self {
        Self {
            max_change,
            floor,
            shock: Uniform::new(-max_change, max_change),
        }
    }

    pub fn max_change(&self) -> f64 {
        self.max_change
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    /// Moves `price` one tick.
    pub fn next_price<R: Rng + ?Sized>(&self, price: f64, rng: &mut R) -> f64 {
        let change = self.shock.sample(rng);
        (price + change).max(self.floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_drops_below_floor() {
        let walk = RandomWalk::new(5.0, 1.0);
        let mut rng = StdRng::seed_from_u64(7);
        let mut price = 2.0;
        for _ in 0..10_000 {
            price = walk.next_price(price, &mut rng);
            assert!(price >= 1.0, "price fell through the floor: {}", price);
        }
    }

    #[test]
    fn step_stays_inside_shock_band() {
        let walk = RandomWalk::new(5.0, 1.0);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..10_000 {
            let next = walk.next_price(500.0, &mut rng);
            assert!((495.0..=505.0).contains(&next), "step escaped band: {}", next);
        }
    }

    #[test]
    fn same_seed_same_path() {
        let walk = RandomWalk::new(5.0, 1.0);
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let path_a: Vec<f64> = (0..50).map(|_| walk.next_price(100.0, &mut a)).collect();
        let path_b: Vec<f64> = (0..50).map(|_| walk.next_price(100.0, &mut b)).collect();
        assert_eq!(path_a, path_b);
    }
}
