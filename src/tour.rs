//! Tour representation: the particle of the swarm.

use crate::problem::Problem;
use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate closed tour through every city.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    /// Permutation of city indices, the visiting order
    pub order: Vec<usize>,
    /// Cached length of the closed tour, only valid after `evaluate`
    pub fitness: f64,
    /// Number of perturbation steps this tour receives in the current epoch
    pub velocity: f64,
}

impl Tour {
    /// Create a shuffled tour: the identity permutation with `shuffle_steps`
    /// random swaps applied, evaluated against `problem`.
    pub fn new<R: Rng>(problem: &Problem, shuffle_steps: usize, rng: &mut R) -> Self {
        let mut tour = Tour::from_order((0..problem.city_count()).collect());

        for _ in 0..shuffle_steps {
            tour.random_swap(rng);
        }

        tour.evaluate(problem);
        tour
    }

    /// Wrap an existing visiting order. The fitness is left at 0 until evaluated.
    pub fn from_order(order: Vec<usize>) -> Self {
        Tour {
            order,
            fitness: 0.0,
            velocity: 0.0,
        }
    }

    /// Recompute the fitness as the length of the closed tour, including the
    /// edge from the last city back to the first.
    pub fn evaluate(&mut self, problem: &Problem) {
        self.fitness = Self::tour_length(&self.order, problem);
    }

    /// Length of the closed tour visiting `order`.
    pub fn tour_length(order: &[usize], problem: &Problem) -> f64 {
        order
            .iter()
            .circular_tuple_windows()
            .map(|(&from, &to)| problem.get_distance(from, to))
            .sum()
    }

    /// Exchange the cities at two distinct random positions.
    ///
    /// The tour must hold at least two cities.
    pub fn random_swap<R: Rng>(&mut self, rng: &mut R) {
        let len = self.order.len();
        let a = rng.gen_range(0..len);
        let mut b = rng.gen_range(0..len);

        while b == a {
            b = rng.gen_range(0..len);
        }

        self.order.swap(a, b);
    }

    /// Position of `city` in the visiting order.
    pub fn position_of(&self, city: usize) -> Option<usize> {
        self.order.iter().position(|&c| c == city)
    }

    /// City visited right after `city`, wrapping from the last position to the first.
    pub fn successor_of(&self, city: usize) -> Option<usize> {
        self.position_of(city)
            .map(|i| self.order[(i + 1) % self.order.len()])
    }

    /// Check that the order holds each index in `0..len` exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![false; self.order.len()];

        for &city in &self.order {
            if city >= seen.len() || seen[city] {
                return false;
            }
            seen[city] = true;
        }

        true
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tour {:?} (Fitness: {:.2}, Velocity: {:.2})",
            self.order, self.fitness, self.velocity
        )
    }
}
