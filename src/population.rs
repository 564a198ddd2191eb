//! Swarm management for the PSO algorithm.

use crate::config::Config;
use crate::error::Result;
use crate::influence::Influence;
use crate::problem::Problem;
use crate::rank;
use crate::tour::Tour;
use crate::velocity::VelocityMapper;
use log::trace;
use rand::Rng;

/// A fixed-size swarm of tours. After `rank` the best tour is at index 0.
pub struct Population {
    /// The tours, mutated in place every epoch
    pub tours: Vec<Tour>,
    /// Number of tours in the swarm
    pub particle_count: usize,
    /// Random swaps applied to each new tour
    pub shuffle_steps: usize,
    /// Upper bound on velocity
    pub v_max: f64,
    /// Chance of a random swap before each influence step
    pub swap_probability: f64,
}

impl Population {
    /// Create an empty population with the given configuration.
    pub fn new(config: &Config) -> Self {
        Population {
            tours: Vec::with_capacity(config.particle_count),
            particle_count: config.particle_count,
            shuffle_steps: config.shuffle_steps,
            v_max: config.v_max as f64,
            swap_probability: config.swap_probability,
        }
    }

    /// Fill the population with shuffled, evaluated tours.
    pub fn initialize<R: Rng>(&mut self, problem: &Problem, rng: &mut R) {
        self.tours.clear();

        for _ in 0..self.particle_count {
            self.tours.push(Tour::new(problem, self.shuffle_steps, rng));
        }
    }

    /// Recompute the fitness of every tour.
    pub fn evaluate_all(&mut self, problem: &Problem) {
        for tour in self.tours.iter_mut() {
            tour.evaluate(problem);
        }
    }

    /// Sort the tours ascending by fitness.
    pub fn rank(&mut self) {
        rank::rank_by_fitness(&mut self.tours);
    }

    /// Assign velocities relative to the worst tour. Requires a ranked population.
    pub fn compute_velocities(&mut self) -> Result<()> {
        VelocityMapper::compute(&mut self.tours, self.v_max)
    }

    /// Perturb every tour except the best, in rank order.
    ///
    /// Each tour gets `floor(velocity)` steps; a step is a random swap with
    /// probability `swap_probability` followed by one influence from the tour
    /// ranked just above it. The loop runs from best to worst, so a donor may
    /// already have been updated earlier in the same pass.
    ///
    /// Returns the number of steps applied to each rank (0 for the best).
    pub fn update_particles<R: Rng>(&mut self, problem: &Problem, rng: &mut R) -> Vec<usize> {
        let mut steps = vec![0; self.tours.len()];

        for i in 1..self.tours.len() {
            let (head, tail) = self.tours.split_at_mut(i);
            let donor = &head[i - 1];
            let recipient = &mut tail[0];

            let changes = recipient.velocity.abs().floor() as usize;
            trace!("Changes for particle {}: {}", i, changes);

            for _ in 0..changes {
                if rng.gen_bool(self.swap_probability) {
                    recipient.random_swap(rng);
                }
                Influence::apply(donor, recipient, rng);
            }

            debug_assert!(recipient.is_permutation(), "tour {} is not a permutation", i);
            recipient.evaluate(problem);
            steps[i] = changes;
        }

        steps
    }

    /// The best tour, valid right after `rank`.
    pub fn best(&self) -> Option<&Tour> {
        self.tours.first()
    }

    /// The worst tour, valid right after `rank`.
    pub fn worst(&self) -> Option<&Tour> {
        self.tours.last()
    }

    /// Get the population size.
    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}
