//! # PSO-TSP
//!
//! A Rust implementation of Particle Swarm Optimization adapted to the
//! Traveling Salesman Problem.
//!
//! Each particle is a tour (a permutation of city indices). Instead of a
//! geometric velocity vector, a particle carries a scalar velocity that sets
//! how many perturbation steps it receives per epoch: worse tours move more.
//! A perturbation step is an optional random swap followed by the social
//! influence operator, which copies one directed edge from the next better
//! ranked tour. The best tour of the swarm is never perturbed.

pub mod config;
pub mod error;
pub mod influence;
pub mod population;
pub mod problem;
pub mod rank;
pub mod tour;
pub mod utils;
pub mod velocity;

pub use crate::error::{PsoError, Result};

use crate::config::Config;
use crate::population::Population;
use crate::problem::Problem;
use crate::tour::Tour;

use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Progress data produced by one epoch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochReport {
    /// Zero-based epoch index
    pub epoch: usize,
    /// Fitness of the best tour after ranking
    pub best_distance: f64,
    /// Fitness of the worst tour after ranking
    pub worst_distance: f64,
    /// Perturbation steps applied to each rank
    pub steps: Vec<usize>,
}

/// The main algorithm structure that drives the swarm through its epochs.
pub struct PsoAlgorithm {
    pub problem: Problem,
    pub population: Population,
    pub config: Config,
    pub epoch: usize,
    pub history: Vec<EpochReport>,
    pub run_time: Duration,
    rng: ChaCha8Rng,
}

impl PsoAlgorithm {
    /// Create a new PSO instance for the given problem and configuration.
    ///
    /// Fails if the configuration does not fit the problem or if all cities coincide.
    pub fn new(problem: Problem, config: Config) -> Result<Self> {
        config.validate(problem.city_count())?;
        if problem.is_degenerate() {
            return Err(PsoError::DegenerateGeometry);
        }

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(PsoAlgorithm {
            problem,
            population: Population::new(&config),
            config,
            epoch: 0,
            history: Vec::new(),
            run_time: Duration::from_secs(0),
            rng,
        })
    }

    /// Initialize the population with shuffled tours.
    pub fn initialize(&mut self) {
        self.population.initialize(&self.problem, &mut self.rng);
        self.epoch = 0;
        self.history.clear();
    }

    /// True once the epoch budget is spent.
    pub fn is_done(&self) -> bool {
        self.epoch >= self.config.max_epochs
    }

    /// Run a single epoch: evaluate, rank, compute velocities, perturb.
    ///
    /// Fails with `NotInitialized` if `initialize` has not filled the population.
    pub fn step(&mut self) -> Result<EpochReport> {
        if self.population.is_empty() {
            return Err(PsoError::NotInitialized);
        }

        self.population.evaluate_all(&self.problem);
        self.population.rank();
        self.population.compute_velocities()?;

        let (best_distance, worst_distance) =
            match (self.population.best(), self.population.worst()) {
                (Some(best), Some(worst)) => (best.fitness, worst.fitness),
                _ => return Err(PsoError::NotInitialized),
            };

        let steps = self
            .population
            .update_particles(&self.problem, &mut self.rng);

        debug!(
            "epoch {}: best {:.4}, worst {:.4}",
            self.epoch, best_distance, worst_distance
        );

        let report = EpochReport {
            epoch: self.epoch,
            best_distance,
            worst_distance,
            steps,
        };
        self.history.push(report.clone());
        self.epoch += 1;

        Ok(report)
    }

    /// Run all epochs and return the best tour.
    pub fn run(&mut self) -> Result<&Tour> {
        self.run_with_observer(|_| {})
    }

    /// Run all epochs, calling `observer` after each one, and return the best tour.
    pub fn run_with_observer<F>(&mut self, mut observer: F) -> Result<&Tour>
    where
        F: FnMut(&EpochReport),
    {
        let start_time = Instant::now();
        info!(
            "Searching {} cities with {} particles for {} epochs",
            self.problem.city_count(),
            self.config.particle_count,
            self.config.max_epochs
        );

        self.initialize();

        while !self.is_done() {
            let report = self.step()?;
            observer(&report);
        }

        // Fitness is current for every tour, one more ranking puts the best first.
        self.population.rank();
        self.run_time = start_time.elapsed();

        let best = self.best_tour().ok_or(PsoError::NotInitialized)?;
        info!(
            "Route found in {:?} with distance {:.4}",
            self.run_time, best.fitness
        );

        Ok(best)
    }

    /// The tour at the top of the population, `None` before `initialize`.
    pub fn best_tour(&self) -> Option<&Tour> {
        self.population.best()
    }
}
