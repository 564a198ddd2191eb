//! Configuration parameters for the PSO-TSP algorithm.

use crate::error::{PsoError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Configuration settings for the PSO-TSP algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of particles (tours) in the swarm
    pub particle_count: usize,
    /// Maximum velocity, i.e. the most perturbation steps a tour gets per epoch
    pub v_max: usize,
    /// Number of epochs to run
    pub max_epochs: usize,
    /// Random swaps used to shuffle each tour at initialization
    pub shuffle_steps: usize,
    /// Chance of a random swap before each influence step
    pub swap_probability: f64,
    /// Seed for the random number generator, `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            particle_count: 100,
            v_max: 4,
            max_epochs: 100,
            shuffle_steps: 10,
            swap_probability: 0.5,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Load a configuration from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Set the number of particles.
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    /// Set the maximum velocity.
    pub fn with_v_max(mut self, v_max: usize) -> Self {
        self.v_max = v_max;
        self
    }

    /// Set the number of epochs.
    pub fn with_max_epochs(mut self, epochs: usize) -> Self {
        self.max_epochs = epochs;
        self
    }

    /// Set the number of shuffle steps used at initialization.
    pub fn with_shuffle_steps(mut self, steps: usize) -> Self {
        self.shuffle_steps = steps;
        self
    }

    /// Set the random swap probability.
    pub fn with_swap_probability(mut self, probability: f64) -> Self {
        self.swap_probability = probability;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration against a problem with `city_count` cities.
    pub fn validate(&self, city_count: usize) -> Result<()> {
        if city_count < 2 {
            return Err(PsoError::TooFewCities { count: city_count });
        }
        if self.particle_count < 2 {
            return Err(PsoError::TooFewParticles {
                count: self.particle_count,
            });
        }
        if self.v_max >= city_count {
            return Err(PsoError::InvalidVelocityLimit {
                v_max: self.v_max,
                city_count,
            });
        }
        if !(0.0..=1.0).contains(&self.swap_probability) {
            return Err(PsoError::InvalidSwapProbability(self.swap_probability));
        }
        Ok(())
    }
}
