use anyhow::{Context, Result};
use clap::Parser;
use pso_tsp::config::Config;
use pso_tsp::problem::Problem;
use pso_tsp::utils::{
    format_duration, format_route, print_tour_visualization, save_tour, SearchStatistics,
};
use pso_tsp::PsoAlgorithm;
use serde_json::json;
use std::path::PathBuf;

/// Approximate a short TSP tour with particle swarm optimization.
#[derive(Parser, Debug)]
#[command(name = "pso-tsp", version, about)]
struct Args {
    /// TSPLIB-style coordinate file
    instance: PathBuf,

    /// JSON configuration file, overridden by the flags below
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of particles
    #[arg(long)]
    particles: Option<usize>,

    /// Maximum velocity (perturbation steps per epoch)
    #[arg(long)]
    v_max: Option<usize>,

    /// Number of epochs
    #[arg(long)]
    epochs: Option<usize>,

    /// Random swaps used to shuffle each initial tour
    #[arg(long)]
    shuffle_steps: Option<usize>,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write the best tour to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print every epoch's progress
    #[arg(short, long)]
    verbose: bool,

    /// Draw the cities on an ASCII grid
    #[arg(long)]
    plot: bool,
}

impl Args {
    fn build_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::new(),
        };

        if let Some(particles) = self.particles {
            config = config.with_particle_count(particles);
        }
        if let Some(v_max) = self.v_max {
            config = config.with_v_max(v_max);
        }
        if let Some(epochs) = self.epochs {
            config = config.with_max_epochs(epochs);
        }
        if let Some(steps) = self.shuffle_steps {
            config = config.with_shuffle_steps(steps);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let problem = Problem::from_file(&args.instance)
        .with_context(|| format!("failed to read {}", args.instance.display()))?;
    let config = args.build_config()?;

    if !args.json {
        println!(
            "Loaded problem: {} with {} cities",
            problem.name,
            problem.city_count()
        );
        println!("Searching for shortest way possible...");
    }

    let mut algorithm = PsoAlgorithm::new(problem, config)?;
    let verbose = args.verbose && !args.json;
    let best = algorithm
        .run_with_observer(|report| {
            if verbose {
                println!(
                    "epoch number: {} best: {:.2} worst: {:.2}",
                    report.epoch, report.best_distance, report.worst_distance
                );
            }
        })?
        .clone();

    let stats = SearchStatistics {
        epochs: algorithm.epoch,
        runtime: algorithm.run_time,
        best_distance: best.fitness,
        initial_best_distance: algorithm
            .history
            .first()
            .map_or(best.fitness, |r| r.best_distance),
        particle_count: algorithm.config.particle_count,
        city_count: algorithm.problem.city_count(),
    };

    if args.json {
        let result = json!({
            "name": algorithm.problem.name,
            "distance": best.fitness,
            "route": best.order,
            "epochs": stats.epochs,
            "runtime_secs": stats.runtime.as_secs_f64(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Route found in {}", format_duration(stats.runtime));
        println!("Shortest Route: {}", format_route(&best));
        println!("Distance: {:.2}", best.fitness);
        println!("City count: {}", stats.city_count);
        println!();
        println!("{}", stats.format());
    }

    if args.plot {
        print_tour_visualization(&best, &algorithm.problem);
    }

    if let Some(path) = &args.output {
        save_tour(&best, &algorithm.problem, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    Ok(())
}
