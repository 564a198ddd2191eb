//! Utility functions and structures for reporting PSO-TSP results.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::problem::Problem;
use crate::tour::Tour;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Render a closed route, e.g. `0 -> 2 -> 1 -> 0`.
pub fn format_route(tour: &Tour) -> String {
    let mut route: Vec<String> = tour.order.iter().map(|c| c.to_string()).collect();

    if let Some(&first) = tour.order.first() {
        route.push(first.to_string());
    }

    route.join(" -> ")
}

/// Save a tour to a file.
pub fn save_tour<P: AsRef<Path>>(tour: &Tour, problem: &Problem, path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "TSP Tour for instance: {}", problem.name)?;
    writeln!(file, "Total Distance: {:.2}", tour.fitness)?;
    writeln!(file, "City Count: {}", problem.city_count())?;
    writeln!(file)?;
    writeln!(file, "Route: {}", format_route(tour))?;

    Ok(())
}

/// Generate statistics about the search process.
pub struct SearchStatistics {
    pub epochs: usize,
    pub runtime: Duration,
    pub best_distance: f64,
    pub initial_best_distance: f64,
    pub particle_count: usize,
    pub city_count: usize,
}

impl SearchStatistics {
    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Epochs: {}
- Runtime: {}
- Best Distance: {:.2}
- Initial Best Distance: {:.2}
- Particles: {}
- Cities: {}",
            self.epochs,
            format_duration(self.runtime),
            self.best_distance,
            self.initial_best_distance,
            self.particle_count,
            self.city_count
        )
    }
}

/// Print an ASCII plot of the cities, marking the start of the tour with `S`.
pub fn print_tour_visualization(tour: &Tour, problem: &Problem) {
    println!("Tour Visualization for {}", problem.name);
    println!("Total Distance: {:.2}", tour.fitness);
    println!();

    for row in render_grid(tour, problem, 80, 25) {
        println!("{}", row);
    }
    println!();

    println!("Legend:");
    println!("S - Start city");
    println!("* - City");
    println!();
}

/// Plot the cities of `problem` onto a `width` x `height` character grid.
pub fn render_grid(tour: &Tour, problem: &Problem, width: usize, height: usize) -> Vec<String> {
    let mut grid = vec![vec![' '; width]; height];
    if problem.cities.is_empty() || width == 0 || height == 0 {
        return grid.into_iter().map(|r| r.into_iter().collect()).collect();
    }

    // Find max and min coordinates for scaling
    let mut min_x = f64::MAX;
    let mut min_y = f64::MAX;
    let mut max_x = f64::MIN;
    let mut max_y = f64::MIN;

    for city in &problem.cities {
        min_x = min_x.min(city.x);
        min_y = min_y.min(city.y);
        max_x = max_x.max(city.x);
        max_y = max_y.max(city.y);
    }

    let span_x = (max_x - min_x).max(f64::EPSILON);
    let span_y = (max_y - min_y).max(f64::EPSILON);
    let scale = |value: f64, min: f64, span: f64, cells: usize| {
        ((value - min) / span * (cells as f64 - 1.0)).round() as usize
    };

    for city in &problem.cities {
        let x = scale(city.x, min_x, span_x, width);
        let y = scale(city.y, min_y, span_y, height);
        grid[y][x] = '*';
    }

    if let Some(&start) = tour.order.first() {
        let city = &problem.cities[start];
        let x = scale(city.x, min_x, span_x, width);
        let y = scale(city.y, min_y, span_y, height);
        grid[y][x] = 'S';
    }

    grid.into_iter().map(|r| r.into_iter().collect()).collect()
}
