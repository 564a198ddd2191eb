//! Unit tests for the reporting utilities.

use pso_tsp::problem::{City, Problem};
use pso_tsp::tour::Tour;
use pso_tsp::utils::{format_duration, format_route, render_grid, save_tour, SearchStatistics};
use std::time::Duration;

fn create_triangle() -> Problem {
    Problem::new(
        "Triangle".to_string(),
        vec![City::new(0.0, 0.0), City::new(4.0, 0.0), City::new(0.0, 3.0)],
    )
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(Duration::from_secs(65)), "0h 01m 05s");
    assert_eq!(
        format_duration(Duration::from_secs(3600 + 120 + 5)),
        "1h 02m 05s"
    );
    assert_eq!(
        format_duration(Duration::from_secs(7200 + 3600 + 900 + 30)),
        "3h 15m 30s"
    );
}

#[test]
fn test_format_route_closes_loop() {
    let tour = Tour::from_order(vec![2, 0, 1]);

    assert_eq!(format_route(&tour), "2 -> 0 -> 1 -> 2");
    assert_eq!(format_route(&Tour::from_order(Vec::new())), "");
}

#[test]
fn test_save_tour() {
    let problem = create_triangle();
    let mut tour = Tour::from_order(vec![0, 1, 2]);
    tour.evaluate(&problem);

    let path = std::env::temp_dir().join("pso_tsp_utils_tests_tour.txt");
    save_tour(&tour, &problem, &path).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(contents.contains("TSP Tour for instance: Triangle"));
    assert!(contents.contains("Total Distance: 12.00"));
    assert!(contents.contains("City Count: 3"));
    assert!(contents.contains("Route: 0 -> 1 -> 2 -> 0"));
}

#[test]
fn test_search_statistics_format() {
    let stats = SearchStatistics {
        epochs: 100,
        runtime: Duration::from_secs(61),
        best_distance: 12.3,
        initial_best_distance: 20.0,
        particle_count: 100,
        city_count: 3,
    };

    let text = stats.format();

    assert!(text.contains("- Epochs: 100"));
    assert!(text.contains("- Runtime: 0h 01m 01s"));
    assert!(text.contains("- Best Distance: 12.30"));
    assert!(text.contains("- Initial Best Distance: 20.00"));
    assert!(text.contains("- Cities: 3"));
}

#[test]
fn test_render_grid_marks_cities_and_start() {
    let problem = create_triangle();
    let tour = Tour::from_order(vec![1, 2, 0]);

    let grid = render_grid(&tour, &problem, 5, 4);

    assert_eq!(grid.len(), 4);
    assert!(grid.iter().all(|row| row.chars().count() == 5));
    // City 0 at the minimum corner, city 1 (the start) at max x, city 2 at max y.
    assert_eq!(grid[0].chars().next(), Some('*'));
    assert_eq!(grid[0].chars().nth(4), Some('S'));
    assert_eq!(grid[3].chars().next(), Some('*'));

    let marks: usize = grid
        .iter()
        .map(|row| row.chars().filter(|&c| c != ' ').count())
        .sum();
    assert_eq!(marks, 3);
}
