//! Problem definition: city coordinates and pairwise distances.

use crate::error::{PsoError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// A city, identified by its index in the problem's city list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    /// Create a new city.
    pub fn new(x: f64, y: f64) -> Self {
        City { x, y }
    }

    /// Calculate the Euclidean distance between two cities.
    pub fn distance(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Represents a TSP instance. Fixed for the lifetime of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub cities: Vec<City>,
    pub distance_matrix: Vec<Vec<f64>>,
}

impl Problem {
    /// Create a new TSP problem.
    pub fn new(name: String, cities: Vec<City>) -> Self {
        let distance_matrix = Self::compute_distance_matrix(&cities);

        Problem {
            name,
            cities,
            distance_matrix,
        }
    }

    /// Distance between two city indices.
    ///
    /// Panics if either index is out of range.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Get the number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// True when every city sits on the same point, so every tour has length 0.
    pub fn is_degenerate(&self) -> bool {
        match self.cities.first() {
            Some(first) => self.cities.iter().all(|city| city == first),
            None => true,
        }
    }

    /// Generate the full distance matrix for all cities.
    fn compute_distance_matrix(cities: &[City]) -> Vec<Vec<f64>> {
        let n = cities.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance(&cities[j]);
                matrix[i][j] = d;
                matrix[j][i] = d;
            }
        }

        matrix
    }

    /// Load a problem from a TSPLIB-style coordinate file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a TSPLIB-style coordinate listing.
    ///
    /// Header lines are `KEY : VALUE` pairs; `DIMENSION` is required. The
    /// records after `NODE_COORD_SECTION` are `<id> <x> <y>` and are indexed by
    /// their position in the listing. `EOF` ends the listing.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut name = None;
        let mut dimension = None;
        let mut in_coords = false;
        let mut cities = Vec::new();

        for (i, line_result) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line_result?;
            let line = line.trim();

            if line.is_empty() {
                continue;
            }
            if line == "EOF" {
                break;
            }

            if !in_coords {
                if line.starts_with("NODE_COORD_SECTION") {
                    in_coords = true;
                } else if let Some((key, value)) = line.split_once(':') {
                    match key.trim().to_ascii_uppercase().as_str() {
                        "NAME" => name = Some(value.trim().to_string()),
                        "DIMENSION" => {
                            let count = value.trim().parse::<usize>().map_err(|e| {
                                PsoError::Parse {
                                    line: line_no,
                                    message: format!("invalid DIMENSION `{}`: {}", value.trim(), e),
                                }
                            })?;
                            dimension = Some(count);
                        }
                        _ => {}
                    }
                }
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                return Err(PsoError::Parse {
                    line: line_no,
                    message: format!("expected `<id> <x> <y>`, got `{}`", line),
                });
            }
            let x = parse_coordinate(parts[1], line_no)?;
            let y = parse_coordinate(parts[2], line_no)?;
            cities.push(City::new(x, y));
        }

        let expected = dimension.ok_or(PsoError::MissingDimension)?;
        if expected != cities.len() {
            return Err(PsoError::DimensionMismatch {
                expected,
                found: cities.len(),
            });
        }

        Ok(Problem::new(
            name.unwrap_or_else(|| "unnamed".to_string()),
            cities,
        ))
    }
}

fn parse_coordinate(token: &str, line: usize) -> Result<f64> {
    let value = token.parse::<f64>().map_err(|e| PsoError::Parse {
        line,
        message: format!("invalid coordinate `{}`: {}", token, e),
    })?;

    if !value.is_finite() {
        return Err(PsoError::Parse {
            line,
            message: format!("coordinate `{}` is not finite", token),
        });
    }

    Ok(value)
}

impl FromStr for Problem {
    type Err = PsoError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}
