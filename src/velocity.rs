//! Mapping of fitness values to mutation intensity.

use crate::error::{PsoError, Result};
use crate::tour::Tour;

/// Converts the fitness of ranked tours into velocities.
pub struct VelocityMapper;

impl VelocityMapper {
    /// Velocity of a tour with `fitness` when the worst tour has `worst`.
    ///
    /// Tours as long as the worst one get `v_max`, shorter tours get
    /// proportionally less. The result is clamped to `[0, v_max]`.
    pub fn velocity(fitness: f64, worst: f64, v_max: f64) -> f64 {
        let value = (v_max * fitness) / worst;
        value.clamp(0.0, v_max)
    }

    /// Assign a velocity to every tour of a slice ranked ascending by fitness.
    ///
    /// Fails with `DegenerateGeometry` when the worst fitness is not positive.
    pub fn compute(tours: &mut [Tour], v_max: f64) -> Result<()> {
        let worst = match tours.last() {
            Some(tour) => tour.fitness,
            None => return Ok(()),
        };

        if !(worst > 0.0) {
            return Err(PsoError::DegenerateGeometry);
        }

        for tour in tours.iter_mut() {
            tour.velocity = Self::velocity(tour.fitness, worst, v_max);
        }

        Ok(())
    }
}
