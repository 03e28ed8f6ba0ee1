use log::{debug, warn};

use crate::{error::MapError, random::RandomSource, world_map::WorldMap};

/// Checks an obstacle ratio and brings it into `[0.0, 1.0]`.
///
/// # Errors
///
/// Returns [`MapError::InvalidObstacleRatio`] if `obstacle_ratio` is NaN.
fn clamp_obstacle_ratio(obstacle_ratio: f64) -> Result<f64, MapError> {
    if obstacle_ratio.is_nan() {
        return Err(MapError::InvalidObstacleRatio(obstacle_ratio));
    }
    let clamped = obstacle_ratio.clamp(0.0, 1.0);
    if clamped != obstacle_ratio {
        warn!(
            "Obstacle ratio {} is outside [0, 1], using {} instead",
            obstacle_ratio, clamped
        );
    }
    Ok(clamped)
}

impl WorldMap {
    /// Turns cells into obstacles, each one independently with probability `obstacle_ratio`.
    ///
    /// One float is drawn per cell, in [`WorldMap::all_cells`] order, and the cell stays habitable
    /// when the draw is at least `obstacle_ratio`. So `0.0` never places an obstacle and `1.0`
    /// turns every cell into one.
    ///
    /// Returns the number of obstacles on the map afterwards.
    pub fn scatter_obstacles<R: RandomSource + ?Sized>(
        &mut self,
        obstacle_ratio: f64,
        rng: &mut R,
    ) -> Result<usize, MapError> {
        let obstacle_ratio = clamp_obstacle_ratio(obstacle_ratio)?;

        self.all_cells_mut()
            .iter_mut()
            .for_each(|cell| cell.habitable = rng.random_float() >= obstacle_ratio);

        let obstacle_num = self.all_cells().iter().filter(|cell| cell.is_obstacle()).count();
        debug!(
            "Scattered {} obstacles over {} cells (ratio {})",
            obstacle_num,
            self.num_cells(),
            obstacle_ratio
        );
        Ok(obstacle_num)
    }
}
