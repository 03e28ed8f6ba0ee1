//! This module defines the `Generator` trait for map generation and provides common methods for map generators.

use log::debug;

use crate::{error::MapError, random::RandomSource, world_map::WorldMap};

pub mod scattered;

/// A trait that allows for the generation of a world map.
///
/// If you want to create a new map generator, you need to implement this trait.
pub trait Generator {
    fn new(world_map: WorldMap) -> Self;

    fn into_inner(self) -> WorldMap;

    fn world_map_mut(&mut self) -> &mut WorldMap;

    fn scatter_obstacles<R: RandomSource + ?Sized>(
        &mut self,
        obstacle_ratio: f64,
        rng: &mut R,
    ) -> Result<usize, MapError> {
        self.world_map_mut().scatter_obstacles(obstacle_ratio, rng)
    }

    fn ensure_habitable_edge<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), MapError> {
        self.world_map_mut().ensure_habitable_edge(rng).map(|_| ())
    }

    fn generate<R: RandomSource + ?Sized>(
        width: i32,
        height: i32,
        obstacle_ratio: f64,
        rng: &mut R,
    ) -> Result<WorldMap, MapError>
    where
        Self: Sized,
    {
        let mut map = Self::new(WorldMap::generate_empty_map(width, height)?);
        // The edge has to be checked after every obstacle is placed.
        map.scatter_obstacles(obstacle_ratio, rng)?;
        map.ensure_habitable_edge(rng)?;

        let world_map = map.into_inner();
        debug!(
            "Generated {}x{} map with {} habitable cells",
            width,
            height,
            world_map.habitable_cells().count()
        );
        Ok(world_map)
    }
}
