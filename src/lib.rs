pub mod error;
pub mod grid;
pub mod map_generator;
pub mod map_parameters;
pub mod random;
pub mod world_map;

pub use error::*;
pub use grid::*;
use map_generator::{Generator, scattered::Scattered};
pub use map_parameters::MapParameters;
use rand::{SeedableRng, rngs::StdRng};
pub use random::RandomSource;
pub use world_map::{Cell, WorldMap};

/// Generates a `width` x `height` map where each cell is an obstacle with probability `obstacle_ratio`.
///
/// At least one edge cell is always habitable, even when `obstacle_ratio` is `1.0`.
pub fn generate_map<R: RandomSource + ?Sized>(
    width: i32,
    height: i32,
    obstacle_ratio: f64,
    rng: &mut R,
) -> Result<WorldMap, MapError> {
    Scattered::generate(width, height, obstacle_ratio, rng)
}

/// Same as [`generate_map`], drawing from the thread-local generator.
pub fn generate_map_with_thread_rng(
    width: i32,
    height: i32,
    obstacle_ratio: f64,
) -> Result<WorldMap, MapError> {
    let mut rng = rand::rng();
    generate_map(width, height, obstacle_ratio, &mut rng)
}

/// Generates a reproducible map: the same parameters always give the same map.
pub fn generate_map_from_parameters(map_parameters: &MapParameters) -> Result<WorldMap, MapError> {
    map_parameters.validate()?;
    let mut rng = StdRng::seed_from_u64(map_parameters.seed);
    generate_map(
        map_parameters.width,
        map_parameters.height,
        map_parameters.obstacle_ratio,
        &mut rng,
    )
}

/// Picks a random non-corner edge cell of `world_map`. See [`WorldMap::get_random_edge_index`].
pub fn get_random_edge_index<R: RandomSource + ?Sized>(
    world_map: &WorldMap,
    rng: &mut R,
) -> Result<Coordinate, MapError> {
    world_map.get_random_edge_index(rng)
}
