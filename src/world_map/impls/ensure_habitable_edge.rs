use log::warn;

use crate::{error::MapError, grid::Coordinate, random::RandomSource, world_map::WorldMap};

impl WorldMap {
    /// Makes sure at least one edge cell is habitable, so the map can always be entered or extended
    /// from its border.
    ///
    /// When the edge is fully blocked, one cell is turned back to habitable: a non-corner cell chosen
    /// with [`WorldMap::get_random_edge_index`] when the map is at least 3x3, otherwise any edge cell
    /// picked uniformly (on such a thin map every cell lies on the edge).
    ///
    /// Returns the location that was cleared, or `None` if the edge already had a habitable cell.
    pub fn ensure_habitable_edge<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Coordinate>, MapError> {
        if self.edge_cells().any(|cell| cell.habitable) {
            return Ok(None);
        }

        let location = if self.num_edge_candidates() > 0 {
            self.get_random_edge_index(rng)?
        } else {
            let edge_locations: Vec<Coordinate> =
                self.edge_cells().map(|cell| cell.location).collect();
            let index = rng.random_int(0, edge_locations.len() as i32 - 1)?;
            edge_locations[index as usize]
        };

        warn!("Map edge is fully blocked, clearing the obstacle at {location}");
        self.get_cell_mut(location)?.habitable = true;
        Ok(Some(location))
    }
}
