use crate::world_map::WorldMap;

use super::Generator;

/// Places obstacles independently on every cell, then keeps one edge cell open.
pub struct Scattered {
    world_map: WorldMap,
}

impl Generator for Scattered {
    fn new(world_map: WorldMap) -> Self {
        Self { world_map }
    }

    fn into_inner(self) -> WorldMap {
        self.world_map
    }

    fn world_map_mut(&mut self) -> &mut WorldMap {
        &mut self.world_map
    }
}
