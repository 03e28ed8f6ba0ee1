use crate::grid::Coordinate;

/// A single square of the world map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub location: Coordinate,
    /// `true` when the cell can be walked on, `false` when it is an obstacle.
    pub habitable: bool,
}

impl Cell {
    pub const fn new(location: Coordinate) -> Self {
        Self {
            location,
            habitable: true,
        }
    }

    #[inline]
    pub const fn is_obstacle(&self) -> bool {
        !self.habitable
    }
}
