//! This module defines the [`WorldMap`] struct and its associated methods.
//! Its methods contain 2 parts:
//! 1. Construction and read accessors, included in the `mod.rs` file.
//! 2. The map generating steps, defined in the [`impls`] module.

use log::debug;

use crate::{
    error::MapError,
    grid::{Coordinate, Direction, axis_range},
    random::RandomSource,
};

mod cell;
mod impls;

pub use cell::Cell;

/// A rectangular map of [`Cell`]s centered on the origin.
///
/// Every coordinate inside the rectangle maps to exactly one cell. Cells are stored row by row,
/// from the bottom row (`min_y`) up, each row from `min_x` to `max_x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMap {
    width: i32,
    height: i32,
    min_x: i32,
    min_y: i32,
    cells: Vec<Cell>,
}

impl WorldMap {
    /// Creates a map of `width` x `height` cells, all of them habitable.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidDimension`] if `width` or `height` is not positive.
    pub fn generate_empty_map(width: i32, height: i32) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidDimension { width, height });
        }

        let (min_x, max_x) = axis_range(width);
        let (min_y, max_y) = axis_range(height);

        let cells = (min_y..=max_y)
            .flat_map(|y| (min_x..=max_x).map(move |x| Cell::new(Coordinate::new(x, y))))
            .collect::<Vec<_>>();

        debug!(
            "Created empty {}x{} map spanning x in [{}, {}], y in [{}, {}]",
            width, height, min_x, max_x, min_y, max_y
        );

        Ok(Self {
            width,
            height,
            min_x,
            min_y,
            cells,
        })
    }

    pub const fn width(&self) -> i32 {
        self.width
    }

    pub const fn height(&self) -> i32 {
        self.height
    }

    pub const fn min_x(&self) -> i32 {
        self.min_x
    }

    pub const fn max_x(&self) -> i32 {
        self.min_x + self.width - 1
    }

    pub const fn min_y(&self) -> i32 {
        self.min_y
    }

    pub const fn max_y(&self) -> i32 {
        self.min_y + self.height - 1
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Returns every cell of the map, row by row from the bottom.
    pub fn all_cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn all_cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn is_on_map(&self, location: Coordinate) -> bool {
        (self.min_x()..=self.max_x()).contains(&location.x())
            && (self.min_y()..=self.max_y()).contains(&location.y())
    }

    /// Whether `location` is a cell on the outer ring of the map.
    pub fn is_on_edge(&self, location: Coordinate) -> bool {
        self.is_on_map(location)
            && (location.x() == self.min_x()
                || location.x() == self.max_x()
                || location.y() == self.min_y()
                || location.y() == self.max_y())
    }

    /// Get the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::OutOfBounds`] if `(x, y)` is not part of the map.
    pub fn get_cell_by_coords(&self, x: i32, y: i32) -> Result<&Cell, MapError> {
        self.index_of(Coordinate::new(x, y))
            .map(|index| &self.cells[index])
            .ok_or(MapError::OutOfBounds { x, y })
    }

    pub fn get_cell(&self, location: Coordinate) -> Result<&Cell, MapError> {
        self.get_cell_by_coords(location.x(), location.y())
    }

    pub(crate) fn get_cell_mut(&mut self, location: Coordinate) -> Result<&mut Cell, MapError> {
        let index = self.index_of(location).ok_or(MapError::OutOfBounds {
            x: location.x(),
            y: location.y(),
        })?;
        Ok(&mut self.cells[index])
    }

    /// Returns an iterator over the cells on the outer ring of the map.
    pub fn edge_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells
            .iter()
            .filter(move |cell| self.is_on_edge(cell.location))
    }

    pub fn habitable_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(|cell| cell.habitable)
    }

    /// Returns the habitable cells orthogonally adjacent to `location`, in [`Direction::ALL`] order.
    pub fn adjacent_habitable_cells(&self, location: Coordinate) -> Vec<&Cell> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| self.get_cell(location.neighbor(direction)).ok())
            .filter(|cell| cell.habitable)
            .collect()
    }

    /// Picks a uniformly random habitable location, e.g. to spawn something on the map.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::NoHabitableCell`] if every cell is an obstacle, or the random source's
    /// own error if it refuses the requested range.
    pub fn random_habitable_location<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Coordinate, MapError> {
        let candidates: Vec<Coordinate> = self.habitable_cells().map(|cell| cell.location).collect();
        if candidates.is_empty() {
            return Err(MapError::NoHabitableCell);
        }
        let index = rng.random_int(0, candidates.len() as i32 - 1)?;
        Ok(candidates[index as usize])
    }

    fn index_of(&self, location: Coordinate) -> Option<usize> {
        if !self.is_on_map(location) {
            return None;
        }
        let column = (location.x() - self.min_x) as usize;
        let row = (location.y() - self.min_y) as usize;
        Some(row * self.width as usize + column)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::WorldMap;
    use crate::{error::MapError, grid::Coordinate, random::tests::ConstantRng};

    #[test]
    fn empty_map_has_every_coordinate_once_and_all_habitable() {
        for (width, height) in [(1, 1), (1, 5), (3, 4), (4, 3), (10, 7)] {
            let map = WorldMap::generate_empty_map(width, height).unwrap();
            let cells = map.all_cells();
            assert_eq!(cells.len(), (width * height) as usize);
            let unique: HashSet<Coordinate> = cells.iter().map(|cell| cell.location).collect();
            assert_eq!(unique.len(), cells.len(), "repeats in {width}x{height}");
            assert!(cells.iter().all(|cell| cell.habitable));
        }
    }

    #[test]
    fn empty_map_bounds() {
        let map = WorldMap::generate_empty_map(4, 3).unwrap();
        assert_eq!((map.min_x(), map.max_x()), (-1, 2));
        assert_eq!((map.min_y(), map.max_y()), (-1, 1));
        assert_eq!(map.num_cells(), 12);
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        for (width, height) in [(0, 3), (3, 0), (-2, 4), (4, -1)] {
            assert!(matches!(
                WorldMap::generate_empty_map(width, height),
                Err(MapError::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn lookup_returns_the_matching_cell() {
        let map = WorldMap::generate_empty_map(4, 4).unwrap();
        for cell in map.all_cells() {
            let found = map
                .get_cell_by_coords(cell.location.x(), cell.location.y())
                .unwrap();
            assert_eq!(found, cell);
        }
    }

    #[test]
    fn lookup_outside_the_map_fails() {
        let map = WorldMap::generate_empty_map(4, 4).unwrap();
        for (x, y) in [(-2, 0), (3, 0), (0, -2), (0, 3)] {
            assert!(matches!(
                map.get_cell_by_coords(x, y),
                Err(MapError::OutOfBounds { x: ex, y: ey }) if ex == x && ey == y
            ));
        }
    }

    #[test]
    fn edge_cells_form_the_outer_ring() {
        let map = WorldMap::generate_empty_map(4, 4).unwrap();
        let edge: HashSet<Coordinate> = map.edge_cells().map(|cell| cell.location).collect();
        let expected: HashSet<Coordinate> = [
            (-1, 2),
            (0, 2),
            (1, 2),
            (2, 2),
            (-1, 1),
            (2, 1),
            (-1, 0),
            (2, 0),
            (-1, -1),
            (0, -1),
            (1, -1),
            (2, -1),
        ]
        .into_iter()
        .map(Coordinate::from)
        .collect();
        assert_eq!(edge, expected);
        assert!(!map.is_on_edge(Coordinate::new(0, 0)));
        assert!(!map.is_on_edge(Coordinate::new(3, 0)));
    }

    #[test]
    fn adjacent_habitable_cells_skip_obstacles_and_outside() {
        let mut map = WorldMap::generate_empty_map(3, 3).unwrap();
        map.get_cell_mut(Coordinate::new(0, 1)).unwrap().habitable = false;

        let corner: Vec<Coordinate> = map
            .adjacent_habitable_cells(Coordinate::new(-1, -1))
            .into_iter()
            .map(|cell| cell.location)
            .collect();
        assert_eq!(corner, vec![Coordinate::new(-1, 0), Coordinate::new(0, -1)]);

        let center = map.adjacent_habitable_cells(Coordinate::new(0, 0));
        assert_eq!(center.len(), 3);
    }

    #[test]
    fn random_habitable_location_picks_by_index() {
        let mut map = WorldMap::generate_empty_map(2, 1).unwrap();
        assert_eq!(
            map.random_habitable_location(&mut ConstantRng(1)).unwrap(),
            Coordinate::new(1, 0)
        );

        map.get_cell_mut(Coordinate::new(0, 0)).unwrap().habitable = false;
        assert!(map.random_habitable_location(&mut ConstantRng(1)).is_err());
        assert_eq!(
            map.random_habitable_location(&mut ConstantRng(0)).unwrap(),
            Coordinate::new(1, 0)
        );

        map.get_cell_mut(Coordinate::new(1, 0)).unwrap().habitable = false;
        assert!(matches!(
            map.random_habitable_location(&mut ConstantRng(0)),
            Err(MapError::NoHabitableCell)
        ));
    }
}
