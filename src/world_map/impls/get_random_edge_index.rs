use crate::{error::MapError, grid::Coordinate, random::RandomSource, world_map::WorldMap};

impl WorldMap {
    /// Number of edge cells that are not corners.
    ///
    /// Returns `0` when the map is narrower or shorter than 3 cells, since such a map has no edge
    /// cell that is not also a corner in one of the axes.
    pub fn num_edge_candidates(&self) -> usize {
        if self.width() < 3 || self.height() < 3 {
            return 0;
        }
        (2 * ((self.width() - 2) + (self.height() - 2))) as usize
    }

    /// Get the non-corner edge cell with the given `index`.
    ///
    /// Indices run over the sides in this order:
    ///
    /// ```txt
    /// top row     y = max_y, x from min_x + 1 to max_x - 1
    /// left column x = min_x, y from max_y - 1 down to min_y + 1
    /// right column x = max_x, y from max_y - 1 down to min_y + 1
    /// bottom row  y = min_y, x from min_x + 1 to max_x - 1
    /// ```
    ///
    /// Returns `None` when `index` is not below [`WorldMap::num_edge_candidates`].
    pub fn edge_candidate(&self, index: usize) -> Option<Coordinate> {
        if index >= self.num_edge_candidates() {
            return None;
        }

        let index = index as i32;
        let row_len = self.width() - 2;
        let column_len = self.height() - 2;

        let location = match index {
            i if i < row_len => Coordinate::new(self.min_x() + 1 + i, self.max_y()),
            i if i < row_len + column_len => {
                Coordinate::new(self.min_x(), self.max_y() - 1 - (i - row_len))
            }
            i if i < row_len + 2 * column_len => Coordinate::new(
                self.max_x(),
                self.max_y() - 1 - (i - row_len - column_len),
            ),
            i => Coordinate::new(
                self.min_x() + 1 + (i - row_len - 2 * column_len),
                self.min_y(),
            ),
        };
        Some(location)
    }

    /// Picks a uniformly random edge cell that is not a corner.
    ///
    /// A single integer is drawn from `[0, num_edge_candidates - 1]` and mapped with
    /// [`WorldMap::edge_candidate`].
    ///
    /// # Errors
    ///
    /// - [`MapError::NoEdgeCandidate`] if the map is narrower or shorter than 3 cells.
    /// - [`MapError::Random`] if the random source refuses the range, passed through unchanged.
    pub fn get_random_edge_index<R: RandomSource + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Coordinate, MapError> {
        let candidate_num = self.num_edge_candidates();
        if candidate_num == 0 {
            return Err(MapError::NoEdgeCandidate {
                width: self.width(),
                height: self.height(),
            });
        }

        let index = rng.random_int(0, candidate_num as i32 - 1)?;
        self.edge_candidate(index as usize)
            .ok_or(MapError::NoEdgeCandidate {
                width: self.width(),
                height: self.height(),
            })
    }
}
