use std::fmt;

use glam::IVec2;

use super::Direction;

/// A position on the world map.
///
/// Coordinates are absolute: the map is centered on the origin, so `x` and `y` may be negative.
/// See [`axis_range`](super::axis_range) for how a map of a given size is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate(pub IVec2);

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    pub const fn x(&self) -> i32 {
        self.0.x
    }

    pub const fn y(&self) -> i32 {
        self.0.y
    }

    pub const fn into_inner(self) -> IVec2 {
        self.0
    }

    pub const fn to_array(self) -> [i32; 2] {
        [self.0.x, self.0.y]
    }

    /// Get the [`Coordinate`] one step away in the given `direction`.
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self(self.0 + IVec2::new(dx, dy))
    }
}

impl From<(i32, i32)> for Coordinate {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for Coordinate {
    #[inline]
    fn from(value: [i32; 2]) -> Self {
        Self(value.into())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}
