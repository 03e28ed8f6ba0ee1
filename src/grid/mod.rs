mod coordinate;
mod direction;

pub use coordinate::Coordinate;
pub use direction::*;

/// Returns the inclusive `(min, max)` range covered by an axis of `size` cells.
///
/// The axis is centered on the origin. When `size` is even the extra cell lands on the positive side,
/// e.g. `4` gives `[-1, 2]` and `3` gives `[-1, 1]`.
pub const fn axis_range(size: i32) -> (i32, i32) {
    let max = size / 2;
    (max - size + 1, max)
}
