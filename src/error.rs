use thiserror::Error;

/// Errors raised by a [`RandomSource`](crate::random::RandomSource) when it can't satisfy a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// The source produced (or is configured to produce) a value outside the requested bounds.
    #[error("Beyond range: {value} is not in [{minimum}, {maximum}]")]
    BeyondRange {
        value: i32,
        minimum: i32,
        maximum: i32,
    },
    #[error("empty range: minimum {minimum} is greater than maximum {maximum}")]
    EmptyRange { minimum: i32, maximum: i32 },
}

#[derive(Debug, Error)]
pub enum MapError {
    #[error("invalid map dimension {width}x{height}, both must be positive")]
    InvalidDimension { width: i32, height: i32 },

    #[error("coordinate ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    #[error("obstacle ratio {0} is not a number")]
    InvalidObstacleRatio(f64),

    /// The map is too thin to have a border cell that is not a corner.
    #[error("a {width}x{height} map has no non-corner edge cell")]
    NoEdgeCandidate { width: i32, height: i32 },

    #[error("the map has no habitable cell")]
    NoHabitableCell,

    #[error(transparent)]
    Random(#[from] RangeError),

    #[error("failed to parse map parameters: {0}")]
    Parameters(#[from] serde_json::Error),
}
