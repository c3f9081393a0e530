use crate::geom::Cell;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// Width and height must both be positive.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },

    /// The cell count exceeds [`Grid::MAX_CELLS`](crate::Grid::MAX_CELLS).
    #[error("grid {width}x{height} is too large")]
    TooLarge { width: i32, height: i32 },

    /// An obstacle was placed outside the grid.
    #[error("obstacle {cell} lies outside the {width}x{height} grid")]
    ObstacleOutOfBounds { cell: Cell, width: i32, height: i32 },
}
