use gridpath_core::Cell;

/// Invalid arguments to [`find_path`](crate::find_path).
///
/// "No path" is not an error; it is reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("start {cell} lies outside the {width}x{height} grid")]
    StartOutOfBounds { cell: Cell, width: i32, height: i32 },

    #[error("goal {cell} lies outside the {width}x{height} grid")]
    GoalOutOfBounds { cell: Cell, width: i32, height: i32 },

    #[error("start {0} is blocked")]
    StartBlocked(Cell),

    #[error("goal {0} is blocked")]
    GoalBlocked(Cell),
}
