use gridpath_core::Cell;

/// Manhattan (L1) distance between two cells.
///
/// This is the exact move count on an obstacle-free 4-connected grid, so it
/// never overestimates and is a consistent A* heuristic.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
