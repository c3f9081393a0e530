use gridpath_core::{Cell, Grid, Range};

use crate::distance::manhattan;

/// Minimal pathfinding interface: bounds and neighbor enumeration.
///
/// Every step between neighbors costs exactly 1.
pub trait Pather {
    /// The rectangle searches are confined to.
    fn bounds(&self) -> Range;

    /// Append the passable neighbors of `c` into `buf`, in a stable order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with an admissible heuristic, as needed by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the move count from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> i32;
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(self.neighbors(c));
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Cell, to: Cell) -> i32 {
        manhattan(from, to)
    }
}
