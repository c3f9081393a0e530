//! The obstacle grid: a fixed-size rectangle of cells, some of them blocked.
//!
//! [`Grid`] answers the three queries a search needs: bounds, occupancy and
//! 4-connected neighbors. It is plain owned data (`Send + Sync`), so one grid
//! can be shared read-only by any number of concurrent searches.

use crate::error::GridError;
use crate::geom::{Cell, Range};

/// A `width` x `height` grid with a set of blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridRepr", into = "GridRepr")
)]
pub struct Grid {
    bounds: Range,
    blocked: Vec<bool>,
    obstacles: usize,
}

impl Grid {
    /// Largest supported cell count.
    pub const MAX_CELLS: usize = 1 << 24;

    /// Create an obstacle-free grid.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let cells = (width as usize).checked_mul(height as usize);
        if cells.is_none_or(|n| n > Self::MAX_CELLS) {
            return Err(GridError::TooLarge { width, height });
        }
        let bounds = Range::with_size(width, height);
        Ok(Self {
            bounds,
            blocked: vec![false; bounds.len()],
            obstacles: 0,
        })
    }

    /// Create a grid with the given obstacles. Duplicates are ignored.
    pub fn with_obstacles(
        width: i32,
        height: i32,
        obstacles: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(width, height)?;
        for c in obstacles {
            grid.block(c)?;
        }
        Ok(grid)
    }

    /// Mark `c` as blocked. Returns `true` if it was previously free.
    pub fn block(&mut self, c: Cell) -> Result<bool, GridError> {
        let idx = self.index_or_err(c)?;
        if self.blocked[idx] {
            return Ok(false);
        }
        self.blocked[idx] = true;
        self.obstacles += 1;
        Ok(true)
    }

    /// Clear the obstacle at `c`. Returns `true` if it was blocked.
    pub fn unblock(&mut self, c: Cell) -> Result<bool, GridError> {
        let idx = self.index_or_err(c)?;
        if !self.blocked[idx] {
            return Ok(false);
        }
        self.blocked[idx] = false;
        self.obstacles -= 1;
        Ok(true)
    }

    /// Remove every obstacle.
    pub fn clear(&mut self) {
        self.blocked.fill(false);
        self.obstacles = 0;
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The grid rectangle, `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `c` lies within the grid.
    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Whether `c` is in the obstacle set. Out-of-bounds cells are not.
    #[inline]
    pub fn is_blocked(&self, c: Cell) -> bool {
        self.bounds.index(c).is_some_and(|i| self.blocked[i])
    }

    /// Whether `c` is in bounds and not blocked.
    #[inline]
    pub fn is_free(&self, c: Cell) -> bool {
        self.bounds.index(c).is_some_and(|i| !self.blocked[i])
    }

    /// Lazily yield the free orthogonal neighbors of `c`.
    ///
    /// The order is fixed: up, right, down, left. It decides which
    /// predecessor wins when two routes tie during a search.
    #[inline]
    pub fn neighbors(&self, c: Cell) -> Neighbors<'_> {
        Neighbors {
            grid: self,
            candidates: c.neighbors_4(),
            next: 0,
        }
    }

    /// Number of blocked cells.
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles
    }

    /// Number of free cells.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.blocked.len() - self.obstacles
    }

    /// Blocked cells in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bounds
            .iter()
            .zip(self.blocked.iter())
            .filter_map(|(c, &b)| b.then_some(c))
    }

    fn index_or_err(&self, c: Cell) -> Result<usize, GridError> {
        self.bounds
            .index(c)
            .ok_or(GridError::ObstacleOutOfBounds {
                cell: c,
                width: self.width(),
                height: self.height(),
            })
    }
}

/// Iterator returned by [`Grid::neighbors`].
#[derive(Clone, Debug)]
pub struct Neighbors<'a> {
    grid: &'a Grid,
    candidates: [Cell; 4],
    next: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        while self.next < self.candidates.len() {
            let c = self.candidates[self.next];
            self.next += 1;
            if self.grid.is_free(c) {
                return Some(c);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.candidates.len() - self.next))
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

/// Wire form of a [`Grid`]: dimensions plus the obstacle list.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    width: i32,
    height: i32,
    obstacles: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(r: GridRepr) -> Result<Self, GridError> {
        Grid::with_obstacles(r.width, r.height, r.obstacles)
    }
}

#[cfg(feature = "serde")]
impl From<Grid> for GridRepr {
    fn from(g: Grid) -> Self {
        Self {
            width: g.width(),
            height: g.height(),
            obstacles: g.obstacles().collect(),
        }
    }
}
