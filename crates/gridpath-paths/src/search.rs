//! Validated entry points over a [`Grid`].

use gridpath_core::{Cell, Grid};

use crate::astar::astar_path;
use crate::error::PathError;

/// Work bounds for a single search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    /// Stop after closing this many cells. `None` means unlimited.
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No bound on the search.
    pub const UNLIMITED: Self = Self {
        max_expansions: None,
    };

    /// Bound the search to `n` expansions.
    pub const fn with_max_expansions(n: usize) -> Self {
        Self {
            max_expansions: Some(n),
        }
    }
}

/// Result of a search that ran to a conclusion or ran out of budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A shortest path, `[start, ..., goal]` inclusive.
    Found(Vec<Cell>),
    /// The goal is unreachable from the start.
    NoPath,
    /// The expansion budget ran out first; a path may or may not exist.
    BudgetExhausted { expanded: usize },
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn into_path(self) -> Option<Vec<Cell>> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath | Self::BudgetExhausted { .. } => None,
        }
    }
}

/// Find a shortest 4-connected path from `start` to `goal` on `grid`.
///
/// Returns `Ok(None)` when the goal is unreachable and `Ok(Some(vec![start]))`
/// when `start == goal`. Both endpoints must be in bounds and free.
///
/// ```
/// use gridpath_core::{Cell, Grid};
///
/// let grid = Grid::with_obstacles(3, 3, [Cell::new(1, 0), Cell::new(1, 1)]).unwrap();
/// let path = gridpath_paths::find_path(&grid, Cell::new(0, 0), Cell::new(2, 0))
///     .unwrap()
///     .unwrap();
/// assert_eq!(path.len(), 7);
/// ```
pub fn find_path(grid: &Grid, start: Cell, goal: Cell) -> Result<Option<Vec<Cell>>, PathError> {
    find_path_within(grid, start, goal, SearchLimits::UNLIMITED).map(SearchOutcome::into_path)
}

/// Like [`find_path`], but bounded by `limits`.
pub fn find_path_within(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    limits: SearchLimits,
) -> Result<SearchOutcome, PathError> {
    validate(grid, start, goal)?;
    Ok(astar_path(grid, start, goal, limits))
}

fn validate(grid: &Grid, start: Cell, goal: Cell) -> Result<(), PathError> {
    let (width, height) = (grid.width(), grid.height());
    if !grid.in_bounds(start) {
        return Err(PathError::StartOutOfBounds {
            cell: start,
            width,
            height,
        });
    }
    if !grid.in_bounds(goal) {
        return Err(PathError::GoalOutOfBounds {
            cell: goal,
            width,
            height,
        });
    }
    if grid.is_blocked(start) {
        return Err(PathError::StartBlocked(start));
    }
    if grid.is_blocked(goal) {
        return Err(PathError::GoalBlocked(goal));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manhattan;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::VecDeque;

    /// Exhaustive breadth-first distance, used as the reference answer.
    fn bfs_len(grid: &Grid, start: Cell, goal: Cell) -> Option<usize> {
        let rng = grid.bounds();
        let mut dist = vec![usize::MAX; rng.len()];
        let mut queue = VecDeque::new();
        dist[rng.index(start)?] = 1;
        queue.push_back(start);
        while let Some(c) = queue.pop_front() {
            let d = dist[rng.index(c)?];
            if c == goal {
                return Some(d);
            }
            for n in grid.neighbors(c) {
                let ni = rng.index(n)?;
                if dist[ni] == usize::MAX {
                    dist[ni] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    fn assert_valid_path(grid: &Grid, path: &[Cell], start: Cell, goal: Cell) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
        }
        for &c in path {
            assert!(grid.is_free(c), "{c} is not free");
        }
    }

    fn cells(list: &[(i32, i32)]) -> Vec<Cell> {
        list.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn open_5x5_corner_to_corner() {
        let g = Grid::new(5, 5).unwrap();
        let path = find_path(&g, Cell::new(0, 0), Cell::new(4, 4))
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 9);
        assert_valid_path(&g, &path, Cell::new(0, 0), Cell::new(4, 4));
    }

    #[test]
    fn open_grid_length_is_manhattan_plus_one() {
        let g = Grid::new(7, 4).unwrap();
        for start in g.bounds() {
            for goal in g.bounds() {
                let path = find_path(&g, start, goal).unwrap().unwrap();
                assert_eq!(path.len() as i32, manhattan(start, goal) + 1);
            }
        }
    }

    #[test]
    fn start_equals_goal() {
        let g = Grid::with_obstacles(3, 3, [Cell::new(0, 0)]).unwrap();
        let c = Cell::new(1, 1);
        assert_eq!(find_path(&g, c, c), Ok(Some(vec![c])));
    }

    #[test]
    fn full_wall_has_no_path() {
        let g = Grid::with_obstacles(3, 3, cells(&[(1, 0), (1, 1), (1, 2)])).unwrap();
        assert_eq!(find_path(&g, Cell::new(0, 1), Cell::new(2, 1)), Ok(None));
    }

    #[test]
    fn single_row_blocked_in_middle() {
        let g = Grid::with_obstacles(3, 1, [Cell::new(1, 0)]).unwrap();
        assert_eq!(find_path(&g, Cell::new(0, 0), Cell::new(2, 0)), Ok(None));
    }

    #[test]
    fn boxed_in_start_has_no_path() {
        let g = Grid::with_obstacles(5, 5, cells(&[(2, 1), (3, 2), (2, 3), (1, 2)])).unwrap();
        assert_eq!(find_path(&g, Cell::new(2, 2), Cell::new(0, 0)), Ok(None));
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let g = Grid::new(3, 2).unwrap();
        assert_eq!(
            find_path(&g, Cell::new(3, 0), Cell::new(0, 0)),
            Err(PathError::StartOutOfBounds {
                cell: Cell::new(3, 0),
                width: 3,
                height: 2
            })
        );
        assert_eq!(
            find_path(&g, Cell::new(0, 0), Cell::new(0, -1)),
            Err(PathError::GoalOutOfBounds {
                cell: Cell::new(0, -1),
                width: 3,
                height: 2
            })
        );
    }

    #[test]
    fn rejects_blocked_endpoints() {
        let g = Grid::with_obstacles(3, 3, cells(&[(0, 0), (2, 2)])).unwrap();
        assert_eq!(
            find_path(&g, Cell::new(0, 0), Cell::new(1, 1)),
            Err(PathError::StartBlocked(Cell::new(0, 0)))
        );
        assert_eq!(
            find_path(&g, Cell::new(1, 1), Cell::new(2, 2)),
            Err(PathError::GoalBlocked(Cell::new(2, 2)))
        );
        // A blocked cell is rejected even when start == goal.
        assert!(find_path(&g, Cell::new(0, 0), Cell::new(0, 0)).is_err());
    }

    #[test]
    fn error_messages_name_the_cell() {
        let err = PathError::GoalBlocked(Cell::new(4, 2));
        assert_eq!(err.to_string(), "goal (4, 2) is blocked");
    }

    #[test]
    fn bounded_search_reports_exhaustion_separately() {
        let g = Grid::with_obstacles(3, 3, cells(&[(1, 0), (1, 1), (1, 2)])).unwrap();
        let lim = SearchLimits::with_max_expansions(1);
        assert_eq!(
            find_path_within(&g, Cell::new(0, 0), Cell::new(2, 2), lim),
            Ok(SearchOutcome::BudgetExhausted { expanded: 1 })
        );
        assert_eq!(
            find_path_within(&g, Cell::new(0, 0), Cell::new(2, 2), SearchLimits::UNLIMITED),
            Ok(SearchOutcome::NoPath)
        );
    }

    #[test]
    fn random_grids_match_bfs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..300 {
            let w = rng.random_range(1..9);
            let h = rng.random_range(1..9);
            let mut g = Grid::new(w, h).unwrap();
            for c in g.bounds() {
                if rng.random_bool(0.3) {
                    g.block(c).unwrap();
                }
            }
            let start = Cell::new(rng.random_range(0..w), rng.random_range(0..h));
            let goal = Cell::new(rng.random_range(0..w), rng.random_range(0..h));
            if !g.is_free(start) || !g.is_free(goal) {
                continue;
            }
            let found = find_path(&g, start, goal).unwrap();
            let expected = bfs_len(&g, start, goal);
            assert_eq!(found.as_ref().map(Vec::len), expected, "{start} -> {goal}");
            if let Some(path) = found {
                assert_valid_path(&g, &path, start, goal);
            }
        }
    }

    #[test]
    fn concurrent_searches_share_grid() {
        let g = Grid::with_obstacles(20, 20, (0..19).map(|y| Cell::new(10, y))).unwrap();
        let expected = find_path(&g, Cell::new(0, 0), Cell::new(19, 0)).unwrap();
        let g = &g;
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(move || find_path(g, Cell::new(0, 0), Cell::new(19, 0))))
                .collect();
            for h in handles {
                assert_eq!(h.join().unwrap().unwrap(), expected);
            }
        });
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn limits_round_trip() {
        let lim = SearchLimits::with_max_expansions(64);
        let json = serde_json::to_string(&lim).unwrap();
        let back: SearchLimits = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lim);
    }
}
