//! Random obstacle layouts with a guaranteed route between two actors.
//!
//! Each attempt scatters obstacles uniformly, drops a player and a monster on
//! distinct free cells, and keeps the result only if the actors are far
//! enough apart and the monster can actually reach the player.

use gridpath_core::{Cell, Grid, GridError};
use gridpath_paths::{PathError, find_path, manhattan};
use rand::Rng;
use rand::seq::index;

/// Errors from [`generate_layout`].
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("invalid layout config: {0}")]
    InvalidConfig(String),

    #[error("no valid layout after {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Parameters for [`generate_layout`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    pub width: i32,
    pub height: i32,
    /// Lower bound on the obstacle count, as a fraction of all cells.
    pub min_obstacle_pct: f64,
    /// Upper bound on the obstacle count, as a fraction of all cells.
    pub max_obstacle_pct: f64,
    /// The actors' Manhattan distance must be strictly greater than this.
    pub min_distance: i32,
    /// How many layouts to try before giving up.
    pub max_attempts: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            min_obstacle_pct: 0.05,
            max_obstacle_pct: 0.25,
            min_distance: 15,
            max_attempts: 1000,
        }
    }
}

impl LayoutConfig {
    /// Obstacle count bounds `(lo, hi)`, inclusive.
    fn obstacle_bounds(&self) -> (usize, usize) {
        let cells = (self.width.max(0) as usize) * (self.height.max(0) as usize);
        let lo = (cells as f64 * self.min_obstacle_pct) as usize;
        let hi = (cells as f64 * self.max_obstacle_pct) as usize;
        (lo, hi)
    }

    fn validate(&self) -> Result<(), LayoutError> {
        let pct = 0.0..=1.0;
        if !pct.contains(&self.min_obstacle_pct)
            || !pct.contains(&self.max_obstacle_pct)
            || self.min_obstacle_pct > self.max_obstacle_pct
        {
            return Err(LayoutError::InvalidConfig(format!(
                "obstacle range {}..={} is not within 0..=1",
                self.min_obstacle_pct, self.max_obstacle_pct
            )));
        }
        let cells = (self.width.max(0) as usize) * (self.height.max(0) as usize);
        let (_, hi) = self.obstacle_bounds();
        if hi + 2 > cells {
            return Err(LayoutError::InvalidConfig(format!(
                "{hi} obstacles leave no room for two actors in {cells} cells"
            )));
        }
        let farthest = (self.width - 1) + (self.height - 1);
        if self.min_distance >= farthest {
            return Err(LayoutError::InvalidConfig(format!(
                "min distance {} is unreachable on a {}x{} grid",
                self.min_distance, self.width, self.height
            )));
        }
        if self.max_attempts == 0 {
            return Err(LayoutError::InvalidConfig("max_attempts is zero".into()));
        }
        Ok(())
    }
}

/// A generated board: obstacles plus the two actors' positions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub grid: Grid,
    pub player: Cell,
    pub monster: Cell,
}

/// Generate a layout where the monster can reach the player.
///
/// Every attempt starts from an empty grid.
pub fn generate_layout<R: Rng>(
    cfg: &LayoutConfig,
    rng: &mut R,
) -> Result<Layout, LayoutError> {
    let mut grid = Grid::new(cfg.width, cfg.height)?;
    cfg.validate()?;
    let (lo, hi) = cfg.obstacle_bounds();
    let bounds = grid.bounds();

    for attempt in 1..=cfg.max_attempts {
        grid.clear();
        let count = rng.random_range(lo..=hi);
        for i in index::sample(rng, bounds.len(), count) {
            grid.block(bounds.cell(i))?;
        }

        let free: Vec<Cell> = bounds.iter().filter(|&c| grid.is_free(c)).collect();
        let picks = index::sample(rng, free.len(), 2);
        let player = free[picks.index(0)];
        let monster = free[picks.index(1)];

        let dist = manhattan(monster, player);
        if dist <= cfg.min_distance {
            log::trace!("attempt {attempt}: actors {dist} apart, too close");
            continue;
        }
        if find_path(&grid, monster, player)?.is_none() {
            log::trace!("attempt {attempt}: {monster} cannot reach {player}");
            continue;
        }

        log::debug!(
            "layout after {attempt} attempts: {} obstacles, player {player}, monster {monster}",
            grid.obstacle_count()
        );
        return Ok(Layout {
            grid,
            player,
            monster,
        });
    }

    log::warn!("gave up on layout after {} attempts", cfg.max_attempts);
    Err(LayoutError::AttemptsExhausted {
        attempts: cfg.max_attempts,
    })
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let cfg = LayoutConfig {
            width: 12,
            ..LayoutConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: LayoutConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
