//! A headless pursuit loop: the player moves on command, the monster
//! re-plans a shortest path every turn and takes one step along it.

use gridpath_core::{Cell, Grid};
use gridpath_paths::{PathError, find_path};

use crate::layout::Layout;

/// One orthogonal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The offset of this step. Y grows down.
    pub const fn delta(self) -> Cell {
        match self {
            Self::Up => Cell::new(0, -1),
            Self::Down => Cell::new(0, 1),
            Self::Left => Cell::new(-1, 0),
            Self::Right => Cell::new(1, 0),
        }
    }
}

/// What the monster did on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterMove {
    /// Stepped to the given cell.
    Moved(Cell),
    /// Reached the player.
    Caught,
    /// No route to the player exists right now.
    Stuck,
}

/// Chase state over a fixed [`Layout`].
#[derive(Debug, Clone)]
pub struct Chase {
    layout: Layout,
    turns: u32,
}

impl Chase {
    pub fn new(layout: Layout) -> Self {
        Self { layout, turns: 0 }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn player(&self) -> Cell {
        self.layout.player
    }

    pub fn monster(&self) -> Cell {
        self.layout.monster
    }

    /// Completed monster turns.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Move the player one step if the target is in bounds and free.
    pub fn step_player(&mut self, dir: Direction) -> bool {
        let next = self.layout.player + dir.delta();
        if !self.layout.grid.is_free(next) {
            return false;
        }
        self.layout.player = next;
        true
    }

    /// Plan a fresh path to the player and take its first step.
    pub fn step_monster(&mut self) -> Result<MonsterMove, PathError> {
        let l = &mut self.layout;
        let route = find_path(&l.grid, l.monster, l.player)?;
        self.turns += 1;
        let Some(path) = route else {
            log::debug!("turn {}: monster at {} has no route", self.turns, l.monster);
            return Ok(MonsterMove::Stuck);
        };
        if let Some(&next) = path.get(1) {
            l.monster = next;
        }
        if l.monster == l.player {
            return Ok(MonsterMove::Caught);
        }
        log::trace!(
            "turn {}: monster -> {}, {} steps left",
            self.turns,
            l.monster,
            path.len() - 2
        );
        Ok(MonsterMove::Moved(l.monster))
    }
}

/// Draw the board as text: `#` obstacle, `@` player, `M` monster, `.` floor.
pub fn render(grid: &Grid, player: Cell, monster: Cell) -> String {
    let mut out = String::with_capacity(grid.bounds().len() + grid.height() as usize);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let c = Cell::new(x, y);
            let ch = if c == monster {
                'M'
            } else if c == player {
                '@'
            } else if grid.is_blocked(c) {
                '#'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
