//! Shared chase driver for the `chase` binary.
//!
//! Stands in for the interactive game loop: the monster re-plans with A*
//! every turn, the player wanders at random, and a fresh layout is generated
//! whenever the monster catches up.

use gridpath_layout::{
    Chase, Direction, LayoutConfig, LayoutError, MonsterMove, generate_layout, render,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_TURNS: u32 = 200;

/// Demo parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub seed: u64,
    pub turns: u32,
    pub layout: LayoutConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            turns: DEFAULT_TURNS,
            layout: LayoutConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Read `[seed] [turns]` positional arguments; missing ones keep their
    /// defaults.
    pub fn from_args(
        mut args: impl Iterator<Item = String>,
    ) -> Result<Self, std::num::ParseIntError> {
        let mut cfg = Self::default();
        if let Some(seed) = args.next() {
            cfg.seed = seed.parse()?;
        }
        if let Some(turns) = args.next() {
            cfg.turns = turns.parse()?;
        }
        Ok(cfg)
    }
}

/// What happened over a run.
#[derive(Debug, Clone)]
pub struct Summary {
    pub turns: u32,
    pub catches: u32,
    pub layouts: u32,
    /// The final board, rendered as text.
    pub board: String,
}

/// Play `cfg.turns` turns. Same seed, same run.
pub fn run(cfg: &DemoConfig) -> Result<Summary, LayoutError> {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut chase = Chase::new(generate_layout(&cfg.layout, &mut rng)?);
    let mut layouts = 1;
    let mut catches = 0;
    let mut dirs = Direction::ALL;

    for turn in 1..=cfg.turns {
        match chase.step_monster()? {
            MonsterMove::Caught => {
                catches += 1;
                log::info!("turn {turn}: caught at {}, new layout", chase.player());
                chase = Chase::new(generate_layout(&cfg.layout, &mut rng)?);
                layouts += 1;
                continue;
            }
            MonsterMove::Stuck => log::warn!("turn {turn}: monster has no route"),
            MonsterMove::Moved(c) => log::debug!("turn {turn}: monster to {c}"),
        }

        dirs.shuffle(&mut rng);
        if !dirs.iter().any(|&d| chase.step_player(d)) {
            log::debug!("turn {turn}: player cannot move");
        }
    }

    let l = chase.layout();
    Ok(Summary {
        turns: cfg.turns,
        catches,
        layouts,
        board: render(&l.grid, l.player, l.monster),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_override_defaults() {
        let cfg = DemoConfig::from_args(["7", "15"].map(String::from).into_iter()).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.turns, 15);

        let cfg = DemoConfig::from_args(std::iter::empty()).unwrap();
        assert_eq!(cfg, DemoConfig::default());

        assert!(DemoConfig::from_args(["x".to_string()].into_iter()).is_err());
    }

    #[test]
    fn run_is_reproducible() {
        let cfg = DemoConfig {
            turns: 60,
            ..DemoConfig::default()
        };
        let a = run(&cfg).unwrap();
        let b = run(&cfg).unwrap();
        assert_eq!(a.board, b.board);
        assert_eq!((a.catches, a.layouts), (b.catches, b.layouts));
        assert_eq!(a.layouts, a.catches + 1);
    }

    #[test]
    fn short_run_renders_full_board() {
        let cfg = DemoConfig {
            turns: 5,
            ..DemoConfig::default()
        };
        let s = run(&cfg).unwrap();
        assert_eq!(s.board.lines().count(), 30);
        assert!(s.board.lines().all(|l| l.len() == 30));
        assert!(s.board.contains('M'));
        assert!(s.board.contains('@'));
        assert_eq!(s.catches, 0);
    }
}
