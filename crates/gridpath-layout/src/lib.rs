//! Layout generation and a headless chase loop built on `gridpath-paths`.

pub mod chase;
pub mod layout;

pub use chase::{Chase, Direction, MonsterMove, render};
pub use layout::{Layout, LayoutConfig, LayoutError, generate_layout};
