//! A* shortest-path search over 4-connected obstacle grids.
//!
//! The usual entry point is [`find_path`], which validates its endpoints
//! against a [`Grid`](gridpath_core::Grid) and returns `Ok(None)` when the
//! goal is unreachable. [`find_path_within`] adds an expansion budget whose
//! exhaustion is reported apart from "no path".
//!
//! Every query builds its own search state, so a single grid can serve any
//! number of concurrent searches.
//!
//! # Custom models
//!
//! [`astar_path`] runs the same search over any [`AstarPather`], with unit
//! step cost and no endpoint validation.
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | bounds + neighbor enumeration |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod distance;
mod error;
mod search;
mod state;
mod traits;

pub use astar::astar_path;
pub use distance::manhattan;
pub use error::PathError;
pub use search::{SearchLimits, SearchOutcome, find_path, find_path_within};
pub use traits::{AstarPather, Pather};
