//! **gridpath-core** — core types for grid pathfinding.
//!
//! This crate provides the geometry primitives ([`Cell`], [`Range`]) and the
//! obstacle [`Grid`] that the search engine in `gridpath-paths` walks over.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Cell, Range, RangeIter};
pub use grid::{Grid, Neighbors};
