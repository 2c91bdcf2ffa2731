//! **waypath-core** — Core types for grid route search.
//!
//! This crate provides the foundational types used across the *waypath*
//! workspace: the [`Point`] coordinate primitive and the board [`Grid`] with
//! its start/target/obstacle cell markers.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{CellState, Grid};
