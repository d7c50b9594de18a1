//! Level loading
//!
//! Flare-style text maps: a `[header]` with grid dimensions, `[layer]`
//! tile data, and an `[ObjectsLayer]` of typed placements. The loader runs
//! once at level setup; everything it produces is immutable afterwards.

pub mod flare;
pub mod grid;

pub use flare::{Level, MapError};
pub use grid::TileGrid;
