//! Coin Scramble - a coin-collecting tile platformer
//!
//! Core modules:
//! - `map`: Flare-style level loading (tile grid + placed objects)
//! - `sim`: Deterministic simulation (entities, collision, game state)
//! - `settings`: Data-driven tuning with JSON persistence
//!
//! Rendering, audio and input polling live outside this crate: the sim
//! consumes pre-decided movement intents through `sim::TickInput` and
//! produces the world-space data a renderer needs (positions, scales,
//! sprite UV rectangles).

pub mod map;
pub mod settings;
pub mod sim;

pub use map::{Level, MapError, TileGrid};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const FIXED_TIMESTEP: f32 = 0.0166666;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_TIMESTEPS: u32 = 6;

    /// World-space edge length of one tile
    pub const TILE_SIZE: f32 = 0.07;

    /// Sprite atlas grid (columns x rows)
    pub const SPRITE_COUNT_X: u32 = 16;
    pub const SPRITE_COUNT_Y: u32 = 8;

    /// Ground friction (horizontal velocity decay rate)
    pub const FRICTION: f32 = 2.0;
    /// Downward acceleration applied to the player
    pub const GRAVITY: f32 = -2.0;
    /// Horizontal acceleration while a movement key is held
    pub const MOVE_ACCELERATION: f32 = 1.0;
    /// Instantaneous upward velocity on jump
    pub const JUMP_SPEED: f32 = 1.0;

    /// Additive shift aligning the map's top-left with the viewport's top-left
    pub const ORIGIN_SHIFT_X: f32 = -1.777;
    pub const ORIGIN_SHIFT_Y: f32 = 1.0;

    /// Off-world parking spot for entities removed on contact
    pub const OFF_WORLD: [f32; 3] = [100.0, 100.0, 0.0];
    /// Post-resolution separation nudge
    pub const RESOLUTION_NUDGE: f32 = 0.00001;
}

/// Linear interpolation
#[inline]
pub fn lerp(v0: f32, v1: f32, t: f32) -> f32 {
    (1.0 - t) * v0 + t * v1
}

/// Convert a grid coordinate to its world-space placement position
///
/// Grid y grows downward; world y grows upward.
#[inline]
pub fn grid_to_world(grid_x: i32, grid_y: i32, tile_size: f32, origin_shift: Vec2) -> Vec2 {
    Vec2::new(
        grid_x as f32 * tile_size + origin_shift.x,
        grid_y as f32 * -tile_size + origin_shift.y,
    )
}

/// Convert a world-space position to the grid cell containing it
///
/// Inverse of the pre-shift part of [`grid_to_world`]; the origin shift is
/// not undone here.
#[inline]
pub fn world_to_grid(world: Vec2, tile_size: f32) -> (i32, i32) {
    ((world.x / tile_size) as i32, (world.y / -tile_size) as i32)
}
