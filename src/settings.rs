//! Simulation tuning and world configuration
//!
//! Persisted as JSON next to the map files. The sim reads these values
//! through `GameState` rather than through globals, so two states with
//! different tuning can coexist in one process.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Downward acceleration applied to the player (world units/s²)
    pub gravity: f32,
    /// Horizontal velocity decay rate while grounded
    pub friction: f32,
    /// Horizontal acceleration while a movement key is held
    pub move_acceleration: f32,
    /// Instantaneous upward velocity on jump
    pub jump_speed: f32,
    /// World-space edge length of one tile
    pub tile_size: f32,
    /// Additive shift aligning the map's top-left with the viewport's top-left
    pub origin_shift: Vec2,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gravity: consts::GRAVITY,
            friction: consts::FRICTION,
            move_acceleration: consts::MOVE_ACCELERATION,
            jump_speed: consts::JUMP_SPEED,
            tile_size: consts::TILE_SIZE,
            origin_shift: Vec2::new(consts::ORIGIN_SHIFT_X, consts::ORIGIN_SHIFT_Y),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// A missing or malformed file falls back to defaults; tuning is never
    /// a fatal concern.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
