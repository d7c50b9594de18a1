//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Stable iteration order (tiles in placement order, coins in file order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod sprite;
pub mod state;
pub mod tick;

pub use entity::{ContactFlags, Entity, EntityKind, Transform};
pub use sprite::{COIN_FRAME_INDEX, ENTITY_FRAME_SIZE, PLAYER_FRAME_INDEX, SpriteFrame};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
