//! Sprite atlas frames
//!
//! The sim never touches image bytes. A frame is the atlas UV rectangle
//! plus the base quad scale a renderer needs, and its dimensions double as
//! the entity's collision footprint.

use serde::{Deserialize, Serialize};

use crate::consts::{SPRITE_COUNT_X, SPRITE_COUNT_Y};

/// Atlas index of the player sprite (column 3, row 6)
pub const PLAYER_FRAME_INDEX: u32 = 99;
/// Atlas index of the coin sprite (column 4, row 3)
pub const COIN_FRAME_INDEX: u32 = 52;
/// Base quad scale shared by the stock entity sprites
pub const ENTITY_FRAME_SIZE: f32 = 0.15;

/// One rectangle of a sprite atlas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteFrame {
    /// Left edge in atlas UV space
    pub u: f32,
    /// Top edge in atlas UV space
    pub v: f32,
    /// Frame width; also the base collision width
    pub width: f32,
    /// Frame height; also the base collision height
    pub height: f32,
    /// Uniform scale of the base quad
    pub size: f32,
}

impl SpriteFrame {
    pub fn new(u: f32, v: f32, width: f32, height: f32, size: f32) -> Self {
        Self {
            u,
            v,
            width,
            height,
            size,
        }
    }

    /// Frame for an atlas index in the default grid layout
    ///
    /// Indices count left-to-right, top-to-bottom across a
    /// `SPRITE_COUNT_X` x `SPRITE_COUNT_Y` sheet.
    pub fn from_index(index: u32, size: f32) -> Self {
        let column = index % SPRITE_COUNT_X;
        let row = index / SPRITE_COUNT_X;
        Self {
            u: column as f32 / SPRITE_COUNT_X as f32,
            v: row as f32 / SPRITE_COUNT_Y as f32,
            width: 1.0 / SPRITE_COUNT_X as f32,
            height: 1.0 / SPRITE_COUNT_Y as f32,
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_first_row() {
        let frame = SpriteFrame::from_index(1, 0.15);
        assert!((frame.u - 1.0 / 16.0).abs() < 1e-6);
        assert_eq!(frame.v, 0.0);
        assert!((frame.width - 1.0 / 16.0).abs() < 1e-6);
        assert!((frame.height - 1.0 / 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_from_index_wraps_rows() {
        // Index 20 lives at column 4, row 1
        let frame = SpriteFrame::from_index(20, 0.15);
        assert!((frame.u - 4.0 / 16.0).abs() < 1e-6);
        assert!((frame.v - 1.0 / 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_stock_indices() {
        let player = SpriteFrame::from_index(PLAYER_FRAME_INDEX, ENTITY_FRAME_SIZE);
        assert!((player.u - 3.0 / 16.0).abs() < 1e-6);
        assert!((player.v - 6.0 / 8.0).abs() < 1e-6);

        let coin = SpriteFrame::from_index(COIN_FRAME_INDEX, ENTITY_FRAME_SIZE);
        assert!((coin.u - 4.0 / 16.0).abs() < 1e-6);
        assert!((coin.v - 3.0 / 8.0).abs() < 1e-6);
    }
}
