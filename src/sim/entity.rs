//! Entities and their integration
//!
//! An entity is a transform plus a sprite frame plus a kind. What an
//! entity does on contact or under input is decided by matching on the
//! kind, never by convention over shared fields.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::sprite::SpriteFrame;
use crate::consts::OFF_WORLD;
use crate::lerp;

/// Position, scale and motion state shared by every entity kind
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    /// World-space center
    pub position: Vec3,
    /// Scale multiplier applied to the sprite's base quad
    pub size: Vec3,
    /// World units per second
    pub velocity: Vec3,
    /// World units per second squared
    pub acceleration: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            size: Vec3::ONE,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
        }
    }
}

/// What an entity is; collision response and movement dispatch on this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    /// Solid level geometry carrying its atlas index
    Tile { index: u32 },
    /// Collected on contact
    Coin,
    /// Removed on contact (shooter rules)
    Enemy,
    Bullet,
}

impl EntityKind {
    /// Contact with this kind removes it instead of resolving physically
    pub fn removed_on_contact(&self) -> bool {
        matches!(self, EntityKind::Coin | EntityKind::Enemy)
    }

    /// Ground friction applies only to the player
    pub fn has_ground_friction(&self) -> bool {
        matches!(self, EntityKind::Player)
    }
}

/// Directional contact flags from the most recent collision test
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl ContactFlags {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// A simulated game object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: u32,
    pub kind: EntityKind,
    pub transform: Transform,
    pub frame: SpriteFrame,
    /// Static entities never move and are never displaced by collision
    pub is_static: bool,
    /// Cleared at the start of every collision test against this entity
    pub contact: ContactFlags,
    /// Dead entities are compacted out at the end of the tick
    pub alive: bool,
}

impl Entity {
    pub fn new(id: u32, kind: EntityKind, frame: SpriteFrame) -> Self {
        Self {
            id,
            kind,
            transform: Transform::default(),
            frame,
            is_static: false,
            contact: ContactFlags::default(),
            alive: true,
        }
    }

    /// Half extents of the collision box: frame dimensions times scale
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(
            self.frame.width * self.transform.size.x,
            self.frame.height * self.transform.size.y,
        ) * 0.5
    }

    /// Advance one timestep: decay, accelerate, move
    ///
    /// Only x and y move; z is carried along untouched.
    pub fn integrate(&mut self, dt: f32, friction: f32) {
        if self.kind.has_ground_friction() {
            self.transform.velocity.x = lerp(self.transform.velocity.x, 0.0, dt * friction);
        }
        self.transform.velocity.x += self.transform.acceleration.x * dt;
        self.transform.velocity.y += self.transform.acceleration.y * dt;
        self.transform.position.x += self.transform.velocity.x * dt;
        self.transform.position.y += self.transform.velocity.y * dt;
    }

    /// Whether the entity has been parked at the off-world sentinel
    pub fn is_off_world(&self) -> bool {
        self.transform.position == Vec3::from(OFF_WORLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::sprite::ENTITY_FRAME_SIZE;

    fn player() -> Entity {
        Entity::new(
            1,
            EntityKind::Player,
            SpriteFrame::from_index(99, ENTITY_FRAME_SIZE),
        )
    }

    #[test]
    fn test_half_extents_scale_with_size() {
        let mut entity = player();
        entity.frame.width = 0.1;
        entity.frame.height = 0.2;
        entity.transform.size = Vec3::new(2.0, 1.0, 1.0);
        assert_eq!(entity.half_extents(), Vec2::new(0.1, 0.1));
    }

    #[test]
    fn test_integrate_applies_acceleration_and_moves() {
        let mut entity = player();
        entity.transform.acceleration = Vec3::new(0.0, -2.0, 0.0);
        entity.integrate(0.5, 0.0);
        assert_eq!(entity.transform.velocity.y, -1.0);
        assert_eq!(entity.transform.position.y, -0.5);
    }

    #[test]
    fn test_integrate_friction_decays_horizontal_velocity() {
        let mut entity = player();
        entity.transform.velocity.x = 1.0;
        entity.integrate(0.1, 2.0);
        // lerp(1.0, 0.0, 0.2) = 0.8, then moved by 0.08
        assert!((entity.transform.velocity.x - 0.8).abs() < 1e-6);
        assert!((entity.transform.position.x - 0.08).abs() < 1e-6);
    }

    #[test]
    fn test_friction_is_a_player_capability() {
        let mut bullet = Entity::new(
            2,
            EntityKind::Bullet,
            SpriteFrame::from_index(52, ENTITY_FRAME_SIZE),
        );
        bullet.transform.velocity.x = 1.0;
        bullet.integrate(0.1, 2.0);
        assert_eq!(bullet.transform.velocity.x, 1.0);
    }

    #[test]
    fn test_removed_on_contact_kinds() {
        assert!(EntityKind::Coin.removed_on_contact());
        assert!(EntityKind::Enemy.removed_on_contact());
        assert!(!EntityKind::Player.removed_on_contact());
        assert!(!EntityKind::Tile { index: 1 }.removed_on_contact());
        assert!(!EntityKind::Bullet.removed_on_contact());
    }
}
