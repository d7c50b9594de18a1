//! AABB collision detection and axis-separated resolution
//!
//! Discrete per-pair tests only: overlap is checked once per call and the
//! moving entity is pushed out along each axis independently. Against
//! several tiles in one step the later resolutions can fight earlier ones,
//! so callers rely on a stable test order rather than an iterative solver.

use glam::Vec3;

use super::entity::Entity;
use crate::consts::{OFF_WORLD, RESOLUTION_NUDGE};

impl Entity {
    /// Test against `other`, resolving on overlap
    ///
    /// Returns `true` on any overlap. Kinds that are removed on contact are
    /// parked at the off-world sentinel with no physical response;
    /// otherwise `self` is pushed out along x then y, the matching contact
    /// flag is set, and the offending velocity component is zeroed. `other`
    /// is never displaced.
    pub fn collides_with(&mut self, other: &mut Entity) -> bool {
        self.contact.clear();

        let half = self.half_extents();
        let other_half = other.half_extents();
        let pos = self.transform.position;
        let other_pos = other.transform.position;

        // Separating-axis test; touching edges still count as overlap
        if pos.x + half.x < other_pos.x - other_half.x
            || pos.x - half.x > other_pos.x + other_half.x
            || pos.y + half.y < other_pos.y - other_half.y
            || pos.y - half.y > other_pos.y + other_half.y
        {
            return false;
        }

        if other.kind.removed_on_contact() {
            other.transform.position = Vec3::from(OFF_WORLD);
        } else {
            self.resolve_x(other);
            self.resolve_y(other);
        }
        true
    }

    /// Push out along x and zero the horizontal velocity
    ///
    /// The penetration magnitude is `||Δx| - half widths|`; the outer
    /// absolute value keeps the correction non-negative in every
    /// configuration, including ones where a signed depth would differ.
    fn resolve_x(&mut self, other: &Entity) {
        let penetration = ((self.transform.position.x - other.transform.position.x).abs()
            - self.half_extents().x
            - other.half_extents().x)
            .abs();

        if self.transform.position.x < other.transform.position.x {
            // Blocked on my right side
            self.transform.position.x -= penetration - RESOLUTION_NUDGE;
            self.contact.right = true;
        } else {
            // Blocked on my left side
            self.transform.position.x += penetration + RESOLUTION_NUDGE;
            self.contact.left = true;
        }
        self.transform.velocity.x = 0.0;
    }

    /// Push out along y and zero the vertical velocity
    fn resolve_y(&mut self, other: &Entity) {
        let penetration = ((self.transform.position.y - other.transform.position.y).abs()
            - self.half_extents().y
            - other.half_extents().y)
            .abs();

        if self.transform.position.y < other.transform.position.y {
            self.transform.position.y -= penetration + RESOLUTION_NUDGE;
            self.contact.bottom = true;
        } else {
            self.transform.position.y += penetration + RESOLUTION_NUDGE;
            self.contact.top = true;
        }
        self.transform.velocity.y = 0.0;
    }
}
