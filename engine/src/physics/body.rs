//! Kinematic character body
//!
//! The player is a vertical capsule whose base sits at the body position.
//! Its collider height and local center change while crouching; the body
//! itself is moved by a velocity and a tick duration.

use glam::Vec3;

/// A capsule-shaped kinematic body driven by the player core.
pub trait CharacterBody: Send {
    /// World-space position of the capsule base (the feet).
    fn position(&self) -> Vec3;

    /// Teleport the body.
    fn set_position(&mut self, position: Vec3);

    /// Capsule radius in meters.
    fn radius(&self) -> f32;

    /// Current collider height in meters.
    fn height(&self) -> f32;

    /// Set the collider height in meters.
    fn set_height(&mut self, height: f32);

    /// Collider center relative to the body position.
    fn center(&self) -> Vec3;

    /// Set the collider center relative to the body position.
    fn set_center(&mut self, center: Vec3);

    /// Whether the last move left the capsule resting on a surface.
    fn is_grounded(&self) -> bool;

    /// Move by `velocity * dt`, resolving contact with the world.
    fn move_by(&mut self, velocity: Vec3, dt: f32);
}

/// Default capsule radius in meters
pub const CAPSULE_RADIUS: f32 = 0.5;

/// Reference [`CharacterBody`] over a flat floor.
///
/// Contact is only resolved against a horizontal floor plane; the capsule
/// is grounded when a downward move is stopped by it.
#[derive(Debug, Clone)]
pub struct KinematicCapsule {
    position: Vec3,
    radius: f32,
    height: f32,
    center: Vec3,
    floor_height: f32,
    grounded: bool,
}

impl KinematicCapsule {
    /// Create a capsule standing on a floor at `floor_height`.
    pub fn new(position: Vec3, radius: f32, height: f32, floor_height: f32) -> Self {
        let grounded = position.y <= floor_height;
        Self {
            position: Vec3::new(position.x, position.y.max(floor_height), position.z),
            radius,
            height,
            center: Vec3::new(0.0, height * 0.5, 0.0),
            floor_height,
            grounded,
        }
    }
}

impl CharacterBody for KinematicCapsule {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.grounded = position.y <= self.floor_height;
    }

    fn radius(&self) -> f32 {
        self.radius
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    fn center(&self) -> Vec3 {
        self.center
    }

    fn set_center(&mut self, center: Vec3) {
        self.center = center;
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, velocity: Vec3, dt: f32) {
        let mut next = self.position + velocity * dt;
        if next.y <= self.floor_height {
            next.y = self.floor_height;
            self.grounded = velocity.y <= 0.0;
        } else {
            self.grounded = false;
        }
        self.position = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_capsule_on_floor() {
        let capsule = KinematicCapsule::new(Vec3::ZERO, CAPSULE_RADIUS, 2.0, 0.0);
        assert!(capsule.is_grounded());
        assert_eq!(capsule.center(), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_downward_move_stays_grounded() {
        let mut capsule = KinematicCapsule::new(Vec3::ZERO, CAPSULE_RADIUS, 2.0, 0.0);
        capsule.move_by(Vec3::new(1.0, -2.0, 0.0), 0.016);
        assert!(capsule.is_grounded());
        assert_eq!(capsule.position().y, 0.0);
        assert!((capsule.position().x - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_upward_move_leaves_ground() {
        let mut capsule = KinematicCapsule::new(Vec3::ZERO, CAPSULE_RADIUS, 2.0, 0.0);
        capsule.move_by(Vec3::new(0.0, 5.0, 0.0), 0.016);
        assert!(!capsule.is_grounded());
        assert!(capsule.position().y > 0.0);
    }

    #[test]
    fn test_spawn_above_floor_is_airborne() {
        let capsule = KinematicCapsule::new(Vec3::new(0.0, 3.0, 0.0), CAPSULE_RADIUS, 2.0, 0.0);
        assert!(!capsule.is_grounded());
    }
}
