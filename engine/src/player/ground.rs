//! Ground Sensor
//!
//! Decides support contact each tick with a three-tier fallback:
//!
//! 1. the body's own contact predicate ([`CharacterBody::is_grounded`])
//! 2. a short downward ray from just above the feet
//! 3. a sphere overlap at the lower hemisphere of the capsule
//!
//! The first tier that succeeds short-circuits the rest.

use glam::Vec3;

use crate::physics::{CharacterBody, CollisionQuery, LayerMask};

/// Length of the downward ground ray in meters
pub const GROUND_CHECK_DISTANCE: f32 = 0.2;

/// Ray origin lift above the feet
const RAY_LIFT: f32 = 0.1;

/// Overlap sphere radius relative to the capsule radius
const SPHERE_RADIUS_SCALE: f32 = 0.9;

/// Which tier reported support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundContact {
    /// The body's contact predicate
    Body,
    /// Downward ray hit
    Ray,
    /// Lower hemisphere overlap
    Sphere,
}

/// Grounded/airborne edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Landed,
    LeftGround,
}

/// Stateful ground sensor; remembers the previous result to report edges.
#[derive(Debug, Clone)]
pub struct GroundSensor {
    check_distance: f32,
    mask: LayerMask,
    grounded: Option<bool>,
    contact: Option<GroundContact>,
}

impl GroundSensor {
    pub fn new(check_distance: f32, mask: LayerMask) -> Self {
        Self {
            check_distance,
            mask,
            grounded: None,
            contact: None,
        }
    }

    /// Result of the last update. False before the first.
    pub fn is_grounded(&self) -> bool {
        self.grounded.unwrap_or(false)
    }

    /// Tier that reported support on the last update.
    pub fn contact(&self) -> Option<GroundContact> {
        self.contact
    }

    /// Run the fallback chain without touching sensor state.
    pub fn probe(
        &self,
        position: Vec3,
        radius: f32,
        body_grounded: bool,
        world: &dyn CollisionQuery,
    ) -> Option<GroundContact> {
        if body_grounded {
            return Some(GroundContact::Body);
        }

        let origin = position + Vec3::Y * RAY_LIFT;
        if world
            .raycast(origin, Vec3::NEG_Y, self.check_distance, self.mask)
            .is_some()
        {
            return Some(GroundContact::Ray);
        }

        let center = position + Vec3::Y * radius - Vec3::Y * self.check_distance;
        if world.overlap_sphere(center, radius * SPHERE_RADIUS_SCALE, self.mask) {
            return Some(GroundContact::Sphere);
        }

        None
    }

    /// Probe for `body` and record the result.
    ///
    /// Returns an edge only when the grounded state flips. The very first
    /// update establishes the state without reporting an edge.
    pub fn update(
        &mut self,
        body: &dyn CharacterBody,
        world: &dyn CollisionQuery,
    ) -> Option<GroundTransition> {
        self.contact = self.probe(body.position(), body.radius(), body.is_grounded(), world);
        let grounded = self.contact.is_some();
        let previous = self.grounded.replace(grounded);

        match (previous, grounded) {
            (Some(false), true) => {
                log::debug!("Grounded ({:?})", self.contact);
                Some(GroundTransition::Landed)
            }
            (Some(true), false) => {
                log::debug!("Airborne");
                Some(GroundTransition::LeftGround)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{KinematicCapsule, StaticWorld};

    fn floor_world() -> StaticWorld {
        let mut world = StaticWorld::new();
        world.add_box(
            Vec3::new(-10.0, -1.0, -10.0),
            Vec3::new(10.0, 0.0, 10.0),
            LayerMask::GROUND,
        );
        world
    }

    fn sensor() -> GroundSensor {
        GroundSensor::new(GROUND_CHECK_DISTANCE, LayerMask::GROUND)
    }

    #[test]
    fn test_body_contact_short_circuits() {
        let empty = StaticWorld::new();
        assert_eq!(
            sensor().probe(Vec3::new(0.0, 50.0, 0.0), 0.5, true, &empty),
            Some(GroundContact::Body)
        );
    }

    #[test]
    fn test_ray_fallback() {
        let world = floor_world();
        assert_eq!(
            sensor().probe(Vec3::new(0.0, 0.05, 0.0), 0.5, false, &world),
            Some(GroundContact::Ray)
        );
    }

    #[test]
    fn test_sphere_fallback_at_ledge() {
        // Feet just past the edge: ray misses, sphere still clips the floor
        let world = floor_world();
        let position = Vec3::new(10.2, 0.05, 0.0);
        assert_eq!(
            sensor().probe(position, 0.5, false, &world),
            Some(GroundContact::Sphere)
        );
    }

    #[test]
    fn test_airborne() {
        let world = floor_world();
        assert_eq!(sensor().probe(Vec3::new(0.0, 2.0, 0.0), 0.5, false, &world), None);
    }

    #[test]
    fn test_ignores_other_layers() {
        let mut world = StaticWorld::new();
        world.add_box(
            Vec3::new(-10.0, -1.0, -10.0),
            Vec3::new(10.0, 0.0, 10.0),
            LayerMask::OBSTRUCTION,
        );
        assert_eq!(sensor().probe(Vec3::new(0.0, 0.05, 0.0), 0.5, false, &world), None);
    }

    #[test]
    fn test_edges_reported_once() {
        let world = StaticWorld::new();
        let mut sensor = sensor();
        let mut body = KinematicCapsule::new(Vec3::new(0.0, 3.0, 0.0), 0.5, 2.0, 0.0);

        // First update only establishes state
        assert_eq!(sensor.update(&body, &world), None);
        assert!(!sensor.is_grounded());

        // Fall onto the floor
        for _ in 0..200 {
            body.move_by(Vec3::new(0.0, -5.0, 0.0), 0.016);
            if body.is_grounded() {
                break;
            }
        }
        assert_eq!(sensor.update(&body, &world), Some(GroundTransition::Landed));
        assert_eq!(sensor.update(&body, &world), None);
        assert_eq!(sensor.contact(), Some(GroundContact::Body));

        body.move_by(Vec3::new(0.0, 5.0, 0.0), 0.1);
        assert_eq!(sensor.update(&body, &world), Some(GroundTransition::LeftGround));
        assert_eq!(sensor.update(&body, &world), None);
    }
}
