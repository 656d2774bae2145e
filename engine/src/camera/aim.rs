//! Aim Probe
//!
//! Periodically casts a ray along the view direction and reports when the
//! aimed-at collider changes. Probes run on accumulated simulated time, not
//! every tick.

use glam::Vec3;

use crate::physics::{CollisionQuery, LayerMask, RayHit};

/// Reach of the aim ray in meters
pub const AIM_DISTANCE: f32 = 5.0;

/// Seconds between aim probes
pub const AIM_INTERVAL: f32 = 0.05;

/// Change of aimed-at collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AimChange {
    /// A new collider is under the crosshair
    Acquired(RayHit),
    /// The crosshair no longer rests on anything
    Lost,
}

#[derive(Debug, Clone)]
pub struct AimProbe {
    distance: f32,
    interval: f32,
    mask: LayerMask,
    since_probe: f32,
    target: Option<RayHit>,
}

impl AimProbe {
    pub fn new(distance: f32, interval: f32, mask: LayerMask) -> Self {
        Self {
            distance,
            interval,
            mask,
            // First update probes immediately
            since_probe: interval,
            target: None,
        }
    }

    /// Latest hit, refreshed on every probe.
    pub fn current_target(&self) -> Option<&RayHit> {
        self.target.as_ref()
    }

    /// Advance the probe clock and cast if due.
    ///
    /// Returns a change only when the aimed collider differs from the last
    /// probe.
    pub fn update(
        &mut self,
        dt: f32,
        origin: Vec3,
        direction: Vec3,
        world: &dyn CollisionQuery,
    ) -> Option<AimChange> {
        self.since_probe += dt;
        if self.since_probe < self.interval {
            return None;
        }
        self.since_probe = 0.0;

        let hit = world.raycast(origin, direction, self.distance, self.mask);
        let previous = self.target.map(|t| t.collider);
        self.target = hit;

        match (previous, hit) {
            (Some(old), Some(new)) if old == new.collider => None,
            (_, Some(new)) => {
                log::debug!("Aim target acquired: {:?} at {:.2}m", new.collider, new.distance);
                Some(AimChange::Acquired(new))
            }
            (Some(_), None) => {
                log::debug!("Aim target lost");
                Some(AimChange::Lost)
            }
            (None, None) => None,
        }
    }
}
