//! Capsule and camera height synchronization.
//!
//! The collider follows the crouch height immediately. The eye follows it
//! smoothly so stance changes never snap the view.

use glam::Vec3;

use crate::camera::CameraRig;
use crate::config::CameraConfig;
use crate::physics::CharacterBody;

/// Eye sits this far below the top of the capsule
pub const HEADROOM_MARGIN: f32 = 0.1;

/// Exponential rate of the eye toward its target height (1/s)
pub const CAMERA_HEIGHT_SMOOTHING: f32 = 15.0;

#[derive(Debug, Clone)]
pub struct HeightSync {
    headroom_margin: f32,
    smoothing: f32,
}

impl HeightSync {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            headroom_margin: config.headroom_margin,
            smoothing: config.height_smoothing,
        }
    }

    /// Eye height the camera heads to for a capsule of `height`.
    pub fn eye_height(&self, height: f32) -> f32 {
        height - self.headroom_margin
    }

    /// Resize the collider and recenter it on its new half height.
    pub fn apply_collider(&self, body: &mut dyn CharacterBody, height: f32) {
        body.set_height(height);
        body.set_center(Vec3::new(0.0, height * 0.5, 0.0));
    }

    /// Place the eye at its target immediately (spawn).
    pub fn snap_camera(&self, camera: &mut CameraRig, height: f32) {
        camera.set_local_height(self.eye_height(height));
    }

    /// Move the eye one tick toward its target and return the new local height.
    pub fn update_camera(&self, camera: &mut CameraRig, height: f32, dt: f32) -> f32 {
        let target = self.eye_height(height);
        let blend = 1.0 - (-self.smoothing * dt).exp();
        let current = camera.local_height();
        camera.set_local_height(current + (target - current) * blend);
        camera.local_height()
    }
}
