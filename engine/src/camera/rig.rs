//! Camera rig attached to the player body.
//!
//! The rig only stores its local placement. World-space eye position and
//! view direction are derived from the body transform on demand.

use glam::{Quat, Vec3};

/// Camera placement relative to the body base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    local_offset: Vec3,
    local_rotation: Quat,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl CameraRig {
    /// Create a rig at `local_offset` looking straight ahead.
    pub fn new(local_offset: Vec3) -> Self {
        Self {
            local_offset,
            local_rotation: Quat::IDENTITY,
        }
    }

    /// Rig centered over the body at eye height `height`.
    pub fn at_eye_height(height: f32) -> Self {
        Self::new(Vec3::new(0.0, height, 0.0))
    }

    #[inline]
    pub fn local_offset(&self) -> Vec3 {
        self.local_offset
    }

    #[inline]
    pub fn local_height(&self) -> f32 {
        self.local_offset.y
    }

    /// Move the eye vertically, keeping its horizontal offset.
    pub fn set_local_height(&mut self, height: f32) {
        self.local_offset.y = height;
    }

    #[inline]
    pub fn local_rotation(&self) -> Quat {
        self.local_rotation
    }

    pub fn set_local_rotation(&mut self, rotation: Quat) {
        self.local_rotation = rotation;
    }

    /// World-space eye position for a body at `body_position` facing
    /// `body_rotation`.
    pub fn eye_position(&self, body_position: Vec3, body_rotation: Quat) -> Vec3 {
        body_position + body_rotation * self.local_offset
    }

    /// World-space view direction (normalized).
    pub fn forward(&self, body_rotation: Quat) -> Vec3 {
        ((body_rotation * self.local_rotation) * Vec3::NEG_Z).normalize()
    }
}
