//! Look Controller
//!
//! First-person look where pointer motion rotates the body (yaw) and tilts
//! the camera (pitch). Yaw is applied instantly and never clamped; the
//! camera's local rotation slerps toward the clamped pitch.
//!
//! # Conventions
//!
//! - Yaw 0 faces `-Z`; positive yaw turns right
//! - Positive pitch looks down, matching the sign of the camera's local
//!   x-axis tilt; pointer motion up (positive y) looks up
//! - Config angles are degrees; this controller stores radians
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut look = LookController::new(&config.look);
//!
//! // Each tick:
//! look.apply_pointer_delta(input.look_delta);
//! let camera_rotation = look.update_camera(dt);
//! let forward = look.forward();
//! ```

use glam::{Quat, Vec2, Vec3};

use crate::config::LookConfig;

/// Degrees of rotation per unit of pointer delta
pub const MOUSE_SENSITIVITY: f32 = 2.0;

/// Pitch limit in degrees
pub const MAX_LOOK_ANGLE: f32 = 90.0;

/// Camera slerp rate (1/s)
pub const LOOK_SMOOTHING: f32 = 15.0;

/// Yaw/pitch look controller.
#[derive(Clone, Debug)]
pub struct LookController {
    /// Horizontal angle (radians), unrestricted
    yaw: f32,
    /// Vertical angle (radians), clamped to `[-max_pitch, max_pitch]`
    pitch: f32,
    /// Radians per unit of pointer delta
    sensitivity: f32,
    max_pitch: f32,
    smoothing: f32,
    /// Smoothed camera local rotation
    camera_rotation: Quat,
}

impl LookController {
    pub fn new(config: &LookConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: config.sensitivity.to_radians(),
            max_pitch: config.max_look_angle.to_radians(),
            smoothing: config.smoothing,
            camera_rotation: Quat::IDENTITY,
        }
    }

    /// Get the current yaw angle in radians
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Get the current (target) pitch angle in radians
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Pitch limit in radians
    #[inline]
    pub fn max_pitch(&self) -> f32 {
        self.max_pitch
    }

    /// Set the yaw angle directly (in radians)
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
    }

    /// Set the pitch angle directly (in radians, clamped to limits). The
    /// camera snaps to it without smoothing.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(-self.max_pitch, self.max_pitch);
        self.camera_rotation = self.target_camera_rotation();
    }

    /// Apply one tick of pointer motion.
    ///
    /// * `delta.x` - positive turns right (increases yaw)
    /// * `delta.y` - positive looks up (decreases pitch)
    pub fn apply_pointer_delta(&mut self, delta: Vec2) {
        self.yaw += delta.x * self.sensitivity;
        self.pitch = (self.pitch - delta.y * self.sensitivity).clamp(-self.max_pitch, self.max_pitch);
    }

    /// Camera local rotation the smoothing heads toward.
    pub fn target_camera_rotation(&self) -> Quat {
        Quat::from_rotation_x(-self.pitch)
    }

    /// Slerp the camera toward the target pitch and return the new rotation.
    pub fn update_camera(&mut self, dt: f32) -> Quat {
        let blend = 1.0 - (-self.smoothing * dt).exp();
        self.camera_rotation = self
            .camera_rotation
            .slerp(self.target_camera_rotation(), blend)
            .normalize();
        self.camera_rotation
    }

    /// Smoothed camera local rotation.
    pub fn camera_rotation(&self) -> Quat {
        self.camera_rotation
    }

    /// Body orientation from yaw.
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(-self.yaw)
    }

    /// Horizontal forward of the body.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal right of the body.
    #[inline]
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// World-space view direction through the smoothed camera.
    pub fn view_direction(&self) -> Vec3 {
        (self.body_rotation() * self.camera_rotation) * Vec3::NEG_Z
    }
}
