//! Player Configuration
//!
//! Every tunable of the player core, grouped by subsystem. `Default` returns
//! the authored values; a JSON file may override any subset of fields:
//!
//! ```json
//! {
//!   "movement": { "run_speed": 9.0 },
//!   "stamina": { "consumption_rate": 30.0 }
//! }
//! ```
//!
//! Angles are in degrees, distances in meters, rates per second.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::camera::aim::{AIM_DISTANCE, AIM_INTERVAL};
use crate::error::ConfigError;
use crate::physics::LayerMask;
use crate::player::crouch::{
    CEILING_CHECK_COOLDOWN, CEILING_PROBE_DISTANCE, CEILING_PROBE_OFFSET, CROUCH_HEIGHT,
    HEIGHT_SMOOTHING, HEIGHT_SNAP_EPSILON, STANDING_HEIGHT, TRANSITION_DURATION,
};
use crate::player::ground::GROUND_CHECK_DISTANCE;
use crate::player::height_sync::{CAMERA_HEIGHT_SMOOTHING, HEADROOM_MARGIN};
use crate::player::interaction::{INTERACT_RANGE, TOOL_TAG};
use crate::player::locomotion::{CROUCH_SPEED, RUN_SPEED, SPEED_SMOOTHING, WALK_SPEED};
use crate::player::look::{LOOK_SMOOTHING, MAX_LOOK_ANGLE, MOUSE_SENSITIVITY};
use crate::player::stamina::{
    MAX_STAMINA, MIN_STAMINA_TO_SPRINT, STAMINA_CONSUMPTION_RATE, STAMINA_RECOVERY_RATE,
};
use crate::player::vertical::{GRAVITY, GROUNDED_VELOCITY, JUMP_HEIGHT};

/// Horizontal speeds, jump and gravity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Walking speed in m/s
    pub walk_speed: f32,
    /// Sprinting speed in m/s
    pub run_speed: f32,
    /// Speed while fully crouched in m/s
    pub crouch_speed: f32,
    /// Exponential rate at which actual speed approaches the tier speed (1/s)
    pub speed_smoothing: f32,
    /// Vertical acceleration in m/s^2 (negative = down)
    pub gravity: f32,
    /// Apex height of a jump in meters
    pub jump_height: f32,
    /// Vertical velocity held while grounded, keeps the body seated (m/s)
    pub grounded_velocity: f32,
    /// Length of the downward ground probe ray in meters
    pub ground_check_distance: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            run_speed: RUN_SPEED,
            crouch_speed: CROUCH_SPEED,
            speed_smoothing: SPEED_SMOOTHING,
            gravity: GRAVITY,
            jump_height: JUMP_HEIGHT,
            grounded_velocity: GROUNDED_VELOCITY,
            ground_check_distance: GROUND_CHECK_DISTANCE,
        }
    }
}

/// Crouch heights, transition timing and ceiling probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrouchConfig {
    pub standing_height: f32,
    pub crouch_height: f32,
    /// Seconds a stand/crouch transition takes
    pub transition_duration: f32,
    /// Minimum seconds between forced-crouch ceiling polls while standing
    pub ceiling_check_cooldown: f32,
    /// Exponential rate toward the target height outside transitions (1/s)
    pub height_smoothing: f32,
    /// Height snaps to target once within this distance
    pub snap_epsilon: f32,
    /// Ceiling probe starts this far below the standing head height
    pub ceiling_probe_offset: f32,
    /// Length of the upward ceiling probe ray
    pub ceiling_probe_distance: f32,
}

impl Default for CrouchConfig {
    fn default() -> Self {
        Self {
            standing_height: STANDING_HEIGHT,
            crouch_height: CROUCH_HEIGHT,
            transition_duration: TRANSITION_DURATION,
            ceiling_check_cooldown: CEILING_CHECK_COOLDOWN,
            height_smoothing: HEIGHT_SMOOTHING,
            snap_epsilon: HEIGHT_SNAP_EPSILON,
            ceiling_probe_offset: CEILING_PROBE_OFFSET,
            ceiling_probe_distance: CEILING_PROBE_DISTANCE,
        }
    }
}

/// Sprint stamina pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    pub max_stamina: f32,
    /// Stamina drained per second while sprinting
    pub consumption_rate: f32,
    /// Stamina regained per second while not sprinting
    pub recovery_rate: f32,
    /// Sprinting requires at least this much stamina
    pub min_to_sprint: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            max_stamina: MAX_STAMINA,
            consumption_rate: STAMINA_CONSUMPTION_RATE,
            recovery_rate: STAMINA_RECOVERY_RATE,
            min_to_sprint: MIN_STAMINA_TO_SPRINT,
        }
    }
}

/// Pointer look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Degrees of rotation per unit of pointer delta
    pub sensitivity: f32,
    /// Pitch limit in degrees, applied symmetrically
    pub max_look_angle: f32,
    /// Slerp rate of the camera toward the clamped pitch (1/s)
    pub smoothing: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            sensitivity: MOUSE_SENSITIVITY,
            max_look_angle: MAX_LOOK_ANGLE,
            smoothing: LOOK_SMOOTHING,
        }
    }
}

/// Eye placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Eye sits this far below the top of the capsule
    pub headroom_margin: f32,
    /// Exponential rate of the eye height toward its target (1/s)
    pub height_smoothing: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            headroom_margin: HEADROOM_MARGIN,
            height_smoothing: CAMERA_HEIGHT_SMOOTHING,
        }
    }
}

/// Tool pickup and aim probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Reach of the pickup ray in meters
    pub interact_range: f32,
    /// Collider tag identifying pickable tools
    pub tool_tag: String,
    /// Reach of the aim probe in meters
    pub aim_distance: f32,
    /// Seconds between aim probes
    pub aim_interval: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            interact_range: INTERACT_RANGE,
            tool_tag: TOOL_TAG.to_string(),
            aim_distance: AIM_DISTANCE,
            aim_interval: AIM_INTERVAL,
        }
    }
}

/// Layer classifications used by each probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Surfaces that count as ground
    pub ground: LayerMask,
    /// Geometry that blocks standing up and crouched jumps
    pub ceiling: LayerMask,
    /// Geometry the aim probe reports
    pub aim: LayerMask,
    /// Geometry the pickup ray can hit
    pub interact: LayerMask,
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self {
            ground: LayerMask::GROUND,
            ceiling: LayerMask::GROUND | LayerMask::OBSTRUCTION,
            aim: LayerMask::ALL,
            interact: LayerMask::ALL,
        }
    }
}

/// Complete player configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub movement: MovementConfig,
    pub crouch: CrouchConfig,
    pub stamina: StaminaConfig,
    pub look: LookConfig,
    pub camera: CameraConfig,
    pub interaction: InteractionConfig,
    pub layers: LayerConfig,
}

impl PlayerConfig {
    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::info!("Loaded player config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is usable by the controller.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        positive("movement.walk_speed", m.walk_speed)?;
        positive("movement.run_speed", m.run_speed)?;
        positive("movement.crouch_speed", m.crouch_speed)?;
        positive("movement.speed_smoothing", m.speed_smoothing)?;
        positive("movement.jump_height", m.jump_height)?;
        positive("movement.ground_check_distance", m.ground_check_distance)?;
        if !(m.gravity < 0.0) {
            return Err(ConfigError::invalid(
                "movement.gravity",
                format!("must be negative (downward), got {}", m.gravity),
            ));
        }
        if !(m.grounded_velocity <= 0.0) {
            return Err(ConfigError::invalid(
                "movement.grounded_velocity",
                format!("must not point upward, got {}", m.grounded_velocity),
            ));
        }

        let c = &self.crouch;
        positive("crouch.standing_height", c.standing_height)?;
        positive("crouch.crouch_height", c.crouch_height)?;
        positive("crouch.transition_duration", c.transition_duration)?;
        positive("crouch.height_smoothing", c.height_smoothing)?;
        positive("crouch.snap_epsilon", c.snap_epsilon)?;
        positive("crouch.ceiling_probe_distance", c.ceiling_probe_distance)?;
        non_negative("crouch.ceiling_check_cooldown", c.ceiling_check_cooldown)?;
        non_negative("crouch.ceiling_probe_offset", c.ceiling_probe_offset)?;
        if c.crouch_height >= c.standing_height {
            return Err(ConfigError::invalid(
                "crouch.crouch_height",
                format!(
                    "must be below standing height {}, got {}",
                    c.standing_height, c.crouch_height
                ),
            ));
        }

        let s = &self.stamina;
        positive("stamina.max_stamina", s.max_stamina)?;
        non_negative("stamina.consumption_rate", s.consumption_rate)?;
        non_negative("stamina.recovery_rate", s.recovery_rate)?;
        non_negative("stamina.min_to_sprint", s.min_to_sprint)?;
        if s.min_to_sprint > s.max_stamina {
            return Err(ConfigError::invalid(
                "stamina.min_to_sprint",
                format!("exceeds max stamina {}", s.max_stamina),
            ));
        }

        let l = &self.look;
        positive("look.sensitivity", l.sensitivity)?;
        positive("look.smoothing", l.smoothing)?;
        if !(l.max_look_angle > 0.0 && l.max_look_angle <= 90.0) {
            return Err(ConfigError::invalid(
                "look.max_look_angle",
                format!("must be in (0, 90] degrees, got {}", l.max_look_angle),
            ));
        }

        let cam = &self.camera;
        non_negative("camera.headroom_margin", cam.headroom_margin)?;
        positive("camera.height_smoothing", cam.height_smoothing)?;
        if cam.headroom_margin >= c.crouch_height {
            return Err(ConfigError::invalid(
                "camera.headroom_margin",
                format!("must be below crouch height {}", c.crouch_height),
            ));
        }

        let i = &self.interaction;
        positive("interaction.interact_range", i.interact_range)?;
        positive("interaction.aim_distance", i.aim_distance)?;
        positive("interaction.aim_interval", i.aim_interval)?;

        if self.layers.ground == LayerMask::NONE {
            return Err(ConfigError::invalid("layers.ground", "must select at least one layer"));
        }

        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // Written as a negated comparison so NaN is rejected too
    if !(value > 0.0) {
        return Err(ConfigError::invalid(field, format!("must be positive, got {value}")));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !(value >= 0.0) {
        return Err(ConfigError::invalid(
            field,
            format!("must not be negative, got {value}"),
        ));
    }
    Ok(())
}
