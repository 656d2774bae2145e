//! Sprint stamina pool.
//!
//! Drains while sprinting, recovers otherwise, always within `[0, max]`.

use crate::config::StaminaConfig;

use super::status::StaminaLevel;

/// Maximum stamina
pub const MAX_STAMINA: f32 = 100.0;

/// Stamina drained per second of sprinting
pub const STAMINA_CONSUMPTION_RATE: f32 = 20.0;

/// Stamina recovered per second when not sprinting
pub const STAMINA_RECOVERY_RATE: f32 = 15.0;

/// Sprinting needs at least this much stamina
pub const MIN_STAMINA_TO_SPRINT: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Stamina {
    current: f32,
    max: f32,
    consumption_rate: f32,
    recovery_rate: f32,
    min_to_sprint: f32,
}

impl Stamina {
    /// Full pool.
    pub fn new(config: &StaminaConfig) -> Self {
        Self {
            current: config.max_stamina,
            max: config.max_stamina,
            consumption_rate: config.consumption_rate,
            recovery_rate: config.recovery_rate,
            min_to_sprint: config.min_to_sprint,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Current stamina as a fraction of max.
    pub fn fraction(&self) -> f32 {
        self.current / self.max
    }

    pub fn level(&self) -> StaminaLevel {
        StaminaLevel::from_fraction(self.fraction())
    }

    /// Enough stamina left to sprint.
    pub fn can_sprint(&self) -> bool {
        self.current >= self.min_to_sprint
    }

    /// Drain or recover for one tick. Returns `true` if the value changed.
    pub fn update(&mut self, dt: f32, sprinting: bool) -> bool {
        let before = self.current;
        let delta = if sprinting {
            -self.consumption_rate * dt
        } else {
            self.recovery_rate * dt
        };
        self.current = (self.current + delta).clamp(0.0, self.max);
        self.current != before
    }

    /// Set stamina directly, clamped to `[0, max]`. NaN empties the pool.
    pub fn set(&mut self, value: f32) {
        self.current = if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, self.max)
        };
    }
}
