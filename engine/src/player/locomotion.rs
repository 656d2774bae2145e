//! Locomotion Solver
//!
//! Picks a speed tier from the player's situation and smooths the actual
//! speed toward it. Movement direction is relative to the body's facing.
//!
//! # Speed tiers
//!
//! Selected by priority:
//!
//! | Condition                       | Speed                                 |
//! |---------------------------------|---------------------------------------|
//! | Crouching                       | `crouch_speed`                        |
//! | Either transition               | `lerp(walk, crouch, progress)`        |
//! | Sprint conditions met           | `run_speed`                           |
//! | Otherwise                       | `walk_speed`                          |
//!
//! Sprint conditions: sprint held, nonzero movement, not lowered, grounded,
//! enough stamina.
//!
//! The smoothed speed tracks the tier even without movement input, so a
//! player at rest keeps `walk_speed` ready for the next step.

use glam::{Vec2, Vec3};

use crate::config::MovementConfig;

use super::crouch::{CrouchState, lerp};

/// Walk speed in meters per second
pub const WALK_SPEED: f32 = 3.0;

/// Sprint speed in meters per second
pub const RUN_SPEED: f32 = 15.0;

/// Fully crouched speed in meters per second
pub const CROUCH_SPEED: f32 = 1.5;

/// Exponential approach rate of speed toward the tier speed (1/s)
pub const SPEED_SMOOTHING: f32 = 10.0;

/// Named speed tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedTier {
    Walk,
    Run,
    Crouch,
    /// Blend between walk and crouch while changing stance
    Transition,
}

/// Everything tier selection looks at.
#[derive(Debug, Clone, Copy)]
pub struct LocomotionConditions {
    pub move_axes: Vec2,
    pub sprint_held: bool,
    pub grounded: bool,
    pub crouch_state: CrouchState,
    /// `[0, 1]`, only meaningful while transitioning
    pub transition_progress: f32,
    pub can_sprint: bool,
}

impl LocomotionConditions {
    fn has_movement(&self) -> bool {
        self.move_axes.x != 0.0 || self.move_axes.y != 0.0
    }

    /// Sprint held and everything else allows it.
    pub fn sprint_allowed(&self) -> bool {
        self.sprint_held
            && self.has_movement()
            && !self.crouch_state.is_lowered()
            && self.grounded
            && self.can_sprint
    }
}

/// Horizontal movement with smoothed speed.
#[derive(Debug, Clone)]
pub struct LocomotionSolver {
    walk_speed: f32,
    run_speed: f32,
    crouch_speed: f32,
    smoothing: f32,

    /// Smoothed speed magnitude
    current_speed: f32,

    /// Horizontal velocity from the last update (y is always 0)
    velocity: Vec3,
}

impl LocomotionSolver {
    /// Start at walking speed.
    pub fn new(config: &MovementConfig) -> Self {
        Self {
            walk_speed: config.walk_speed,
            run_speed: config.run_speed,
            crouch_speed: config.crouch_speed,
            smoothing: config.speed_smoothing,
            current_speed: config.walk_speed,
            velocity: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Horizontal velocity from the last update.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Choose a tier by priority.
    pub fn select_tier(&self, conditions: &LocomotionConditions) -> SpeedTier {
        match conditions.crouch_state {
            CrouchState::Crouching => SpeedTier::Crouch,
            CrouchState::TransitioningToCrouch | CrouchState::TransitioningToStand => {
                SpeedTier::Transition
            }
            CrouchState::Standing if conditions.sprint_allowed() => SpeedTier::Run,
            CrouchState::Standing => SpeedTier::Walk,
        }
    }

    /// Speed for a tier. `progress` only matters for [`SpeedTier::Transition`].
    pub fn tier_speed(&self, tier: SpeedTier, progress: f32) -> f32 {
        match tier {
            SpeedTier::Walk => self.walk_speed,
            SpeedTier::Run => self.run_speed,
            SpeedTier::Crouch => self.crouch_speed,
            SpeedTier::Transition => {
                lerp(self.walk_speed, self.crouch_speed, progress.clamp(0.0, 1.0))
            }
        }
    }

    /// Smooth speed toward `tier` and build the horizontal velocity.
    ///
    /// Direction is the axis-weighted sum of `right` and `forward`,
    /// normalized; zero input gives zero velocity.
    pub fn update(
        &mut self,
        dt: f32,
        tier: SpeedTier,
        progress: f32,
        move_axes: Vec2,
        forward: Vec3,
        right: Vec3,
    ) -> Vec3 {
        let target = self.tier_speed(tier, progress);
        let blend = 1.0 - (-self.smoothing * dt).exp();
        self.current_speed = lerp(self.current_speed, target, blend);

        let direction = (right * move_axes.x + forward * move_axes.y).normalize_or_zero();
        self.velocity = direction * self.current_speed;
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.016;

    fn solver() -> LocomotionSolver {
        LocomotionSolver::new(&MovementConfig::default())
    }

    fn standing() -> LocomotionConditions {
        LocomotionConditions {
            move_axes: Vec2::new(0.0, 1.0),
            sprint_held: false,
            grounded: true,
            crouch_state: CrouchState::Standing,
            transition_progress: 1.0,
            can_sprint: true,
        }
    }

    #[test]
    fn test_walk_by_default() {
        let s = solver();
        assert_eq!(s.select_tier(&standing()), SpeedTier::Walk);
        assert_eq!(s.current_speed(), WALK_SPEED);
    }

    #[test]
    fn test_sprint_conditions() {
        let s = solver();
        let sprint = LocomotionConditions {
            sprint_held: true,
            ..standing()
        };
        assert_eq!(s.select_tier(&sprint), SpeedTier::Run);

        let no_move = LocomotionConditions {
            move_axes: Vec2::ZERO,
            ..sprint
        };
        assert_eq!(s.select_tier(&no_move), SpeedTier::Walk);

        let airborne = LocomotionConditions {
            grounded: false,
            ..sprint
        };
        assert_eq!(s.select_tier(&airborne), SpeedTier::Walk);

        let tired = LocomotionConditions {
            can_sprint: false,
            ..sprint
        };
        assert_eq!(s.select_tier(&tired), SpeedTier::Walk);
    }

    #[test]
    fn test_crouch_tiers_override_sprint() {
        let s = solver();
        let crouched = LocomotionConditions {
            sprint_held: true,
            crouch_state: CrouchState::Crouching,
            ..standing()
        };
        assert_eq!(s.select_tier(&crouched), SpeedTier::Crouch);

        let rising = LocomotionConditions {
            crouch_state: CrouchState::TransitioningToStand,
            ..crouched
        };
        assert_eq!(s.select_tier(&rising), SpeedTier::Transition);
    }

    #[test]
    fn test_transition_speed_blend() {
        let s = solver();
        assert_eq!(s.tier_speed(SpeedTier::Transition, 0.0), WALK_SPEED);
        assert_eq!(s.tier_speed(SpeedTier::Transition, 1.0), CROUCH_SPEED);
        let mid = s.tier_speed(SpeedTier::Transition, 0.5);
        assert!((mid - (WALK_SPEED + CROUCH_SPEED) * 0.5).abs() < 0.001);
    }

    #[test]
    fn test_speed_is_smoothed() {
        let mut s = solver();
        s.update(DT, SpeedTier::Run, 1.0, Vec2::Y, Vec3::NEG_Z, Vec3::X);
        assert!(s.current_speed() > WALK_SPEED);
        assert!(s.current_speed() < RUN_SPEED);

        for _ in 0..300 {
            s.update(DT, SpeedTier::Run, 1.0, Vec2::Y, Vec3::NEG_Z, Vec3::X);
        }
        assert!((s.current_speed() - RUN_SPEED).abs() < 0.01);
    }

    #[test]
    fn test_direction_is_normalized() {
        let mut s = solver();
        let v = s.update(DT, SpeedTier::Walk, 1.0, Vec2::new(1.0, 1.0), Vec3::NEG_Z, Vec3::X);
        assert!((v.length() - s.current_speed()).abs() < 0.001);
        assert!(v.x > 0.0 && v.z < 0.0);
        assert_eq!(v.y, 0.0);
    }

    #[test]
    fn test_no_input_no_velocity() {
        let mut s = solver();
        let v = s.update(DT, SpeedTier::Walk, 1.0, Vec2::ZERO, Vec3::NEG_Z, Vec3::X);
        assert_eq!(v, Vec3::ZERO);
        assert_eq!(s.current_speed(), WALK_SPEED);
    }
}
