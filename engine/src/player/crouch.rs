//! Player Crouch System
//!
//! Four-state crouch machine with eased height transitions and forced
//! crouching under low ceilings.
//!
//! # States
//!
//! ```text
//!             toggle                        elapsed >= duration
//! Standing ----------> TransitioningToCrouch -----------------> Crouching
//!    ^   \  ceiling blocked (polled)  ^                            |
//!    |    `---------------------------'          toggle + clear    |
//!    |                                                             v
//!    '------------------------------------------ TransitioningToStand
//!                elapsed >= duration
//! ```
//!
//! The ceiling poll also runs during `TransitioningToStand`, so a blocked
//! ceiling always wins over a voluntary stand. Toggles during either
//! transition are ignored.
//!
//! # Height
//!
//! During a transition the height follows a cubic ease-in-out of the
//! transition progress, starting from the height the transition began at.
//! Outside transitions it approaches the target exponentially and snaps once
//! within [`HEIGHT_SNAP_EPSILON`]. The height never leaves
//! `[crouch_height, standing_height]`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut crouch = CrouchStateMachine::new(&config.crouch);
//!
//! // Each tick:
//! let outcome = crouch.update_state(dt, input.crouch_pressed, || clearance(&world));
//! // ... locomotion, jump ...
//! let height = crouch.update_height(dt);
//! ```

use glam::Vec3;

use crate::config::CrouchConfig;
use crate::physics::{CollisionQuery, LayerMask};

/// Standing height in meters
pub const STANDING_HEIGHT: f32 = 2.0;

/// Crouching height in meters
pub const CROUCH_HEIGHT: f32 = 1.0;

/// Height transition duration in seconds
pub const TRANSITION_DURATION: f32 = 0.3;

/// Minimum seconds between forced-crouch ceiling polls
pub const CEILING_CHECK_COOLDOWN: f32 = 0.2;

/// Exponential height smoothing rate outside transitions (1/s)
pub const HEIGHT_SMOOTHING: f32 = 15.0;

/// Height snaps to its target once this close
pub const HEIGHT_SNAP_EPSILON: f32 = 0.01;

/// Ceiling probe starts this far below the standing head height
pub const CEILING_PROBE_OFFSET: f32 = 0.1;

/// Length of the upward ceiling probe
pub const CEILING_PROBE_DISTANCE: f32 = 0.2;

/// Crouch machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrouchState {
    /// Upright at standing height
    #[default]
    Standing,
    /// Fully crouched
    Crouching,
    /// Lowering toward crouch height
    TransitioningToCrouch,
    /// Rising toward standing height
    TransitioningToStand,
}

impl CrouchState {
    /// True in either transitioning state.
    pub fn is_transitioning(&self) -> bool {
        matches!(
            self,
            CrouchState::TransitioningToCrouch | CrouchState::TransitioningToStand
        )
    }

    /// True when crouched or on the way down.
    pub fn is_lowered(&self) -> bool {
        matches!(
            self,
            CrouchState::Crouching | CrouchState::TransitioningToCrouch
        )
    }
}

/// What happened during [`CrouchStateMachine::update_state`] that other
/// systems may want to report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrouchOutcome {
    /// A stand toggle was refused for lack of clearance
    pub stand_blocked: bool,
    /// The ceiling poll forced a crouch
    pub forced_crouch: bool,
}

/// Probe for room to stand.
///
/// Casts a short ray upward from `standing_height - probe_offset` above the
/// body base. Clearance holds iff nothing on `mask` is hit within
/// `probe_distance`.
pub fn has_ceiling_clearance(
    world: &dyn CollisionQuery,
    base: Vec3,
    config: &CrouchConfig,
    mask: LayerMask,
) -> bool {
    let origin = base + Vec3::Y * (config.standing_height - config.ceiling_probe_offset);
    world
        .raycast(origin, Vec3::Y, config.ceiling_probe_distance, mask)
        .is_none()
}

/// Crouch state machine with continuous height.
#[derive(Debug, Clone)]
pub struct CrouchStateMachine {
    standing_height: f32,
    crouch_height: f32,
    transition_duration: f32,
    ceiling_check_cooldown: f32,
    height_smoothing: f32,
    snap_epsilon: f32,

    state: CrouchState,

    /// Current actual height (between stance heights during transitions)
    current_height: f32,

    /// Height the current or last transition heads to
    target_height: f32,

    /// Seconds since the current transition started
    transition_elapsed: f32,

    /// Height at start of transition
    transition_start_height: f32,

    /// Seconds since the ceiling was last polled
    since_ceiling_check: f32,
}

impl CrouchStateMachine {
    /// Create a standing machine.
    pub fn new(config: &CrouchConfig) -> Self {
        Self {
            standing_height: config.standing_height,
            crouch_height: config.crouch_height,
            transition_duration: config.transition_duration,
            ceiling_check_cooldown: config.ceiling_check_cooldown,
            height_smoothing: config.height_smoothing,
            snap_epsilon: config.snap_epsilon,
            state: CrouchState::Standing,
            current_height: config.standing_height,
            target_height: config.standing_height,
            transition_elapsed: 0.0,
            transition_start_height: config.standing_height,
            since_ceiling_check: 0.0,
        }
    }

    /// Get the current state.
    pub fn state(&self) -> CrouchState {
        self.state
    }

    /// Get the current height in meters.
    pub fn current_height(&self) -> f32 {
        self.current_height
    }

    /// Get the height being approached.
    pub fn target_height(&self) -> f32 {
        self.target_height
    }

    /// Check if currently transitioning between heights.
    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    /// Fraction `[0, 1]` of the current transition's duration elapsed.
    ///
    /// 1.0 outside transitions.
    pub fn transition_progress(&self) -> f32 {
        if self.state.is_transitioning() {
            (self.transition_elapsed / self.transition_duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Advance the state machine by one tick.
    ///
    /// `clearance` reports whether there is room to stand; it is only called
    /// when a stand toggle or a ceiling poll needs it.
    pub fn update_state<F>(&mut self, dt: f32, toggle_pressed: bool, clearance: F) -> CrouchOutcome
    where
        F: Fn() -> bool,
    {
        let mut outcome = CrouchOutcome::default();

        match self.state {
            CrouchState::Standing => {
                if toggle_pressed {
                    self.begin_transition(CrouchState::TransitioningToCrouch);
                    log::debug!("Crouch started");
                }
            }
            CrouchState::Crouching => {
                if toggle_pressed {
                    if clearance() {
                        self.begin_transition(CrouchState::TransitioningToStand);
                        log::debug!("Stand started");
                    } else {
                        outcome.stand_blocked = true;
                    }
                }
            }
            CrouchState::TransitioningToCrouch => {
                self.transition_elapsed += dt;
                if self.transition_elapsed >= self.transition_duration {
                    self.state = CrouchState::Crouching;
                    log::debug!("Crouch complete");
                }
            }
            CrouchState::TransitioningToStand => {
                self.transition_elapsed += dt;
                if self.transition_elapsed >= self.transition_duration {
                    self.state = CrouchState::Standing;
                    log::debug!("Stand complete");
                }
            }
        }

        // Ceiling poll, rate limited in simulated time
        self.since_ceiling_check += dt;
        let upright = matches!(
            self.state,
            CrouchState::Standing | CrouchState::TransitioningToStand
        );
        if upright && self.since_ceiling_check >= self.ceiling_check_cooldown {
            self.since_ceiling_check = 0.0;
            if !clearance() {
                self.begin_transition(CrouchState::TransitioningToCrouch);
                outcome.forced_crouch = true;
                log::debug!("Forced crouch: ceiling overhead");
            }
        }

        outcome
    }

    /// Advance the continuous height by one tick and return it.
    pub fn update_height(&mut self, dt: f32) -> f32 {
        if self.state.is_transitioning() {
            let t = ease_in_out(self.transition_progress());
            self.current_height = lerp(self.transition_start_height, self.target_height, t);
        } else {
            let blend = 1.0 - (-self.height_smoothing * dt).exp();
            self.current_height = lerp(self.current_height, self.target_height, blend);
        }

        if (self.current_height - self.target_height).abs() < self.snap_epsilon {
            self.current_height = self.target_height;
        }

        self.current_height = self
            .current_height
            .clamp(self.crouch_height, self.standing_height);
        self.current_height
    }

    /// Snap straight to standing, no transition.
    ///
    /// Used when a crouched jump is allowed. The caller has already checked
    /// clearance.
    pub fn force_stand(&mut self) {
        self.state = CrouchState::Standing;
        self.current_height = self.standing_height;
        self.target_height = self.standing_height;
        self.transition_start_height = self.standing_height;
        self.transition_elapsed = 0.0;
    }

    /// Set the crouch state directly.
    ///
    /// Crouching is always allowed. Standing requires `clearance`. The height
    /// then approaches the new target smoothly. Returns `false` if standing
    /// was refused.
    pub fn set_crouching<F>(&mut self, crouch: bool, clearance: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if crouch {
            self.state = CrouchState::Crouching;
            self.target_height = self.crouch_height;
            true
        } else if clearance() {
            self.state = CrouchState::Standing;
            self.target_height = self.standing_height;
            true
        } else {
            false
        }
    }

    /// Reset to standing immediately (teleport, respawn).
    pub fn reset(&mut self) {
        self.force_stand();
        self.since_ceiling_check = 0.0;
    }

    fn begin_transition(&mut self, state: CrouchState) {
        self.state = state;
        self.target_height = match state {
            CrouchState::TransitioningToStand | CrouchState::Standing => self.standing_height,
            CrouchState::TransitioningToCrouch | CrouchState::Crouching => self.crouch_height,
        };
        self.transition_start_height = self.current_height;
        self.transition_elapsed = 0.0;
    }
}

/// Linear interpolation between two values.
pub(crate) fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Smooth ease-in-out interpolation (cubic).
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
