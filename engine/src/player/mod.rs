//! Player Module
//!
//! First-person player core: everything that turns one tick of input into
//! body motion, stance and look.
//!
//! # Components
//!
//! - [`PlayerController`] - Runs the subsystems below in order each tick
//! - [`GroundSensor`] - Support contact with ray and sphere fallbacks
//! - [`CrouchStateMachine`] - Four-state crouch with eased heights and forced
//!   crouching under ceilings
//! - [`Stamina`] - Sprint resource
//! - [`LookController`] - Yaw on the body, clamped and smoothed pitch on the camera
//! - [`LocomotionSolver`] - Speed tiers and smoothed horizontal velocity
//! - [`VerticalIntegrator`] - Jump impulse and gravity
//! - [`HeightSync`] - Collider and eye height from the crouch height
//! - [`ToolInteraction`] - Tool use, pickup and drop requests
//! - [`status`] - Feedback signals, stamina tiers and the status snapshot

pub mod controller;
pub mod crouch;
pub mod ground;
pub mod height_sync;
pub mod interaction;
pub mod locomotion;
pub mod look;
pub mod stamina;
pub mod status;
pub mod vertical;

pub use controller::{PlayerController, PlayerRig, TickReport};
pub use crouch::{
    CrouchOutcome, CrouchState, CrouchStateMachine, CROUCH_HEIGHT, STANDING_HEIGHT,
    TRANSITION_DURATION, ease_in_out, has_ceiling_clearance,
};
pub use ground::{GroundContact, GroundSensor, GroundTransition, GROUND_CHECK_DISTANCE};
pub use height_sync::HeightSync;
pub use interaction::{HeldTool, ToolEvent, ToolInteraction, ToolSystem, TOOL_TAG};
pub use locomotion::{
    LocomotionConditions, LocomotionSolver, SpeedTier, CROUCH_SPEED, RUN_SPEED, WALK_SPEED,
};
pub use look::LookController;
pub use stamina::Stamina;
pub use status::{FeedbackSignal, PlayerStatus, Posture, RecordingSink, StaminaLevel, StatusSink};
pub use vertical::{VerticalIntegrator, GRAVITY, JUMP_HEIGHT};
