//! First-Person Player Engine
//!
//! A headless first-person player core: ground detection, a four-state
//! crouch machine, stamina-gated sprinting, mouse look, jump and gravity,
//! collider/camera height sync and tool interaction. The host owns the
//! loop and the world; the player only sees them through small traits.
//!
//! # Modules
//!
//! - [`player`] - The controller and its subsystems
//! - [`camera`] - Camera rig and aim probe
//! - [`input`] - Platform-agnostic input state and edge detection
//! - [`physics`] - Collision query and character body traits, plus a static box world
//! - [`config`] - Serializable player configuration
//! - [`error`] - Configuration and setup errors
//! - [`logging`] - Logger setup for binaries
//!
//! # Example
//!
//! ```ignore
//! use first_person_engine::camera::CameraRig;
//! use first_person_engine::config::PlayerConfig;
//! use first_person_engine::input::{InputState, InputTracker, KeyBindings, KeyCode};
//! use first_person_engine::physics::{KinematicCapsule, LayerMask, StaticWorld, Vec3};
//! use first_person_engine::player::{PlayerController, PlayerRig};
//!
//! let mut world = StaticWorld::new();
//! world.add_box(Vec3::new(-50.0, -1.0, -50.0), Vec3::new(50.0, 0.0, 50.0), LayerMask::GROUND);
//!
//! let body = KinematicCapsule::new(Vec3::ZERO, 0.5, 2.0, 0.0);
//! let rig = PlayerRig::new(Box::new(body), CameraRig::default());
//! let mut player = PlayerController::initialize(PlayerConfig::default(), rig)?;
//!
//! let bindings = KeyBindings::new();
//! let mut input = InputState::new();
//! let mut tracker = InputTracker::new();
//!
//! input.keyboard.handle_key(KeyCode::W, true);
//! let report = player.tick(0.016, &tracker.advance(input.snapshot(&bindings)), &world);
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod physics;
pub mod player;

// Re-export commonly used types
pub use config::PlayerConfig;
pub use error::{ConfigError, SetupError};
pub use input::{InputState, InputTracker, KeyCode, TickInput};
pub use player::{CrouchState, PlayerController, PlayerRig, TickReport};

// The controller moves between threads with its collaborators
static_assertions::assert_impl_all!(PlayerController: Send);
static_assertions::assert_impl_all!(PlayerConfig: Send, Sync, Clone);
static_assertions::assert_impl_all!(TickInput: Send, Sync, Copy);
