//! Player Controller
//!
//! Owns the player body and runs every subsystem once per tick in a fixed
//! order:
//!
//! 1. ground sensor
//! 2. crouch state machine
//! 3. look
//! 4. locomotion (with stamina gating)
//! 5. vertical motion
//! 6. capsule and camera height
//! 7. move the body
//! 8. tool interaction, then the aim probe
//!
//! Collaborators are injected through a [`PlayerRig`]. The body and camera
//! are required; tools and the status sink are optional and their features
//! quietly do nothing without them.
//!
//! # Usage
//!
//! ```rust,ignore
//! let rig = PlayerRig::new(Box::new(body), CameraRig::default());
//! let mut player = PlayerController::initialize(PlayerConfig::default(), rig)?;
//!
//! loop {
//!     let input = tracker.advance(input_state.snapshot(&bindings));
//!     let report = player.tick(dt, &input, &world);
//! }
//! ```

use glam::Vec3;

use crate::camera::{AimChange, AimProbe, CameraRig};
use crate::config::PlayerConfig;
use crate::error::SetupError;
use crate::input::TickInput;
use crate::physics::{CharacterBody, CollisionQuery};

use super::crouch::{CrouchState, CrouchStateMachine, has_ceiling_clearance};
use super::ground::{GroundSensor, GroundTransition};
use super::height_sync::HeightSync;
use super::interaction::{HeldTool, ToolEvent, ToolInteraction, ToolSystem};
use super::locomotion::{LocomotionConditions, LocomotionSolver, SpeedTier};
use super::look::LookController;
use super::stamina::Stamina;
use super::status::{FeedbackSignal, PlayerStatus, Posture, StatusSink};
use super::vertical::VerticalIntegrator;

/// Longest tick the controller will simulate in one step
const MAX_TICK: f32 = 0.1;

/// Collaborators handed to [`PlayerController::initialize`].
#[derive(Default)]
pub struct PlayerRig {
    pub body: Option<Box<dyn CharacterBody>>,
    pub camera: Option<CameraRig>,
    pub tools: Option<Box<dyn ToolSystem>>,
    pub status: Option<Box<dyn StatusSink>>,
}

impl PlayerRig {
    /// Rig with the required collaborators only.
    pub fn new(body: Box<dyn CharacterBody>, camera: CameraRig) -> Self {
        Self {
            body: Some(body),
            camera: Some(camera),
            tools: None,
            status: None,
        }
    }

    pub fn with_tools(mut self, tools: Box<dyn ToolSystem>) -> Self {
        self.tools = Some(tools);
        self
    }

    pub fn with_status(mut self, status: Box<dyn StatusSink>) -> Self {
        self.status = Some(status);
        self
    }
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub grounded: bool,
    /// Grounded/airborne edge this tick
    pub ground_transition: Option<GroundTransition>,
    pub jumped: bool,
    /// Jump refused for lack of headroom
    pub jump_blocked: bool,
    /// Stand toggle refused for lack of headroom
    pub stand_blocked: bool,
    /// A ceiling pushed the player into a crouch
    pub forced_crouch: bool,
    pub aim: Option<AimChange>,
    pub tool_events: Vec<ToolEvent>,
}

/// First-person player: locomotion, crouching, look and tool input.
pub struct PlayerController {
    config: PlayerConfig,

    body: Box<dyn CharacterBody>,
    camera: CameraRig,
    tools: Option<Box<dyn ToolSystem>>,
    status: Option<Box<dyn StatusSink>>,

    ground: GroundSensor,
    crouch: CrouchStateMachine,
    stamina: Stamina,
    look: LookController,
    locomotion: LocomotionSolver,
    vertical: VerticalIntegrator,
    height_sync: HeightSync,
    interaction: ToolInteraction,
    aim: AimProbe,

    is_sprinting: bool,
    /// Sprint requested through [`PlayerController::set_sprinting`]
    sprint_latched: bool,
}

impl PlayerController {
    /// Validate the config, take the collaborators and place the player in
    /// its spawn state: standing, full stamina, walking speed.
    ///
    /// A missing body or camera is fatal for this player only; the error is
    /// logged once here and returned.
    pub fn initialize(config: PlayerConfig, rig: PlayerRig) -> Result<Self, SetupError> {
        let result = Self::build(config, rig);
        if let Err(err) = &result {
            log::error!("Player controller setup failed: {err}");
        }
        result
    }

    fn build(config: PlayerConfig, rig: PlayerRig) -> Result<Self, SetupError> {
        config.validate()?;
        let mut body = rig.body.ok_or(SetupError::MissingBody)?;
        let mut camera = rig.camera.ok_or(SetupError::MissingCamera)?;

        let crouch = CrouchStateMachine::new(&config.crouch);
        let height_sync = HeightSync::new(&config.camera);
        height_sync.apply_collider(body.as_mut(), crouch.current_height());
        height_sync.snap_camera(&mut camera, crouch.current_height());

        let interaction = &config.interaction;
        let controller = Self {
            ground: GroundSensor::new(config.movement.ground_check_distance, config.layers.ground),
            stamina: Stamina::new(&config.stamina),
            look: LookController::new(&config.look),
            locomotion: LocomotionSolver::new(&config.movement),
            vertical: VerticalIntegrator::new(&config.movement),
            interaction: ToolInteraction::new(
                interaction.interact_range,
                interaction.tool_tag.clone(),
                config.layers.interact,
            ),
            aim: AimProbe::new(
                interaction.aim_distance,
                interaction.aim_interval,
                config.layers.aim,
            ),
            crouch,
            height_sync,
            body,
            camera,
            tools: rig.tools,
            status: rig.status,
            is_sprinting: false,
            sprint_latched: false,
            config,
        };

        log::info!(
            "Player initialized at {:?} (height {:.2}, stamina {:.0})",
            controller.position(),
            controller.current_height(),
            controller.stamina()
        );
        Ok(controller)
    }

    /// Simulate one tick.
    ///
    /// `dt` is clamped to `[0, 0.1]` seconds; a zero `dt` still processes
    /// input edges but advances no timers.
    pub fn tick(&mut self, dt: f32, input: &TickInput, world: &dyn CollisionQuery) -> TickReport {
        let dt = if dt.is_nan() { 0.0 } else { dt.clamp(0.0, MAX_TICK) };
        let mut report = TickReport::default();

        // 1. Ground
        report.ground_transition = self.ground.update(self.body.as_ref(), world);
        let grounded = self.ground.is_grounded();
        report.grounded = grounded;
        match report.ground_transition {
            Some(GroundTransition::Landed) => self.notify(FeedbackSignal::Landed),
            Some(GroundTransition::LeftGround) => self.notify(FeedbackSignal::LeftGround),
            None => {}
        }

        // 2. Crouch
        let base = self.body.position();
        let crouch_config = &self.config.crouch;
        let ceiling = self.config.layers.ceiling;
        let outcome = self.crouch.update_state(dt, input.crouch_pressed, || {
            has_ceiling_clearance(world, base, crouch_config, ceiling)
        });
        report.stand_blocked = outcome.stand_blocked;
        report.forced_crouch = outcome.forced_crouch;
        if outcome.stand_blocked {
            log::warn!("Cannot stand up: ceiling overhead");
            self.notify(FeedbackSignal::StandBlocked);
        }
        if outcome.forced_crouch {
            self.notify(FeedbackSignal::ForcedCrouch);
        }

        // 3. Look
        self.look.apply_pointer_delta(input.look_delta);
        let camera_rotation = self.look.update_camera(dt);
        self.camera.set_local_rotation(camera_rotation);

        // 4. Locomotion and stamina
        let conditions = LocomotionConditions {
            move_axes: input.move_axes,
            sprint_held: input.sprint_held || self.sprint_latched,
            grounded,
            crouch_state: self.crouch.state(),
            transition_progress: self.crouch.transition_progress(),
            can_sprint: self.stamina.can_sprint(),
        };
        let mut tier = self.locomotion.select_tier(&conditions);
        let stamina_changed = self.stamina.update(dt, tier == SpeedTier::Run);
        if tier == SpeedTier::Run && !self.stamina.can_sprint() {
            log::debug!("Out of stamina, sprint stopped");
            tier = SpeedTier::Walk;
        }
        self.is_sprinting = tier == SpeedTier::Run;
        let horizontal = self.locomotion.update(
            dt,
            tier,
            conditions.transition_progress,
            input.move_axes,
            self.look.forward(),
            self.look.right(),
        );

        // 5. Vertical
        self.vertical.settle(grounded);
        if input.jump_pressed && grounded {
            if self.crouch.state().is_lowered() {
                if has_ceiling_clearance(world, base, &self.config.crouch, ceiling) {
                    self.crouch.force_stand();
                    report.jumped = true;
                } else {
                    report.jump_blocked = true;
                }
            } else {
                report.jumped = true;
            }
        }
        if report.jumped {
            self.vertical.jump();
            log::debug!("Jump ({:.2} m/s)", self.vertical.velocity());
        }
        if report.jump_blocked {
            log::warn!("Cannot jump: ceiling overhead");
            self.notify(FeedbackSignal::JumpBlocked);
        }
        let vertical = self.vertical.integrate(dt, grounded);

        // 6. Heights
        let height = self.crouch.update_height(dt);
        self.height_sync.apply_collider(self.body.as_mut(), height);
        self.height_sync.update_camera(&mut self.camera, height, dt);

        // 7. Move
        self.body.move_by(Vec3::new(horizontal.x, vertical, horizontal.z), dt);

        // 8. Tools and aim
        let eye = self.eye_position();
        let forward = self.view_direction();
        report.tool_events = self.interaction.update(input, eye, forward, world);
        for event in &report.tool_events {
            self.dispatch_tool_event(event);
        }
        report.aim = self.aim.update(dt, eye, forward, world);

        if stamina_changed {
            self.report_stamina();
        }

        report
    }

    fn dispatch_tool_event(&mut self, event: &ToolEvent) {
        match event {
            ToolEvent::Used => {
                if let Some(tools) = self.tools.as_mut() {
                    tools.use_current_tool();
                }
            }
            ToolEvent::PickedUp(tool) => {
                if let Some(tools) = self.tools.as_mut() {
                    tools.on_pickup(tool);
                }
                self.notify(FeedbackSignal::ToolPickedUp);
            }
            ToolEvent::Dropped { tool, position } => {
                if let Some(tools) = self.tools.as_mut() {
                    tools.on_drop(tool, *position);
                }
                self.notify(FeedbackSignal::ToolDropped);
            }
        }
    }

    fn notify(&mut self, signal: FeedbackSignal) {
        if let Some(status) = self.status.as_mut() {
            status.feedback(signal);
        }
    }

    fn report_stamina(&mut self) {
        let fraction = self.stamina.fraction();
        let level = self.stamina.level();
        if let Some(status) = self.status.as_mut() {
            status.stamina_changed(fraction, level);
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Combined velocity from the last tick (horizontal plus vertical).
    pub fn velocity(&self) -> Vec3 {
        let horizontal = self.locomotion.velocity();
        Vec3::new(horizontal.x, self.vertical.velocity(), horizontal.z)
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.is_grounded()
    }

    pub fn crouch_state(&self) -> CrouchState {
        self.crouch.state()
    }

    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }

    /// Smoothed speed of the current tier.
    pub fn current_speed(&self) -> f32 {
        self.locomotion.current_speed()
    }

    pub fn stamina(&self) -> f32 {
        self.stamina.current()
    }

    pub fn max_stamina(&self) -> f32 {
        self.stamina.max()
    }

    pub fn current_height(&self) -> f32 {
        self.crouch.current_height()
    }

    /// Yaw in radians.
    pub fn yaw(&self) -> f32 {
        self.look.yaw()
    }

    /// Pitch in radians, positive looks down.
    pub fn pitch(&self) -> f32 {
        self.look.pitch()
    }

    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    pub fn body(&self) -> &dyn CharacterBody {
        self.body.as_ref()
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// World-space eye position.
    pub fn eye_position(&self) -> Vec3 {
        self.camera
            .eye_position(self.body.position(), self.look.body_rotation())
    }

    /// World-space view direction through the camera.
    pub fn view_direction(&self) -> Vec3 {
        self.camera.forward(self.look.body_rotation())
    }

    pub fn held_tool(&self) -> Option<&HeldTool> {
        self.interaction.held_tool()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    /// Snapshot for status displays.
    pub fn status(&self) -> PlayerStatus {
        let velocity = self.velocity();
        PlayerStatus {
            position: self.position(),
            grounded: self.is_grounded(),
            crouch_state: self.crouch_state(),
            posture: Posture::new(self.crouch_state(), self.is_sprinting),
            height: self.current_height(),
            horizontal_speed: Vec3::new(velocity.x, 0.0, velocity.z).length(),
            vertical_velocity: velocity.y,
            stamina: self.stamina(),
            max_stamina: self.max_stamina(),
            held_tool: self.held_tool().map(ToString::to_string),
        }
    }

    // ------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------

    /// Force the crouch state. Standing up needs headroom; returns `false`
    /// if it was refused.
    pub fn set_crouching(&mut self, crouch: bool, world: &dyn CollisionQuery) -> bool {
        let base = self.body.position();
        let crouch_config = &self.config.crouch;
        let ceiling = self.config.layers.ceiling;
        let applied = self.crouch.set_crouching(crouch, || {
            has_ceiling_clearance(world, base, crouch_config, ceiling)
        });
        if !applied {
            log::warn!("Cannot stand up: ceiling overhead");
            self.notify(FeedbackSignal::StandBlocked);
        }
        applied
    }

    /// Request or cancel sprinting regardless of the sprint input. The
    /// usual gating (movement, stance, ground, stamina) decides on the next
    /// tick whether the player actually runs.
    pub fn set_sprinting(&mut self, sprinting: bool) {
        self.sprint_latched = sprinting;
        if !sprinting {
            self.is_sprinting = false;
        }
    }

    /// Place the player at `position` facing `yaw` (radians): standing, no
    /// vertical velocity, level view. Stamina and the held tool are kept.
    pub fn respawn(&mut self, position: Vec3, yaw: f32) {
        self.body.set_position(position);
        self.crouch.reset();
        self.vertical.reset();
        self.look.set_yaw(yaw);
        self.look.set_pitch(0.0);
        self.camera.set_local_rotation(self.look.camera_rotation());

        let height = self.crouch.current_height();
        self.height_sync.apply_collider(self.body.as_mut(), height);
        self.height_sync.snap_camera(&mut self.camera, height);
        self.is_sprinting = false;
        log::info!("Player respawned at {position:?}");
    }

    /// Set stamina, clamped to `[0, max]`.
    pub fn set_stamina(&mut self, value: f32) {
        self.stamina.set(value);
        if !self.stamina.can_sprint() {
            self.is_sprinting = false;
        }
        self.report_stamina();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{KinematicCapsule, LayerMask, StaticWorld};
    use crate::player::status::RecordingSink;
    use std::sync::{Arc, Mutex};

    const DT: f32 = 0.016;

    fn floor() -> StaticWorld {
        let mut world = StaticWorld::new();
        world.add_box(
            Vec3::new(-50.0, -1.0, -50.0),
            Vec3::new(50.0, 0.0, 50.0),
            LayerMask::GROUND,
        );
        world
    }

    fn player() -> PlayerController {
        let body = KinematicCapsule::new(Vec3::ZERO, 0.5, 2.0, 0.0);
        PlayerController::initialize(
            PlayerConfig::default(),
            PlayerRig::new(Box::new(body), CameraRig::default()),
        )
        .unwrap()
    }

    /// Status sink that shares its records with the test.
    #[derive(Clone, Default)]
    struct SharedSink(Arc<Mutex<RecordingSink>>);

    impl StatusSink for SharedSink {
        fn stamina_changed(&mut self, fraction: f32, level: crate::player::StaminaLevel) {
            self.0.lock().unwrap().stamina_changed(fraction, level);
        }

        fn feedback(&mut self, signal: FeedbackSignal) {
            self.0.lock().unwrap().feedback(signal);
        }
    }

    #[derive(Clone, Default)]
    struct CountingTools(Arc<Mutex<u32>>);

    impl ToolSystem for CountingTools {
        fn use_current_tool(&mut self) {
            *self.0.lock().unwrap() += 1;
        }
    }

    #[test]
    fn test_missing_body_is_setup_error() {
        let rig = PlayerRig {
            camera: Some(CameraRig::default()),
            ..PlayerRig::default()
        };
        let err = PlayerController::initialize(PlayerConfig::default(), rig).err();
        assert!(matches!(err, Some(SetupError::MissingBody)));
    }

    #[test]
    fn test_missing_camera_is_setup_error() {
        let rig = PlayerRig {
            body: Some(Box::new(KinematicCapsule::new(Vec3::ZERO, 0.5, 2.0, 0.0))),
            ..PlayerRig::default()
        };
        let err = PlayerController::initialize(PlayerConfig::default(), rig).err();
        assert!(matches!(err, Some(SetupError::MissingCamera)));
    }

    #[test]
    fn test_invalid_config_is_setup_error() {
        let mut config = PlayerConfig::default();
        config.movement.walk_speed = -1.0;
        let rig = PlayerRig::new(
            Box::new(KinematicCapsule::new(Vec3::ZERO, 0.5, 2.0, 0.0)),
            CameraRig::default(),
        );
        let err = PlayerController::initialize(config, rig).err();
        assert!(matches!(err, Some(SetupError::Config(_))));
    }

    #[test]
    fn test_spawn_state() {
        let p = player();
        assert_eq!(p.crouch_state(), CrouchState::Standing);
        assert_eq!(p.current_height(), 2.0);
        assert_eq!(p.stamina(), 100.0);
        assert_eq!(p.current_speed(), 3.0);
        assert_eq!(p.body().height(), 2.0);
        assert_eq!(p.body().center(), Vec3::new(0.0, 1.0, 0.0));
        assert!((p.camera().local_height() - 1.9).abs() < 1e-6);
        assert!(!p.is_sprinting());
    }

    #[test]
    fn test_walk_forward_moves_along_facing() {
        let world = floor();
        let mut p = player();
        let input = TickInput {
            move_axes: glam::Vec2::Y,
            ..TickInput::default()
        };
        for _ in 0..60 {
            p.tick(DT, &input, &world);
        }
        assert!(p.position().z < -1.0);
        assert!(p.position().x.abs() < 1e-4);
        assert_eq!(p.position().y, 0.0);
        assert!(p.is_grounded());
    }

    #[test]
    fn test_jump_leaves_ground_and_lands() {
        let world = floor();
        let mut p = player();
        p.tick(DT, &TickInput::default(), &world);

        let jump = TickInput {
            jump_pressed: true,
            ..TickInput::default()
        };
        let report = p.tick(DT, &jump, &world);
        assert!(report.jumped);
        assert!(p.position().y > 0.0);

        let mut landed = false;
        for _ in 0..200 {
            let report = p.tick(DT, &TickInput::default(), &world);
            if report.ground_transition == Some(GroundTransition::Landed) {
                landed = true;
                break;
            }
        }
        assert!(landed);
    }

    #[test]
    fn test_jump_in_air_ignored() {
        let world = StaticWorld::new();
        let body = KinematicCapsule::new(Vec3::new(0.0, 10.0, 0.0), 0.5, 2.0, -100.0);
        let mut p = PlayerController::initialize(
            PlayerConfig::default(),
            PlayerRig::new(Box::new(body), CameraRig::default()),
        )
        .unwrap();
        let report = p.tick(
            DT,
            &TickInput {
                jump_pressed: true,
                ..TickInput::default()
            },
            &world,
        );
        assert!(!report.jumped);
        assert!(p.velocity().y < 0.0);
    }

    #[test]
    fn test_crouched_jump_stands_first() {
        let world = floor();
        let mut p = player();
        assert!(p.set_crouching(true, &world));
        for _ in 0..60 {
            p.tick(DT, &TickInput::default(), &world);
        }
        assert_eq!(p.current_height(), 1.0);

        let report = p.tick(
            DT,
            &TickInput {
                jump_pressed: true,
                ..TickInput::default()
            },
            &world,
        );
        assert!(report.jumped);
        assert_eq!(p.crouch_state(), CrouchState::Standing);
        assert_eq!(p.current_height(), 2.0);
    }

    #[test]
    fn test_status_sink_receives_feedback() {
        let world = floor();
        let sink = SharedSink::default();
        let body = KinematicCapsule::new(Vec3::ZERO, 0.5, 2.0, 0.0);
        let rig = PlayerRig::new(Box::new(body), CameraRig::default())
            .with_status(Box::new(sink.clone()));
        let mut p = PlayerController::initialize(PlayerConfig::default(), rig).unwrap();

        p.tick(DT, &TickInput::default(), &world);
        p.tick(
            DT,
            &TickInput {
                jump_pressed: true,
                ..TickInput::default()
            },
            &world,
        );
        // The ground probes still reach the floor for the first few ticks
        for _ in 0..10 {
            p.tick(DT, &TickInput::default(), &world);
        }
        p.set_stamina(10.0);

        let records = sink.0.lock().unwrap();
        assert!(records.signals.contains(&FeedbackSignal::LeftGround));
        let (fraction, level) = *records.stamina.last().unwrap();
        assert!((fraction - 0.1).abs() < 1e-6);
        assert_eq!(level, crate::player::StaminaLevel::Low);
    }

    #[test]
    fn test_use_tool_reaches_tool_system() {
        let world = floor();
        let tools = CountingTools::default();
        let body = KinematicCapsule::new(Vec3::ZERO, 0.5, 2.0, 0.0);
        let rig =
            PlayerRig::new(Box::new(body), CameraRig::default()).with_tools(Box::new(tools.clone()));
        let mut p = PlayerController::initialize(PlayerConfig::default(), rig).unwrap();

        let report = p.tick(
            DT,
            &TickInput {
                use_tool_pressed: true,
                ..TickInput::default()
            },
            &world,
        );
        assert_eq!(report.tool_events, vec![ToolEvent::Used]);
        assert_eq!(*tools.0.lock().unwrap(), 1);
    }

    #[test]
    fn test_use_tool_without_tool_system_is_noop() {
        let world = floor();
        let mut p = player();
        let report = p.tick(
            DT,
            &TickInput {
                use_tool_pressed: true,
                ..TickInput::default()
            },
            &world,
        );
        assert_eq!(report.tool_events, vec![ToolEvent::Used]);
    }

    #[test]
    fn test_dt_clamped() {
        let world = StaticWorld::new();
        let body = KinematicCapsule::new(Vec3::new(0.0, 10.0, 0.0), 0.5, 2.0, -100.0);
        let mut p = PlayerController::initialize(
            PlayerConfig::default(),
            PlayerRig::new(Box::new(body), CameraRig::default()),
        )
        .unwrap();
        p.tick(5.0, &TickInput::default(), &world);
        // One tick of at most 0.1 s of gravity
        assert!((p.velocity().y - (-9.81 * 0.1)).abs() < 1e-4);

        let before = p.position();
        p.tick(-1.0, &TickInput::default(), &world);
        assert_eq!(p.position(), before);
    }

    #[test]
    fn test_set_sprinting_is_gated_each_tick() {
        let world = floor();
        let mut p = player();
        p.tick(DT, &TickInput::default(), &world);

        // Latched, but idle: no run tier
        p.set_sprinting(true);
        assert!(!p.is_sprinting());
        p.tick(DT, &TickInput::default(), &world);
        assert!(!p.is_sprinting());

        let forward = TickInput {
            move_axes: glam::Vec2::Y,
            ..TickInput::default()
        };
        p.tick(DT, &forward, &world);
        assert!(p.is_sprinting());

        p.set_sprinting(false);
        assert!(!p.is_sprinting());
        p.tick(DT, &forward, &world);
        assert!(!p.is_sprinting());

        p.set_sprinting(true);
        p.set_stamina(0.0);
        p.tick(DT, &forward, &world);
        assert!(!p.is_sprinting());
    }

    #[test]
    fn test_refused_set_crouching_signals_stand_blocked() {
        let mut world = floor();
        world.add_box(
            Vec3::new(-5.0, 1.95, -5.0),
            Vec3::new(5.0, 2.5, 5.0),
            LayerMask::OBSTRUCTION,
        );
        let sink = SharedSink::default();
        let body = KinematicCapsule::new(Vec3::ZERO, 0.5, 2.0, 0.0);
        let rig = PlayerRig::new(Box::new(body), CameraRig::default())
            .with_status(Box::new(sink.clone()));
        let mut p = PlayerController::initialize(PlayerConfig::default(), rig).unwrap();

        assert!(p.set_crouching(true, &world));
        assert!(!p.set_crouching(false, &world));
        assert_eq!(p.crouch_state(), CrouchState::Crouching);
        assert_eq!(
            sink.0.lock().unwrap().signals,
            vec![FeedbackSignal::StandBlocked]
        );
    }

    #[test]
    fn test_respawn_resets_stance_motion_and_view() {
        let world = floor();
        let mut p = player();
        assert!(p.set_crouching(true, &world));
        let look = TickInput {
            look_delta: glam::Vec2::new(20.0, -10.0),
            ..TickInput::default()
        };
        for _ in 0..60 {
            p.tick(DT, &look, &world);
        }
        assert!(p.pitch() > 0.0);

        let spawn = Vec3::new(3.0, 0.0, -4.0);
        p.set_stamina(40.0);
        p.respawn(spawn, std::f32::consts::PI);

        assert_eq!(p.position(), spawn);
        assert_eq!(p.crouch_state(), CrouchState::Standing);
        assert_eq!(p.current_height(), 2.0);
        assert_eq!(p.body().height(), 2.0);
        assert!((p.camera().local_height() - 1.9).abs() < 1e-6);
        assert_eq!(p.velocity().y, 0.0);
        assert_eq!(p.pitch(), 0.0);
        assert!((p.yaw() - std::f32::consts::PI).abs() < 1e-6);
        assert!((p.view_direction() - Vec3::Z).length() < 1e-4);
        assert_eq!(p.stamina(), 40.0);
    }

    #[test]
    fn test_status_snapshot() {
        let world = floor();
        let mut p = player();
        p.tick(DT, &TickInput::default(), &world);
        let status = p.status();
        assert!(status.grounded);
        assert_eq!(status.posture, Posture::Standing);
        assert_eq!(status.max_stamina, 100.0);
        assert!(status.held_tool.is_none());
    }
}
