//! Headless walkabout
//!
//! Drives a player through a scripted run over a small box world: pick up a
//! tool, sprint into a low tunnel (forced crouch), fail to stand inside it,
//! crawl out, stand, jump, swing and drop the tool. Status is logged once
//! per simulated second.
//!
//! Run with: `cargo run --bin walkabout -- --verbose`

use std::path::PathBuf;

use clap::Parser;

use first_person_engine::camera::{AimChange, CameraRig};
use first_person_engine::config::PlayerConfig;
use first_person_engine::error::SetupError;
use first_person_engine::input::{InputState, InputTracker, KeyBindings, KeyCode};
use first_person_engine::logging;
use first_person_engine::physics::{
    CAPSULE_RADIUS, KinematicCapsule, LayerMask, StaticWorld, Vec3,
};
use first_person_engine::player::{
    HeldTool, PlayerController, PlayerRig, TOOL_TAG, ToolEvent, ToolSystem,
};

/// Scripted first-person walkabout
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Player config JSON (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulated seconds to run
    #[arg(short, long, default_value_t = 12.0)]
    seconds: f32,

    /// Simulation ticks per second
    #[arg(short, long, default_value_t = 60)]
    tick_rate: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Tool system that only logs.
struct LoggingTools;

impl ToolSystem for LoggingTools {
    fn use_current_tool(&mut self) {
        log::info!("Tool swung");
    }

    fn on_pickup(&mut self, tool: &HeldTool) {
        log::info!("Equipped {tool}");
    }

    fn on_drop(&mut self, tool: &HeldTool, position: Vec3) {
        log::info!(
            "Unequipped {tool} at ({:.2}, {:.2}, {:.2})",
            position.x, position.y, position.z
        );
    }
}

fn build_world() -> StaticWorld {
    let mut world = StaticWorld::new();

    // Floor
    world.add_box(
        Vec3::new(-50.0, -1.0, -100.0),
        Vec3::new(50.0, 0.0, 50.0),
        LayerMask::GROUND,
    );

    // Crate with a tool on top, right in front of the spawn point
    world.add_box(
        Vec3::new(-0.4, 0.0, -2.4),
        Vec3::new(0.4, 1.7, -1.6),
        LayerMask::OBSTRUCTION,
    );
    world.add_tagged_box(
        Vec3::new(-0.15, 1.7, -2.15),
        Vec3::new(0.15, 1.95, -1.85),
        LayerMask::INTERACTABLE,
        TOOL_TAG,
    );

    // Low tunnel: ceiling slab at 1.95 m
    world.add_box(
        Vec3::new(-2.0, 1.95, -30.0),
        Vec3::new(2.0, 2.5, -12.0),
        LayerMask::OBSTRUCTION,
    );

    world
}

/// Held keys and momentary presses for simulated time `t`.
fn script(t: f32, input: &mut InputState) {
    let between = |from: f32, to: f32| t >= from && t < to;
    let keyboard = &mut input.keyboard;

    keyboard.handle_key(KeyCode::E, between(0.2, 0.3) || between(9.0, 9.1));
    keyboard.handle_key(KeyCode::W, between(1.0, 7.2));
    keyboard.handle_key(KeyCode::ShiftLeft, between(1.0, 2.5));
    keyboard.handle_key(
        KeyCode::ControlLeft,
        between(2.6, 2.7) || between(7.5, 7.6),
    );
    keyboard.handle_key(KeyCode::Space, between(8.5, 8.6));
    keyboard.handle_key(KeyCode::Q, between(10.5, 10.6));

    input.mouse.set_primary_button(between(9.5, 9.6));
    if between(9.7, 10.0) {
        // Glance down at the floor
        input.mouse.accumulate_delta(0.0, 2.0);
    }
}

fn main() -> Result<(), SetupError> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match &args.config {
        Some(path) => PlayerConfig::load(path)?,
        None => PlayerConfig::default(),
    };

    let mut world = build_world();
    let body = KinematicCapsule::new(Vec3::ZERO, CAPSULE_RADIUS, config.crouch.standing_height, 0.0);
    let rig = PlayerRig::new(Box::new(body), CameraRig::default()).with_tools(Box::new(LoggingTools));
    let mut player = PlayerController::initialize(config, rig)?;

    let bindings = KeyBindings::new();
    let mut input = InputState::new();
    input.mouse.set_captured(true);
    let mut tracker = InputTracker::new();

    let tick_rate = args.tick_rate.max(1);
    let dt = 1.0 / tick_rate as f32;
    let ticks = (args.seconds.max(0.0) * tick_rate as f32).round() as u32;

    for tick in 0..ticks {
        let t = tick as f32 * dt;
        script(t, &mut input);

        let tick_input = tracker.advance(input.snapshot(&bindings));
        let report = player.tick(dt, &tick_input, &world);

        if report.forced_crouch {
            log::info!("[{t:5.2}s] Ceiling forced a crouch");
        }
        if report.stand_blocked {
            log::info!("[{t:5.2}s] Tried to stand, no headroom");
        }
        if report.jumped {
            log::info!("[{t:5.2}s] Jump");
        }
        match report.aim {
            Some(AimChange::Acquired(hit)) => {
                log::info!("[{t:5.2}s] Aiming at {:?} ({:.2} m)", hit.collider, hit.distance)
            }
            Some(AimChange::Lost) => log::info!("[{t:5.2}s] Aim lost"),
            None => {}
        }
        for event in &report.tool_events {
            match event {
                ToolEvent::PickedUp(tool) => {
                    // The tool leaves the world while carried
                    world.remove(tool.collider);
                }
                ToolEvent::Dropped { position, .. } => {
                    let half = Vec3::splat(0.15);
                    world.add_tagged_box(
                        *position - half,
                        *position + half,
                        LayerMask::INTERACTABLE,
                        TOOL_TAG,
                    );
                }
                ToolEvent::Used => {}
            }
        }

        if (tick + 1) % tick_rate == 0 {
            let status = player.status();
            log::info!(
                "[{:5.2}s] {} | pos ({:.2}, {:.2}, {:.2}) | height {:.2} | speed {:.2} | stamina {:.0}",
                t + dt,
                status.posture.describe(),
                status.position.x,
                status.position.y,
                status.position.z,
                status.height,
                status.horizontal_speed,
                status.stamina
            );
        }
    }

    println!("{}", player.status());
    Ok(())
}
